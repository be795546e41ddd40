//! Workshop context: the aggregate store and the orchestration service.
//!
//! Tasks, staff, customers, and vehicles live in a [`WorkshopStore`] owned by
//! a [`services::WorkshopService`], which performs every operation spanning
//! more than one aggregate.

pub mod services;
mod store;

pub use store::WorkshopStore;

#[cfg(test)]
mod tests;
