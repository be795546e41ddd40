//! Garage: work-order scheduling for a vehicle workshop.
//!
//! This crate models the lifecycle of service tasks raised against vehicles:
//! tasks are queued by priority for mechanics, allocated by managers to
//! members of their team, moved through their status states, and completed
//! with a notification to the vehicle's owner.
//!
//! # Architecture
//!
//! Each bounded context follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (logging, in-memory)
//!
//! Aggregates refer to each other by identifier. A single
//! [`workshop::WorkshopStore`] owns them all and the
//! [`workshop::services::WorkshopService`] runs every operation that spans
//! more than one aggregate.
//!
//! # Modules
//!
//! - [`task`]: Tasks, priorities, and the status state machine
//! - [`workforce`]: Mechanics, managers, work queues, and allocation
//! - [`customer`]: Customers, vehicles, and registration listeners
//! - [`notification`]: Customer notifications and their dispatch
//! - [`workshop`]: Aggregate store and orchestration service
//! - [`config`]: Workshop configuration

pub mod config;
pub mod customer;
pub mod notification;
pub mod task;
pub mod workforce;
pub mod workshop;
