//! Application services for the workshop.

mod requests;
mod workshop;

pub use requests::{CreateTaskRequest, NewCustomerRequest, RegisterVehicleRequest, StaffRequest};
pub use workshop::{TaskCompletion, WorkshopError, WorkshopResult, WorkshopService};
