//! Request payloads accepted by [`super::WorkshopService`].

use crate::customer::domain::VehicleId;
use crate::task::domain::Priority;
use crate::workforce::domain::ManagerId;

/// Request payload for raising a task against a vehicle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    pub(super) description: String,
    pub(super) priority: Priority,
    pub(super) vehicle_id: VehicleId,
    pub(super) manager_id: Option<ManagerId>,
}

impl CreateTaskRequest {
    /// Creates a request with the required task fields.
    #[must_use]
    pub fn new(
        description: impl Into<String>,
        priority: impl Into<Priority>,
        vehicle_id: VehicleId,
    ) -> Self {
        Self {
            description: description.into(),
            priority: priority.into(),
            vehicle_id,
            manager_id: None,
        }
    }

    /// Files the new task on a manager's pending list.
    #[must_use]
    pub const fn with_manager(mut self, manager_id: ManagerId) -> Self {
        self.manager_id = Some(manager_id);
        self
    }
}

/// Request payload for adding a customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomerRequest {
    pub(super) name: String,
    pub(super) email: Option<String>,
    pub(super) phone: Option<String>,
}

impl NewCustomerRequest {
    /// Creates a request with the customer's name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
            phone: None,
        }
    }

    /// Sets the contact e-mail address.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the contact phone number.
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }
}

/// Request payload for registering a vehicle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterVehicleRequest {
    pub(super) registration: String,
    pub(super) manufacturer: String,
    pub(super) model: String,
    pub(super) year: u16,
}

impl RegisterVehicleRequest {
    /// Creates a request with the vehicle details.
    #[must_use]
    pub fn new(
        registration: impl Into<String>,
        manufacturer: impl Into<String>,
        model: impl Into<String>,
        year: u16,
    ) -> Self {
        Self {
            registration: registration.into(),
            manufacturer: manufacturer.into(),
            model: model.into(),
            year,
        }
    }
}

/// Request payload for hiring a manager or mechanic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffRequest {
    pub(super) name: String,
    pub(super) email: String,
    pub(super) password: String,
}

impl StaffRequest {
    /// Creates a request with login details.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}
