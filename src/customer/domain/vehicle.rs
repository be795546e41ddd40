//! Vehicle entity.

use super::{CustomerDomainError, CustomerId, VehicleId};
use crate::task::domain::TaskId;
use serde::{Deserialize, Serialize};

/// Vehicle brought in for service.
///
/// The owner is a back-reference to a [`super::Customer`]; the workshop
/// store keeps it consistent with the customer's vehicle list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    id: VehicleId,
    registration: String,
    manufacturer: String,
    model: String,
    year: u16,
    owner: Option<CustomerId>,
    task_history: Vec<TaskId>,
}

impl Vehicle {
    /// Creates a vehicle with no owner.
    ///
    /// # Errors
    ///
    /// Returns [`CustomerDomainError::EmptyRegistration`] when the
    /// registration plate is blank.
    pub fn new(
        id: VehicleId,
        registration: impl Into<String>,
        manufacturer: impl Into<String>,
        model: impl Into<String>,
        year: u16,
    ) -> Result<Self, CustomerDomainError> {
        let raw = registration.into();
        let plate = raw.trim();
        if plate.is_empty() {
            return Err(CustomerDomainError::EmptyRegistration);
        }
        Ok(Self {
            id,
            registration: plate.to_ascii_uppercase(),
            manufacturer: manufacturer.into(),
            model: model.into(),
            year,
            owner: None,
            task_history: Vec::new(),
        })
    }

    /// Returns the vehicle identifier.
    #[must_use]
    pub const fn id(&self) -> VehicleId {
        self.id
    }

    /// Returns the normalized registration plate.
    #[must_use]
    pub fn registration(&self) -> &str {
        &self.registration
    }

    /// Returns the manufacturer name.
    #[must_use]
    pub fn manufacturer(&self) -> &str {
        &self.manufacturer
    }

    /// Returns the model name.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the model year.
    #[must_use]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns the owning customer, if any.
    #[must_use]
    pub const fn owner(&self) -> Option<CustomerId> {
        self.owner
    }

    /// Returns every task raised against the vehicle, oldest first.
    #[must_use]
    pub fn task_history(&self) -> &[TaskId] {
        &self.task_history
    }

    /// Appends a task to the vehicle's history.
    pub fn record_task(&mut self, task_id: TaskId) {
        self.task_history.push(task_id);
    }

    pub(crate) const fn set_owner(&mut self, owner: Option<CustomerId>) {
        self.owner = owner;
    }
}
