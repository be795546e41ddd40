//! Shared world state for work-order BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use garage::customer::domain::{CustomerId, VehicleId};
use garage::notification::adapters::InMemoryNotificationSender;
use garage::task::domain::TaskId;
use garage::workforce::domain::{AllocationOutcome, ManagerId, MechanicId};
use garage::workshop::services::{WorkshopError, WorkshopService};
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestWorkshopService = WorkshopService<InMemoryNotificationSender, DefaultClock>;

/// Scenario world for work-order behaviour tests.
pub struct WorkOrderWorld {
    pub service: TestWorkshopService,
    pub sender: InMemoryNotificationSender,
    pub manager: Option<ManagerId>,
    pub mechanics: HashMap<String, MechanicId>,
    pub customers: HashMap<String, CustomerId>,
    pub vehicles: HashMap<String, VehicleId>,
    pub tasks: HashMap<String, TaskId>,
    pub last_allocation: Option<Result<AllocationOutcome, WorkshopError>>,
}

impl WorkOrderWorld {
    /// Creates a world with an empty workshop.
    #[must_use]
    pub fn new() -> Self {
        let sender = InMemoryNotificationSender::new();
        let service = WorkshopService::new(Arc::new(sender.clone()), Arc::new(DefaultClock));

        Self {
            service,
            sender,
            manager: None,
            mechanics: HashMap::new(),
            customers: HashMap::new(),
            vehicles: HashMap::new(),
            tasks: HashMap::new(),
            last_allocation: None,
        }
    }

    /// Looks up a mechanic hired earlier in the scenario.
    pub fn mechanic(&self, name: &str) -> Result<MechanicId, eyre::Report> {
        self.mechanics
            .get(name)
            .copied()
            .ok_or_else(|| eyre::eyre!("unknown mechanic {name} in scenario world"))
    }

    /// Looks up a task raised earlier in the scenario.
    pub fn task(&self, description: &str) -> Result<TaskId, eyre::Report> {
        self.tasks
            .get(description)
            .copied()
            .ok_or_else(|| eyre::eyre!("unknown task {description} in scenario world"))
    }
}

impl Default for WorkOrderWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> WorkOrderWorld {
    WorkOrderWorld::default()
}
