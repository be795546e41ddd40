//! Explicitly owned in-memory store for every workshop aggregate.
//!
//! The store replaces a process-wide registry: a host constructs one at
//! start-up, passes it to a [`super::services::WorkshopService`], and drops
//! it at shutdown. Aggregates refer to one another by identifier only.

use std::collections::HashMap;

use crate::customer::domain::{Customer, CustomerId, EmailAddress, Vehicle, VehicleId};
use crate::task::domain::{Task, TaskId};
use crate::workforce::domain::{Manager, ManagerId, Mechanic, MechanicId, StaffId};

/// Per-kind identifier sequences.
///
/// Managers and mechanics share one staff sequence so their identifiers
/// never coincide.
#[derive(Debug, Clone)]
struct IdSequences {
    task: u64,
    vehicle: u64,
    customer: u64,
    staff: u64,
}

impl Default for IdSequences {
    fn default() -> Self {
        Self {
            task: 1,
            vehicle: 1,
            customer: 1,
            staff: 1,
        }
    }
}

const fn take_next(counter: &mut u64) -> u64 {
    let value = *counter;
    *counter = counter.saturating_add(1);
    value
}

/// Arena of tasks, vehicles, customers, and staff keyed by identifier.
#[derive(Debug, Clone, Default)]
pub struct WorkshopStore {
    pub(super) tasks: HashMap<TaskId, Task>,
    pub(super) vehicles: HashMap<VehicleId, Vehicle>,
    pub(super) customers: HashMap<CustomerId, Customer>,
    pub(super) mechanics: HashMap<MechanicId, Mechanic>,
    pub(super) managers: HashMap<ManagerId, Manager>,
    ids: IdSequences,
}

impl WorkshopStore {
    /// Creates an empty store whose sequences start at 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates the next task identifier.
    pub const fn next_task_id(&mut self) -> TaskId {
        TaskId::new(take_next(&mut self.ids.task))
    }

    /// Allocates the next vehicle identifier.
    pub const fn next_vehicle_id(&mut self) -> VehicleId {
        VehicleId::new(take_next(&mut self.ids.vehicle))
    }

    /// Allocates the next customer identifier.
    pub const fn next_customer_id(&mut self) -> CustomerId {
        CustomerId::new(take_next(&mut self.ids.customer))
    }

    /// Allocates the next mechanic identifier from the staff sequence.
    pub const fn next_mechanic_id(&mut self) -> MechanicId {
        MechanicId::new(take_next(&mut self.ids.staff))
    }

    /// Allocates the next manager identifier from the staff sequence.
    pub const fn next_manager_id(&mut self) -> ManagerId {
        ManagerId::new(take_next(&mut self.ids.staff))
    }

    /// Stores a task, replacing any task with the same identifier.
    pub fn insert_task(&mut self, task: Task) {
        self.tasks.insert(task.id(), task);
    }

    /// Stores a vehicle, replacing any vehicle with the same identifier.
    pub fn insert_vehicle(&mut self, vehicle: Vehicle) {
        self.vehicles.insert(vehicle.id(), vehicle);
    }

    /// Stores a customer, replacing any customer with the same identifier.
    pub fn insert_customer(&mut self, customer: Customer) {
        self.customers.insert(customer.id(), customer);
    }

    /// Stores a mechanic, replacing any mechanic with the same identifier.
    pub fn insert_mechanic(&mut self, mechanic: Mechanic) {
        self.mechanics.insert(mechanic.id(), mechanic);
    }

    /// Stores a manager, replacing any manager with the same identifier.
    pub fn insert_manager(&mut self, manager: Manager) {
        self.managers.insert(manager.id(), manager);
    }

    /// Looks up a task.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(&id)
    }

    /// Looks up a task for mutation.
    pub(super) fn task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.get_mut(&id)
    }

    /// Looks up a vehicle.
    #[must_use]
    pub fn vehicle(&self, id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.get(&id)
    }

    /// Looks up a customer.
    #[must_use]
    pub fn customer(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.get(&id)
    }

    /// Looks up a mechanic.
    #[must_use]
    pub fn mechanic(&self, id: MechanicId) -> Option<&Mechanic> {
        self.mechanics.get(&id)
    }

    /// Looks up a manager.
    #[must_use]
    pub fn manager(&self, id: ManagerId) -> Option<&Manager> {
        self.managers.get(&id)
    }

    /// Returns every task ordered by identifier.
    #[must_use]
    pub fn tasks(&self) -> Vec<&Task> {
        sorted_by_key(self.tasks.values(), Task::id)
    }

    /// Returns every customer ordered by identifier.
    #[must_use]
    pub fn customers(&self) -> Vec<&Customer> {
        sorted_by_key(self.customers.values(), Customer::id)
    }

    /// Returns every vehicle ordered by identifier.
    #[must_use]
    pub fn vehicles(&self) -> Vec<&Vehicle> {
        sorted_by_key(self.vehicles.values(), Vehicle::id)
    }

    /// Returns every mechanic ordered by identifier.
    #[must_use]
    pub fn mechanics(&self) -> Vec<&Mechanic> {
        sorted_by_key(self.mechanics.values(), Mechanic::id)
    }

    /// Returns every manager ordered by identifier.
    #[must_use]
    pub fn managers(&self) -> Vec<&Manager> {
        sorted_by_key(self.managers.values(), Manager::id)
    }

    /// Finds the staff member with the given login address.
    #[must_use]
    pub fn find_staff_by_email(&self, email: &EmailAddress) -> Option<StaffId> {
        let manager = self
            .managers
            .values()
            .find(|manager| manager.profile().email() == email)
            .map(|manager| StaffId::Manager(manager.id()));
        manager.or_else(|| {
            self.mechanics
                .values()
                .find(|mechanic| mechanic.profile().email() == email)
                .map(|mechanic| StaffId::Mechanic(mechanic.id()))
        })
    }

    /// Finds the customer with the given contact address.
    #[must_use]
    pub fn find_customer_by_email(&self, email: &EmailAddress) -> Option<&Customer> {
        self.customers
            .values()
            .find(|customer| customer.email() == Some(email))
    }

    /// Finds the vehicle with the given registration plate, ignoring case.
    #[must_use]
    pub fn find_vehicle_by_registration(&self, registration: &str) -> Option<&Vehicle> {
        let wanted = registration.trim();
        self.vehicles
            .values()
            .find(|vehicle| vehicle.registration().eq_ignore_ascii_case(wanted))
    }
}

fn sorted_by_key<'a, T, K, I, F>(values: I, key: F) -> Vec<&'a T>
where
    I: Iterator<Item = &'a T>,
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut items: Vec<&'a T> = values.collect();
    items.sort_by_key(|item| key(item));
    items
}
