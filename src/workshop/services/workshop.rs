//! Service layer orchestrating tasks, staff, customers, and notifications.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use mockable::Clock;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::{CreateTaskRequest, NewCustomerRequest, RegisterVehicleRequest, StaffRequest};
use crate::config::WorkshopConfig;
use crate::customer::{
    domain::{Customer, CustomerDomainError, CustomerId, EmailAddress, Vehicle, VehicleId},
    ports::RegistrationListener,
};
use crate::notification::{
    domain::{NotificationError, NotificationFactory, NotificationKind},
    ports::NotificationSender,
};
use crate::task::domain::{Task, TaskDomainError, TaskId, TaskState};
use crate::workforce::domain::{
    AllocationError, AllocationOutcome, Manager, ManagerId, Mechanic, MechanicId, StaffId,
    StaffProfile, WorkforceError,
};
use crate::workshop::WorkshopStore;

/// Service-level errors for workshop operations.
#[derive(Debug, Error)]
pub enum WorkshopError {
    /// Task validation failed.
    #[error(transparent)]
    Task(#[from] TaskDomainError),
    /// A mechanic or manager refused the operation.
    #[error(transparent)]
    Workforce(#[from] WorkforceError),
    /// Customer or vehicle validation failed.
    #[error(transparent)]
    Customer(#[from] CustomerDomainError),
    /// A notification could not be built.
    #[error(transparent)]
    Notification(#[from] NotificationError),
    /// No vehicle has the given identifier.
    #[error("unknown vehicle {0}")]
    UnknownVehicle(VehicleId),
    /// No customer has the given identifier.
    #[error("unknown customer {0}")]
    UnknownCustomer(CustomerId),
    /// No manager has the given identifier.
    #[error("unknown manager {0}")]
    UnknownManager(ManagerId),
    /// No mechanic has the given identifier.
    #[error("unknown mechanic {0}")]
    UnknownMechanic(MechanicId),
    /// No task has the given identifier.
    #[error("unknown task {0}")]
    UnknownTask(TaskId),
    /// A staff member already uses the login address.
    #[error("a staff member already uses {0}")]
    DuplicateEmail(EmailAddress),
}

/// Result type for workshop service operations.
pub type WorkshopResult<T> = Result<T, WorkshopError>;

/// Report returned when a task is completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCompletion {
    /// Completed task.
    pub task_id: TaskId,
    /// Completion timestamp recorded on the task.
    pub completed_at: DateTime<Utc>,
    /// Owner of the task's vehicle, when one is known.
    pub notified_customer: Option<CustomerId>,
    /// Whether a completion notice was handed to the sender.
    pub notification_sent: bool,
}

/// Workshop orchestration service.
///
/// Owns the [`WorkshopStore`] and routes every cross-aggregate operation
/// through it, so that tasks, staff, customers, and vehicles only ever
/// refer to each other by identifier.
pub struct WorkshopService<S, C>
where
    S: NotificationSender,
    C: Clock + Send + Sync,
{
    store: WorkshopStore,
    sender: Arc<S>,
    clock: Arc<C>,
    config: WorkshopConfig,
}

impl<S, C> WorkshopService<S, C>
where
    S: NotificationSender,
    C: Clock + Send + Sync,
{
    /// Creates a service with an empty store and the default configuration.
    #[must_use]
    pub fn new(sender: Arc<S>, clock: Arc<C>) -> Self {
        Self::with_config(sender, clock, WorkshopConfig::default())
    }

    /// Creates a service with an empty store and the given configuration.
    #[must_use]
    pub fn with_config(sender: Arc<S>, clock: Arc<C>, config: WorkshopConfig) -> Self {
        Self {
            store: WorkshopStore::new(),
            sender,
            clock,
            config,
        }
    }

    /// Returns the underlying store for read access.
    #[must_use]
    pub const fn store(&self) -> &WorkshopStore {
        &self.store
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &WorkshopConfig {
        &self.config
    }

    // Tasks

    /// Raises a waiting task against a vehicle.
    ///
    /// The task is appended to the vehicle's history and, when the request
    /// names a manager, filed on that manager's pending list.
    ///
    /// # Errors
    ///
    /// Returns [`WorkshopError::UnknownVehicle`] or
    /// [`WorkshopError::UnknownManager`] when a referenced aggregate does
    /// not exist. Nothing is stored on error.
    pub fn create_task(&mut self, request: CreateTaskRequest) -> WorkshopResult<TaskId> {
        if !self.store.vehicles.contains_key(&request.vehicle_id) {
            return Err(WorkshopError::UnknownVehicle(request.vehicle_id));
        }
        if let Some(manager_id) = request.manager_id
            && !self.store.managers.contains_key(&manager_id)
        {
            return Err(WorkshopError::UnknownManager(manager_id));
        }

        let task_id = self.store.next_task_id();
        let task = Task::new(
            task_id,
            request.description,
            request.priority,
            request.vehicle_id,
            &*self.clock,
        );
        if let Some(vehicle) = self.store.vehicles.get_mut(&request.vehicle_id) {
            vehicle.record_task(task_id);
        }
        if let Some(manager_id) = request.manager_id
            && let Some(manager) = self.store.managers.get_mut(&manager_id)
        {
            manager.add_pending(task_id);
        }
        info!(
            task_id = %task_id,
            vehicle_id = %task.vehicle_id(),
            priority = %task.priority(),
            "task created"
        );
        self.store.insert_task(task);
        Ok(task_id)
    }

    /// Lists tasks that have never been allocated, ordered by identifier.
    #[must_use]
    pub fn unallocated_tasks(&self) -> Vec<&Task> {
        self.store
            .tasks()
            .into_iter()
            .filter(|task| task.assigned_mechanic().is_none())
            .collect()
    }

    /// Moves a task one step forward through the state machine.
    ///
    /// # Errors
    ///
    /// Returns [`WorkshopError::UnknownTask`] when the task does not exist.
    pub fn advance_task(&mut self, task_id: TaskId) -> WorkshopResult<TaskState> {
        let task = self
            .store
            .task_mut(task_id)
            .ok_or(WorkshopError::UnknownTask(task_id))?;
        task.advance(&*self.clock);
        debug!(task_id = %task_id, state = %task.state(), "task advanced");
        Ok(task.state())
    }

    /// Moves a task one step backward through the state machine.
    ///
    /// # Errors
    ///
    /// Returns [`WorkshopError::UnknownTask`] when the task does not exist.
    pub fn revert_task(&mut self, task_id: TaskId) -> WorkshopResult<TaskState> {
        let task = self
            .store
            .task_mut(task_id)
            .ok_or(WorkshopError::UnknownTask(task_id))?;
        task.revert(&*self.clock);
        debug!(task_id = %task_id, state = %task.state(), "task reverted");
        Ok(task.state())
    }

    /// Overrides a task's state without consulting the transition table.
    ///
    /// # Errors
    ///
    /// Returns [`WorkshopError::UnknownTask`] when the task does not exist.
    pub fn set_task_state(&mut self, task_id: TaskId, state: TaskState) -> WorkshopResult<()> {
        let task = self
            .store
            .task_mut(task_id)
            .ok_or(WorkshopError::UnknownTask(task_id))?;
        task.set_state(state, &*self.clock);
        debug!(task_id = %task_id, state = %state, "task state overridden");
        Ok(())
    }

    /// Puts a task back to [`TaskState::Waiting`] from any state.
    ///
    /// # Errors
    ///
    /// Returns [`WorkshopError::UnknownTask`] when the task does not exist.
    pub fn reset_task_to_waiting(&mut self, task_id: TaskId) -> WorkshopResult<()> {
        self.set_task_state(task_id, TaskState::Waiting)
    }

    /// Completes a task directly, without going through its mechanic.
    ///
    /// The task stays in its mechanic's queue. The owner of the task's
    /// vehicle is sent a completion notice when one is known.
    ///
    /// # Errors
    ///
    /// Returns [`WorkshopError::UnknownTask`] when the task does not exist.
    pub fn complete_task(&mut self, task_id: TaskId) -> WorkshopResult<TaskCompletion> {
        let task = self
            .store
            .task_mut(task_id)
            .ok_or(WorkshopError::UnknownTask(task_id))?;
        task.complete(&*self.clock);
        info!(task_id = %task_id, "task completed");
        self.notify_completion(task_id)
    }

    // Allocation

    /// Allocates a task to a mechanic on the manager's team.
    ///
    /// Re-allocation of a task that already has a mechanic follows the
    /// configured [`crate::workforce::domain::ReallocationPolicy`]. A
    /// reassigned task leaves the previous mechanic's queue.
    ///
    /// # Errors
    ///
    /// Returns [`WorkshopError::UnknownManager`] for an unknown manager and
    /// [`WorkforceError::TaskAllocation`] for an unknown task or mechanic,
    /// a mechanic outside the team, or a rejected re-allocation. Nothing is
    /// mutated on error.
    pub fn allocate_task(
        &mut self,
        manager_id: ManagerId,
        task_id: TaskId,
        mechanic_id: MechanicId,
    ) -> WorkshopResult<AllocationOutcome> {
        let policy = self.config.reallocation_policy;
        let store = &mut self.store;
        let manager = store
            .managers
            .get_mut(&manager_id)
            .ok_or(WorkshopError::UnknownManager(manager_id))?;
        let task = store
            .tasks
            .get_mut(&task_id)
            .ok_or(WorkforceError::TaskAllocation(AllocationError::UnknownTask(task_id)))?;
        let mechanic = store
            .mechanics
            .get_mut(&mechanic_id)
            .ok_or(WorkforceError::TaskAllocation(
                AllocationError::UnknownMechanic(mechanic_id),
            ))?;

        let outcome = match manager.allocate(task, mechanic, policy) {
            Ok(outcome) => outcome,
            Err(error) => {
                warn!(
                    manager_id = %manager_id,
                    task_id = %task_id,
                    mechanic_id = %mechanic_id,
                    error = %error,
                    "allocation refused"
                );
                return Err(error.into());
            }
        };

        if let AllocationOutcome::Reassigned { previous } = outcome
            && let Some(previous_mechanic) = store.mechanics.get_mut(&previous)
        {
            previous_mechanic.release(task_id);
        }
        info!(
            manager_id = %manager_id,
            task_id = %task_id,
            mechanic_id = %mechanic_id,
            outcome = ?outcome,
            "task allocated"
        );
        Ok(outcome)
    }

    /// Returns the highest-priority unfinished task in the mechanic's queue.
    ///
    /// Tasks completed directly through [`Self::complete_task`] stay queued
    /// but are skipped here.
    ///
    /// # Errors
    ///
    /// Returns [`WorkshopError::UnknownMechanic`] when the mechanic does not
    /// exist.
    pub fn next_task(&self, mechanic_id: MechanicId) -> WorkshopResult<Option<TaskId>> {
        let queued = self.mechanic(mechanic_id)?.queued_in_order();
        Ok(queued.into_iter().find(|task_id| {
            self.store
                .task(*task_id)
                .is_some_and(|task| !task.state().is_completed())
        }))
    }

    /// Returns the mechanic's queued tasks, highest priority first.
    ///
    /// # Errors
    ///
    /// Returns [`WorkshopError::UnknownMechanic`] when the mechanic does not
    /// exist.
    pub fn mechanic_queue(&self, mechanic_id: MechanicId) -> WorkshopResult<Vec<TaskId>> {
        Ok(self.mechanic(mechanic_id)?.queued_in_order())
    }

    /// Completes a task held by a mechanic and releases it from the queue.
    ///
    /// The owner of the task's vehicle is sent a completion notice when one
    /// is known.
    ///
    /// # Errors
    ///
    /// Returns [`WorkshopError::UnknownMechanic`] for an unknown mechanic and
    /// [`WorkforceError::InvalidTask`] when the task does not exist or is
    /// not held by the mechanic.
    pub fn complete_assigned_task(
        &mut self,
        mechanic_id: MechanicId,
        task_id: TaskId,
    ) -> WorkshopResult<TaskCompletion> {
        let store = &mut self.store;
        let mechanic = store
            .mechanics
            .get_mut(&mechanic_id)
            .ok_or(WorkshopError::UnknownMechanic(mechanic_id))?;
        let task = store.tasks.get_mut(&task_id).ok_or(WorkforceError::InvalidTask {
            mechanic_id,
            task_id,
        })?;
        mechanic.complete(task, &*self.clock)?;
        info!(mechanic_id = %mechanic_id, task_id = %task_id, "task completed by mechanic");
        self.notify_completion(task_id)
    }

    // Staff

    /// Hires a manager with an empty team.
    ///
    /// # Errors
    ///
    /// Returns [`WorkshopError::DuplicateEmail`] when the login address is
    /// taken, or a validation error for a blank name or malformed address.
    pub fn hire_manager(&mut self, request: StaffRequest) -> WorkshopResult<ManagerId> {
        let profile = self.new_profile(request)?;
        let manager_id = self.store.next_manager_id();
        self.store.insert_manager(Manager::new(manager_id, profile));
        info!(manager_id = %manager_id, "manager hired");
        Ok(manager_id)
    }

    /// Hires a mechanic with an empty queue.
    ///
    /// # Errors
    ///
    /// Returns [`WorkshopError::DuplicateEmail`] when the login address is
    /// taken, or a validation error for a blank name or malformed address.
    pub fn hire_mechanic(&mut self, request: StaffRequest) -> WorkshopResult<MechanicId> {
        let profile = self.new_profile(request)?;
        let mechanic_id = self.store.next_mechanic_id();
        self.store.insert_mechanic(Mechanic::new(mechanic_id, profile));
        info!(mechanic_id = %mechanic_id, "mechanic hired");
        Ok(mechanic_id)
    }

    /// Adds a mechanic to a manager's team.
    ///
    /// Returns `true` when the mechanic joined, `false` when already a member.
    ///
    /// # Errors
    ///
    /// Returns [`WorkshopError::UnknownManager`] or
    /// [`WorkshopError::UnknownMechanic`] for unknown staff.
    pub fn add_team_member(
        &mut self,
        manager_id: ManagerId,
        mechanic_id: MechanicId,
    ) -> WorkshopResult<bool> {
        if !self.store.mechanics.contains_key(&mechanic_id) {
            return Err(WorkshopError::UnknownMechanic(mechanic_id));
        }
        let manager = self
            .store
            .managers
            .get_mut(&manager_id)
            .ok_or(WorkshopError::UnknownManager(manager_id))?;
        let joined = manager.add_team_member(mechanic_id);
        debug!(manager_id = %manager_id, mechanic_id = %mechanic_id, joined, "team updated");
        Ok(joined)
    }

    /// Returns the staff member whose login address and password match.
    ///
    /// An address that does not parse never matches.
    #[must_use]
    pub fn authenticate(&self, email: &str, password: &str) -> Option<StaffId> {
        let address = EmailAddress::new(email).ok()?;
        let staff_id = self.store.find_staff_by_email(&address)?;
        let authenticated = self
            .staff_profile(staff_id)
            .is_some_and(|profile| profile.authenticate(password));
        if authenticated {
            info!(staff = ?staff_id, "staff member authenticated");
            Some(staff_id)
        } else {
            warn!(email = %address, "authentication failed");
            None
        }
    }

    /// Returns whether the staff member may perform `action`.
    ///
    /// Unknown staff members have no permissions.
    #[must_use]
    pub fn has_permission(&self, staff_id: StaffId, action: &str) -> bool {
        match staff_id {
            StaffId::Manager(id) => self
                .store
                .manager(id)
                .is_some_and(|manager| manager.has_permission(action)),
            StaffId::Mechanic(id) => self
                .store
                .mechanic(id)
                .is_some_and(|mechanic| mechanic.has_permission(action)),
        }
    }

    // Customers and vehicles

    /// Adds an unregistered customer.
    ///
    /// # Errors
    ///
    /// Returns [`WorkshopError::Customer`] for a blank name or a malformed
    /// e-mail address.
    pub fn add_customer(&mut self, request: NewCustomerRequest) -> WorkshopResult<CustomerId> {
        let email = request.email.map(EmailAddress::new).transpose()?;
        let customer_id = self.store.next_customer_id();
        let mut customer = Customer::new(customer_id, request.name)?;
        if let Some(address) = email {
            customer = customer.with_email(address);
        }
        if let Some(phone) = request.phone {
            customer = customer.with_phone(phone);
        }
        self.store.insert_customer(customer);
        info!(customer_id = %customer_id, "customer added");
        Ok(customer_id)
    }

    /// Attaches a registration listener to a customer.
    ///
    /// # Errors
    ///
    /// Returns [`WorkshopError::UnknownCustomer`] when the customer does not
    /// exist.
    pub fn attach_listener(
        &mut self,
        customer_id: CustomerId,
        listener: Arc<dyn RegistrationListener>,
    ) -> WorkshopResult<()> {
        self.customer_mut(customer_id)?.attach_listener(listener);
        debug!(customer_id = %customer_id, "registration listener attached");
        Ok(())
    }

    /// Registers a customer, notifying its listeners in attachment order.
    ///
    /// Returns the message delivered to the listeners.
    ///
    /// # Errors
    ///
    /// Returns [`WorkshopError::UnknownCustomer`] when the customer does not
    /// exist and [`WorkshopError::Customer`] when the registration template
    /// cannot be rendered.
    pub fn register_customer(&mut self, customer_id: CustomerId) -> WorkshopResult<String> {
        let template = &self.config.registration_template;
        let customer = self
            .store
            .customers
            .get_mut(&customer_id)
            .ok_or(WorkshopError::UnknownCustomer(customer_id))?;
        let message = customer.register(template)?;
        info!(
            customer_id = %customer_id,
            listeners = customer.listener_count(),
            "customer registered"
        );
        Ok(message)
    }

    /// Registers a vehicle with no owner.
    ///
    /// # Errors
    ///
    /// Returns [`WorkshopError::Customer`] when the registration plate is
    /// blank.
    pub fn register_vehicle(
        &mut self,
        request: RegisterVehicleRequest,
    ) -> WorkshopResult<VehicleId> {
        let vehicle_id = self.store.next_vehicle_id();
        let vehicle = Vehicle::new(
            vehicle_id,
            request.registration,
            request.manufacturer,
            request.model,
            request.year,
        )?;
        info!(
            vehicle_id = %vehicle_id,
            registration = vehicle.registration(),
            "vehicle registered"
        );
        self.store.insert_vehicle(vehicle);
        Ok(vehicle_id)
    }

    /// Makes a customer the owner of a vehicle.
    ///
    /// A vehicle that already had an owner leaves that owner's list.
    ///
    /// # Errors
    ///
    /// Returns [`WorkshopError::UnknownVehicle`] or
    /// [`WorkshopError::UnknownCustomer`] for unknown aggregates.
    pub fn set_vehicle_owner(
        &mut self,
        vehicle_id: VehicleId,
        customer_id: CustomerId,
    ) -> WorkshopResult<()> {
        if !self.store.customers.contains_key(&customer_id) {
            return Err(WorkshopError::UnknownCustomer(customer_id));
        }
        let vehicle = self
            .store
            .vehicles
            .get_mut(&vehicle_id)
            .ok_or(WorkshopError::UnknownVehicle(vehicle_id))?;
        let previous = vehicle.owner();
        vehicle.set_owner(Some(customer_id));

        if let Some(old_id) = previous.filter(|id| *id != customer_id)
            && let Some(old_owner) = self.store.customers.get_mut(&old_id)
        {
            old_owner.remove_vehicle(vehicle_id);
        }
        if let Some(owner) = self.store.customers.get_mut(&customer_id) {
            owner.add_vehicle(vehicle_id);
        }
        info!(vehicle_id = %vehicle_id, customer_id = %customer_id, "vehicle owner set");
        Ok(())
    }

    /// Clears a vehicle's owner.
    ///
    /// Returns the previous owner, if any.
    ///
    /// # Errors
    ///
    /// Returns [`WorkshopError::UnknownVehicle`] when the vehicle does not
    /// exist.
    pub fn remove_vehicle_owner(
        &mut self,
        vehicle_id: VehicleId,
    ) -> WorkshopResult<Option<CustomerId>> {
        let vehicle = self
            .store
            .vehicles
            .get_mut(&vehicle_id)
            .ok_or(WorkshopError::UnknownVehicle(vehicle_id))?;
        let previous = vehicle.owner();
        vehicle.set_owner(None);
        if let Some(old_id) = previous
            && let Some(old_owner) = self.store.customers.get_mut(&old_id)
        {
            old_owner.remove_vehicle(vehicle_id);
        }
        info!(vehicle_id = %vehicle_id, previous = ?previous, "vehicle owner removed");
        Ok(previous)
    }

    // Notifications

    /// Sends a notification of `kind` to a customer.
    ///
    /// Returns whether delivery was attempted; a customer without an e-mail
    /// address yields `false`.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError::MissingCustomer`] when the customer does
    /// not exist.
    pub fn send_notification(
        &self,
        kind: NotificationKind,
        customer_id: CustomerId,
    ) -> WorkshopResult<bool> {
        let notification = NotificationFactory::create(kind, self.store.customer(customer_id))?;
        Ok(notification.send(&*self.sender))
    }

    /// Sends an offer to every registered customer.
    ///
    /// Returns the number of notifications handed to the sender.
    ///
    /// # Errors
    ///
    /// Returns [`WorkshopError::Notification`] when a notification cannot be
    /// built.
    pub fn send_offer_to_registered_customers(&self) -> WorkshopResult<usize> {
        let mut sent = 0_usize;
        for customer in self.store.customers() {
            if !customer.is_registered() {
                continue;
            }
            let notification = NotificationFactory::create(NotificationKind::Offer, Some(customer))?;
            if notification.send(&*self.sender) {
                sent = sent.saturating_add(1);
            }
        }
        info!(sent, "offers sent to registered customers");
        Ok(sent)
    }

    /// Sends the registration benefits notice to a customer not yet
    /// registered.
    ///
    /// Returns `false` without sending when the customer is already
    /// registered or has no e-mail address.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError::MissingCustomer`] when the customer does
    /// not exist.
    pub fn send_registration_benefits(&self, customer_id: CustomerId) -> WorkshopResult<bool> {
        let customer = self.store.customer(customer_id);
        if customer.is_some_and(Customer::is_registered) {
            debug!(customer_id = %customer_id, "customer already registered; benefits not sent");
            return Ok(false);
        }
        let notification =
            NotificationFactory::create(NotificationKind::RegistrationBenefit, customer)?;
        Ok(notification.send(&*self.sender))
    }

    fn notify_completion(&self, task_id: TaskId) -> WorkshopResult<TaskCompletion> {
        let task = self
            .store
            .task(task_id)
            .ok_or(WorkshopError::UnknownTask(task_id))?;
        let completed_at = task.completed_at().unwrap_or_else(|| self.clock.utc());
        let owner = self
            .store
            .vehicle(task.vehicle_id())
            .and_then(Vehicle::owner)
            .and_then(|id| self.store.customer(id));

        let notification_sent = match owner {
            Some(customer) => {
                NotificationFactory::create(NotificationKind::TaskComplete, Some(customer))?
                    .send(&*self.sender)
            }
            None => {
                debug!(task_id = %task_id, "vehicle has no known owner; nobody to notify");
                false
            }
        };
        Ok(TaskCompletion {
            task_id,
            completed_at,
            notified_customer: owner.map(Customer::id),
            notification_sent,
        })
    }

    fn new_profile(&self, request: StaffRequest) -> WorkshopResult<StaffProfile> {
        let email = EmailAddress::new(request.email)?;
        if self.store.find_staff_by_email(&email).is_some() {
            warn!(email = %email, "login address already in use");
            return Err(WorkshopError::DuplicateEmail(email));
        }
        Ok(StaffProfile::new(request.name, email, &request.password)?)
    }

    fn staff_profile(&self, staff_id: StaffId) -> Option<&StaffProfile> {
        match staff_id {
            StaffId::Manager(id) => self.store.manager(id).map(Manager::profile),
            StaffId::Mechanic(id) => self.store.mechanic(id).map(Mechanic::profile),
        }
    }

    fn mechanic(&self, mechanic_id: MechanicId) -> WorkshopResult<&Mechanic> {
        self.store
            .mechanic(mechanic_id)
            .ok_or(WorkshopError::UnknownMechanic(mechanic_id))
    }

    fn customer_mut(&mut self, customer_id: CustomerId) -> WorkshopResult<&mut Customer> {
        self.store
            .customers
            .get_mut(&customer_id)
            .ok_or(WorkshopError::UnknownCustomer(customer_id))
    }
}
