//! Shared test helpers for in-memory workshop integration tests.

use std::sync::Arc;

use garage::config::WorkshopConfig;
use garage::customer::domain::{CustomerId, VehicleId};
use garage::notification::adapters::InMemoryNotificationSender;
use garage::workforce::domain::{ManagerId, MechanicId};
use garage::workshop::services::{
    NewCustomerRequest, RegisterVehicleRequest, StaffRequest, WorkshopResult, WorkshopService,
};
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the integration tests.
pub type TestService = WorkshopService<InMemoryNotificationSender, DefaultClock>;

/// A workshop with one manager, one team mechanic, and a registered
/// customer who owns a vehicle.
pub struct Workshop {
    pub service: TestService,
    pub sender: InMemoryNotificationSender,
    pub manager: ManagerId,
    pub mechanic: MechanicId,
    pub customer: CustomerId,
    pub vehicle: VehicleId,
}

/// Builds a populated workshop with the given configuration.
///
/// # Errors
///
/// Returns an error if any setup operation is rejected.
pub fn build_workshop(config: WorkshopConfig) -> WorkshopResult<Workshop> {
    let sender = InMemoryNotificationSender::new();
    let mut service =
        WorkshopService::with_config(Arc::new(sender.clone()), Arc::new(DefaultClock), config);
    let manager = service.hire_manager(StaffRequest::new(
        "Morgan Reyes",
        "morgan@garage.test",
        "allocate",
    ))?;
    let mechanic = service.hire_mechanic(StaffRequest::new(
        "Sam Okafor",
        "sam@garage.test",
        "spanner",
    ))?;
    service.add_team_member(manager, mechanic)?;
    let customer = service.add_customer(
        NewCustomerRequest::new("Alex Chen")
            .with_email("alex@example.com")
            .with_phone("01234 567890"),
    )?;
    service.register_customer(customer)?;
    let vehicle =
        service.register_vehicle(RegisterVehicleRequest::new("AB12 CDE", "Ford", "Focus", 2019))?;
    service.set_vehicle_owner(vehicle, customer)?;
    Ok(Workshop {
        service,
        sender,
        manager,
        mechanic,
        customer,
        vehicle,
    })
}

/// Provides a populated workshop with the default configuration.
#[fixture]
pub fn workshop() -> Workshop {
    build_workshop(WorkshopConfig::default()).expect("workshop setup should succeed")
}
