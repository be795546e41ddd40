//! Given steps for work-order BDD scenarios.

use super::world::WorkOrderWorld;
use eyre::WrapErr;
use garage::workshop::services::{
    CreateTaskRequest, NewCustomerRequest, RegisterVehicleRequest, StaffRequest,
};
use rstest_bdd_macros::given;

fn staff_email(name: &str) -> String {
    format!("{}@garage.test", name.to_ascii_lowercase())
}

#[given(r#"a manager "{name}""#)]
fn a_manager(world: &mut WorkOrderWorld, name: String) -> Result<(), eyre::Report> {
    let email = staff_email(&name);
    let manager = world
        .service
        .hire_manager(StaffRequest::new(name, email, "allocate"))
        .wrap_err("hire manager for scenario")?;
    world.manager = Some(manager);
    Ok(())
}

fn hire_mechanic(world: &mut WorkOrderWorld, name: String, on_team: bool) -> Result<(), eyre::Report> {
    let email = staff_email(&name);
    let mechanic = world
        .service
        .hire_mechanic(StaffRequest::new(name.clone(), email, "spanner"))
        .wrap_err("hire mechanic for scenario")?;
    if on_team {
        let manager = world
            .manager
            .ok_or_else(|| eyre::eyre!("missing manager in scenario world"))?;
        world
            .service
            .add_team_member(manager, mechanic)
            .wrap_err("add mechanic to team")?;
    }
    world.mechanics.insert(name, mechanic);
    Ok(())
}

#[given(r#"a mechanic "{name}" on the team"#)]
fn a_team_mechanic(world: &mut WorkOrderWorld, name: String) -> Result<(), eyre::Report> {
    hire_mechanic(world, name, true)
}

#[given(r#"a mechanic "{name}" outside the team"#)]
fn an_outside_mechanic(world: &mut WorkOrderWorld, name: String) -> Result<(), eyre::Report> {
    hire_mechanic(world, name, false)
}

fn add_owner(
    world: &mut WorkOrderWorld,
    request: NewCustomerRequest,
    name: String,
    plate: String,
) -> Result<(), eyre::Report> {
    let customer = world
        .service
        .add_customer(request)
        .wrap_err("add customer for scenario")?;
    let vehicle = world
        .service
        .register_vehicle(RegisterVehicleRequest::new(plate.clone(), "Ford", "Focus", 2019))
        .wrap_err("register vehicle for scenario")?;
    world
        .service
        .set_vehicle_owner(vehicle, customer)
        .wrap_err("set vehicle owner")?;
    world.customers.insert(name, customer);
    world.vehicles.insert(plate, vehicle);
    Ok(())
}

#[given(r#"a customer "{name}" with email "{email}" who owns vehicle "{plate}""#)]
fn a_customer_with_email(
    world: &mut WorkOrderWorld,
    name: String,
    email: String,
    plate: String,
) -> Result<(), eyre::Report> {
    let request = NewCustomerRequest::new(name.clone()).with_email(email);
    add_owner(world, request, name, plate)
}

#[given(r#"a customer "{name}" without email who owns vehicle "{plate}""#)]
fn a_customer_without_email(
    world: &mut WorkOrderWorld,
    name: String,
    plate: String,
) -> Result<(), eyre::Report> {
    let request = NewCustomerRequest::new(name.clone());
    add_owner(world, request, name, plate)
}

#[given(r#"a task "{description}" with priority {priority:i32} for vehicle "{plate}""#)]
fn a_task(
    world: &mut WorkOrderWorld,
    description: String,
    priority: i32,
    plate: String,
) -> Result<(), eyre::Report> {
    let vehicle = world
        .vehicles
        .get(&plate)
        .copied()
        .ok_or_else(|| eyre::eyre!("unknown vehicle {plate} in scenario world"))?;
    let task_id = world
        .service
        .create_task(CreateTaskRequest::new(description.clone(), priority, vehicle))
        .wrap_err("create task for scenario")?;
    world.tasks.insert(description, task_id);
    Ok(())
}
