//! In-memory integration tests for workshop configuration.

use eyre::{Result, ensure};
use garage::config::{ConfigError, WorkshopConfig};
use garage::workforce::domain::{AllocationOutcome, ReallocationPolicy};
use garage::workshop::services::{CreateTaskRequest, NewCustomerRequest, StaffRequest};
use rstest::rstest;

use super::helpers::build_workshop;

#[rstest]
fn configured_template_shapes_registration_message() -> Result<()> {
    let config = WorkshopConfig::from_json(
        r#"{ "registration_template": "Welcome aboard, {{ name }} (#{{ customer_id }})" }"#,
    )?;
    let mut workshop = build_workshop(config)?;
    let customer = workshop
        .service
        .add_customer(NewCustomerRequest::new("Jordan"))?;

    let message = workshop.service.register_customer(customer)?;

    ensure!(
        message == format!("Welcome aboard, Jordan (#{})", customer.value()),
        "unexpected message {message}"
    );
    Ok(())
}

#[rstest]
fn ignore_policy_keeps_first_allocation() -> Result<()> {
    let config = WorkshopConfig::from_json(r#"{ "reallocation_policy": "ignore" }"#)?;
    ensure!(
        config.reallocation_policy == ReallocationPolicy::Ignore,
        "policy should load"
    );
    let mut workshop = build_workshop(config)?;
    let second = workshop.service.hire_mechanic(StaffRequest::new(
        "Robin Vale",
        "robin@garage.test",
        "ratchet",
    ))?;
    workshop.service.add_team_member(workshop.manager, second)?;
    let task_id = workshop
        .service
        .create_task(CreateTaskRequest::new("Coolant flush", 2, workshop.vehicle))?;
    workshop
        .service
        .allocate_task(workshop.manager, task_id, workshop.mechanic)?;

    let outcome = workshop
        .service
        .allocate_task(workshop.manager, task_id, second)?;

    ensure!(outcome == AllocationOutcome::Unchanged, "got {outcome:?}");
    ensure!(
        workshop.service.next_task(workshop.mechanic)? == Some(task_id),
        "first mechanic keeps the task"
    );
    ensure!(
        workshop.service.next_task(second)?.is_none(),
        "second mechanic stays idle"
    );
    Ok(())
}

#[rstest]
#[case(r#"{ "registration_template": "{{ name" }"#)]
#[case(r#"{ "reallocation_policy": "steal" }"#)]
#[case(r#"{ "unknown_field": true }"#)]
fn invalid_configuration_is_rejected(#[case] source: &str) {
    let result = WorkshopConfig::from_json(source);

    assert!(matches!(
        result,
        Err(ConfigError::Parse(_) | ConfigError::Template(_))
    ));
}
