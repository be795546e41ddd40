//! In-memory integration tests for registration listeners.

use std::sync::{Arc, Mutex, PoisonError};

use eyre::{Result, ensure};
use garage::customer::domain::{Customer, CustomerId, RegistrationTemplate};
use garage::customer::ports::RegistrationListener;
use garage::notification::adapters::RecordingRegistrationListener;
use garage::workshop::services::NewCustomerRequest;
use rstest::rstest;

use super::helpers::{TestService, Workshop, workshop};

/// Listener that appends its label to a shared log.
struct LabelListener {
    label: &'static str,
    log: Arc<Mutex<Vec<&'static str>>>,
}

impl RegistrationListener for LabelListener {
    fn on_registered(&self, _customer_id: CustomerId, _message: &str) {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(self.label);
    }
}

/// Listener that registers a second customer when the first registers.
struct ReferralListener {
    referred: Mutex<Customer>,
    template: RegistrationTemplate,
}

impl RegistrationListener for ReferralListener {
    fn on_registered(&self, _customer_id: CustomerId, _message: &str) {
        let mut referred = self.referred.lock().unwrap_or_else(PoisonError::into_inner);
        if !referred.is_registered() {
            referred
                .register(&self.template)
                .expect("referral registration should succeed");
        }
    }
}

fn add_customer(service: &mut TestService, name: &str) -> Result<CustomerId> {
    Ok(service.add_customer(NewCustomerRequest::new(name))?)
}

#[rstest]
fn listeners_fire_in_attachment_order(mut workshop: Workshop) -> Result<()> {
    let customer = add_customer(&mut workshop.service, "Jordan")?;
    let log = Arc::new(Mutex::new(Vec::new()));
    for label in ["first", "second", "third"] {
        workshop.service.attach_listener(
            customer,
            Arc::new(LabelListener {
                label,
                log: Arc::clone(&log),
            }),
        )?;
    }

    workshop.service.register_customer(customer)?;

    let fired = log.lock().unwrap_or_else(PoisonError::into_inner).clone();
    ensure!(fired == vec!["first", "second", "third"], "got {fired:?}");
    Ok(())
}

#[rstest]
fn registration_cascades_into_another_customer(mut workshop: Workshop) -> Result<()> {
    let customer = add_customer(&mut workshop.service, "Jordan")?;
    let recorder = Arc::new(RecordingRegistrationListener::new());
    let mut referred = Customer::new(CustomerId::new(900), "Riley")?;
    referred.attach_listener(recorder.clone());
    let referral = Arc::new(ReferralListener {
        referred: Mutex::new(referred),
        template: RegistrationTemplate::default(),
    });
    workshop
        .service
        .attach_listener(customer, referral.clone())?;

    workshop.service.register_customer(customer)?;
    workshop.service.register_customer(customer)?;

    let received = recorder.received();
    ensure!(received.len() == 1, "cascade should fire once, got {received:?}");
    ensure!(
        received
            .first()
            .is_some_and(|entry| entry.message == "Customer registered: Riley"),
        "unexpected cascade message {received:?}"
    );
    let referred_registered = referral
        .referred
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .is_registered();
    ensure!(referred_registered, "referred customer should be registered");
    Ok(())
}

#[rstest]
fn each_registration_notifies_listeners_again(mut workshop: Workshop) -> Result<()> {
    let recorder = Arc::new(RecordingRegistrationListener::new());
    workshop
        .service
        .attach_listener(workshop.customer, recorder.clone())?;

    workshop.service.register_customer(workshop.customer)?;
    workshop.service.register_customer(workshop.customer)?;

    ensure!(recorder.received().len() == 2, "every registration notifies");
    Ok(())
}
