//! Customer aggregate with its registration listener channel.

use super::{CustomerDomainError, CustomerId, EmailAddress, RegistrationTemplate, VehicleId};
use crate::customer::ports::RegistrationListener;
use std::fmt;
use std::sync::Arc;

/// Customer aggregate.
///
/// Owns the list of vehicles registered to it and the listeners notified when
/// the customer registers with the garage.
#[derive(Clone)]
pub struct Customer {
    id: CustomerId,
    name: String,
    email: Option<EmailAddress>,
    phone: Option<String>,
    registered: bool,
    vehicles: Vec<VehicleId>,
    listeners: Vec<Arc<dyn RegistrationListener>>,
}

impl Customer {
    /// Creates an unregistered customer.
    ///
    /// # Errors
    ///
    /// Returns [`CustomerDomainError::EmptyName`] when the name is blank.
    pub fn new(id: CustomerId, name: impl Into<String>) -> Result<Self, CustomerDomainError> {
        let raw = name.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CustomerDomainError::EmptyName);
        }
        Ok(Self {
            id,
            name: trimmed.to_owned(),
            email: None,
            phone: None,
            registered: false,
            vehicles: Vec::new(),
            listeners: Vec::new(),
        })
    }

    /// Sets the contact e-mail address.
    #[must_use]
    pub fn with_email(mut self, email: EmailAddress) -> Self {
        self.email = Some(email);
        self
    }

    /// Sets the contact phone number.
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Returns the customer identifier.
    #[must_use]
    pub const fn id(&self) -> CustomerId {
        self.id
    }

    /// Returns the customer name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the contact e-mail address, if known.
    #[must_use]
    pub const fn email(&self) -> Option<&EmailAddress> {
        self.email.as_ref()
    }

    /// Returns the contact phone number, if known.
    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// Returns whether the customer has registered.
    #[must_use]
    pub const fn is_registered(&self) -> bool {
        self.registered
    }

    /// Returns the vehicles owned by the customer, in insertion order.
    #[must_use]
    pub fn vehicles(&self) -> &[VehicleId] {
        &self.vehicles
    }

    /// Returns the number of attached registration listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Attaches a registration listener. Listeners are never detached.
    pub fn attach_listener(&mut self, listener: Arc<dyn RegistrationListener>) {
        self.listeners.push(listener);
    }

    /// Marks the customer as registered and notifies every listener in
    /// attachment order with the rendered template message.
    ///
    /// Returns the message delivered to the listeners.
    ///
    /// # Errors
    ///
    /// Returns [`CustomerDomainError::TemplateRender`] when the template
    /// cannot be rendered. The registration flag is left unchanged in that
    /// case.
    pub fn register(
        &mut self,
        template: &RegistrationTemplate,
    ) -> Result<String, CustomerDomainError> {
        let message = template.render(self.id.value(), &self.name)?;
        self.registered = true;
        for listener in &self.listeners {
            listener.on_registered(self.id, &message);
        }
        Ok(message)
    }

    /// Adds a vehicle to the customer's list; repeated adds are ignored.
    pub(crate) fn add_vehicle(&mut self, vehicle_id: VehicleId) {
        if !self.vehicles.contains(&vehicle_id) {
            self.vehicles.push(vehicle_id);
        }
    }

    /// Removes a vehicle from the customer's list.
    ///
    /// Returns `true` when the vehicle was present.
    pub(crate) fn remove_vehicle(&mut self, vehicle_id: VehicleId) -> bool {
        let before = self.vehicles.len();
        self.vehicles.retain(|id| *id != vehicle_id);
        self.vehicles.len() != before
    }
}

impl fmt::Debug for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Customer")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("registered", &self.registered)
            .field("vehicles", &self.vehicles)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
