use super::prelude::*;
use crate::gateways::notify::{NotificationEvent, NotificationGateway};

/// Relays the message to the operator mailbox.
///
/// Nothing is stored, a failed delivery is lost.
pub fn send_contact_message<N>(
    notify: &N,
    recipient: Option<&EmailAddress>,
    message: &ContactMessage,
) -> Result<()>
where
    N: NotificationGateway + ?Sized,
{
    let recipient = recipient.ok_or(Error::MissingContactRecipient)?;
    log::debug!("Relaying contact message from {}", message.email);
    notify
        .notify(NotificationEvent::ContactMessageReceived { recipient, message })
        .map_err(Error::Delivery)
}
