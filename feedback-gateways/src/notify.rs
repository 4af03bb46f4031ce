use std::sync::Arc;

use fast_chemail::is_valid_email;
use feedback_core::gateways::notify::{NotificationEvent, NotificationGateway};
use feedback_entities::email::*;

use crate::{email::EmailGateway, user_communication};

#[derive(Clone)]
pub struct Notify {
    email_gw: Arc<dyn EmailGateway + Send + Sync + 'static>,
}

impl Notify {
    pub fn new<G>(gw: G) -> Self
    where
        G: EmailGateway + Send + Sync + 'static,
    {
        Self {
            email_gw: Arc::new(gw),
        }
    }
}

/// The sender address is only used for replying if it is valid.
fn reply_address(sender: &str) -> Option<EmailAddress> {
    let address = sender.trim().parse::<EmailAddress>().ok()?;
    is_valid_email(address.as_str()).then(|| EmailAddress::new_unchecked(address.into_string()))
}

impl NotificationGateway for Notify {
    fn notify(&self, event: NotificationEvent<'_>) -> anyhow::Result<()> {
        use NotificationEvent as E;
        match event {
            E::ContactMessageReceived { recipient, message } => {
                let content = user_communication::contact_message_email(message)?;
                let reply_to = reply_address(&message.email);
                log::info!("Sending contact message from {} to {recipient}", message.email);
                self.email_gw
                    .compose_and_send(&[recipient.clone()], reply_to.as_ref(), &content)
            }
        }
    }
}
