use feedback_entities::{contact::ContactMessage, email::EmailAddress};

#[derive(Debug, Clone, Copy)]
pub enum NotificationEvent<'a> {
    ContactMessageReceived {
        recipient: &'a EmailAddress,
        message: &'a ContactMessage,
    },
}

pub trait NotificationGateway {
    fn notify(&self, event: NotificationEvent<'_>) -> anyhow::Result<()>;
}
