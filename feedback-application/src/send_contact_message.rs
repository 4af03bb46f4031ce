use feedback_core::gateways::notify::NotificationGateway;

use super::*;

pub fn send_contact_message(
    notify: &dyn NotificationGateway,
    recipient: Option<&EmailAddress>,
    message: &ContactMessage,
) -> Result<()> {
    usecases::send_contact_message(notify, recipient, message).map_err(|err| {
        error!("Failed to relay contact message: {err}");
        err
    })?;
    info!("Relayed contact message from {}", message.email);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn relay_contact_message() {
        let fixture = BackendFixture::new();
        let recipient: EmailAddress = "owner@example.com".parse().unwrap();
        let message = ContactMessage {
            name: "Judy".into(),
            email: "judy@example.com".into(),
            message: "Hi".into(),
        };
        flows::send_contact_message(&fixture.notify, Some(&recipient), &message).unwrap();
        assert_eq!(fixture.notify.sent(), vec![(recipient, message)]);
    }

    #[test]
    fn missing_recipient() {
        let fixture = BackendFixture::new();
        let message = ContactMessage::default();
        let err = flows::send_contact_message(&fixture.notify, None, &message).unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(
                usecases::Error::MissingContactRecipient
            ))
        ));
        assert!(fixture.notify.sent().is_empty());
    }
}
