use anyhow::{bail, Result};
use feedback_core::gateways::email::EmailGateway;
use feedback_entities::email::{EmailAddress, EmailContent};
use feedback_gateways::{
    email::{Mailgun, SendToJsonFile, Sendmail},
    notify::Notify,
};

use crate::config;

pub fn notification_gateway(cfg: &config::Email) -> Result<Notify> {
    let gw = match &cfg.gateway {
        Some(config::EmailGateway::MailGun {
            api_url,
            api_key,
            domain,
            sender_address,
        }) => {
            log::info!("Use Mailgun gateway");
            Notify::new(Mailgun {
                api_key: api_key.clone(),
                api_base_url: api_url.clone(),
                domain: domain.clone(),
                from_email: sender_address.clone(),
            })
        }
        Some(config::EmailGateway::Sendmail { sender_address }) => {
            log::info!("Use sendmail gateway");
            Notify::new(Sendmail::new(sender_address.clone()))
        }
        Some(config::EmailGateway::EmailToJsonFile { dir }) => {
            let gw = SendToJsonFile::try_new(dir)?;
            log::info!("Use JSON file email gateway ({})", gw.path().display());
            Notify::new(gw)
        }
        None => {
            log::warn!("No eMail gateway was configured: contact messages can't be sent");
            Notify::new(DummyMailGw)
        }
    };
    Ok(gw)
}

struct DummyMailGw;

impl EmailGateway for DummyMailGw {
    fn compose_and_send(
        &self,
        _recipients: &[EmailAddress],
        _reply_to: Option<&EmailAddress>,
        email: &EmailContent,
    ) -> Result<()> {
        log::debug!(
            "Cannot send e-mail '{}' because no e-mail gateway was configured",
            email.subject
        );
        bail!("No e-mail gateway configured");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use feedback_core::{
        entities::ContactMessage,
        gateways::notify::{NotificationEvent, NotificationGateway as _},
    };

    #[test]
    fn missing_gateway_fails_to_deliver() {
        let gw = notification_gateway(&config::Email { gateway: None }).unwrap();
        let recipient: EmailAddress = "owner@example.com".parse().unwrap();
        let message = ContactMessage {
            name: "Bob".into(),
            email: "bob@example.com".into(),
            message: "Hi".into(),
        };
        let event = NotificationEvent::ContactMessageReceived {
            recipient: &recipient,
            message: &message,
        };
        assert!(gw.notify(event).is_err());
    }
}
