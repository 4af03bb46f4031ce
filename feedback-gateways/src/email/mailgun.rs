use anyhow::{bail, Result};
use feedback_entities::email::*;
use itertools::Itertools;

use super::EmailGateway;

/// An email gateway based on mailgun.net.
#[derive(Debug, Clone)]
pub struct Mailgun {
    pub api_key: String,
    pub api_base_url: String,
    pub domain: String,
    pub from_email: EmailAddress,
}

impl Mailgun {
    fn messages_url(&self) -> String {
        let Self {
            api_base_url,
            domain,
            ..
        } = self;
        format!("{}/{domain}/messages", api_base_url.trim_end_matches('/'))
    }
}

#[derive(Debug, serde::Deserialize, thiserror::Error)]
#[error("{message}")]
struct JsonError {
    pub message: String,
}

#[cfg(not(test))]
fn send_raw(url: &str, api_key: &str, params: &[(&'static str, String)]) -> Result<()> {
    let client = reqwest::blocking::Client::new();
    let response = client
        .post(url)
        .form(params)
        .basic_auth("api", Some(api_key))
        .send()?;
    if response.status().is_success() {
        log::debug!("Mail provider response: {response:#?}");
        Ok(())
    } else {
        let status = response.status();
        let json_error: JsonError = response.json()?;
        log::warn!("Mail provider rejected e-mail ({status}): {json_error}");
        Err(json_error.into())
    }
}

/// Don't actually send emails while running the tests.
#[cfg(test)]
fn send_raw(_: &str, _: &str, params: &[(&'static str, String)]) -> Result<()> {
    log::debug!("Would send e-mail: {params:?}");
    Ok(())
}

fn form_params(
    from: &EmailAddress,
    recipients: &[EmailAddress],
    reply_to: Option<&EmailAddress>,
    email: &EmailContent,
) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("from", from.to_string()),
        ("to", recipients.iter().map(EmailAddress::as_str).join(",")),
        ("subject", email.subject.clone()),
        ("text", email.body.clone()),
    ];
    if let Some(reply_to) = reply_to {
        params.push(("h:Reply-To", reply_to.to_string()));
    }
    params
}

impl EmailGateway for Mailgun {
    fn compose_and_send(
        &self,
        recipients: &[EmailAddress],
        reply_to: Option<&EmailAddress>,
        email: &EmailContent,
    ) -> Result<()> {
        if recipients.is_empty() {
            bail!("No e-mail addresses specified");
        }
        log::debug!(
            "Sending e-mail from {} to: {recipients:?}",
            self.from_email
        );
        let params = form_params(&self.from_email, recipients, reply_to, email);
        send_raw(&self.messages_url(), &self.api_key, &params)
    }
}
