use std::{io, path::Path};

use feedback_core::{entities::Timestamp, gateways::email::EmailGateway};
use feedback_entities::email::*;
use jfs::Store;
use serde::{Deserialize, Serialize};

/// Stores e-mails as JSON files instead of sending them.
///
/// Used for development and testing.
pub struct SendToJsonFile {
    json_store: Store,
}

impl SendToJsonFile {
    pub fn try_new<P: AsRef<Path>>(directory: P) -> io::Result<Self> {
        let json_store = Store::new(directory)?;
        Ok(Self { json_store })
    }
    #[must_use]
    pub fn path(&self) -> &Path {
        self.json_store.path()
    }
}

#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
struct JsonEmail {
    to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<String>,
    subject: String,
    body: String,
}

impl JsonEmail {
    fn new(to: &EmailAddress, reply_to: Option<&EmailAddress>, content: &EmailContent) -> Self {
        Self {
            to: to.to_string(),
            reply_to: reply_to.map(ToString::to_string),
            subject: content.subject.clone(),
            body: content.body.clone(),
        }
    }
}

impl EmailGateway for SendToJsonFile {
    fn compose_and_send(
        &self,
        recipients: &[EmailAddress],
        reply_to: Option<&EmailAddress>,
        content: &EmailContent,
    ) -> anyhow::Result<()> {
        for to in recipients {
            let now = Timestamp::now().as_millis();
            let key = format!("{now}-{}", to.as_str());
            let email = JsonEmail::new(to, reply_to, content);
            self.json_store.save_with_id(&email, &key)?;
            log::debug!("Saved e-mail to {to} in {}", self.path().display());
        }
        Ok(())
    }
}
