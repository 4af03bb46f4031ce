use anyhow::{bail, Result};
use fast_chemail::is_valid_email;
use feedback_entities::email::*;
#[cfg(not(test))]
use std::{
    io::prelude::*,
    process::{Command, Stdio},
};
use time::{format_description::well_known::Rfc2822, OffsetDateTime};

use super::EmailGateway;

/// Sends e-mails through the local `sendmail` binary.
#[derive(Debug, Clone)]
pub struct Sendmail {
    from: EmailAddress,
}

impl Sendmail {
    #[must_use]
    pub const fn new(from: EmailAddress) -> Self {
        Self { from }
    }
}

#[cfg(not(test))]
fn send_raw(mail: &str) -> Result<()> {
    let mut child = Command::new("sendmail")
        .arg("-t")
        .stdin(Stdio::piped())
        .spawn()?;
    child
        .stdin
        .as_mut()
        .ok_or_else(|| anyhow::anyhow!("Could not get stdin of sendmail"))?
        .write_all(mail.as_bytes())?;
    let output = child.wait_with_output()?;
    if !output.status.success() {
        bail!("sendmail exited with {}", output.status);
    }
    Ok(())
}

/// Don't actually send emails while running the tests.
#[cfg(test)]
fn send_raw(mail: &str) -> Result<()> {
    log::debug!("Would send e-mail: {mail}");
    Ok(())
}

impl EmailGateway for Sendmail {
    fn compose_and_send(
        &self,
        recipients: &[EmailAddress],
        reply_to: Option<&EmailAddress>,
        email: &EmailContent,
    ) -> Result<()> {
        log::debug!("Sending e-mail to: {recipients:?}");
        let recipients: Vec<_> = recipients.iter().collect();
        let mail = compose(&self.from, &recipients, reply_to, &email.subject, &email.body)?;
        send_raw(&mail)
    }
}

// quoted_printable limits the length of lines to 76 chars
// and otherwise inserts unintended line breaks! The max.
// length of a header line is 78 chars including the \r\n
// line break.
const MAX_HEADER_FIELD_LEN: usize = 76;

const LINE_BREAK: &str = "\r\n";

fn encode_header_field_partially(input: &str, encoded_max_len: usize) -> (String, usize) {
    // overhead of the encoding (see string formatting literal below)
    debug_assert!(encoded_max_len >= "=?UTF-8?Q??=".len());
    debug_assert!(encoded_max_len <= MAX_HEADER_FIELD_LEN);
    // Binary search for the longest prefix that fits
    let mut input_min_len = 0;
    let mut input_max_len = input.len() * 2;
    loop {
        debug_assert!(input_min_len <= input_max_len);
        let mut input_len = input_min_len + (input_max_len - input_min_len) / 2;
        input_len = input_len.min(input.len());
        while !input.is_char_boundary(input_len) {
            input_len -= 1;
        }
        let encoded = format!(
            "=?UTF-8?Q?{}?=",
            quoted_printable::encode_to_str(input[..input_len].as_bytes())
        );
        if encoded.len() <= encoded_max_len {
            if input_len == input_min_len {
                return (encoded, input_len);
            }
            input_min_len = input_len;
        } else {
            debug_assert!(input_min_len < input_len);
            input_max_len = input_len;
        }
    }
}

fn encode_header_field(name: &str, input: &str) -> String {
    let mut prefix_len = name.len() + 1;
    let mut encoded_output = String::with_capacity(prefix_len + input.len() * 2);
    encoded_output.push_str(name);
    encoded_output.push(':');
    let mut input_len = 0;
    while input_len < input.len() {
        if input_len > 0 {
            // append line break and continuation
            encoded_output.push_str(LINE_BREAK);
            encoded_output.push(' ');
            prefix_len = 1;
        }
        let (encoded_part, input_part_len) =
            encode_header_field_partially(&input[input_len..], MAX_HEADER_FIELD_LEN - prefix_len);
        debug_assert!(!encoded_part.is_empty());
        debug_assert!(input_part_len > 0);
        encoded_output.push_str(&encoded_part);
        input_len += input_part_len;
    }
    encoded_output
}

fn check_header_value(value: &str) -> Result<&str> {
    if value.contains(['\r', '\n']) {
        bail!("Line breaks are not allowed in header values");
    }
    Ok(value)
}

pub fn compose(
    from: &EmailAddress,
    to: &[&EmailAddress],
    reply_to: Option<&EmailAddress>,
    subject: &str,
    body: &str,
) -> Result<String> {
    let to: Vec<_> = to
        .iter()
        .filter(|addr| is_valid_email(addr.as_str()))
        .map(ToString::to_string)
        .collect();
    if to.is_empty() {
        bail!("No valid e-mail addresses specified");
    }
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    let mut headers = vec![
        format!("Date:{}", now.format(&Rfc2822)?),
        format!("From:{}", check_header_value(&from.to_string())?),
        format!("To:{}", check_header_value(&to.join(","))?),
    ];
    if let Some(reply_to) = reply_to {
        headers.push(format!(
            "Reply-To:{}",
            check_header_value(&reply_to.to_string())?
        ));
    }
    headers.push(encode_header_field("Subject", subject));
    headers.push("MIME-Version:1.0".to_owned());
    headers.push("Content-Type:text/plain;charset=utf-8".to_owned());

    let email = format!(
        "{headers}{LINE_BREAK}{LINE_BREAK}{body}",
        headers = headers.join(LINE_BREAK)
    );
    log::debug!("Composed e-mail: {email}");
    Ok(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(s: &str) -> EmailAddress {
        s.parse().unwrap()
    }

    #[test]
    fn create_simple_mail() {
        let from = addr(r#""Website Contact" <from@example.com>"#);
        let to = addr("owner@example.com");
        let mail = compose(
            &from,
            &[&to],
            None,
            "My veeeeerrrrryyyyy looooonnnnnggggg Subject with äöüÄÖÜß Umlaute and even more characters that are distributed onto multiple lines",
            "Hello Mail",
        )
        .unwrap();
        let expected = "From:\"Website Contact\" <from@example.com>\r\n\
             To:owner@example.com\r\n\
             Subject:=?UTF-8?Q?My veeeeerrrrryyyyy looooonnnnnggggg Subject with =C3=A4?=\r\n \
             =?UTF-8?Q?=C3=B6=C3=BC=C3=84=C3=96=C3=9C=C3=9F Umlaute and even more char?=\r\n \
             =?UTF-8?Q?acters that are distributed onto multiple lines?=\r\n\
             MIME-Version:1.0\r\n\
             Content-Type:text/plain;charset=utf-8\r\n\r\n\
             Hello Mail";
        assert!(mail.contains(expected));
        assert!(mail.starts_with("Date:"));
    }

    #[test]
    fn add_reply_to_header() {
        let from = addr("from@example.com");
        let to = addr("owner@example.com");
        let visitor = addr("visitor@example.com");
        let mail = compose(&from, &[&to], Some(&visitor), "Subject", "Body").unwrap();
        assert!(mail.contains("To:owner@example.com\r\nReply-To:visitor@example.com\r\n"));
    }

    #[test]
    fn check_addresses() {
        let from = addr("from@example.com");
        assert!(compose(&from, &[], None, "foo", "bar").is_err());
        let invalid = EmailAddress::new_unchecked("not-valid".into());
        assert!(compose(&from, &[&invalid], None, "foo", "bar").is_err());
    }

    #[test]
    fn reject_line_breaks_in_headers() {
        let from = addr("from@example.com");
        let to = addr("owner@example.com");
        let evil = EmailAddress::new_unchecked("a@b.c".into()).with_display_name("x\r\nBcc: y@z.z");
        assert!(compose(&from, &[&to], Some(&evil), "foo", "bar").is_err());
    }
}
