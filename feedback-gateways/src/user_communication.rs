use askama::Template;
use feedback_entities::{contact::*, email::*};

#[derive(Template)]
#[template(path = "contact_message/subject.txt")]
struct ContactMessageSubjectTemplate;

#[derive(Template)]
#[template(path = "contact_message/body.txt")]
struct ContactMessageBodyTemplate<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
}

pub fn contact_message_email(contact_message: &ContactMessage) -> askama::Result<EmailContent> {
    let ContactMessage {
        name,
        email,
        message,
    } = contact_message;
    let subject = ContactMessageSubjectTemplate.render()?.trim().to_owned();
    let body = ContactMessageBodyTemplate {
        name,
        email,
        message,
    }
    .render()?;
    Ok(EmailContent { subject, body })
}
