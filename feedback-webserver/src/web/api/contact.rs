use std::sync::Arc;

use super::*;
use feedback_core::entities::ContactMessage;

#[post("/contact", data = "<contact>")]
pub async fn post_contact(
    cfg: &State<Cfg>,
    notify: &State<Notify>,
    contact: JsonResult<'_, json::ContactRequest>,
) -> Result<json::Confirmation> {
    let message = ContactMessage::from(contact?.into_inner());
    let recipient = cfg.contact_recipient.clone();
    let notify = Arc::clone(&notify.0);
    // Sending e-mails may block
    rocket::tokio::task::spawn_blocking(move || {
        flows::send_contact_message(&*notify, recipient.as_ref(), &message)
    })
    .await??;
    Ok(Json(json::Confirmation::new("Message sent successfully")))
}
