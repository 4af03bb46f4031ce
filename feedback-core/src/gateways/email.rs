use feedback_entities::email::*;

pub trait EmailGateway {
    /// Hands a composed e-mail over to the mail transport.
    ///
    /// Fails if the transport rejects the e-mail or cannot be reached.
    fn compose_and_send(
        &self,
        recipients: &[EmailAddress],
        reply_to: Option<&EmailAddress>,
        email: &EmailContent,
    ) -> anyhow::Result<()>;
}
