/// A message sent through the contact form.
///
/// The fields are relayed as they are, the sender address
/// is neither parsed nor verified.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactMessage {
    /// The display name of the sender
    pub name: String,

    /// Where the sender wants to be answered
    pub email: String,

    pub message: String,
}
