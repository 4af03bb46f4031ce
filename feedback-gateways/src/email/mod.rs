mod mailgun;
mod send_to_json_file;
mod sendmail;

pub use self::{mailgun::*, send_to_json_file::*, sendmail::*};
pub use feedback_core::gateways::email::EmailGateway;
