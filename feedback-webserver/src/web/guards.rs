use std::sync::Arc;

use rocket::{
    self,
    http::Status,
    outcome::try_outcome,
    request::{FromRequest, Outcome, Request},
    State,
};

use super::Cfg;
use feedback_core::gateways::notify::NotificationGateway;

fn get_bearer_token(auth_header_val: &str) -> Option<&str> {
    let x: Vec<_> = auth_header_val.split(' ').collect();
    if x.len() == 2 && x[0] == "Bearer" {
        Some(x[1])
    } else {
        None
    }
}

/// Grants access to administrative requests.
///
/// The request must carry the configured admin token as
/// bearer token. Without a configured token everyone is
/// considered an administrator.
#[derive(Debug)]
pub struct Admin;

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Admin {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let cfg = try_outcome!(request.guard::<&State<Cfg>>().await);
        let Some(admin_token) = cfg.admin_token.as_deref() else {
            return Outcome::Success(Admin);
        };
        let authorized = request
            .headers()
            .get("Authorization")
            .filter_map(get_bearer_token)
            .any(|token| token == admin_token);
        if authorized {
            Outcome::Success(Admin)
        } else {
            debug!(
                "Rejected unauthorized {} {}",
                request.method(),
                request.uri()
            );
            Outcome::Error((Status::Unauthorized, ()))
        }
    }
}

pub struct Notify(pub Arc<dyn NotificationGateway + Send + Sync>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bearer_tokens() {
        assert_eq!(get_bearer_token("Bearer secret"), Some("secret"));
        assert_eq!(get_bearer_token("Basic secret"), None);
        assert_eq!(get_bearer_token("Bearer"), None);
        assert_eq!(get_bearer_token("Bearer a b"), None);
    }
}
