//! # feedback-gateways
//!
//! Adapters for the outbound ports of the feedback service:
//! e-mail transports and the notification gateway that turns
//! domain events into e-mails.

pub mod email;
pub mod notify;
mod user_communication;
