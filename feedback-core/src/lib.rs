//! # feedback-core
//!
//! Business rules of the feedback service: repository and gateway
//! boundaries, input validation, aggregation and the use cases.

pub mod gateways;
pub mod rating;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use feedback_entities::{comment::*, contact::*, email::*, id::*, rating::*, time::*};
}
