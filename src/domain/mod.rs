//! Domain layer containing the model machinery and the service shapes.
//!
//! # Module Organization
//!
//! - `foundation` - Strict enums, value types, field hashing and rendering
//! - `queue` - Queues and queue requests
//! - `routing` - Routing profiles and channel concurrency
//! - `user` - Agent accounts and phone settings
//! - `evaluation` - Contact evaluations and their answers
//! - `errors` - Modeled service exceptions

pub mod errors;
pub mod evaluation;
pub mod foundation;
pub mod queue;
pub mod routing;
pub mod user;
