//! Connect Models - client data models for a contact-center service
//!
//! Every request, response and nested object the service exchanges is a value
//! type declared with [`value_type!`], and every closed set of wire strings is a
//! strict enum declared with [`strict_enum!`]. The generic machinery lives in
//! [`domain::foundation`]; the concrete shapes are grouped by service area.
//!
//! # Example
//!
//! ```
//! use connect_models::domain::queue::{CreateQueueRequest, QueueStatus};
//! use connect_models::StrictEnum;
//!
//! let mut request = CreateQueueRequest::new();
//! request
//!     .with_instance_id("instance-1")
//!     .with_name("Support")
//!     .append_quick_connect_ids(["qc-1".to_string()]);
//!
//! assert_eq!(QueueStatus::parse("ENABLED"), Ok(QueueStatus::Enabled));
//! assert!(QueueStatus::parse("enabled").is_err());
//! ```

pub mod config;
pub mod domain;
pub mod telemetry;

pub use domain::errors::{ServiceError, ServiceErrorCode};
pub use domain::foundation::{FieldValue, InvalidValueError, StrictEnum, Timestamp, ValueType};

#[doc(hidden)]
pub mod __private {
    pub use once_cell::sync::Lazy;
    pub use paste::paste;
    pub use serde;
}
