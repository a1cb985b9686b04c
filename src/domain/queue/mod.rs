//! Queue shapes.
//!
//! - `status` - queue availability and queue kind enums
//! - `records` - queue descriptions returned by the service
//! - `requests` - create/list/update request and response shapes

mod records;
mod requests;
mod status;

pub use records::{OutboundCallerConfig, Queue, QueueSummary};
pub use requests::{
    CreateQueueRequest, CreateQueueResponse, ListQueuesRequest, ListQueuesResponse,
    UpdateQueueStatusRequest,
};
pub use status::{QueueStatus, QueueType};
