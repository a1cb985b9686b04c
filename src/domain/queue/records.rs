//! Queue descriptions returned by the service.

use super::{QueueStatus, QueueType};
use crate::domain::foundation::Timestamp;
use crate::value_type;

value_type! {
    /// Caller ID and flow used for outbound calls placed from a queue.
    pub struct OutboundCallerConfig {
        outbound_caller_id_name: scalar(String) = "OutboundCallerIdName",
        outbound_caller_id_number_id: scalar(String) = "OutboundCallerIdNumberId",
        outbound_flow_id: scalar(String) = "OutboundFlowId",
    }
}

value_type! {
    /// Full description of a queue.
    pub struct Queue {
        name: scalar(String) = "Name",
        queue_arn: scalar(String) = "QueueArn",
        queue_id: scalar(String) = "QueueId",
        description: scalar(String) = "Description",
        outbound_caller_config: scalar(OutboundCallerConfig) = "OutboundCallerConfig",
        hours_of_operation_id: scalar(String) = "HoursOfOperationId",
        /// Maximum number of contacts that can wait in the queue.
        max_contacts: scalar(i32) = "MaxContacts",
        status: scalar(QueueStatus) = "Status",
        tags: map(String) = "Tags",
        last_modified_time: scalar(Timestamp) = "LastModifiedTime",
        last_modified_region: scalar(String) = "LastModifiedRegion",
    }
}

value_type! {
    /// Summary entry returned by queue listings.
    pub struct QueueSummary {
        id: scalar(String) = "Id",
        arn: scalar(String) = "Arn",
        name: scalar(String) = "Name",
        queue_type: scalar(QueueType) = "QueueType",
        last_modified_time: scalar(Timestamp) = "LastModifiedTime",
        last_modified_region: scalar(String) = "LastModifiedRegion",
    }
}
