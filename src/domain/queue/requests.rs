//! Queue request and response shapes.

use super::{OutboundCallerConfig, QueueStatus, QueueSummary, QueueType};
use crate::value_type;

value_type! {
    /// Creates a queue in an instance.
    pub struct CreateQueueRequest {
        instance_id: scalar(String) = "InstanceId",
        name: scalar(String) = "Name",
        description: scalar(String) = "Description",
        outbound_caller_config: scalar(OutboundCallerConfig) = "OutboundCallerConfig",
        hours_of_operation_id: scalar(String) = "HoursOfOperationId",
        max_contacts: scalar(i32) = "MaxContacts",
        quick_connect_ids: list(String) = "QuickConnectIds",
        tags: map(String) = "Tags",
    }
}

value_type! {
    pub struct CreateQueueResponse {
        queue_arn: scalar(String) = "QueueArn",
        queue_id: scalar(String) = "QueueId",
    }
}

value_type! {
    /// Lists the queues of an instance, optionally filtered by kind.
    pub struct ListQueuesRequest {
        instance_id: scalar(String) = "InstanceId",
        queue_types: list(QueueType) = "QueueTypes",
        next_token: scalar(String) = "NextToken",
        max_results: scalar(i32) = "MaxResults",
    }
}

value_type! {
    pub struct ListQueuesResponse {
        queue_summary_list: list(QueueSummary) = "QueueSummaryList",
        next_token: scalar(String) = "NextToken",
    }
}

value_type! {
    /// Enables or disables a queue.
    pub struct UpdateQueueStatusRequest {
        instance_id: scalar(String) = "InstanceId",
        queue_id: scalar(String) = "QueueId",
        status: scalar(QueueStatus) = "Status",
    }
}
