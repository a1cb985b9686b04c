//! Routing profiles and their queue and concurrency settings.

use super::{BehaviorType, Channel};
use crate::domain::foundation::Timestamp;
use crate::value_type;

value_type! {
    pub struct CrossChannelBehavior {
        behavior_type: scalar(BehaviorType) = "BehaviorType",
    }
}

value_type! {
    /// How many contacts of one channel an agent handles at once.
    pub struct MediaConcurrency {
        channel: scalar(Channel) = "Channel",
        concurrency: scalar(i32) = "Concurrency",
        cross_channel_behavior: scalar(CrossChannelBehavior) = "CrossChannelBehavior",
    }
}

value_type! {
    pub struct RoutingProfileQueueReference {
        queue_id: scalar(String) = "QueueId",
        channel: scalar(Channel) = "Channel",
    }
}

value_type! {
    /// A queue attached to a routing profile with its priority and delay.
    pub struct RoutingProfileQueueConfig {
        queue_reference: scalar(RoutingProfileQueueReference) = "QueueReference",
        /// Lower numbers are served first.
        priority: scalar(i32) = "Priority",
        /// Seconds a contact waits before it is offered to agents on this profile.
        delay: scalar(i32) = "Delay",
    }
}

value_type! {
    pub struct RoutingProfile {
        instance_id: scalar(String) = "InstanceId",
        name: scalar(String) = "Name",
        routing_profile_arn: scalar(String) = "RoutingProfileArn",
        routing_profile_id: scalar(String) = "RoutingProfileId",
        description: scalar(String) = "Description",
        media_concurrencies: list(MediaConcurrency) = "MediaConcurrencies",
        default_outbound_queue_id: scalar(String) = "DefaultOutboundQueueId",
        tags: map(String) = "Tags",
        number_of_associated_queues: scalar(i64) = "NumberOfAssociatedQueues",
        number_of_associated_users: scalar(i64) = "NumberOfAssociatedUsers",
        is_default: scalar(bool) = "IsDefault",
        last_modified_time: scalar(Timestamp) = "LastModifiedTime",
        last_modified_region: scalar(String) = "LastModifiedRegion",
    }
}

value_type! {
    pub struct CreateRoutingProfileRequest {
        instance_id: scalar(String) = "InstanceId",
        name: scalar(String) = "Name",
        description: scalar(String) = "Description",
        default_outbound_queue_id: scalar(String) = "DefaultOutboundQueueId",
        queue_configs: list(RoutingProfileQueueConfig) = "QueueConfigs",
        media_concurrencies: list(MediaConcurrency) = "MediaConcurrencies",
        tags: map(String) = "Tags",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::FieldValue;

    fn voice_concurrency() -> MediaConcurrency {
        let mut behavior = CrossChannelBehavior::new();
        behavior.with_behavior_type(BehaviorType::RouteCurrentChannelOnly);

        let mut concurrency = MediaConcurrency::new();
        concurrency
            .with_channel(Channel::Voice)
            .with_concurrency(1)
            .with_cross_channel_behavior(behavior);
        concurrency
    }

    fn queue_config(queue_id: &str, priority: i32) -> RoutingProfileQueueConfig {
        let mut reference = RoutingProfileQueueReference::new();
        reference.with_queue_id(queue_id).with_channel(Channel::Voice);

        let mut config = RoutingProfileQueueConfig::new();
        config
            .with_queue_reference(reference)
            .with_priority(priority)
            .with_delay(0);
        config
    }

    #[test]
    fn media_concurrency_renders_nested_behavior() {
        assert_eq!(
            voice_concurrency().to_string(),
            "{Channel: VOICE,Concurrency: 1,CrossChannelBehavior: {BehaviorType: ROUTE_CURRENT_CHANNEL_ONLY}}"
        );
    }

    #[test]
    fn queue_config_order_matters_for_equality() {
        let mut forward = CreateRoutingProfileRequest::new();
        forward.append_queue_configs(vec![queue_config("q-1", 1), queue_config("q-2", 2)]);
        let mut backward = CreateRoutingProfileRequest::new();
        backward.append_queue_configs(vec![queue_config("q-2", 2), queue_config("q-1", 1)]);

        assert_ne!(forward, backward);
    }

    #[test]
    fn equal_requests_hash_equal() {
        let mut left = CreateRoutingProfileRequest::new();
        left.with_name("Agents")
            .append_media_concurrencies(vec![voice_concurrency()])
            .append_queue_configs(vec![queue_config("q-1", 1)]);
        let right = left.clone();

        assert_eq!(left, right);
        assert_eq!(left.stable_hash(), right.stable_hash());
    }

    #[test]
    fn routing_profile_counts_use_wide_integers() {
        let json = r#"{
            "Name": "Agents",
            "NumberOfAssociatedQueues": 5000000000,
            "IsDefault": false
        }"#;

        let profile: RoutingProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.number_of_associated_queues(), Some(&5_000_000_000));
        assert_eq!(profile.is_default(), Some(&false));
        assert_eq!(profile.number_of_associated_users(), None);
    }
}
