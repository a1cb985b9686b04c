//! Channel enums shared by routing shapes.

use crate::strict_enum;

strict_enum! {
    /// Media channel a contact arrives on.
    pub enum Channel {
        Voice = "VOICE",
        Chat = "CHAT",
        Task = "TASK",
        Email = "EMAIL",
    }
}

strict_enum! {
    /// Whether an agent busy on one channel may be offered contacts on others.
    pub enum BehaviorType {
        RouteCurrentChannelOnly = "ROUTE_CURRENT_CHANNEL_ONLY",
        RouteAnyChannel = "ROUTE_ANY_CHANNEL",
    }
}

impl Channel {
    /// Returns true for channels where an agent handles one contact at a time.
    pub fn is_single_contact(&self) -> bool {
        matches!(self, Channel::Voice)
    }
}
