//! Queue enums.

use crate::strict_enum;

strict_enum! {
    /// Whether a queue accepts new contacts.
    pub enum QueueStatus {
        Enabled = "ENABLED",
        Disabled = "DISABLED",
    }
}

strict_enum! {
    /// Kind of queue: shared standard queues or per-agent queues.
    pub enum QueueType {
        Standard = "STANDARD",
        Agent = "AGENT",
    }
}

impl QueueStatus {
    /// Returns true if the queue is accepting contacts.
    pub fn is_enabled(&self) -> bool {
        matches!(self, QueueStatus::Enabled)
    }
}
