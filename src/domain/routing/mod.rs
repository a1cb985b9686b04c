//! Routing profile shapes.

mod channel;
mod profile;

pub use channel::{BehaviorType, Channel};
pub use profile::{
    CreateRoutingProfileRequest, CrossChannelBehavior, MediaConcurrency, RoutingProfile,
    RoutingProfileQueueConfig, RoutingProfileQueueReference,
};
