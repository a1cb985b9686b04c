//! User account shapes.
//!
//! Names and passwords are declared `sensitive` and never appear in rendered output.

mod account;
mod phone;

pub use account::{CreateUserRequest, CreateUserResponse, UserIdentityInfo};
pub use phone::{PhoneType, UserPhoneConfig};
