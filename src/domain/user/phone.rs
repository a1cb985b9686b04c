//! Agent phone settings.

use crate::{strict_enum, value_type};

strict_enum! {
    /// How an agent takes calls.
    pub enum PhoneType {
        SoftPhone = "SOFT_PHONE",
        DeskPhone = "DESK_PHONE",
    }
}

value_type! {
    pub struct UserPhoneConfig {
        phone_type: scalar(PhoneType) = "PhoneType",
        auto_accept: scalar(bool) = "AutoAccept",
        /// After-contact work limit in seconds.
        after_contact_work_time_limit: scalar(i32) = "AfterContactWorkTimeLimit",
        desk_phone_number: scalar(String) = "DeskPhoneNumber",
    }
}
