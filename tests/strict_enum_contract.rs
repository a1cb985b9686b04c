//! Strict enum contract tests.
//!
//! Every enum the crate declares must round-trip its wire values, reject
//! empty and unknown input, and go through the same strict parse in serde.

use proptest::prelude::*;

use connect_models::domain::errors::{
    PropertyValidationExceptionReason, ResourceType, ServiceErrorCode,
};
use connect_models::domain::evaluation::EvaluationStatus;
use connect_models::domain::queue::{QueueStatus, QueueType};
use connect_models::domain::routing::{BehaviorType, Channel};
use connect_models::domain::user::PhoneType;
use connect_models::{InvalidValueError, StrictEnum};

// =============================================================================
// Shared checks
// =============================================================================

fn assert_round_trips<E>()
where
    E: StrictEnum + std::fmt::Debug + PartialEq + std::fmt::Display,
{
    assert!(!E::values().is_empty(), "{} declares no variants", E::NAME);
    for variant in E::values() {
        assert_eq!(E::parse(variant.wire_value()), Ok(*variant));
        assert_eq!(variant.to_string(), variant.wire_value());
    }
}

fn assert_rejects_bad_input<E>()
where
    E: StrictEnum + std::fmt::Debug + PartialEq,
{
    assert_eq!(E::parse(""), Err(InvalidValueError::empty(E::NAME)));
    assert_eq!(E::parse_optional(None), Err(InvalidValueError::empty(E::NAME)));

    let err = E::parse("NOT_A_REAL_VALUE").unwrap_err();
    assert_eq!(err.enum_name(), E::NAME);
    assert_eq!(err.value(), Some("NOT_A_REAL_VALUE"));
}

fn assert_serde_is_strict<E>()
where
    E: StrictEnum
        + std::fmt::Debug
        + PartialEq
        + serde::Serialize
        + serde::de::DeserializeOwned,
{
    for variant in E::values() {
        let json = serde_json::to_string(variant).unwrap();
        assert_eq!(json, format!("\"{}\"", variant.wire_value()));
        let parsed: E = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, *variant);
    }
    assert!(serde_json::from_str::<E>("\"NOT_A_REAL_VALUE\"").is_err());
    assert!(serde_json::from_str::<E>("\"\"").is_err());
}

macro_rules! enum_contract {
    ($($test:ident => $enum:ty),+ $(,)?) => {
        $(
            #[test]
            fn $test() {
                assert_round_trips::<$enum>();
                assert_rejects_bad_input::<$enum>();
                assert_serde_is_strict::<$enum>();
            }
        )+
    };
}

enum_contract! {
    queue_status_contract => QueueStatus,
    queue_type_contract => QueueType,
    channel_contract => Channel,
    behavior_type_contract => BehaviorType,
    phone_type_contract => PhoneType,
    evaluation_status_contract => EvaluationStatus,
    service_error_code_contract => ServiceErrorCode,
    resource_type_contract => ResourceType,
    validation_reason_contract => PropertyValidationExceptionReason,
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Any string that is not an exact wire value is rejected with that string.
    #[test]
    fn arbitrary_strings_parse_only_when_exact(input in ".*") {
        let known = Channel::values().iter().any(|c| c.wire_value() == input);
        match Channel::parse(&input) {
            Ok(channel) => {
                prop_assert!(known);
                prop_assert_eq!(channel.wire_value(), input.as_str());
            }
            Err(err) => {
                prop_assert!(!known);
                if input.is_empty() {
                    prop_assert_eq!(err.value(), None);
                } else {
                    prop_assert_eq!(err.value(), Some(input.as_str()));
                }
            }
        }
    }

    /// Case changes never parse.
    #[test]
    fn lowercased_wire_values_are_rejected(index in 0usize..ServiceErrorCode::values().len()) {
        let code = ServiceErrorCode::values()[index];
        prop_assert!(ServiceErrorCode::parse(&code.wire_value().to_lowercase()).is_err());
    }

    /// Parsing the same input from many threads yields the same variant.
    #[test]
    fn concurrent_parses_agree(index in 0usize..ResourceType::values().len()) {
        let wire = ResourceType::values()[index].wire_value();
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(move || ResourceType::parse(wire)))
            .collect();
        for handle in handles {
            prop_assert_eq!(handle.join().unwrap(), Ok(ResourceType::values()[index]));
        }
    }
}
