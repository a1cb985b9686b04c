//! User creation shapes.

use super::UserPhoneConfig;
use crate::value_type;

value_type! {
    /// Personal details of a user.
    pub struct UserIdentityInfo {
        first_name: sensitive(String) = "FirstName",
        last_name: sensitive(String) = "LastName",
        email: scalar(String) = "Email",
    }
}

value_type! {
    pub struct CreateUserRequest {
        username: scalar(String) = "Username",
        password: sensitive(String) = "Password",
        identity_info: scalar(UserIdentityInfo) = "IdentityInfo",
        phone_config: scalar(UserPhoneConfig) = "PhoneConfig",
        directory_user_id: scalar(String) = "DirectoryUserId",
        security_profile_ids: list(String) = "SecurityProfileIds",
        routing_profile_id: scalar(String) = "RoutingProfileId",
        hierarchy_group_id: scalar(String) = "HierarchyGroupId",
        instance_id: scalar(String) = "InstanceId",
        tags: map(String) = "Tags",
    }
}

value_type! {
    pub struct CreateUserResponse {
        user_id: scalar(String) = "UserId",
        user_arn: scalar(String) = "UserArn",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::REDACTED;

    fn identity() -> UserIdentityInfo {
        let mut info = UserIdentityInfo::new();
        info.with_first_name("Ada")
            .with_last_name("Lovelace")
            .with_email("ada@example.com");
        info
    }

    #[test]
    fn identity_redacts_names_but_keeps_email() {
        let rendered = identity().to_string();
        assert_eq!(
            rendered,
            format!("{{FirstName: {r},LastName: {r},Email: ada@example.com}}", r = REDACTED)
        );
        assert!(!rendered.contains("Ada"));
    }

    #[test]
    fn password_is_redacted_in_nested_rendering() {
        let mut request = CreateUserRequest::new();
        request
            .with_username("ada")
            .with_password("correct horse battery staple")
            .with_identity_info(identity());

        let rendered = request.to_string();
        assert!(!rendered.contains("correct horse"));
        assert!(!rendered.contains("Lovelace"));
        assert!(rendered.starts_with(&format!("{{Username: ada,Password: {},", REDACTED)));
    }

    #[test]
    fn sensitive_fields_still_take_part_in_equality() {
        let mut left = CreateUserRequest::new();
        left.with_password("one");
        let mut right = CreateUserRequest::new();
        right.with_password("two");

        assert_ne!(left, right);
        assert_eq!(left.to_string(), right.to_string());
    }

    #[test]
    fn sensitive_fields_still_serialize() {
        let mut request = CreateUserRequest::new();
        request.with_password("secret");
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"Password":"secret"}"#);
    }

    #[test]
    fn security_profiles_append_lazily() {
        let mut request = CreateUserRequest::new();
        assert_eq!(request.security_profile_ids(), None);
        request.append_security_profile_ids(vec!["sp-1".to_string(), "sp-2".to_string()]);
        assert_eq!(request.security_profile_ids().map(<[String]>::len), Some(2));
    }
}
