//! Service exceptions.
//!
//! Each modeled exception is a variant of [`ServiceError`] carrying the structured
//! fields the service sends with it. Codes the client does not model are kept as
//! [`ServiceError::Unmodeled`] so the raw code is never lost.

use std::error::Error;
use std::fmt;

use super::foundation::StrictEnum;
use crate::{strict_enum, value_type};

strict_enum! {
    /// Error codes of the modeled exceptions.
    pub enum ServiceErrorCode {
        AccessDenied = "AccessDeniedException",
        InvalidRequest = "InvalidRequestException",
        InvalidParameter = "InvalidParameterException",
        InvalidContactFlow = "InvalidContactFlowException",
        ResourceNotFound = "ResourceNotFoundException",
        ResourceInUse = "ResourceInUseException",
        ResourceConflict = "ResourceConflictException",
        DuplicateResource = "DuplicateResourceException",
        LimitExceeded = "LimitExceededException",
        ServiceQuotaExceeded = "ServiceQuotaExceededException",
        Throttling = "ThrottlingException",
        InternalService = "InternalServiceException",
        PropertyValidation = "PropertyValidationException",
    }
}

strict_enum! {
    /// Kind of resource named by a `ResourceInUseException`.
    pub enum ResourceType {
        Contact = "CONTACT",
        ContactFlow = "CONTACT_FLOW",
        Instance = "INSTANCE",
        Participant = "PARTICIPANT",
        HierarchyLevel = "HIERARCHY_LEVEL",
        HierarchyGroup = "HIERARCHY_GROUP",
        User = "USER",
        PhoneNumber = "PHONE_NUMBER",
    }
}

strict_enum! {
    pub enum PropertyValidationExceptionReason {
        InvalidFormat = "INVALID_FORMAT",
        UniqueConstraintViolated = "UNIQUE_CONSTRAINT_VIOLATED",
        ReferencedResourceNotFound = "REFERENCED_RESOURCE_NOT_FOUND",
        ResourceNameAlreadyExists = "RESOURCE_NAME_ALREADY_EXISTS",
        RequiredPropertyMissing = "REQUIRED_PROPERTY_MISSING",
        NotSupported = "NOT_SUPPORTED",
    }
}

value_type! {
    /// One problem found in a flow definition.
    pub struct ProblemDetail {
        message: scalar(String) = "message",
    }
}

value_type! {
    /// One property that failed validation.
    pub struct PropertyValidationExceptionProperty {
        property_path: scalar(String) = "PropertyPath",
        reason: scalar(PropertyValidationExceptionReason) = "Reason",
        message: scalar(String) = "Message",
    }
}

/// A modeled (or unmodeled) exception returned by the service.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceError {
    AccessDenied {
        message: Option<String>,
    },
    InvalidRequest {
        message: Option<String>,
    },
    InvalidParameter {
        message: Option<String>,
    },
    InvalidContactFlow {
        message: Option<String>,
        problems: Option<Vec<ProblemDetail>>,
    },
    ResourceNotFound {
        message: Option<String>,
    },
    ResourceInUse {
        message: Option<String>,
        resource_type: Option<ResourceType>,
        resource_id: Option<String>,
    },
    ResourceConflict {
        message: Option<String>,
    },
    DuplicateResource {
        message: Option<String>,
    },
    LimitExceeded {
        message: Option<String>,
    },
    ServiceQuotaExceeded {
        message: Option<String>,
    },
    Throttling {
        message: Option<String>,
    },
    InternalService {
        message: Option<String>,
    },
    PropertyValidation {
        message: Option<String>,
        property_list: Option<Vec<PropertyValidationExceptionProperty>>,
    },
    /// An error code outside the modeled set.
    Unmodeled {
        code: String,
        message: Option<String>,
    },
}

impl ServiceError {
    /// Creates the variant for a modeled code with only a message set.
    pub fn new(code: ServiceErrorCode, message: Option<String>) -> Self {
        match code {
            ServiceErrorCode::AccessDenied => ServiceError::AccessDenied { message },
            ServiceErrorCode::InvalidRequest => ServiceError::InvalidRequest { message },
            ServiceErrorCode::InvalidParameter => ServiceError::InvalidParameter { message },
            ServiceErrorCode::InvalidContactFlow => ServiceError::InvalidContactFlow {
                message,
                problems: None,
            },
            ServiceErrorCode::ResourceNotFound => ServiceError::ResourceNotFound { message },
            ServiceErrorCode::ResourceInUse => ServiceError::ResourceInUse {
                message,
                resource_type: None,
                resource_id: None,
            },
            ServiceErrorCode::ResourceConflict => ServiceError::ResourceConflict { message },
            ServiceErrorCode::DuplicateResource => ServiceError::DuplicateResource { message },
            ServiceErrorCode::LimitExceeded => ServiceError::LimitExceeded { message },
            ServiceErrorCode::ServiceQuotaExceeded => {
                ServiceError::ServiceQuotaExceeded { message }
            }
            ServiceErrorCode::Throttling => ServiceError::Throttling { message },
            ServiceErrorCode::InternalService => ServiceError::InternalService { message },
            ServiceErrorCode::PropertyValidation => ServiceError::PropertyValidation {
                message,
                property_list: None,
            },
        }
    }

    /// Creates an error from a raw error code.
    ///
    /// Codes outside the modeled set become [`ServiceError::Unmodeled`].
    pub fn from_code(code: &str, message: Option<String>) -> Self {
        match ServiceErrorCode::parse(code) {
            Ok(known) => Self::new(known, message),
            Err(_) => {
                tracing::debug!(code, "service returned an unmodeled error code");
                ServiceError::Unmodeled {
                    code: code.to_string(),
                    message,
                }
            }
        }
    }

    /// Typed error code; `None` for unmodeled errors.
    pub fn error_code(&self) -> Option<ServiceErrorCode> {
        let code = match self {
            ServiceError::AccessDenied { .. } => ServiceErrorCode::AccessDenied,
            ServiceError::InvalidRequest { .. } => ServiceErrorCode::InvalidRequest,
            ServiceError::InvalidParameter { .. } => ServiceErrorCode::InvalidParameter,
            ServiceError::InvalidContactFlow { .. } => ServiceErrorCode::InvalidContactFlow,
            ServiceError::ResourceNotFound { .. } => ServiceErrorCode::ResourceNotFound,
            ServiceError::ResourceInUse { .. } => ServiceErrorCode::ResourceInUse,
            ServiceError::ResourceConflict { .. } => ServiceErrorCode::ResourceConflict,
            ServiceError::DuplicateResource { .. } => ServiceErrorCode::DuplicateResource,
            ServiceError::LimitExceeded { .. } => ServiceErrorCode::LimitExceeded,
            ServiceError::ServiceQuotaExceeded { .. } => ServiceErrorCode::ServiceQuotaExceeded,
            ServiceError::Throttling { .. } => ServiceErrorCode::Throttling,
            ServiceError::InternalService { .. } => ServiceErrorCode::InternalService,
            ServiceError::PropertyValidation { .. } => ServiceErrorCode::PropertyValidation,
            ServiceError::Unmodeled { .. } => return None,
        };
        Some(code)
    }

    /// The wire error code, modeled or not.
    pub fn code(&self) -> &str {
        match self {
            ServiceError::Unmodeled { code, .. } => code,
            _ => self.error_code().map_or("", |code| code.as_str()),
        }
    }

    /// The message sent with the error, if any.
    pub fn message(&self) -> Option<&str> {
        let message = match self {
            ServiceError::AccessDenied { message }
            | ServiceError::InvalidRequest { message }
            | ServiceError::InvalidParameter { message }
            | ServiceError::InvalidContactFlow { message, .. }
            | ServiceError::ResourceNotFound { message }
            | ServiceError::ResourceInUse { message, .. }
            | ServiceError::ResourceConflict { message }
            | ServiceError::DuplicateResource { message }
            | ServiceError::LimitExceeded { message }
            | ServiceError::ServiceQuotaExceeded { message }
            | ServiceError::Throttling { message }
            | ServiceError::InternalService { message }
            | ServiceError::PropertyValidation { message, .. }
            | ServiceError::Unmodeled { message, .. } => message,
        };
        message.as_deref()
    }

    /// HTTP status the service sends with this error; `None` for unmodeled errors.
    pub fn http_status(&self) -> Option<u16> {
        let status = match self.error_code()? {
            ServiceErrorCode::AccessDenied => 403,
            ServiceErrorCode::InvalidRequest
            | ServiceErrorCode::InvalidParameter
            | ServiceErrorCode::InvalidContactFlow
            | ServiceErrorCode::PropertyValidation => 400,
            ServiceErrorCode::ResourceNotFound => 404,
            ServiceErrorCode::ResourceInUse
            | ServiceErrorCode::ResourceConflict
            | ServiceErrorCode::DuplicateResource => 409,
            ServiceErrorCode::ServiceQuotaExceeded => 402,
            ServiceErrorCode::LimitExceeded | ServiceErrorCode::Throttling => 429,
            ServiceErrorCode::InternalService => 500,
        };
        Some(status)
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => write!(f, "{}: {}", self.code(), message),
            None => write!(f, "{}", self.code()),
        }
    }
}

impl Error for ServiceError {}
