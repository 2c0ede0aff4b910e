use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};
use validator::Validate;

use crate::error::{RegistrationError, RegistrationResult};

/// Placeholder option of the role selector
pub const ROLE_PLACEHOLDER: &str = "Selecione un rol";

/// Account privilege level, serialized the way the backend expects it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr)]
pub enum Role {
    #[serde(rename = "usuario")]
    #[strum(serialize = "usuario")]
    User,
    #[serde(rename = "admin")]
    #[strum(serialize = "admin")]
    Admin,
}

impl Role {
    /// Map the raw value of the role selector.
    ///
    /// The empty string and the placeholder mean nothing was picked, `"1"` is a
    /// standard user and every other value is an administrator.
    pub fn from_select_value(value: &str) -> Option<Self> {
        match value {
            "" | ROLE_PLACEHOLDER => None,
            "1" => Some(Role::User),
            _ => Some(Role::Admin),
        }
    }
}

/// Snapshot of the registration form fields, taken when the user submits
#[derive(Clone, Default, PartialEq, Eq, Validate)]
pub struct RegistrationInput {
    #[validate(required)]
    pub role: Option<Role>,
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1), must_match(other = "repeat_password"))]
    pub password: String,
    #[validate(length(min = 1))]
    pub repeat_password: String,
}

impl RegistrationInput {
    pub fn new(
        role: &str,
        email: impl Into<String>,
        password: impl Into<String>,
        repeat_password: impl Into<String>,
    ) -> Self {
        Self {
            role: Role::from_select_value(role),
            email: email.into(),
            password: password.into(),
            repeat_password: repeat_password.into(),
        }
    }
}

impl std::fmt::Debug for RegistrationInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationInput")
            .field("role", &self.role)
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .field("repeat_password", &"[redacted]")
            .finish()
    }
}

/// Body of `POST /api/registrar`
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationRequest {
    pub email: String,
    pub password: String,
    #[serde(rename = "rol")]
    pub role: Role,
}

impl std::fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .field("rol", &self.role)
            .finish()
    }
}

/// User record echoed back by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub id: i64,
    pub email: String,
    pub rol: String,
}

/// Success envelope used by every backend endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: T,
}

/// Terminal result of one registration request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Success { message: String, user: RegisteredUser },
    Failure { message: String },
}

impl From<RegistrationResult<ApiResponse<RegisteredUser>>> for RegistrationOutcome {
    fn from(result: RegistrationResult<ApiResponse<RegisteredUser>>) -> Self {
        match result {
            Ok(response) => RegistrationOutcome::Success {
                message: response.message,
                user: response.data,
            },
            Err(err) => RegistrationOutcome::Failure {
                message: err.user_message(),
            },
        }
    }
}

impl From<RegistrationError> for RegistrationOutcome {
    fn from(err: RegistrationError) -> Self {
        RegistrationOutcome::Failure {
            message: err.user_message(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FALLBACK_MESSAGE;
    use reqwest::StatusCode;
    use serde_json::json;

    #[test]
    fn test_role_from_select_value() {
        assert_eq!(Role::from_select_value(""), None);
        assert_eq!(Role::from_select_value(ROLE_PLACEHOLDER), None);
        assert_eq!(Role::from_select_value("1"), Some(Role::User));
        assert_eq!(Role::from_select_value("2"), Some(Role::Admin));
        assert_eq!(Role::from_select_value("3"), Some(Role::Admin));
    }

    #[test]
    fn test_role_wire_names() {
        assert_eq!(Role::User.to_string(), "usuario");
        assert_eq!(Role::Admin.as_ref(), "admin");
        assert_eq!(serde_json::to_value(Role::User).unwrap(), json!("usuario"));
    }

    #[test]
    fn test_request_serializes_role_as_rol() {
        let request = RegistrationRequest {
            email: "x@y.com".to_string(),
            password: "pw1".to_string(),
            role: Role::Admin,
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"email": "x@y.com", "password": "pw1", "rol": "admin"})
        );
    }

    #[test]
    fn test_debug_output_hides_passwords() {
        let input = RegistrationInput::new("1", "a@b.com", "hunter2", "hunter2");
        let rendered = format!("{:?}", input);
        assert!(rendered.contains("a@b.com"));
        assert!(!rendered.contains("hunter2"));

        let request = RegistrationRequest {
            email: "a@b.com".to_string(),
            password: "hunter2".to_string(),
            role: Role::User,
        };
        assert!(!format!("{:?}", request).contains("hunter2"));
    }

    #[test]
    fn test_success_envelope_deserializes() {
        let body = json!({
            "message": "Usuario registrado",
            "data": {"id": 1, "email": "a@b.com", "rol": "usuario"}
        });
        let response: ApiResponse<RegisteredUser> = serde_json::from_value(body).unwrap();

        assert_eq!(response.message, "Usuario registrado");
        assert_eq!(response.data.id, 1);
        assert_eq!(response.data.rol, "usuario");
    }

    #[test]
    fn test_outcome_from_ok() {
        let result: RegistrationResult<ApiResponse<RegisteredUser>> = Ok(ApiResponse {
            message: "Usuario registrado".to_string(),
            data: RegisteredUser {
                id: 1,
                email: "a@b.com".to_string(),
                rol: "usuario".to_string(),
            },
        });
        let outcome = RegistrationOutcome::from(result);

        assert!(matches!(
            outcome,
            RegistrationOutcome::Success { ref message, ref user }
                if message == "Usuario registrado" && user.id == 1
        ));
    }

    #[test]
    fn test_outcome_from_err_without_message() {
        let outcome = RegistrationOutcome::from(RegistrationError::Rejected {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: None,
        });

        assert_eq!(
            outcome,
            RegistrationOutcome::Failure {
                message: FALLBACK_MESSAGE.to_string()
            }
        );
    }
}
