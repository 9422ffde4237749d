use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::UserRole;

/// Sign-in form contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    /// Dashboard to open after sign-in.
    #[serde(default)]
    pub role: UserRole,
}

/// Registration form contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterRequest {
    /// Client-side checks run before the (stubbed) registration call.
    ///
    /// Required-field and email-format checks are left to the browser via
    /// the `required` and `type="email"` input attributes.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.password != self.confirm_password {
            return Err(AppError::field(
                "confirm_password",
                "Passwords do not match",
            ));
        }
        Ok(())
    }
}
