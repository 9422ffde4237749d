//! Stubbed sign-in, registration and logout.
//!
//! There is no backend. Each operation only decides which toast to show and
//! where to navigate next, so the page components stay thin and the rules can
//! be tested without a renderer.

use crate::error::AppError;
use crate::notice::Notice;
use crate::requests::{LoginRequest, RegisterRequest};

/// Path every unauthenticated entry point resolves to.
pub const ROOT_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";

/// The form operation a result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAction {
    Login,
    Register,
}

impl AuthAction {
    /// Generic toast text for failures that are not validation errors.
    pub fn failure_message(&self) -> &'static str {
        match self {
            AuthAction::Login => "An error occurred during sign in",
            AuthAction::Register => "An error occurred during registration",
        }
    }
}

/// What the UI does after a successful operation.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthSuccess {
    pub notice: Notice,
    /// Absolute path to navigate to.
    pub redirect: &'static str,
}

/// Sign in and land on the selected role's dashboard.
pub fn login(req: &LoginRequest) -> Result<AuthSuccess, AppError> {
    Ok(AuthSuccess {
        notice: Notice::success("Welcome back!")
            .with_description(format!("Signed in as {}", req.role.display_name())),
        redirect: req.role.home_path(),
    })
}

/// Register a new account, then send the user to the sign-in page.
pub fn register(req: &RegisterRequest) -> Result<AuthSuccess, AppError> {
    req.validate()?;
    Ok(AuthSuccess {
        notice: Notice::success("Registration successful! Please log in."),
        redirect: LOGIN_PATH,
    })
}

/// Log out. Nothing is cleared since no session exists.
pub fn logout() -> AuthSuccess {
    AuthSuccess {
        notice: Notice::info("Logged out successfully")
            .with_description("You have been logged out of your account"),
        redirect: ROOT_PATH,
    }
}

/// Toast for a failed operation.
pub fn failure_notice(action: AuthAction, err: &AppError) -> Notice {
    Notice::error(err.user_message(action))
}
