//! User-facing messages

use crate::api::ApiError;
use crate::domain::ErrorCode;

pub const UNEXPECTED: &str = "Unexpected error occurred. Please try again later!";
pub const WRONG_CREDENTIALS: &str = "Wrong username and/or password.";
pub const USER_EXISTS: &str = "User already exists. Please login!";

pub const SESSION_EXPIRED: &str = "Session timeout. You have been logged out";
pub const INCORRECT_FORMAT: &str = "Incorrect format!";
pub const FETCH_FAILED: &str = "An error occurred while fetching items";
pub const LIST_EMPTY: &str = "Nothing in favourites - submit something!";
pub const ALREADY_FAVOURITE: &str = "Item already in favourites, find something else!";
pub const ADD_FAILED: &str = "Something went wrong, please try again later!";
pub const ADDED: &str = "Added to favourites!";
pub const REMOVED: &str = "Removed from favourites.";

/// Which auth form a failure came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAction {
    Login,
    Signup,
}

/// Message shown under the login / signup form
pub fn auth_failure(action: AuthAction, err: &ApiError) -> &'static str {
    let code = match err {
        ApiError::Rejected(code) => *code,
        _ => return UNEXPECTED,
    };
    match (action, code) {
        (AuthAction::Login, c) if c.is_credential_error() => WRONG_CREDENTIALS,
        (AuthAction::Signup, ErrorCode::UserAlreadyExists) => USER_EXISTS,
        (AuthAction::Signup, ErrorCode::WrongPassword) => WRONG_CREDENTIALS,
        _ => UNEXPECTED,
    }
}
