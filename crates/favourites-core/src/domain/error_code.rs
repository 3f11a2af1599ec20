//! Wire Error Codes
//!
//! Every response body carries an integer `errorCode`. `-1` means success;
//! the known failure codes are listed below, everything else is `Other`.

use std::fmt;

/// `errorCode` value signalling success
pub const SUCCESS_CODE: i32 = -1;

const ITEM_ALREADY_FAVOURITE: i32 = 340011;
const USER_ALREADY_EXISTS: i32 = 240011;
const USER_DOES_NOT_EXIST: i32 = 240012;
const WRONG_PASSWORD: i32 = 240013;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    ItemAlreadyFavourite,
    UserAlreadyExists,
    UserDoesNotExist,
    WrongPassword,
    /// The body had no `errorCode` field at all
    Missing,
    Other(i32),
}

impl ErrorCode {
    /// Translate the wire field into success or a failure code
    pub fn check(raw: Option<i32>) -> Result<(), ErrorCode> {
        match raw {
            Some(SUCCESS_CODE) => Ok(()),
            Some(code) => Err(Self::from_code(code)),
            None => Err(ErrorCode::Missing),
        }
    }

    pub fn from_code(code: i32) -> Self {
        match code {
            ITEM_ALREADY_FAVOURITE => ErrorCode::ItemAlreadyFavourite,
            USER_ALREADY_EXISTS => ErrorCode::UserAlreadyExists,
            USER_DOES_NOT_EXIST => ErrorCode::UserDoesNotExist,
            WRONG_PASSWORD => ErrorCode::WrongPassword,
            other => ErrorCode::Other(other),
        }
    }

    pub fn code(&self) -> Option<i32> {
        match self {
            ErrorCode::ItemAlreadyFavourite => Some(ITEM_ALREADY_FAVOURITE),
            ErrorCode::UserAlreadyExists => Some(USER_ALREADY_EXISTS),
            ErrorCode::UserDoesNotExist => Some(USER_DOES_NOT_EXIST),
            ErrorCode::WrongPassword => Some(WRONG_PASSWORD),
            ErrorCode::Missing => None,
            ErrorCode::Other(code) => Some(*code),
        }
    }

    /// Codes in the invalid-credential family
    pub fn is_credential_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::UserAlreadyExists | ErrorCode::UserDoesNotExist | ErrorCode::WrongPassword
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code() {
            Some(code) => write!(f, "{}", code),
            None => write!(f, "missing"),
        }
    }
}
