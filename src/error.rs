/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use reqwest::StatusCode;
use std::fmt;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// Transport level failure reported by reqwest
    Network(reqwest::Error),
    /// Local filesystem failure
    Io(std::io::Error),
    /// JSON encoding or decoding failure
    Json(serde_json::Error),
    /// CSV writer failure
    Csv(csv::Error),
    /// Zip archive could not be read or extracted
    Zip(zip::result::ZipError),
    /// Server answered with a status the caller does not handle
    Unexpected(StatusCode),
    /// The authentication endpoint rejected the credentials
    LoginFailed(StatusCode),
    /// An authenticated request was attempted before `login()` succeeded
    NotLoggedIn,
    /// Project id is not in the first page of the project list
    ProjectNotFound(String),
    /// A paginated response did not carry a usable `x-total-count` header
    MissingTotalCount,
    /// Response body did not have the expected shape
    Deserialization(String),
    /// Caller supplied an unusable argument
    InvalidInput(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Csv(e) => write!(f, "csv error: {e}"),
            AppError::Zip(e) => write!(f, "zip error: {e}"),
            AppError::Unexpected(s) => write!(f, "unexpected http status: {s}"),
            AppError::LoginFailed(s) => write!(f, "login request returned status code {s}"),
            AppError::NotLoggedIn => write!(f, "must call 'login()' first"),
            AppError::ProjectNotFound(id) => write!(f, "project not found: {id}"),
            AppError::MissingTotalCount => write!(f, "missing x-total-count header"),
            AppError::Deserialization(s) => write!(f, "deserialization error: {s}"),
            AppError::InvalidInput(s) => write!(f, "invalid input: {s}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Io(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Csv(e) => Some(e),
            AppError::Zip(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<csv::Error> for AppError {
    fn from(e: csv::Error) -> Self {
        AppError::Csv(e)
    }
}

impl From<zip::result::ZipError> for AppError {
    fn from(e: zip::result::ZipError) -> Self {
        AppError::Zip(e)
    }
}
