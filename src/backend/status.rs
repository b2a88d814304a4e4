//! Classification of the status codes reported by `pal`.

use std::io::ErrorKind;

use pal::status::{self, FsErrorCode};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NativeError {
    #[error("A required parameter was null or empty")]
    ParameterIsNull,
    #[error("String conversion at the native boundary failed")]
    StringConversion,
    #[error("File system error: {}", describe(.0))]
    FileSystem(FsErrorCode),
    #[error("I/O error: {0:?}")]
    Io(ErrorKind),
    #[error("Failed to convert a numeric value internally")]
    NumericConversion,
    #[error("Error code {0:X} is not known")]
    Unrecognized(u16),
}

impl NativeError {
    /// Classify a native status. `None` for success.
    pub fn from_code(code: u16) -> Option<NativeError> {
        let local = code & 0x0FFF;
        let error = match code >> 12 {
            0 => match code {
                status::OK => return None,
                status::PARAMETER_IS_NULL => NativeError::ParameterIsNull,
                status::STRING_CONVERSION_ERROR => NativeError::StringConversion,
                _ => NativeError::Unrecognized(code),
            },
            0x1 => FsErrorCode::from_raw(local)
                .map(NativeError::FileSystem)
                .unwrap_or(NativeError::Unrecognized(code)),
            0x2 => status::io_error_kind(local)
                .map(NativeError::Io)
                .unwrap_or(NativeError::Unrecognized(code)),
            0x4 if local == 0 => NativeError::NumericConversion,
            _ => NativeError::Unrecognized(code),
        };
        Some(error)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            NativeError::Io(ErrorKind::NotFound)
                | NativeError::FileSystem(FsErrorCode::UserNotFound)
                | NativeError::FileSystem(FsErrorCode::GroupNotFound)
        )
    }
}

fn describe(code: &FsErrorCode) -> &'static str {
    match code {
        FsErrorCode::Unknown => "unknown error",
        FsErrorCode::UserNotFound => "no user with the owning uid",
        FsErrorCode::GroupNotFound => "no group with the owning gid",
        FsErrorCode::OsStringConversion => "name is not valid UTF-8",
    }
}
