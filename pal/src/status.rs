//! Status codes returned by the native lookups.
//!
//! A status is a plain `u16`. Zero means success, the low codes are
//! parameter problems and the remaining space is split by offset into
//! file-system, I/O and numeric conversion errors.

use std::io::ErrorKind;

pub const OK: u16 = 0;
pub const PARAMETER_IS_NULL: u16 = 1;
pub const STRING_CONVERSION_ERROR: u16 = 2;

pub const FS_ERROR_OFFSET: u16 = 0x1000;
pub const IO_ERROR_OFFSET: u16 = 0x2000;
pub const NUMERIC_CONVERSION_OFFSET: u16 = 0x4000;

pub const IO_NOT_FOUND: u16 = 0;
pub const IO_PERMISSION_DENIED: u16 = 1;
pub const IO_BROKEN_PIPE: u16 = 2;
pub const IO_INVALID_INPUT: u16 = 3;
pub const IO_INVALID_DATA: u16 = 4;
pub const IO_INTERRUPTED: u16 = 5;
pub const IO_UNEXPECTED_EOF: u16 = 6;
pub const IO_TIMED_OUT: u16 = 7;
pub const IO_OTHER: u16 = 64;

/// File-system level failures, reported as `FS_ERROR_OFFSET + code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum FsErrorCode {
    Unknown = 0,
    UserNotFound = 1,
    GroupNotFound = 2,
    OsStringConversion = 3,
}

impl FsErrorCode {
    pub fn from_raw(code: u16) -> Option<Self> {
        match code {
            0 => Some(FsErrorCode::Unknown),
            1 => Some(FsErrorCode::UserNotFound),
            2 => Some(FsErrorCode::GroupNotFound),
            3 => Some(FsErrorCode::OsStringConversion),
            _ => None,
        }
    }
}

impl From<FsErrorCode> for u16 {
    fn from(code: FsErrorCode) -> u16 {
        FS_ERROR_OFFSET + code as u16
    }
}

/// Map an I/O error kind onto its status code.
pub fn io_error(kind: ErrorKind) -> u16 {
    IO_ERROR_OFFSET
        + match kind {
            ErrorKind::NotFound => IO_NOT_FOUND,
            ErrorKind::PermissionDenied => IO_PERMISSION_DENIED,
            ErrorKind::BrokenPipe => IO_BROKEN_PIPE,
            ErrorKind::InvalidInput => IO_INVALID_INPUT,
            ErrorKind::InvalidData => IO_INVALID_DATA,
            ErrorKind::Interrupted => IO_INTERRUPTED,
            ErrorKind::UnexpectedEof => IO_UNEXPECTED_EOF,
            ErrorKind::TimedOut => IO_TIMED_OUT,
            _ => IO_OTHER,
        }
}

/// Inverse of [`io_error`] for the offset-free part of the code.
pub fn io_error_kind(code: u16) -> Option<ErrorKind> {
    match code {
        IO_NOT_FOUND => Some(ErrorKind::NotFound),
        IO_PERMISSION_DENIED => Some(ErrorKind::PermissionDenied),
        IO_BROKEN_PIPE => Some(ErrorKind::BrokenPipe),
        IO_INVALID_INPUT => Some(ErrorKind::InvalidInput),
        IO_INVALID_DATA => Some(ErrorKind::InvalidData),
        IO_INTERRUPTED => Some(ErrorKind::Interrupted),
        IO_UNEXPECTED_EOF => Some(ErrorKind::UnexpectedEof),
        IO_TIMED_OUT => Some(ErrorKind::TimedOut),
        IO_OTHER => Some(ErrorKind::Other),
        _ => None,
    }
}
