use std::ffi::CStr;

use crate::permissions::FileAttributes;
use crate::status::{self, FsErrorCode};

/// Upper bound for user and group names, as reported by `sysconf`.
/// Negative when the platform does not define a limit.
pub fn sys_get_maximum_login_name() -> i32 {
    #[cfg(any(
        target_os = "linux",
        target_os = "android",
        target_os = "macos",
        target_os = "freebsd"
    ))]
    {
        use std::convert::TryFrom;

        let limit = unsafe { libc::sysconf(libc::_SC_LOGIN_NAME_MAX) };
        i32::try_from(limit).unwrap_or(-1)
    }
    #[cfg(not(any(
        target_os = "linux",
        target_os = "android",
        target_os = "macos",
        target_os = "freebsd"
    )))]
    {
        -1
    }
}

/// Write the NUL terminated name of the owning user of `fs_entry`.
pub fn fs_owning_user_name(fs_entry: &CStr, user_name: &mut [u8]) -> u16 {
    if fs_entry.to_bytes().is_empty() || user_name.is_empty() {
        return status::PARAMETER_IS_NULL;
    }

    match FileAttributes::of(fs_entry).and_then(|attributes| user_of(attributes.owner)) {
        Ok(name) => copy_name(&name, user_name),
        Err(code) => code,
    }
}

/// Write the NUL terminated name of the owning group of `fs_entry`.
pub fn fs_owning_group_name(fs_entry: &CStr, group_name: &mut [u8]) -> u16 {
    if fs_entry.to_bytes().is_empty() || group_name.is_empty() {
        return status::PARAMETER_IS_NULL;
    }

    match FileAttributes::of(fs_entry).and_then(|attributes| group_of(attributes.group)) {
        Ok(name) => copy_name(&name, group_name),
        Err(code) => code,
    }
}

#[cfg(unix)]
fn user_of(uid: u32) -> Result<String, u16> {
    use nix::unistd::{Uid, User};

    match User::from_uid(Uid::from_raw(uid)) {
        Ok(Some(user)) => Ok(user.name),
        Ok(None) => Err(FsErrorCode::UserNotFound.into()),
        Err(errno) => Err(status::io_error(std::io::Error::from(errno).kind())),
    }
}

#[cfg(unix)]
fn group_of(gid: u32) -> Result<String, u16> {
    use nix::unistd::{Gid, Group};

    match Group::from_gid(Gid::from_raw(gid)) {
        Ok(Some(group)) => Ok(group.name),
        Ok(None) => Err(FsErrorCode::GroupNotFound.into()),
        Err(errno) => Err(status::io_error(std::io::Error::from(errno).kind())),
    }
}

#[cfg(not(unix))]
fn user_of(_uid: u32) -> Result<String, u16> {
    Err(FsErrorCode::UserNotFound.into())
}

#[cfg(not(unix))]
fn group_of(_gid: u32) -> Result<String, u16> {
    Err(FsErrorCode::GroupNotFound.into())
}

/// Copy `name` plus a terminating NUL into `buffer`.
fn copy_name(name: &str, buffer: &mut [u8]) -> u16 {
    let bytes = name.as_bytes();
    if bytes.contains(&0) || bytes.len() >= buffer.len() {
        return status::STRING_CONVERSION_ERROR;
    }

    buffer[..bytes.len()].copy_from_slice(bytes);
    buffer[bytes.len()] = 0;
    status::OK
}
