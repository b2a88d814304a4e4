use std::convert::TryFrom;
use std::ffi::{CStr, CString};
use std::path::Path;
use std::sync::OnceLock;

use super::status::NativeError;
use super::Backend;
use crate::permission::FileSystemPermissions;

/// Used when the platform does not report a login name limit.
const DEFAULT_NAME_LENGTH: usize = 256;

/// Login name limit of this process, shared by every [`PalMethods`].
static LOGIN_NAME_LIMIT: OnceLock<i32> = OnceLock::new();

/// Run `query` the first time `cache` is read, answer from `cache` after.
fn memoized_limit<F>(cache: &OnceLock<i32>, query: F) -> i32
where
    F: FnOnce() -> i32,
{
    *cache.get_or_init(query)
}

/// The raw lookups a [`NativeBackend`] is built on.
///
/// Each lookup returns a status code (`0` on success, see
/// [`pal::status`]) and writes its answer into the out parameter.
pub trait NativeMethods: Send + Sync {
    fn maximum_login_name(&self) -> i32;
    fn owning_user_name(&self, fs_entry: &CStr, user_name: &mut [u8]) -> u16;
    fn owning_group_name(&self, fs_entry: &CStr, group_name: &mut [u8]) -> u16;
    fn permissions(&self, fs_entry: &CStr, permission_set: &mut u16) -> u16;
}

/// [`NativeMethods`] backed by the `pal` crate.
///
/// The login name limit is asked from the platform once per process.
#[derive(Debug, Default, Clone, Copy)]
pub struct PalMethods;

impl NativeMethods for PalMethods {
    fn maximum_login_name(&self) -> i32 {
        memoized_limit(&LOGIN_NAME_LIMIT, pal::sys_get_maximum_login_name)
    }

    fn owning_user_name(&self, fs_entry: &CStr, user_name: &mut [u8]) -> u16 {
        pal::fs_owning_user_name(fs_entry, user_name)
    }

    fn owning_group_name(&self, fs_entry: &CStr, group_name: &mut [u8]) -> u16 {
        pal::fs_owning_group_name(fs_entry, group_name)
    }

    fn permissions(&self, fs_entry: &CStr, permission_set: &mut u16) -> u16 {
        pal::fs_permissions(fs_entry, permission_set)
    }
}

/// Backend for POSIX platforms, on top of the native lookups.
#[derive(Debug, Default)]
pub struct NativeBackend<M: NativeMethods = PalMethods> {
    methods: M,
    // Buffer size for names, including the NUL. Queried once.
    name_buffer_len: OnceLock<usize>,
}

impl NativeBackend<PalMethods> {
    pub fn new() -> Self {
        Self::with_methods(PalMethods)
    }
}

impl<M: NativeMethods> NativeBackend<M> {
    pub fn with_methods(methods: M) -> Self {
        NativeBackend {
            methods,
            name_buffer_len: OnceLock::new(),
        }
    }

    fn name_buffer_len(&self) -> usize {
        *self.name_buffer_len.get_or_init(|| {
            let limit = self.methods.maximum_login_name();
            let length = usize::try_from(limit)
                .ok()
                .filter(|length| *length > 0)
                .unwrap_or(DEFAULT_NAME_LENGTH);
            log::debug!("Login name limit {} -> name buffer of {} bytes", limit, length + 1);
            length + 1
        })
    }

    fn lookup_name<F>(&self, path: &Path, what: &str, lookup: F) -> String
    where
        F: Fn(&M, &CStr, &mut [u8]) -> u16,
    {
        let fs_entry = match c_path(path) {
            Some(fs_entry) => fs_entry,
            None => {
                log::warn!("Cannot pass {} to the native {} lookup", path.display(), what);
                return String::new();
            }
        };

        let mut buffer = vec![0u8; self.name_buffer_len()];
        let code = lookup(&self.methods, &fs_entry, &mut buffer);
        if let Some(error) = NativeError::from_code(code) {
            report(&error, format_args!("Cannot resolve {} of {}", what, path.display()));
            return String::new();
        }

        let end = buffer.iter().position(|b| *b == 0).unwrap_or(buffer.len());
        buffer.truncate(end);
        String::from_utf8(buffer).unwrap_or_else(|e| {
            log::warn!("{} of {} is not valid UTF-8: {}", what, path.display(), e);
            String::new()
        })
    }
}

impl<M: NativeMethods> Backend for NativeBackend<M> {
    fn name(&self) -> &'static str {
        "native"
    }

    fn resolve_owning_user(&self, path: &Path) -> String {
        self.lookup_name(path, "owning user", |methods, fs_entry, buffer| {
            methods.owning_user_name(fs_entry, buffer)
        })
    }

    fn resolve_owning_group(&self, path: &Path) -> String {
        self.lookup_name(path, "owning group", |methods, fs_entry, buffer| {
            methods.owning_group_name(fs_entry, buffer)
        })
    }

    fn resolve_permissions(&self, path: &Path) -> FileSystemPermissions {
        let fs_entry = match c_path(path) {
            Some(fs_entry) => fs_entry,
            None => {
                log::warn!("Cannot pass {} to the native permission lookup", path.display());
                return FileSystemPermissions::unknown();
            }
        };

        let mut word = 0u16;
        let code = self.methods.permissions(&fs_entry, &mut word);
        if let Some(error) = NativeError::from_code(code) {
            report(&error, format_args!("Cannot resolve permissions of {}", path.display()));
            return FileSystemPermissions::unknown();
        }

        FileSystemPermissions::decode_word(word).unwrap_or_else(|e| {
            log::warn!("Permissions of {}: {}", path.display(), e);
            FileSystemPermissions::unknown()
        })
    }
}

/// Log a failed lookup. Missing entries and ids without a name go to debug.
fn report(error: &NativeError, context: std::fmt::Arguments<'_>) {
    if error.is_not_found() {
        log::debug!("{}: {}", context, error);
    } else {
        log::warn!("{}: {}", context, error);
    }
}

fn c_path(path: &Path) -> Option<CString> {
    path.to_str().and_then(|path| CString::new(path).ok())
}
