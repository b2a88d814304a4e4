//! Per platform lookups of owner, group and permissions.
//!
//! Every backend answers with sentinels instead of errors: an empty name or
//! an all unknown permission set means the fact could not be determined.

mod adaptable;
mod dummy;
mod native;
pub mod status;
mod windows;

use std::path::Path;

use crate::permission::FileSystemPermissions;

pub use adaptable::{AdaptableBackend, OwnerNameFn, PermissionsFn};
pub use dummy::DummyBackend;
pub use native::{NativeBackend, NativeMethods, PalMethods};
pub use windows::SimpleWindowsBackend;

pub trait Backend: Send + Sync {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Name of the owning user, or an empty string.
    fn resolve_owning_user(&self, path: &Path) -> String;

    /// Name of the owning group, or an empty string.
    fn resolve_owning_group(&self, path: &Path) -> String;

    /// Permissions of `path`. Either fully decoded or entirely unknown.
    fn resolve_permissions(&self, path: &Path) -> FileSystemPermissions;
}
