use std::fmt;
use std::path::Path;
use std::sync::Arc;

use super::Backend;
use crate::error::FsError;
use crate::permission::FileSystemPermissions;

/// Caller supplied lookup of an owning user or group name.
pub type OwnerNameFn = Arc<dyn Fn(&Path) -> String + Send + Sync>;
/// Caller supplied lookup of the permissions of an entry.
pub type PermissionsFn = Arc<dyn Fn(&Path) -> FileSystemPermissions + Send + Sync>;

/// Backend built from three caller supplied functions.
pub struct AdaptableBackend {
    owning_user: OwnerNameFn,
    owning_group: OwnerNameFn,
    permissions: PermissionsFn,
}

impl AdaptableBackend {
    pub fn new(
        owning_user: OwnerNameFn,
        owning_group: OwnerNameFn,
        permissions: PermissionsFn,
    ) -> Self {
        AdaptableBackend {
            owning_user,
            owning_group,
            permissions,
        }
    }

    /// Build from optional parts; every part is required.
    pub fn from_parts(
        owning_user: Option<OwnerNameFn>,
        owning_group: Option<OwnerNameFn>,
        permissions: Option<PermissionsFn>,
    ) -> Result<Self, FsError> {
        Ok(Self::new(
            owning_user.ok_or(FsError::BackendConfiguration("owning user function is missing"))?,
            owning_group.ok_or(FsError::BackendConfiguration("owning group function is missing"))?,
            permissions.ok_or(FsError::BackendConfiguration("permissions function is missing"))?,
        ))
    }
}

impl fmt::Debug for AdaptableBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdaptableBackend").finish()
    }
}

impl Backend for AdaptableBackend {
    fn name(&self) -> &'static str {
        "adaptable"
    }

    fn resolve_owning_user(&self, path: &Path) -> String {
        (self.owning_user)(path)
    }

    fn resolve_owning_group(&self, path: &Path) -> String {
        (self.owning_group)(path)
    }

    fn resolve_permissions(&self, path: &Path) -> FileSystemPermissions {
        let permissions = (self.permissions)(path);
        if permissions.is_valid() {
            permissions
        } else {
            log::warn!(
                "Discarding invalid permissions {:?} supplied for {}",
                permissions,
                path.display()
            );
            FileSystemPermissions::unknown()
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::permission::Permission;

    fn name(value: &'static str) -> OwnerNameFn {
        Arc::new(move |_: &Path| value.to_string())
    }

    fn fixed(permissions: FileSystemPermissions) -> PermissionsFn {
        Arc::new(move |_: &Path| permissions)
    }

    #[test]
    fn forwards_to_functions() {
        let permissions =
            FileSystemPermissions::new(Permission::READ, Permission::NONE, Permission::NONE);
        let backend = AdaptableBackend::new(name("alice"), name("staff"), fixed(permissions));
        let path = Path::new("/some/file");
        assert_eq!(backend.resolve_owning_user(path), "alice");
        assert_eq!(backend.resolve_owning_group(path), "staff");
        assert_eq!(backend.resolve_permissions(path), permissions);
    }

    #[test]
    fn functions_receive_the_path() {
        let echo: OwnerNameFn = Arc::new(|path: &Path| path.display().to_string());
        let backend =
            AdaptableBackend::new(echo.clone(), echo, fixed(FileSystemPermissions::unknown()));
        assert_eq!(backend.resolve_owning_user(Path::new("/tmp/x")), "/tmp/x");
    }

    #[test]
    fn missing_part_fails() {
        let result = AdaptableBackend::from_parts(
            Some(name("alice")),
            None,
            Some(fixed(FileSystemPermissions::unknown())),
        );
        assert_eq!(
            result.unwrap_err(),
            FsError::BackendConfiguration("owning group function is missing")
        );
    }

    #[test]
    fn invalid_permissions_become_unknown() {
        let broken = FileSystemPermissions::new(
            Permission::READ,
            Permission::UNKNOWN | Permission::WRITE,
            Permission::NONE,
        );
        let backend = AdaptableBackend::new(name("alice"), name("staff"), fixed(broken));
        assert_eq!(
            backend.resolve_permissions(Path::new("/some/file")),
            FileSystemPermissions::unknown()
        );
    }
}
