use crate::permission::FileSystemPermissions;

/// Owner, group and permissions of a file system entry.
///
/// The default value (empty names, unknown permissions) stands for an entry
/// that does not exist or could not be inspected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSystemAttributes {
    owning_user: String,
    owning_group: String,
    permissions: FileSystemPermissions,
}

impl FileSystemAttributes {
    pub fn new(
        owning_user: String,
        owning_group: String,
        permissions: FileSystemPermissions,
    ) -> Self {
        FileSystemAttributes {
            owning_user,
            owning_group,
            permissions,
        }
    }

    /// Name of the owning user, empty if unknown.
    pub fn owning_user(&self) -> &str {
        &self.owning_user
    }

    /// Name of the owning group, empty if unknown.
    pub fn owning_group(&self) -> &str {
        &self.owning_group
    }

    pub fn permissions(&self) -> FileSystemPermissions {
        self.permissions
    }
}
