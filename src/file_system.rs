//! Owner, group and permission queries for paths.

use std::path::Path;
use std::sync::{Arc, OnceLock};

use crate::attributes::FileSystemAttributes;
use crate::backend::Backend;
use crate::error::FsError;
use crate::factory::BackendFactory;
use crate::permission::{FileSystemPermissions, Permission};
use crate::platform::{PlatformOracle, RuntimePlatform};
use crate::settings::BackendSettings;

/// Entry point for attribute queries.
///
/// The backend is chosen from `settings` on the first query that reaches a
/// backend and kept for the lifetime of this value. Replacing a backend in
/// the settings afterwards only affects `FileSystem`s created later.
pub struct FileSystem {
    settings: Arc<BackendSettings>,
    oracle: Arc<dyn PlatformOracle>,
    backend: OnceLock<Arc<dyn Backend>>,
}

impl FileSystem {
    pub fn new(settings: Arc<BackendSettings>) -> Self {
        Self::with_oracle(settings, Arc::new(RuntimePlatform))
    }

    pub fn with_oracle(settings: Arc<BackendSettings>, oracle: Arc<dyn PlatformOracle>) -> Self {
        FileSystem {
            settings,
            oracle,
            backend: OnceLock::new(),
        }
    }

    /// Owner, group and permissions of `file_or_directory`.
    ///
    /// Fails only for an empty or blank path. A path that is neither a file
    /// nor a directory yields the default attributes without asking the
    /// backend.
    pub fn attributes(&self, file_or_directory: &str) -> Result<FileSystemAttributes, FsError> {
        if file_or_directory.trim().is_empty() {
            return Err(FsError::InvalidArgument("path must not be empty"));
        }

        let path = Path::new(file_or_directory);
        if !path.is_file() && !path.is_dir() {
            tracing::trace!(path = file_or_directory, "no such file or directory");
            return Ok(FileSystemAttributes::default());
        }

        let backend = self.backend();
        tracing::trace!(path = file_or_directory, backend = backend.name(), "querying attributes");
        let user = backend.resolve_owning_user(path);
        let group = backend.resolve_owning_group(path);
        let permissions = backend.resolve_permissions(path);
        Ok(FileSystemAttributes::new(user, group, permissions))
    }

    pub fn permissions(&self, file_or_directory: &str) -> Result<FileSystemPermissions, FsError> {
        self.attributes(file_or_directory).map(|attributes| attributes.permissions())
    }

    pub fn owning_user(&self, file_or_directory: &str) -> Result<String, FsError> {
        self.attributes(file_or_directory)
            .map(|attributes| attributes.owning_user().to_string())
    }

    pub fn owning_group(&self, file_or_directory: &str) -> Result<String, FsError> {
        self.attributes(file_or_directory)
            .map(|attributes| attributes.owning_group().to_string())
    }

    pub fn permissions_of_owning_user(
        &self,
        file_or_directory: &str,
    ) -> Result<Permission, FsError> {
        self.permissions(file_or_directory).map(|permissions| permissions.user())
    }

    pub fn permissions_of_owning_group(
        &self,
        file_or_directory: &str,
    ) -> Result<Permission, FsError> {
        self.permissions(file_or_directory).map(|permissions| permissions.group())
    }

    pub fn permissions_of_other_users(
        &self,
        file_or_directory: &str,
    ) -> Result<Permission, FsError> {
        self.permissions(file_or_directory).map(|permissions| permissions.other())
    }

    fn backend(&self) -> &Arc<dyn Backend> {
        self.backend
            .get_or_init(|| BackendFactory::create_matching(&self.settings, self.oracle.as_ref()))
    }
}

impl Default for FileSystem {
    /// Uses the process wide settings and the runtime platform.
    fn default() -> Self {
        Self::new(BackendSettings::current())
    }
}
