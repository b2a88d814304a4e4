use std::path::Path;

use super::Backend;
use crate::permission::FileSystemPermissions;

/// Fallback for platforms without a registered backend. Knows nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct DummyBackend;

impl Backend for DummyBackend {
    fn name(&self) -> &'static str {
        "dummy"
    }

    fn resolve_owning_user(&self, _path: &Path) -> String {
        String::new()
    }

    fn resolve_owning_group(&self, _path: &Path) -> String {
        String::new()
    }

    fn resolve_permissions(&self, _path: &Path) -> FileSystemPermissions {
        FileSystemPermissions::unknown()
    }
}
