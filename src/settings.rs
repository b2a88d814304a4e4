//! Registry of the backend used for each platform.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock, RwLockReadGuard};

use crate::backend::{
    AdaptableBackend, Backend, NativeBackend, OwnerNameFn, PermissionsFn, SimpleWindowsBackend,
};
use crate::platform::Platform;

/// Maps each platform to the backend answering queries on it.
///
/// Entries can be replaced at any time with [`BackendSettings::set_backend`];
/// readers see either the previous or the new backend.
pub struct BackendSettings {
    backends: RwLock<HashMap<Platform, Arc<dyn Backend>>>,
}

static CURRENT: OnceLock<Arc<BackendSettings>> = OnceLock::new();

impl BackendSettings {
    /// Settings with the built-in backend of every known platform.
    pub fn new() -> Self {
        let mut backends: HashMap<Platform, Arc<dyn Backend>> = HashMap::new();
        backends.insert(Platform::Windows, Arc::new(SimpleWindowsBackend::from_env()));
        backends.insert(Platform::Linux, Arc::new(NativeBackend::new()));
        backends.insert(Platform::OsX, Arc::new(NativeBackend::new()));
        backends.insert(Platform::FreeBsd, Arc::new(NativeBackend::new()));
        BackendSettings {
            backends: RwLock::new(backends),
        }
    }

    /// Settings without any backend.
    pub fn empty() -> Self {
        BackendSettings {
            backends: RwLock::new(HashMap::new()),
        }
    }

    /// Process wide settings, created with the defaults on first use.
    pub fn current() -> Arc<BackendSettings> {
        CURRENT
            .get_or_init(|| {
                log::debug!("Creating process wide backend settings");
                Arc::new(BackendSettings::new())
            })
            .clone()
    }

    /// Replace the backend of `platform` with one built from the three
    /// functions. Returns `false` if a function is missing or the settings
    /// cannot be updated; the previous backend then stays in place.
    pub fn set_backend(
        &self,
        platform: Platform,
        owning_user: Option<OwnerNameFn>,
        owning_group: Option<OwnerNameFn>,
        permissions: Option<PermissionsFn>,
    ) -> bool {
        let backend = match AdaptableBackend::from_parts(owning_user, owning_group, permissions) {
            Ok(backend) => backend,
            Err(e) => {
                log::warn!("Not replacing the {} backend: {}", platform, e);
                return false;
            }
        };

        match self.backends.write() {
            Ok(mut backends) => {
                backends.insert(platform, Arc::new(backend));
                log::debug!("Installed adaptable backend for {}", platform);
                true
            }
            Err(_) => {
                log::warn!("Backend settings are poisoned, not replacing the {} backend", platform);
                false
            }
        }
    }

    /// The backend registered for `platform`.
    pub fn backend(&self, platform: Platform) -> Option<Arc<dyn Backend>> {
        self.read().get(&platform).cloned()
    }

    pub fn contains(&self, platform: Platform) -> bool {
        self.read().contains_key(&platform)
    }

    /// Platforms with a registered backend, in detection order.
    pub fn platforms(&self) -> Vec<Platform> {
        let backends = self.read();
        Platform::ALL
            .iter()
            .copied()
            .filter(|platform| backends.contains_key(platform))
            .collect()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<Platform, Arc<dyn Backend>>> {
        // A writer only ever inserts a complete entry, so the map is intact
        // even if one panicked.
        self.backends.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self::new()
    }
}
