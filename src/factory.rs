use std::sync::Arc;

use crate::backend::{Backend, DummyBackend};
use crate::platform::{Platform, PlatformOracle};
use crate::settings::BackendSettings;

/// Picks the backend for the platform the process runs on.
pub struct BackendFactory;

impl BackendFactory {
    /// First platform in [`Platform::ALL`] confirmed by `oracle`.
    pub fn detect(oracle: &dyn PlatformOracle) -> Option<Platform> {
        Platform::ALL
            .iter()
            .copied()
            .find(|platform| oracle.is_platform(*platform))
    }

    /// The registered backend of the detected platform. Falls back to
    /// [`DummyBackend`] if no platform matches or none is registered.
    pub fn create_matching(
        settings: &BackendSettings,
        oracle: &dyn PlatformOracle,
    ) -> Arc<dyn Backend> {
        let platform = Self::detect(oracle);
        let backend = platform.and_then(|platform| settings.backend(platform));
        match backend {
            Some(backend) => {
                tracing::debug!(platform = ?platform, backend = backend.name(), "selected backend");
                backend
            }
            None => {
                tracing::debug!(platform = ?platform, "no backend registered, using dummy backend");
                Arc::new(DummyBackend)
            }
        }
    }
}
