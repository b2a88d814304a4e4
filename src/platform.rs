use std::fmt;

/// Platform families a backend can be registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    Linux,
    OsX,
    FreeBsd,
}

impl Platform {
    /// Detection order. The first platform the oracle confirms wins.
    pub const ALL: [Platform; 4] = [
        Platform::Windows,
        Platform::Linux,
        Platform::OsX,
        Platform::FreeBsd,
    ];
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Windows => "windows",
            Platform::Linux => "linux",
            Platform::OsX => "osx",
            Platform::FreeBsd => "freebsd",
        };
        f.write_str(name)
    }
}

/// Answers whether the process runs on a given platform.
pub trait PlatformOracle: Send + Sync {
    fn is_platform(&self, platform: Platform) -> bool;
}

/// Oracle for the platform this crate was compiled for.
#[derive(Debug, Default, Clone, Copy)]
pub struct RuntimePlatform;

impl PlatformOracle for RuntimePlatform {
    fn is_platform(&self, platform: Platform) -> bool {
        match platform {
            Platform::Windows => cfg!(target_os = "windows"),
            Platform::Linux => cfg!(any(target_os = "linux", target_os = "android")),
            Platform::OsX => cfg!(target_os = "macos"),
            Platform::FreeBsd => cfg!(target_os = "freebsd"),
        }
    }
}
