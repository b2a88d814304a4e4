#![doc(html_no_source)]
//! Owning user, owning group and rwx permissions of file system entries.
//!
//! Queries go through a [`FileSystem`], which asks the [`Backend`]
//! registered in its [`BackendSettings`] for the current [`Platform`].
//! Backends can be replaced per platform with
//! [`BackendSettings::set_backend`].

pub mod attributes;
pub mod backend;
pub mod error;
pub mod factory;
pub mod file_system;
pub mod permission;
pub mod platform;
pub mod settings;

pub use attributes::FileSystemAttributes;
pub use backend::{Backend, OwnerNameFn, PermissionsFn};
pub use error::FsError;
pub use file_system::FileSystem;
pub use permission::{FileSystemPermissions, Nibble, Permission};
pub use platform::{Platform, PlatformOracle, RuntimePlatform};
pub use settings::BackendSettings;
