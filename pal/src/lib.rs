//! Platform abstraction layer.
//!
//! Raw ownership and permission lookups. Every lookup reports a `u16`
//! status (see [`status`]) and hands its result back through an out
//! parameter, so callers can treat this crate like a native library.

pub mod owner;
pub mod permissions;
pub mod status;

pub use owner::{fs_owning_group_name, fs_owning_user_name, sys_get_maximum_login_name};
pub use permissions::{fs_permissions, FileAttributes};
