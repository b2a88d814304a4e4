//! Permission bits of a single subject (owning user, owning group or others).

mod triad;

pub use triad::FileSystemPermissions;

use bounded_integer::*;
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

bounded_integer! {
    /// Four raw permission bits as found in one nibble of a permission word.
    pub struct Nibble { 0..16 }
}

/// Bit set over execute, write, read, sticky and unknown.
///
/// A well formed value is either exactly [`Permission::UNKNOWN`] or any
/// combination of the four concrete bits. Other combinations can be built
/// (e.g. by an override backend) and are caught by [`Permission::is_valid`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Permission(u8);

impl Permission {
    pub const NONE: Permission = Permission(0);
    pub const EXECUTE: Permission = Permission(1);
    pub const WRITE: Permission = Permission(2);
    pub const READ: Permission = Permission(4);
    /// Sticky bit, or set-uid/set-gid for the user and group subjects.
    pub const STICKY: Permission = Permission(8);
    pub const UNKNOWN: Permission = Permission(16);

    const CONCRETE_BITS: u8 = 0b1111;
    const FLAGS: [(Permission, &'static str); 5] = [
        (Permission::EXECUTE, "EXECUTE"),
        (Permission::WRITE, "WRITE"),
        (Permission::READ, "READ"),
        (Permission::STICKY, "STICKY"),
        (Permission::UNKNOWN, "UNKNOWN"),
    ];

    /// Decode the four bits of a nibble. Every nibble maps to a valid value.
    pub fn decode(nibble: Nibble) -> Permission {
        let value: u8 = *nibble.as_ref();
        let mut permission = Permission::NONE;
        for (flag, _) in Self::FLAGS.iter().take(4) {
            if value & flag.0 == flag.0 {
                permission |= *flag;
            }
        }
        permission
    }

    /// Keep `bits` as they are, valid or not.
    pub const fn from_bits_retain(bits: u8) -> Permission {
        Permission(bits)
    }

    /// `bits` as a permission, if the combination is valid.
    pub fn from_bits(bits: u8) -> Option<Permission> {
        let permission = Permission(bits);
        if permission.is_valid() {
            Some(permission)
        } else {
            None
        }
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, other: Permission) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn can_read(self) -> bool {
        self.contains(Permission::READ)
    }

    pub const fn can_write(self) -> bool {
        self.contains(Permission::WRITE)
    }

    pub const fn can_execute(self) -> bool {
        self.contains(Permission::EXECUTE)
    }

    pub const fn is_sticky(self) -> bool {
        self.contains(Permission::STICKY)
    }

    pub const fn is_unknown(self) -> bool {
        self.contains(Permission::UNKNOWN)
    }

    /// True for exactly `UNKNOWN`, or for any combination of read, write and
    /// execute with the sticky bit layered on top.
    pub const fn is_valid(self) -> bool {
        self.0 == Permission::UNKNOWN.0 || self.0 & !Permission::CONCRETE_BITS == 0
    }
}

impl BitOr for Permission {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Permission(self.0 | rhs.0)
    }
}

impl BitOrAssign for Permission {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return write!(f, "Permission(NONE)");
        }
        let names: Vec<&str> = Self::FLAGS
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        let stray = self.0 & !(Self::CONCRETE_BITS | Permission::UNKNOWN.0);
        if stray != 0 {
            write!(f, "Permission({} | {:#x})", names.join(" | "), stray)
        } else {
            write!(f, "Permission({})", names.join(" | "))
        }
    }
}

/// `ls` style rendering: `rwx`, `r-t`, `---`; unknown renders as `???`.
impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unknown() {
            return f.write_str("???");
        }
        let read = if self.can_read() { 'r' } else { '-' };
        let write = if self.can_write() { 'w' } else { '-' };
        let execute = match (self.can_execute(), self.is_sticky()) {
            (true, true) => 't',
            (false, true) => 'T',
            (true, false) => 'x',
            (false, false) => '-',
        };
        write!(f, "{}{}{}", read, write, execute)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn decode_matches_bit_tests() {
        for value in 0u8..16 {
            let permission = Permission::decode(Nibble::new(value).unwrap());
            assert_eq!(permission.can_execute(), value & 0b0001 != 0, "nibble {:#06b}", value);
            assert_eq!(permission.can_write(), value & 0b0010 != 0, "nibble {:#06b}", value);
            assert_eq!(permission.can_read(), value & 0b0100 != 0, "nibble {:#06b}", value);
            assert_eq!(permission.is_sticky(), value & 0b1000 != 0, "nibble {:#06b}", value);
            assert!(!permission.is_unknown());
            assert!(permission.is_valid());
        }
    }

    #[test]
    fn decode_read_execute() {
        let permission = Permission::decode(Nibble::new(0b0101).unwrap());
        assert_eq!(permission, Permission::READ | Permission::EXECUTE);
        assert!(!permission.can_write());
        assert!(!permission.is_sticky());
    }

    #[test]
    fn nibble_is_bounded() {
        assert!(Nibble::new(15).is_some());
        assert!(Nibble::new(16).is_none());
    }

    #[test]
    fn validity() {
        assert!(Permission::UNKNOWN.is_valid());
        assert!(Permission::NONE.is_valid());
        assert!((Permission::READ | Permission::WRITE | Permission::EXECUTE).is_valid());
        assert!((Permission::READ | Permission::STICKY).is_valid());
        assert!(!(Permission::UNKNOWN | Permission::READ).is_valid());
        assert!(!Permission::from_bits_retain(0x20).is_valid());
    }

    #[test]
    fn from_bits_rejects_invalid() {
        assert_eq!(Permission::from_bits(0b0110), Some(Permission::READ | Permission::WRITE));
        assert_eq!(Permission::from_bits(16), Some(Permission::UNKNOWN));
        assert_eq!(Permission::from_bits(17), None);
    }

    #[test]
    fn unknown_grants_nothing() {
        let unknown = Permission::UNKNOWN;
        assert!(!unknown.can_read());
        assert!(!unknown.can_write());
        assert!(!unknown.can_execute());
        assert!(!unknown.is_sticky());
    }

    #[test]
    fn display() {
        assert_eq!((Permission::READ | Permission::WRITE | Permission::EXECUTE).to_string(), "rwx");
        assert_eq!((Permission::READ | Permission::STICKY).to_string(), "r-T");
        let sticky_dir = Permission::READ | Permission::EXECUTE | Permission::STICKY;
        assert_eq!(sticky_dir.to_string(), "r-t");
        assert_eq!(Permission::NONE.to_string(), "---");
        assert_eq!(Permission::UNKNOWN.to_string(), "???");
    }

    #[test]
    fn debug_lists_flags() {
        assert_eq!(format!("{:?}", Permission::NONE), "Permission(NONE)");
        assert_eq!(
            format!("{:?}", Permission::READ | Permission::EXECUTE),
            "Permission(EXECUTE | READ)"
        );
    }
}
