use std::fmt;

use super::{Nibble, Permission};
use crate::error::FsError;

const RESERVED_MASK: u16 = 0xF000;
const USER_SHIFT: u16 = 8;
const GROUP_SHIFT: u16 = 4;
const OTHER_SHIFT: u16 = 0;

/// Permissions of the owning user, the owning group and everybody else.
///
/// Subjects that are not set explicitly are [`Permission::UNKNOWN`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileSystemPermissions {
    user: Permission,
    group: Permission,
    other: Permission,
}

impl FileSystemPermissions {
    pub const fn new(user: Permission, group: Permission, other: Permission) -> Self {
        FileSystemPermissions { user, group, other }
    }

    /// All three subjects unknown.
    pub const fn unknown() -> Self {
        Self::new(Permission::UNKNOWN, Permission::UNKNOWN, Permission::UNKNOWN)
    }

    /// Decode a `0000 uuuu gggg oooo` permission word.
    ///
    /// The top nibble is reserved; a word using it is rejected instead of
    /// having the bits dropped.
    pub fn decode_word(word: u16) -> Result<Self, FsError> {
        if word & RESERVED_MASK != 0 {
            return Err(FsError::MalformedPermissionWord(word));
        }

        Ok(Self::new(
            permission_at(word, USER_SHIFT),
            permission_at(word, GROUP_SHIFT),
            permission_at(word, OTHER_SHIFT),
        ))
    }

    /// Encode back into a permission word. `None` if any subject is unknown
    /// or not a valid permission.
    pub fn to_word(&self) -> Option<u16> {
        let mut word = 0u16;
        for permission in [self.user, self.group, self.other].iter() {
            if permission.is_unknown() || !permission.is_valid() {
                return None;
            }
            word = (word << 4) | u16::from(permission.bits());
        }
        Some(word)
    }

    pub fn with_user(self, user: Permission) -> Self {
        FileSystemPermissions { user, ..self }
    }

    pub fn with_group(self, group: Permission) -> Self {
        FileSystemPermissions { group, ..self }
    }

    pub fn with_other(self, other: Permission) -> Self {
        FileSystemPermissions { other, ..self }
    }

    pub fn user(&self) -> Permission {
        self.user
    }

    pub fn group(&self) -> Permission {
        self.group
    }

    pub fn other(&self) -> Permission {
        self.other
    }

    pub fn is_valid(&self) -> bool {
        self.user.is_valid() && self.group.is_valid() && self.other.is_valid()
    }

    pub fn is_unknown(&self) -> bool {
        *self == Self::unknown()
    }
}

impl Default for FileSystemPermissions {
    fn default() -> Self {
        Self::unknown()
    }
}

impl fmt::Display for FileSystemPermissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.user, self.group, self.other)
    }
}

fn permission_at(word: u16, shift: u16) -> Permission {
    Nibble::new(((word >> shift) & 0x0F) as u8)
        .map(Permission::decode)
        .unwrap_or(Permission::UNKNOWN)
}

#[cfg(test)]
mod test {
    use super::*;

    fn nibble(value: u16) -> Permission {
        Permission::decode(Nibble::new(value as u8).unwrap())
    }

    #[test]
    fn default_is_unknown() {
        let permissions = FileSystemPermissions::default();
        assert_eq!(permissions.user(), Permission::UNKNOWN);
        assert_eq!(permissions.group(), Permission::UNKNOWN);
        assert_eq!(permissions.other(), Permission::UNKNOWN);
        assert!(permissions.is_unknown());
    }

    #[test]
    fn unset_subjects_stay_unknown() {
        let permissions = FileSystemPermissions::default().with_user(Permission::READ);
        assert_eq!(permissions.user(), Permission::READ);
        assert_eq!(permissions.group(), Permission::UNKNOWN);
        assert_eq!(permissions.other(), Permission::UNKNOWN);
        assert_eq!(permissions.to_word(), None);
    }

    #[test]
    fn decode_644() {
        let permissions = FileSystemPermissions::decode_word(0x0644).unwrap();
        assert_eq!(permissions.user(), Permission::READ | Permission::WRITE);
        assert_eq!(permissions.group(), Permission::READ);
        assert_eq!(permissions.other(), Permission::READ);
        assert_eq!(permissions.to_string(), "rw-r--r--");
    }

    #[test]
    fn decode_sticky_directory() {
        let permissions = FileSystemPermissions::decode_word(0x077F).unwrap();
        assert_eq!(permissions.to_string(), "rwxrwxrwt");
    }

    #[test]
    fn reserved_nibble_is_rejected() {
        assert_eq!(
            FileSystemPermissions::decode_word(0x1000),
            Err(FsError::MalformedPermissionWord(0x1000))
        );
        assert_eq!(
            FileSystemPermissions::decode_word(0xF755),
            Err(FsError::MalformedPermissionWord(0xF755))
        );
    }

    #[test]
    fn every_word_decodes_per_nibble() {
        for word in 0u16..=u16::MAX {
            let decoded = FileSystemPermissions::decode_word(word);
            if word >> 12 != 0 {
                assert_eq!(decoded, Err(FsError::MalformedPermissionWord(word)));
                continue;
            }
            let permissions = decoded.unwrap();
            assert_eq!(permissions.user(), nibble((word >> 8) & 0xF));
            assert_eq!(permissions.group(), nibble((word >> 4) & 0xF));
            assert_eq!(permissions.other(), nibble(word & 0xF));
            assert_eq!(permissions.to_word(), Some(word));
        }
    }

    #[test]
    fn invalid_subject_has_no_word() {
        let permissions = FileSystemPermissions::new(
            Permission::READ,
            Permission::UNKNOWN | Permission::READ,
            Permission::NONE,
        );
        assert!(!permissions.is_valid());
        assert_eq!(permissions.to_word(), None);
    }
}
