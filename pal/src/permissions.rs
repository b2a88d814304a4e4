use std::ffi::CStr;

use crate::status;

/// Owner, group and mode of a file system entry, as reported by `lstat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileAttributes {
    pub owner: u32,
    pub group: u32,
    pub mode: u32,
}

/// Mode bits of the owner, group and other classes, in word order.
const CLASS_SHIFTS: [u32; 3] = [6, 3, 0];
/// set-uid, set-gid and sticky, one per class.
const SPECIAL_BITS: [u32; 3] = [0o4000, 0o2000, 0o1000];

impl FileAttributes {
    /// Stat the entry without following a trailing symlink.
    #[cfg(unix)]
    pub fn of(fs_entry: &CStr) -> Result<FileAttributes, u16> {
        let stat = nix::sys::stat::lstat(fs_entry)
            .map_err(|errno| status::io_error(std::io::Error::from(errno).kind()))?;
        Ok(FileAttributes {
            owner: stat.st_uid,
            group: stat.st_gid,
            mode: u32::from(stat.st_mode),
        })
    }

    #[cfg(not(unix))]
    pub fn of(_fs_entry: &CStr) -> Result<FileAttributes, u16> {
        Err(status::io_error(std::io::ErrorKind::Other))
    }

    /// Pack the mode into the `0000 uuuu gggg oooo` permission word.
    ///
    /// Within a nibble bit 0 is execute, bit 1 write, bit 2 read and bit 3
    /// the class' special bit.
    pub fn encode(&self) -> u16 {
        let mut word: u16 = 0;
        for (shift, special) in CLASS_SHIFTS.iter().zip(SPECIAL_BITS.iter()) {
            let mut nibble = ((self.mode >> shift) & 0o7) as u16;
            if self.mode & special == *special {
                nibble |= 0b1000;
            }
            word = (word << 4) | nibble;
        }
        word
    }
}

/// Write the permission word of `fs_entry` into `permission_set`.
pub fn fs_permissions(fs_entry: &CStr, permission_set: &mut u16) -> u16 {
    if fs_entry.to_bytes().is_empty() {
        return status::PARAMETER_IS_NULL;
    }

    match FileAttributes::of(fs_entry).map(|attributes| attributes.encode()) {
        Ok(word) => {
            *permission_set = word;
            status::OK
        }
        Err(code) => code,
    }
}
