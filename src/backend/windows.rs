use std::path::Path;

use super::Backend;
use crate::permission::{FileSystemPermissions, Permission};

/// Windows backend working from file attributes only.
///
/// Entries are always readable, writable unless marked read-only, and
/// executable when they are directories or their extension is listed in
/// `PATHEXT`. Owner and group are not resolved; group and other
/// permissions stay unknown.
#[derive(Debug, Clone, Default)]
pub struct SimpleWindowsBackend {
    // lower case, with the leading dot
    executable_extensions: Vec<String>,
}

impl SimpleWindowsBackend {
    pub fn from_env() -> Self {
        Self::with_path_ext(&std::env::var("PATHEXT").unwrap_or_default())
    }

    /// `path_ext` has the `PATHEXT` format, e.g. `.COM;.EXE;.BAT`.
    pub fn with_path_ext(path_ext: &str) -> Self {
        SimpleWindowsBackend {
            executable_extensions: path_ext
                .split(';')
                .map(str::trim)
                .filter(|extension| !extension.is_empty())
                .map(str::to_lowercase)
                .collect(),
        }
    }

    fn is_executable(&self, path: &Path) -> bool {
        match path.extension().and_then(|extension| extension.to_str()) {
            Some(extension) => {
                let extension = format!(".{}", extension.to_lowercase());
                self.executable_extensions.iter().any(|known| *known == extension)
            }
            None => false,
        }
    }
}

impl Backend for SimpleWindowsBackend {
    fn name(&self) -> &'static str {
        "windows"
    }

    fn resolve_owning_user(&self, _path: &Path) -> String {
        String::new()
    }

    fn resolve_owning_group(&self, _path: &Path) -> String {
        String::new()
    }

    fn resolve_permissions(&self, path: &Path) -> FileSystemPermissions {
        let metadata = match std::fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(e) => {
                log::debug!("Cannot read attributes of {}: {}", path.display(), e);
                return FileSystemPermissions::unknown();
            }
        };

        let mut permission = Permission::READ;
        if !metadata.permissions().readonly() {
            permission |= Permission::WRITE;
        }
        if metadata.is_dir() || self.is_executable(path) {
            permission |= Permission::EXECUTE;
        }
        FileSystemPermissions::default().with_user(permission)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_path_ext() {
        let backend = SimpleWindowsBackend::with_path_ext(".COM;.EXE; .Bat;;");
        assert_eq!(backend.executable_extensions, vec![".com", ".exe", ".bat"]);
        assert!(backend.is_executable(Path::new("C:\\tools\\run.exe")));
        assert!(backend.is_executable(Path::new("setup.BAT")));
        assert!(!backend.is_executable(Path::new("notes.txt")));
        assert!(!backend.is_executable(Path::new("Makefile")));
    }

    #[test]
    fn writable_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("notes.txt");
        std::fs::write(&file, b"x").unwrap();

        let backend = SimpleWindowsBackend::with_path_ext(".EXE");
        let permissions = backend.resolve_permissions(&file);
        assert_eq!(permissions.user(), Permission::READ | Permission::WRITE);
        assert_eq!(permissions.group(), Permission::UNKNOWN);
        assert_eq!(permissions.other(), Permission::UNKNOWN);
    }

    #[test]
    fn read_only_executable() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("tool.exe");
        std::fs::write(&file, b"x").unwrap();
        let mut permissions = std::fs::metadata(&file).unwrap().permissions();
        permissions.set_readonly(true);
        std::fs::set_permissions(&file, permissions).unwrap();

        let backend = SimpleWindowsBackend::with_path_ext(".COM;.EXE");
        assert_eq!(
            backend.resolve_permissions(&file).user(),
            Permission::READ | Permission::EXECUTE
        );
    }

    #[test]
    fn directory_is_traversable() {
        let dir = tempfile::tempdir().unwrap();
        let backend = SimpleWindowsBackend::default();
        assert_eq!(
            backend.resolve_permissions(dir.path()).user(),
            Permission::READ | Permission::WRITE | Permission::EXECUTE
        );
        assert_eq!(backend.resolve_owning_user(dir.path()), "");
    }

    #[test]
    fn missing_entry_is_unknown() {
        let dir = tempfile::tempdir().unwrap();
        let backend = SimpleWindowsBackend::default();
        assert_eq!(
            backend.resolve_permissions(&dir.path().join("missing")),
            FileSystemPermissions::unknown()
        );
    }
}
