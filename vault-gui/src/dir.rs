use std::path::{Path, PathBuf};

use crate::{config::DEFAULT_FILE_NAME, logger::GUI_LOG_FILE_NAME};

#[derive(Clone, Debug, PartialEq)]
pub struct VaultDirectory(PathBuf);

impl VaultDirectory {
    pub fn new(p: PathBuf) -> Self {
        VaultDirectory(p)
    }
    pub fn new_default() -> Result<Self, Box<dyn std::error::Error>> {
        default_datadir().map(VaultDirectory::new)
    }
}

impl VaultDirectory {
    pub fn exists(&self) -> bool {
        self.0.as_path().exists()
    }
    pub fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        create_directory(self.0.as_path())
    }
    pub fn path(&self) -> &Path {
        self.0.as_path()
    }
    pub fn config_path(&self) -> PathBuf {
        self.0.join(DEFAULT_FILE_NAME)
    }
    pub fn log_path(&self) -> PathBuf {
        self.0.join(GUI_LOG_FILE_NAME)
    }
}

/// Absolute path to the vault directory.
///
/// This a "Vault" directory in the standard configuration directory for all OSes but
/// Linux-based ones, for which it's `~/.vault`.
fn default_datadir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    #[cfg(target_os = "linux")]
    let configs_dir = dirs::home_dir();

    #[cfg(not(target_os = "linux"))]
    let configs_dir = dirs::config_dir();

    if let Some(mut path) = configs_dir {
        #[cfg(target_os = "linux")]
        path.push(".vault");

        #[cfg(not(target_os = "linux"))]
        path.push("Vault");

        return Ok(path);
    }

    Err("Failed to get default data directory".into())
}

fn create_directory(datadir_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(unix)]
    return {
        use std::fs::DirBuilder;
        use std::os::unix::fs::DirBuilderExt;

        let mut builder = DirBuilder::new();
        builder.mode(0o700).recursive(true).create(datadir_path)?;
        Ok(())
    };

    // TODO: permissions on Windows..
    #[cfg(not(unix))]
    return {
        std::fs::create_dir_all(datadir_path)?;
        Ok(())
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_creates_nested_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = VaultDirectory::new(tmp.path().join("a").join("b"));
        assert!(!dir.exists());
        dir.init().unwrap();
        assert!(dir.exists());
        // Idempotent.
        dir.init().unwrap();

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(dir.path()).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o700);
        }
    }

    #[test]
    fn file_paths() {
        let dir = VaultDirectory::new(PathBuf::from("/tmp/vault"));
        assert_eq!(dir.config_path(), PathBuf::from("/tmp/vault/gui.toml"));
        assert_eq!(dir.log_path(), PathBuf::from("/tmp/vault/vault-gui.log"));
    }
}
