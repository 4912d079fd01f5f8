use std::path::{Path, PathBuf};

/// The directory under which the application stores its configuration and
/// log files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoxlyDirectory(PathBuf);

impl StoxlyDirectory {
    pub fn new(path: PathBuf) -> Self {
        Self(path)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    pub fn exists(&self) -> bool {
        self.0.exists()
    }

    pub fn init(&self) -> Result<(), std::io::Error> {
        std::fs::create_dir_all(&self.0)
    }
}

/// Get the default data directory, `~/.stoxly` on Linux.
pub fn default_datadir() -> Result<StoxlyDirectory, std::io::Error> {
    #[cfg(target_os = "linux")]
    let configs_dir = dirs::home_dir();

    #[cfg(not(target_os = "linux"))]
    let configs_dir = dirs::config_dir();

    if let Some(mut path) = configs_dir {
        #[cfg(target_os = "linux")]
        path.push(".stoxly");

        #[cfg(not(target_os = "linux"))]
        path.push("Stoxly");

        return Ok(StoxlyDirectory::new(path));
    }

    Err(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "Failed to get default data directory",
    ))
}
