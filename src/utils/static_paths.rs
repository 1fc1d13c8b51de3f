use std::path::PathBuf;

/// Root directories for the application
pub struct AppDirs {
    pub config_dir: PathBuf,
}

impl AppDirs {
    pub fn new() -> Self {
        let config_dir = dirs::config_dir().unwrap().join("newswire");

        Self { config_dir }
    }
}

impl Default for AppDirs {
    fn default() -> Self {
        Self::new()
    }
}

/// Paths to configuration files
pub struct ConfigPaths {
    pub config_file: PathBuf,
}

impl ConfigPaths {
    pub fn new(dirs: &AppDirs) -> Self {
        Self {
            config_file: dirs.config_dir.join("config.toml"),
        }
    }
}

/// Convenience wrapper that holds all path types
pub struct NewswirePaths {
    pub dirs: AppDirs,
    pub config: ConfigPaths,
}

impl NewswirePaths {
    pub fn new() -> Self {
        let dirs = AppDirs::new();
        Self {
            config: ConfigPaths::new(&dirs),
            dirs,
        }
    }
}

impl Default for NewswirePaths {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/utils/static_paths.rs"]
mod tests;
