//! Cross-platform directory path resolution
//!
//! Resolves the platform-appropriate location for the persisted token file.
//! - Linux/macOS: XDG Base Directory specification (~/.config)
//! - Windows: Known Folder API (AppData\Roaming)

use std::path::{Path, PathBuf};

/// Get the configuration directory path
///
/// Checks TOKENSMITH_CONFIG_DIR environment variable first, then falls back to:
/// - Unix (Linux/macOS): XDG_CONFIG_HOME/tokensmith or ~/.config/tokensmith
/// - Windows: %APPDATA%\tokensmith\config
pub fn config_dir() -> PathBuf {
    std::env::var("TOKENSMITH_CONFIG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            #[cfg(windows)]
            {
                // On Windows, use ProjectDirs for proper AppData paths
                use directories::ProjectDirs;
                ProjectDirs::from("", "", "tokensmith")
                    .map(|dirs| dirs.config_dir().to_path_buf())
                    .unwrap_or_else(|| PathBuf::from(".").join(".config").join("tokensmith"))
            }
            #[cfg(not(windows))]
            {
                // On Unix (Linux/macOS), use XDG_CONFIG_HOME or $HOME/.config
                use directories::BaseDirs;
                std::env::var("XDG_CONFIG_HOME")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| {
                        BaseDirs::new()
                            .map(|dirs| dirs.home_dir().join(".config"))
                            .unwrap_or_else(|| PathBuf::from(".").join(".config"))
                    })
                    .join("tokensmith")
            }
        })
}

/// Get the token file path
pub fn tokens_file_path() -> PathBuf {
    config_dir().join("tokens.json")
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
