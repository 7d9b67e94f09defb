use std::env;
use std::path::PathBuf;

/// Name of the data directory under the user's home
pub const DATA_DIR_NAME: &str = ".shipui";

/// File holding the durable key/value storage
pub const STORAGE_FILE_NAME: &str = "storage.json";

/// Get the path to the Ship UI data directory (~/.shipui)
///
/// `SHIPUI_HOME` wins when set, then `HOME` (useful for tests), then the
/// platform home directory. Falls back to the working directory when no home
/// can be determined at all.
pub fn shipui_dir() -> PathBuf {
    if let Ok(dir) = env::var("SHIPUI_HOME") {
        if !dir.trim().is_empty() {
            return PathBuf::from(dir);
        }
    }

    if let Ok(home) = env::var("HOME") {
        PathBuf::from(home).join(DATA_DIR_NAME)
    } else {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DATA_DIR_NAME)
    }
}

/// Get the path to the storage file (~/.shipui/storage.json)
pub fn storage_file() -> PathBuf {
    shipui_dir().join(STORAGE_FILE_NAME)
}
