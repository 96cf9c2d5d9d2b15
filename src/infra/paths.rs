// src/infra/paths.rs - Config path resolution
//
// DRILLBOOK_HOME overrides everything. Otherwise config lives in ~/.drillbook/.

use std::path::PathBuf;

fn drillbook_home() -> Option<PathBuf> {
    std::env::var_os("DRILLBOOK_HOME").map(PathBuf::from)
}

/// Configuration directory: $DRILLBOOK_HOME/ or ~/.drillbook/
///
/// `None` when no home directory can be determined and no override is set.
pub fn config_dir() -> Option<PathBuf> {
    if let Some(home) = drillbook_home() {
        return Some(home);
    }
    directories::BaseDirs::new().map(|dirs| dirs.home_dir().join(".drillbook"))
}

/// Config file path
pub fn config_file_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}
