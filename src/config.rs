use std::path::PathBuf;

/// Runtime configuration, read once at startup from the environment.
///
/// Either path may be absent; the stores fall back to a disabled variant
/// rather than failing, so the tool works with no configuration at all.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Where conversion history is appended (`PAGEDECK_HISTORY`).
    pub history_path: Option<PathBuf>,
    /// Directory holding persisted favorites (`PAGEDECK_FAVORITES`).
    pub favorites_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            history_path: std::env::var_os("PAGEDECK_HISTORY").map(PathBuf::from),
            favorites_dir: std::env::var_os("PAGEDECK_FAVORITES").map(PathBuf::from),
        }
    }
}
