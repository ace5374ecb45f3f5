use directories::ProjectDirs;
use std::path::PathBuf;

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    pub fn log_dir() -> PathBuf {
        if let Some(proj_dirs) = ProjectDirs::from("", "", "terminal-typer") {
            proj_dirs.data_local_dir().join("logs")
        } else {
            PathBuf::from(".").join("terminal-typer-logs")
        }
    }
}
