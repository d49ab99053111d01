//! XDG Base Directory support.

use std::path::PathBuf;

const APP_DIR: &str = "teamchat";

/// XDG directory paths for teamchat.
///
/// Chats are never written to disk; only logs land here.
pub struct XdgDirs {
    /// State directory (~/.local/state/teamchat or XDG_STATE_HOME/teamchat)
    pub state: PathBuf,
}

impl XdgDirs {
    /// Get XDG directories, respecting environment variables.
    pub fn new() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::from_env(home, std::env::var_os("XDG_STATE_HOME").map(PathBuf::from))
    }

    fn from_env(home: PathBuf, state_home: Option<PathBuf>) -> Self {
        Self {
            state: state_home
                .filter(|p| p.is_absolute())
                .unwrap_or_else(|| home.join(".local/state"))
                .join(APP_DIR),
        }
    }

    /// Default log file location.
    pub fn log_file(&self) -> PathBuf {
        self.state.join("teamchat.log")
    }

    /// Ensure all directories exist.
    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.state)
    }
}

impl Default for XdgDirs {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_home_override() {
        let dirs = XdgDirs::from_env(PathBuf::from("/home/u"), Some(PathBuf::from("/var/st")));
        assert_eq!(dirs.log_file(), PathBuf::from("/var/st/teamchat/teamchat.log"));
    }

    #[test]
    fn test_falls_back_to_home() {
        let dirs = XdgDirs::from_env(PathBuf::from("/home/u"), None);
        assert_eq!(dirs.state, PathBuf::from("/home/u/.local/state/teamchat"));

        // Relative values are invalid per the XDG spec
        let dirs = XdgDirs::from_env(PathBuf::from("/home/u"), Some(PathBuf::from("rel")));
        assert_eq!(dirs.state, PathBuf::from("/home/u/.local/state/teamchat"));
    }
}
