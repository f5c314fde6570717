use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::constants::{PREFS_DIR, PREFS_FILE};
use crate::models::Profile;

/// Manages the saved profile preferences on disk.
///
/// The file is read once at startup (falling back to defaults when absent
/// or unreadable) and written on every field change and on quit/logout.
pub struct Prefs {
    config_dir: PathBuf,
}

impl Prefs {
    pub fn new() -> Self {
        let config_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(PREFS_DIR);
        Prefs { config_dir }
    }

    /// Use a custom directory instead of the home dotdir.
    #[allow(dead_code)] // Used by tests
    pub fn with_dir(config_dir: impl Into<PathBuf>) -> Self {
        Prefs {
            config_dir: config_dir.into(),
        }
    }

    fn prefs_path(&self) -> PathBuf {
        self.config_dir.join(PREFS_FILE)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.config_dir.exists() {
            fs::create_dir_all(&self.config_dir)?;
        }
        Ok(())
    }

    /// Load the saved profile, or defaults when nothing usable is on disk.
    pub fn load(&self) -> Profile {
        let path = self.prefs_path();
        match fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str::<Profile>(&content) {
                Ok(profile) => profile,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Ignoring malformed prefs file");
                    Profile::default()
                }
            },
            Err(_) => Profile::default(),
        }
    }

    /// Write the profile to disk.
    pub fn save(&self, profile: &Profile) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_yaml::to_string(profile)?;
        fs::write(self.prefs_path(), content)?;
        Ok(())
    }
}

impl Default for Prefs {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let prefs = Prefs::with_dir(dir.path());
        assert_eq!(prefs.load(), Profile::default());
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let dir = tempdir().unwrap();
        let prefs = Prefs::with_dir(dir.path());

        let profile = Profile {
            name: String::from("Ada"),
            email: String::from("ada@example.com"),
            profile_image: Some(String::from("file:///tmp/pic.png")),
            is_publisher: true,
        };
        prefs.save(&profile).unwrap();
        assert_eq!(prefs.load(), profile);
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path()).unwrap();
        fs::write(dir.path().join(PREFS_FILE), ": not yaml : [").unwrap();
        let prefs = Prefs::with_dir(dir.path());
        assert_eq!(prefs.load(), Profile::default());
    }
}
