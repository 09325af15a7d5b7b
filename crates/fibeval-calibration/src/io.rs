//! Profile persistence (load/save).

use std::path::{Path, PathBuf};

use crate::profile::{self, CalibrationProfile};

const PROFILE_FILENAME: &str = "fibeval_calibration.json";
const CONFIG_DIR_NAME: &str = "fibeval";

/// Load calibration profile from the standard location.
/// Tries XDG config dir first, then the working directory.
#[must_use]
pub fn load_profile() -> Option<CalibrationProfile> {
    if let Some(path) = xdg_profile_path() {
        if path.exists() {
            if let Some(p) = load_from_path(&path) {
                return Some(p);
            }
        }
    }

    let path = cwd_profile_path();
    if path.exists() {
        return load_from_path(&path);
    }

    None
}

/// Load a profile and validate it against the current environment.
/// Returns `None` if the profile is incompatible, invalid, or for a different CPU.
#[must_use]
pub fn load_validated_profile() -> Option<CalibrationProfile> {
    validate(load_profile()?)
}

fn validate(p: CalibrationProfile) -> Option<CalibrationProfile> {
    if !p.is_compatible() {
        tracing::info!(version = p.version, "profile version mismatch, ignoring cached profile");
        return None;
    }
    if !p.is_valid() {
        tracing::info!(
            series_limit = p.series_limit,
            blenkinsop_limit = p.blenkinsop_limit,
            "profile has invalid thresholds, ignoring cached profile"
        );
        return None;
    }

    let current_fp = profile::cpu_fingerprint();
    if !p.matches_cpu(&current_fp) {
        tracing::info!("profile CPU mismatch, ignoring cached profile");
        return None;
    }

    Some(p)
}

/// Save calibration profile to the XDG config directory.
/// Falls back to the working directory if no config dir is known.
pub fn save_profile(p: &CalibrationProfile) -> std::io::Result<PathBuf> {
    let path = if let Some(xdg_path) = xdg_profile_path() {
        if let Some(parent) = xdg_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        xdg_path
    } else {
        cwd_profile_path()
    };

    save_to_path(p, &path)?;
    tracing::info!(path = %path.display(), "saved calibration profile");
    Ok(path)
}

/// Save profile to a specific path.
pub fn save_to_path(p: &CalibrationProfile, path: &Path) -> std::io::Result<()> {
    let content = serde_json::to_string_pretty(p).map_err(std::io::Error::other)?;
    std::fs::write(path, content)
}

/// Load a profile from a specific path, `None` if missing or malformed.
#[must_use]
pub fn load_from_path(path: &Path) -> Option<CalibrationProfile> {
    let content = std::fs::read_to_string(path).ok()?;
    match serde_json::from_str(&content) {
        Ok(p) => Some(p),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "malformed calibration profile");
            None
        }
    }
}

/// Get the XDG config directory path for the profile.
fn xdg_profile_path() -> Option<PathBuf> {
    let config_dir = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;

    Some(config_dir.join(CONFIG_DIR_NAME).join(PROFILE_FILENAME))
}

/// Get the working directory profile path.
fn cwd_profile_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(format!(".{PROFILE_FILENAME}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fibeval_core::options::Options;
    use tempfile::TempDir;

    #[test]
    fn save_and_load_to_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(PROFILE_FILENAME);
        let p = CalibrationProfile::for_host(Options {
            series_limit: 128,
            blenkinsop_limit: 6144,
        });
        save_to_path(&p, &path).unwrap();

        let loaded = load_from_path(&path).unwrap();
        assert_eq!(loaded.series_limit, 128);
        assert_eq!(loaded.blenkinsop_limit, 6144);
        assert_eq!(loaded.version, profile::PROFILE_VERSION);
    }

    #[test]
    fn load_missing_file_returns_none() {
        let dir = TempDir::new().unwrap();
        assert!(load_from_path(&dir.path().join("absent.json")).is_none());
    }

    #[test]
    fn load_invalid_json_returns_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(PROFILE_FILENAME);
        std::fs::write(&path, b"not json").unwrap();
        assert!(load_from_path(&path).is_none());
    }

    #[test]
    fn validate_rejects_incompatible_version() {
        let p = CalibrationProfile {
            version: 999,
            ..CalibrationProfile::default()
        };
        assert!(validate(p).is_none());
    }

    #[test]
    fn validate_rejects_inverted_thresholds() {
        let p = CalibrationProfile {
            series_limit: 10_000,
            blenkinsop_limit: 500,
            ..CalibrationProfile::default()
        };
        assert!(validate(p).is_none());
    }

    #[test]
    fn validate_rejects_foreign_cpu() {
        let p = CalibrationProfile {
            cpu_fingerprint: "some other machine;cores=1024".into(),
            ..CalibrationProfile::default()
        };
        assert!(validate(p).is_none());
    }

    #[test]
    fn validate_accepts_default() {
        assert!(validate(CalibrationProfile::default()).is_some());
    }

    #[test]
    fn xdg_profile_path_contains_config_dir() {
        if let Some(path) = xdg_profile_path() {
            let path_str = path.to_string_lossy();
            assert!(path_str.contains(CONFIG_DIR_NAME));
            assert!(path_str.ends_with(PROFILE_FILENAME));
        }
    }

    #[test]
    fn cwd_profile_path_is_hidden() {
        let path = cwd_profile_path();
        let name = path.file_name().unwrap().to_string_lossy();
        assert_eq!(name, format!(".{PROFILE_FILENAME}"));
    }
}
