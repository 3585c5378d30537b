use std::{env, path::PathBuf};

use crate::{info, warn};

pub const ROOT_DIR_NAME: &str = ".MultiWall";
pub const CONFIG_FILE_NAME: &str = "config.yaml";
pub const LOG_FILE_NAME: &str = "multiwall.log";

pub fn user_home_dir() -> Option<PathBuf> {
    // Primary (most reliable on Windows)
    if let Some(profile) = non_empty_var("USERPROFILE") {
        info!("USERPROFILE environment variable found: {}", profile);
        return Some(PathBuf::from(profile));
    }

    // Fallback (older / edge cases)
    if let (Some(d), Some(p)) = (non_empty_var("HOMEDRIVE"), non_empty_var("HOMEPATH")) {
        let full = PathBuf::from(format!("{}{}", d, p));
        info!("Resolved home directory from HOMEDRIVE/HOMEPATH: {}", full.display());
        return Some(full);
    }

    if let Some(home) = non_empty_var("HOME") {
        return Some(PathBuf::from(home));
    }

    warn!("Could not resolve home directory using USERPROFILE, HOMEDRIVE/HOMEPATH or HOME");
    None
}

/// The MultiWall root is `~/.MultiWall/`. Config and the log file live here.
pub fn multiwall_root_dir() -> PathBuf {
    if let Some(home) = user_home_dir() {
        return home.join(ROOT_DIR_NAME);
    }

    warn!("Could not resolve home directory, falling back to exe parent");
    match env::current_exe() {
        Ok(path) => path
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(current_dir_or_dot),
        Err(e) => {
            warn!("Failed to get current executable path: {e}");
            current_dir_or_dot()
        }
    }
}

pub fn default_config_path() -> PathBuf {
    multiwall_root_dir().join(CONFIG_FILE_NAME)
}

pub fn log_path() -> PathBuf {
    multiwall_root_dir().join(LOG_FILE_NAME)
}

/// Where the composite bitmap is written when the config names no directory.
pub fn pictures_dir() -> PathBuf {
    user_home_dir()
        .map(|home| home.join("Pictures"))
        .unwrap_or_else(current_dir_or_dot)
}

/// Expands a leading `~` against the home directory.
pub fn expand_home(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let rest = match trimmed.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') || rest.starts_with('\\') => rest,
        _ => return PathBuf::from(trimmed),
    };

    match user_home_dir() {
        Some(home) => home.join(rest.trim_start_matches(['/', '\\'])),
        None => PathBuf::from(trimmed),
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn current_dir_or_dot() -> PathBuf {
    env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}
