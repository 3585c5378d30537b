use std::{fs, path::Path};

use serde_yaml::Value;

use crate::warn;

/// Reads and parses a YAML file. Missing files and parse errors yield `None`.
pub fn load_yaml(path: &Path) -> Option<Value> {
    let txt = match fs::read_to_string(path) {
        Ok(txt) => txt,
        Err(e) => {
            warn!("[MULTIWALL][CONFIG] Cannot read {}: {}", path.display(), e);
            return None;
        }
    };

    parse_yaml(&txt).or_else(|| {
        warn!("[MULTIWALL][CONFIG] {} is not valid YAML", path.display());
        None
    })
}

pub fn parse_yaml(txt: &str) -> Option<Value> {
    serde_yaml::from_str(txt).ok()
}
