use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use super::yaml::{load_yaml, parse_yaml};
use crate::{
    image_cache::DEFAULT_RETAINED,
    layout::{Monitor, Rect},
    paths::expand_home,
    wallpaper::{WallpaperStyle, PREVIEW_FILE_NAME, WALLPAPER_FILE_NAME},
    warn,
};

#[derive(Debug, Clone)]
pub struct MultiWallConfig {
    pub debug: bool,
    pub log_level: String,
    pub settings: MultiWallSettings,
    /// Explicit layout; empty means "ask the OS".
    pub monitors: Vec<Monitor>,
    /// One saved slot per monitor, as last written by the settings store.
    pub wallpapers: Vec<Option<PathBuf>>,
}

#[derive(Debug, Clone, Default)]
pub struct MultiWallSettings {
    pub output: OutputSettings,
    pub cache: CacheSettings,
}

#[derive(Debug, Clone)]
pub struct OutputSettings {
    pub directory: Option<PathBuf>,
    pub file_name: String,
    pub preview_file_name: String,
    pub write_preview: bool,
    pub style: WallpaperStyle,
}

#[derive(Debug, Clone)]
pub struct CacheSettings {
    pub retained_images: usize,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            directory: None,
            file_name: WALLPAPER_FILE_NAME.to_string(),
            preview_file_name: PREVIEW_FILE_NAME.to_string(),
            write_preview: true,
            style: WallpaperStyle::Tiled,
        }
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            retained_images: DEFAULT_RETAINED,
        }
    }
}

impl Default for MultiWallConfig {
    fn default() -> Self {
        Self {
            debug: false,
            log_level: "warn".to_string(),
            settings: MultiWallSettings::default(),
            monitors: Vec::new(),
            wallpapers: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct MonitorEntry {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    #[serde(default)]
    primary: Option<bool>,
}

impl MultiWallConfig {
    pub fn load(path: &Path) -> Option<Self> {
        let value = load_yaml(path)?;
        Self::from_yaml(&value)
    }

    pub fn parse(txt: &str) -> Option<Self> {
        Self::from_yaml(&parse_yaml(txt)?)
    }

    pub fn from_yaml(root: &Value) -> Option<Self> {
        let map = root.as_mapping()?;
        let defaults = Self::default();

        let debug = bool_any(map, &["debug", "debug_mode"]).unwrap_or(defaults.debug);
        let log_level = str_any(map, &["log_level", "logging"])
            .unwrap_or(&defaults.log_level)
            .to_lowercase();

        Some(Self {
            debug,
            log_level,
            settings: parse_settings(map),
            monitors: parse_monitors(map),
            wallpapers: parse_wallpapers(map),
        })
    }
}

fn parse_settings(root: &Mapping) -> MultiWallSettings {
    let mut settings = MultiWallSettings::default();

    let settings_map = mapping_at(root, "settings");
    let output_map = settings_map.and_then(|v| mapping_at(v, "output"));
    let cache_map = settings_map.and_then(|v| mapping_at(v, "cache"));

    if let Some(output) = output_map {
        settings.output.directory = str_any(output, &["directory", "dir", "folder"])
            .filter(|s| !s.trim().is_empty())
            .map(expand_home);
        settings.output.file_name = str_any(output, &["file_name", "wallpaper_file"])
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.trim().to_string())
            .unwrap_or(settings.output.file_name);
        settings.output.preview_file_name = str_any(output, &["preview_file_name", "preview_file"])
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.trim().to_string())
            .unwrap_or(settings.output.preview_file_name);
        settings.output.write_preview = bool_any(output, &["write_preview", "preview"])
            .unwrap_or(settings.output.write_preview);

        if let Some(raw) = str_at(output, "style") {
            match WallpaperStyle::parse(raw) {
                Some(style) => settings.output.style = style,
                None => warn!("[MULTIWALL][CONFIG] Unknown wallpaper style '{}', using tiled", raw),
            }
        }
    }

    if let Some(cache) = cache_map {
        settings.cache.retained_images = u64_any(cache, &["retained_images", "retained", "capacity"])
            .map(|v| v as usize)
            .unwrap_or(settings.cache.retained_images);
    }

    settings
}

fn parse_monitors(root: &Mapping) -> Vec<Monitor> {
    let Some(list) = root
        .get(Value::String("monitors".to_string()))
        .and_then(Value::as_sequence)
    else {
        return Vec::new();
    };

    let mut monitors = Vec::<Monitor>::new();
    for (i, item) in list.iter().enumerate() {
        let entry = match serde_yaml::from_value::<MonitorEntry>(item.clone()) {
            Ok(entry) => entry,
            Err(e) => {
                warn!("[MULTIWALL][CONFIG] Skipping monitor entry {}: {}", i + 1, e);
                continue;
            }
        };

        if entry.width <= 0 || entry.height <= 0 {
            warn!(
                "[MULTIWALL][CONFIG] Skipping monitor entry {} with empty size {}x{}",
                i + 1,
                entry.width,
                entry.height
            );
            continue;
        }

        let rect = Rect::new(entry.x, entry.y, entry.width, entry.height);
        let mut monitor = Monitor::new(monitors.len(), rect);
        if let Some(primary) = entry.primary {
            monitor.primary = primary;
        }
        monitors.push(monitor);
    }

    monitors
}

fn parse_wallpapers(root: &Mapping) -> Vec<Option<PathBuf>> {
    let Some(list) = root
        .get(Value::String("wallpapers".to_string()))
        .and_then(Value::as_sequence)
    else {
        return Vec::new();
    };

    list.iter()
        .map(|v| {
            v.as_str()
                .filter(|s| !s.trim().is_empty())
                .map(expand_home)
        })
        .collect()
}

fn bool_at(map: &Mapping, key: &str) -> Option<bool> {
    map.get(Value::String(key.to_string()))?.as_bool()
}

fn bool_any(map: &Mapping, keys: &[&str]) -> Option<bool> {
    keys.iter().find_map(|k| bool_at(map, k))
}

fn str_at<'a>(map: &'a Mapping, key: &str) -> Option<&'a str> {
    map.get(Value::String(key.to_string()))?.as_str()
}

fn str_any<'a>(map: &'a Mapping, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|k| str_at(map, k))
}

fn mapping_at<'a>(map: &'a Mapping, key: &str) -> Option<&'a Mapping> {
    map.get(Value::String(key.to_string()))?.as_mapping()
}

fn u64_at(map: &Mapping, key: &str) -> Option<u64> {
    map.get(Value::String(key.to_string()))?
        .as_i64()
        .and_then(|v| if v >= 0 { Some(v as u64) } else { None })
}

fn u64_any(map: &Mapping, keys: &[&str]) -> Option<u64> {
    keys.iter().find_map(|k| u64_at(map, k))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"
debug: true
log_level: INFO
settings:
  output:
    directory: /tmp/multiwall-out
    file_name: Desk.bmp
    write_preview: false
    style: stretched
  cache:
    retained: 2
monitors:
  - { x: -1920, y: 0, width: 1920, height: 1080 }
  - { x: 0, y: 0, width: 2560, height: 1440, primary: true }
  - { x: 2560, y: 0, width: 0, height: 1080 }
wallpapers:
  - /images/left.jpg
  - ~
"#;

    #[test]
    fn test_full_config() {
        let config = MultiWallConfig::parse(FULL).unwrap();

        assert!(config.debug);
        assert_eq!(config.log_level, "info");
        assert_eq!(
            config.settings.output.directory,
            Some(PathBuf::from("/tmp/multiwall-out"))
        );
        assert_eq!(config.settings.output.file_name, "Desk.bmp");
        assert_eq!(config.settings.output.preview_file_name, PREVIEW_FILE_NAME);
        assert!(!config.settings.output.write_preview);
        assert_eq!(config.settings.output.style, WallpaperStyle::Stretched);
        assert_eq!(config.settings.cache.retained_images, 2);

        // The zero-width entry is dropped.
        assert_eq!(config.monitors.len(), 2);
        assert_eq!(config.monitors[0].rect, Rect::new(-1920, 0, 1920, 1080));
        assert!(!config.monitors[0].primary);
        assert_eq!(config.monitors[1].index, 1);
        assert!(config.monitors[1].primary);

        assert_eq!(
            config.wallpapers,
            vec![Some(PathBuf::from("/images/left.jpg")), None]
        );
    }

    #[test]
    fn test_empty_mapping_uses_defaults() {
        let config = MultiWallConfig::parse("{}").unwrap();

        assert!(!config.debug);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.settings.output.file_name, WALLPAPER_FILE_NAME);
        assert!(config.settings.output.write_preview);
        assert_eq!(config.settings.output.style, WallpaperStyle::Tiled);
        assert_eq!(config.settings.cache.retained_images, DEFAULT_RETAINED);
        assert!(config.monitors.is_empty());
        assert!(config.wallpapers.is_empty());
    }

    #[test]
    fn test_unknown_style_keeps_tiled() {
        let config = MultiWallConfig::parse("settings:\n  output:\n    style: fill\n").unwrap();
        assert_eq!(config.settings.output.style, WallpaperStyle::Tiled);
    }

    #[test]
    fn test_non_mapping_root_is_rejected() {
        assert!(MultiWallConfig::parse("- 1\n- 2\n").is_none());
        assert!(MultiWallConfig::parse("[unclosed").is_none());
    }

    #[test]
    fn test_bad_monitor_entry_is_skipped() {
        let config =
            MultiWallConfig::parse("monitors:\n  - { x: 0, y: 0 }\n  - { x: 0, y: 0, width: 10, height: 10 }\n")
                .unwrap();
        assert_eq!(config.monitors.len(), 1);
        assert_eq!(config.monitors[0].index, 0);
    }
}
