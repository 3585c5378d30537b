use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MultiWallError {
    #[error("failed to read image {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to save {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("monitor index {index} is out of range for {count} monitor(s)")]
    MonitorIndex { index: usize, count: usize },

    #[error("no monitors in layout")]
    NoMonitors,
}

pub type Result<T> = std::result::Result<T, MultiWallError>;
