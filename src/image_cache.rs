//! Path → decoded bitmap cache.
//!
//! Every decoded image is indexed weakly: as long as anyone holds the `Arc`
//! returned by [`ImageCache::resolve`], resolving the same path hands back the
//! same instance. On top of that the cache keeps strong references to at most
//! `retained` images, ordered by last use. When a new image would exceed that
//! bound, the least recently resolved one loses its strong reference; it stays
//! reachable only while some caller still holds it. With `retained == 0` the
//! cache owns nothing and entries live exactly as long as the callers' copies.
//!
//! A missing entry is never an error, only a redecode.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    sync::{Arc, Weak},
};

use image::{Rgba, RgbaImage};

use crate::{
    error::{MultiWallError, Result},
    info,
};

pub const DEFAULT_RETAINED: usize = 4;

/// Shared handle to a decoded bitmap.
pub type Bitmap = Arc<RgbaImage>;

struct CacheEntry {
    image: Weak<RgbaImage>,
    retained: Option<Bitmap>,
    last_used: u64,
}

pub struct ImageCache {
    entries: HashMap<PathBuf, CacheEntry>,
    retained: usize,
    clock: u64,
    decodes: u64,
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new(DEFAULT_RETAINED)
    }
}

impl ImageCache {
    pub fn new(retained: usize) -> Self {
        Self {
            entries: HashMap::new(),
            retained,
            clock: 0,
            decodes: 0,
        }
    }

    /// Returns the bitmap for `path`.
    ///
    /// An empty path or a file that does not exist yields a fresh 1×1
    /// placeholder. A file that exists but cannot be read or decoded is an
    /// error.
    pub fn resolve(&mut self, path: &Path) -> Result<Bitmap> {
        if path.as_os_str().is_empty() {
            return Ok(placeholder());
        }

        self.clock += 1;
        let now = self.clock;

        if let Some(entry) = self.entries.get_mut(path) {
            match entry.image.upgrade() {
                Some(image) => {
                    entry.last_used = now;
                    if entry.retained.is_none() {
                        entry.retained = Some(Arc::clone(&image));
                        self.enforce_bound();
                    }
                    return Ok(image);
                }
                None => {
                    info!("[MULTIWALL][CACHE] Dropping reclaimed entry {}", path.display());
                    self.entries.remove(path);
                }
            }
        }

        if !path.is_file() {
            info!("[MULTIWALL][CACHE] {} not found, using placeholder", path.display());
            return Ok(placeholder());
        }

        let image = Arc::new(decode_file(path)?);
        self.decodes += 1;
        info!(
            "[MULTIWALL][CACHE] Decoded {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );

        self.entries.insert(
            path.to_path_buf(),
            CacheEntry {
                image: Arc::downgrade(&image),
                retained: Some(Arc::clone(&image)),
                last_used: now,
            },
        );
        self.enforce_bound();

        Ok(image)
    }

    /// Drops the strong reference held for `path`, if any.
    pub fn release(&mut self, path: &Path) {
        if let Some(entry) = self.entries.get_mut(path) {
            entry.retained = None;
        }
    }

    /// Drops every strong reference and forgets every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Whether a live bitmap for `path` is still reachable through the cache.
    pub fn is_live(&self, path: &Path) -> bool {
        self.entries
            .get(path)
            .map(|e| e.image.strong_count() > 0)
            .unwrap_or(false)
    }

    pub fn retained_count(&self) -> usize {
        self.entries.values().filter(|e| e.retained.is_some()).count()
    }

    /// Number of decodes performed so far.
    pub fn decode_count(&self) -> u64 {
        self.decodes
    }

    fn enforce_bound(&mut self) {
        while self.retained_count() > self.retained {
            let Some(oldest) = self
                .entries
                .iter_mut()
                .filter(|(_, e)| e.retained.is_some())
                .min_by_key(|(_, e)| e.last_used)
                .map(|(_, e)| e)
            else {
                break;
            };
            oldest.retained = None;
        }
    }
}

/// Reads the whole file first so no handle stays open while decoding.
fn decode_file(path: &Path) -> Result<RgbaImage> {
    let bytes = fs::read(path).map_err(|source| MultiWallError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let decoded = image::load_from_memory(&bytes).map_err(|source| MultiWallError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(decoded.to_rgba8())
}

fn placeholder() -> Bitmap {
    Arc::new(RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 0])))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static NEXT: AtomicUsize = AtomicUsize::new(0);

    /// Unique scratch path under the system temp dir.
    pub(crate) fn scratch_path(name: &str) -> PathBuf {
        let n = NEXT.fetch_add(1, Ordering::Relaxed);
        std::env::temp_dir().join(format!("multiwall-{}-{}-{}", std::process::id(), n, name))
    }

    pub(crate) fn write_png(name: &str, image: &RgbaImage) -> PathBuf {
        let path = scratch_path(name);
        image.save_with_format(&path, image::ImageFormat::Png).unwrap();
        path
    }

    fn gradient(w: u32, h: u32) -> RgbaImage {
        RgbaImage::from_fn(w, h, |x, y| Rgba([x as u8, y as u8, 7, 255]))
    }

    #[test]
    fn test_missing_file_is_placeholder() {
        let mut cache = ImageCache::default();
        let image = cache.resolve(Path::new("/definitely/not/here.png")).unwrap();
        assert_eq!(image.dimensions(), (1, 1));
        assert_eq!(cache.decode_count(), 0);
    }

    #[test]
    fn test_empty_path_is_placeholder() {
        let mut cache = ImageCache::default();
        let image = cache.resolve(Path::new("")).unwrap();
        assert_eq!(image.dimensions(), (1, 1));
    }

    #[test]
    fn test_same_instance_while_held() {
        let path = write_png("held.png", &gradient(8, 4));
        let mut cache = ImageCache::new(0);

        let first = cache.resolve(&path).unwrap();
        let second = cache.resolve(&path).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.decode_count(), 1);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_redecode_after_reclaim_is_pixel_identical() {
        let path = write_png("reclaim.png", &gradient(8, 4));
        let mut cache = ImageCache::new(0);

        let first = cache.resolve(&path).unwrap();
        let pixels = first.as_raw().clone();
        drop(first);
        assert!(!cache.is_live(&path));

        let second = cache.resolve(&path).unwrap();
        assert_eq!(cache.decode_count(), 2);
        assert_eq!(second.as_raw(), &pixels);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_retained_images_survive_caller_drop() {
        let path = write_png("retained.png", &gradient(4, 4));
        let mut cache = ImageCache::new(2);

        drop(cache.resolve(&path).unwrap());
        assert!(cache.is_live(&path));

        drop(cache.resolve(&path).unwrap());
        assert_eq!(cache.decode_count(), 1);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_bound_evicts_least_recently_used() {
        let a = write_png("a.png", &gradient(2, 2));
        let b = write_png("b.png", &gradient(3, 3));
        let c = write_png("c.png", &gradient(4, 4));
        let mut cache = ImageCache::new(2);

        drop(cache.resolve(&a).unwrap());
        drop(cache.resolve(&b).unwrap());
        drop(cache.resolve(&a).unwrap());
        drop(cache.resolve(&c).unwrap());

        assert_eq!(cache.retained_count(), 2);
        assert!(cache.is_live(&a));
        assert!(!cache.is_live(&b));
        assert!(cache.is_live(&c));

        for p in [a, b, c] {
            let _ = fs::remove_file(p);
        }
    }

    #[test]
    fn test_release_lets_entry_go() {
        let path = write_png("release.png", &gradient(2, 2));
        let mut cache = ImageCache::new(4);

        drop(cache.resolve(&path).unwrap());
        cache.release(&path);
        assert!(!cache.is_live(&path));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_file_is_decode_error() {
        let path = scratch_path("corrupt.png");
        fs::write(&path, b"not an image at all").unwrap();
        let mut cache = ImageCache::default();

        let err = cache.resolve(&path).unwrap_err();
        assert!(matches!(err, MultiWallError::Decode { .. }));
        let _ = fs::remove_file(&path);
    }
}
