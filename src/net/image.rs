//! Background image loader for project screenshots, the profile picture and
//! skill icons.
//!
//! Sources are either http(s) URLs or filesystem paths. Each source is
//! fetched and decoded once on its own thread into an RGBA buffer ready for
//! egui texture upload. Failures are remembered and never retried; callers
//! draw a blank placeholder instead.

use std::collections::{HashMap, HashSet};
use std::sync::mpsc;

/// Upper bound on decoded width; larger images are downscaled.
const MAX_WIDTH: u32 = 800;

/// Decoded image data (RGBA).
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Pending,
    Ready,
    Failed,
    Unknown,
}

/// Expand an icon source template for `slug`.
pub fn icon_source(template: &str, slug: &str) -> String {
    template.replace("{slug}", slug)
}

fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

#[derive(Default)]
pub struct ImageLoader {
    pending: HashMap<String, mpsc::Receiver<Option<ImageData>>>,
    loaded: HashMap<String, ImageData>,
    failed: HashSet<String>,
}

impl ImageLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a source to be loaded in the background. Repeated requests
    /// for the same source are ignored.
    pub fn request(&mut self, source: &str) {
        if self.loaded.contains_key(source)
            || self.pending.contains_key(source)
            || self.failed.contains(source)
        {
            return;
        }

        let (tx, rx) = mpsc::channel();
        let owned = source.to_string();

        std::thread::spawn(move || {
            let _ = tx.send(load_and_decode(&owned));
        });

        self.pending.insert(source.to_string(), rx);
    }

    /// Collect finished loads. Returns the sources that became ready.
    pub fn poll(&mut self) -> Vec<String> {
        let mut ready = Vec::new();
        let mut completed = Vec::new();
        for (source, rx) in &self.pending {
            let result = match rx.try_recv() {
                Ok(result) => result,
                Err(mpsc::TryRecvError::Empty) => continue,
                Err(mpsc::TryRecvError::Disconnected) => None,
            };
            match result {
                Some(data) => {
                    self.loaded.insert(source.clone(), data);
                    ready.push(source.clone());
                }
                None => {
                    log::debug!("image unavailable: {}", source);
                    self.failed.insert(source.clone());
                }
            }
            completed.push(source.clone());
        }
        for source in completed {
            self.pending.remove(&source);
        }
        ready
    }

    pub fn get(&self, source: &str) -> Option<&ImageData> {
        self.loaded.get(source)
    }

    pub fn state(&self, source: &str) -> LoadState {
        if self.loaded.contains_key(source) {
            LoadState::Ready
        } else if self.pending.contains_key(source) {
            LoadState::Pending
        } else if self.failed.contains(source) {
            LoadState::Failed
        } else {
            LoadState::Unknown
        }
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

fn read_bytes(source: &str) -> Option<Vec<u8>> {
    if !is_remote(source) {
        return std::fs::read(source).ok();
    }

    let resp = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(10))
        .build()
        .ok()?
        .get(source)
        .send()
        .ok()?;

    if !resp.status().is_success() {
        return None;
    }
    resp.bytes().ok().map(|b| b.to_vec())
}

fn decode(bytes: &[u8]) -> Option<ImageData> {
    let img = image::load_from_memory(bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = rgba.dimensions();

    let (w, h, pixels) = if w > MAX_WIDTH {
        let ratio = MAX_WIDTH as f32 / w as f32;
        let new_h = ((h as f32 * ratio) as u32).max(1);
        let resized = image::imageops::resize(
            &rgba,
            MAX_WIDTH,
            new_h,
            image::imageops::FilterType::Triangle,
        );
        let (rw, rh) = resized.dimensions();
        (rw, rh, resized.into_raw())
    } else {
        (w, h, rgba.into_raw())
    };

    Some(ImageData {
        width: w,
        height: h,
        rgba: pixels,
    })
}

fn load_and_decode(source: &str) -> Option<ImageData> {
    decode(&read_bytes(source)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn wait(loader: &mut ImageLoader, source: &str) -> LoadState {
        for _ in 0..500 {
            loader.poll();
            let state = loader.state(source);
            if state != LoadState::Pending {
                return state;
            }
            std::thread::sleep(Duration::from_millis(2));
        }
        LoadState::Pending
    }

    #[test]
    fn loader_deduplicates() {
        let mut loader = ImageLoader::new();
        loader.request("https://example.com/img.png");
        loader.request("https://example.com/img.png");
        assert_eq!(loader.pending_count(), 1);
    }

    #[test]
    fn icon_template_expansion() {
        assert_eq!(
            icon_source("assets/icons/{slug}.png", "nodedotjs"),
            "assets/icons/nodedotjs.png"
        );
        assert!(is_remote("https://cdn.example.com/react.png"));
        assert!(!is_remote("assets/icons/react.png"));
    }

    #[test]
    fn missing_file_fails_quietly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.png");
        let source = path.to_string_lossy().to_string();
        let mut loader = ImageLoader::new();
        loader.request(&source);
        assert_eq!(wait(&mut loader, &source), LoadState::Failed);
        // failed sources are not retried
        loader.request(&source);
        assert_eq!(loader.pending_count(), 0);
    }

    #[test]
    fn local_png_decodes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dot.png");
        image::RgbaImage::from_pixel(4, 2, image::Rgba([124, 58, 237, 255]))
            .save(&path)
            .unwrap();
        let source = path.to_string_lossy().to_string();

        let mut loader = ImageLoader::new();
        loader.request(&source);
        assert_eq!(wait(&mut loader, &source), LoadState::Ready);
        let data = loader.get(&source).unwrap();
        assert_eq!((data.width, data.height), (4, 2));
        assert_eq!(data.rgba.len(), 4 * 2 * 4);
    }

    #[test]
    fn garbage_bytes_do_not_decode() {
        assert!(decode(b"not an image").is_none());
    }
}
