use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageError {
    #[error("cannot read image catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid image catalog: {0}")]
    Json(#[from] serde_json::Error),
}

/// Resolves an exercise name to an image locator.
pub trait ImageLookup {
    fn image_for(&self, name: &str) -> Option<&str>;
}

/// A name → URL table, e.g. loaded from `{"Squat": "https://..."}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageCatalog {
    entries: HashMap<String, String>,
}

impl ImageCatalog {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    /// The catalog shipped with the tracker.
    pub fn builtin() -> Self {
        const ROW_AND_SQUAT: &str = "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcTp0MU-e7KDM7ZVh75PAHeaPSV2xRZb99iXYg&s";
        let entries = [
            ("Bent Over Dumbbell Row", ROW_AND_SQUAT),
            ("Squat", ROW_AND_SQUAT),
        ]
        .into_iter()
        .map(|(name, url)| (name.to_string(), url.to_string()))
        .collect();
        Self { entries }
    }

    pub fn from_json(json: &str) -> Result<Self, ImageError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ImageError> {
        Self::from_json(&fs::read_to_string(path)?)
    }
}

impl ImageLookup for ImageCatalog {
    fn image_for(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }
}
