//! Project manifest (mosaic.yaml) parsing.
//!
//! The manifest holds the paths and defaults of a mosaic project so they
//! do not have to be repeated on every command line.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{MosaicError, Result};
use crate::matcher::LIGHTNESS_TOLERANCE;
use crate::render::UPSCALE_BELOW;
use crate::store::dictionary::DICTIONARY_FILENAME;
use crate::types::SortKey;

/// Cell size used when neither the manifest nor the command line gives one.
pub const DEFAULT_CELL_SIZE: u32 = 16;

/// Sort key used when neither the manifest nor the command line gives one.
pub const DEFAULT_SORT_KEY: SortKey = SortKey::L;

/// Project manifest loaded from mosaic.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Directory holding the tile images.
    #[serde(default = "default_tiles")]
    pub tiles: PathBuf,

    /// Dictionary file written by `index` and read by `build`.
    #[serde(default = "default_dictionary")]
    pub dictionary: PathBuf,

    /// Output directory for mosaics.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    #[serde(default)]
    pub cell_size: Option<u32>,

    #[serde(default)]
    pub sort_key: Option<SortKey>,

    /// Sources whose narrower side is below this are upscaled 2x first.
    #[serde(default)]
    pub upscale_below: Option<u32>,

    #[serde(default)]
    pub lightness_tolerance: Option<u8>,

    /// Patterns to exclude when scanning the tile library.
    #[serde(default)]
    pub excludes: Vec<String>,
}

fn default_tiles() -> PathBuf {
    PathBuf::from("tiles")
}

fn default_dictionary() -> PathBuf {
    PathBuf::from(DICTIONARY_FILENAME)
}

fn default_output() -> PathBuf {
    PathBuf::from("dist")
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            tiles: default_tiles(),
            dictionary: default_dictionary(),
            output: default_output(),
            cell_size: None,
            sort_key: None,
            upscale_below: None,
            lightness_tolerance: None,
            excludes: vec![],
        }
    }
}

impl Manifest {
    /// Load manifest from a mosaic.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| MosaicError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| MosaicError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check mosaic.yaml syntax".to_string()),
        })
    }

    /// Render the manifest as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| MosaicError::Build {
            message: format!("Failed to serialize manifest: {}", e),
            help: None,
        })
    }

    /// Check if a path should be excluded based on exclude patterns.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.excludes
            .iter()
            .any(|pattern| Self::matches_pattern(&path_str, pattern))
    }

    /// Simple glob pattern matching: `*.ext`, `dir/*`, or a plain substring.
    fn matches_pattern(path: &str, pattern: &str) -> bool {
        if let Some(suffix) = pattern.strip_prefix('*') {
            if !suffix.contains('/') {
                return path.ends_with(suffix);
            }
        }

        if let Some(prefix) = pattern.strip_suffix("/*") {
            return path.starts_with(&format!("{}/", prefix))
                || path.contains(&format!("/{}/", prefix));
        }

        path.contains(pattern)
    }

    pub fn effective_cell_size(&self) -> u32 {
        self.cell_size.unwrap_or(DEFAULT_CELL_SIZE)
    }

    pub fn effective_sort_key(&self) -> SortKey {
        self.sort_key.unwrap_or(DEFAULT_SORT_KEY)
    }

    pub fn effective_upscale_below(&self) -> u32 {
        self.upscale_below.unwrap_or(UPSCALE_BELOW)
    }

    pub fn effective_tolerance(&self) -> u8 {
        self.lightness_tolerance.unwrap_or(LIGHTNESS_TOLERANCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_minimal_manifest() {
        let manifest = Manifest::parse("output: build").unwrap();

        assert_eq!(manifest.output, PathBuf::from("build"));
        assert_eq!(manifest.tiles, PathBuf::from("tiles"));
        assert!(manifest.sort_key.is_none());
    }

    #[test]
    fn test_parse_full_manifest() {
        let yaml = r#"
tiles: emoji/128
dictionary: cache/emoji.json
output: out
cell_size: 24
sort_key: h
upscale_below: 800
lightness_tolerance: 10
excludes:
  - "*.svg"
  - "flags/*"
"#;
        let manifest = Manifest::parse(yaml).unwrap();

        assert_eq!(manifest.tiles, PathBuf::from("emoji/128"));
        assert_eq!(manifest.dictionary, PathBuf::from("cache/emoji.json"));
        assert_eq!(manifest.output, PathBuf::from("out"));
        assert_eq!(manifest.effective_cell_size(), 24);
        assert_eq!(manifest.effective_sort_key(), SortKey::H);
        assert_eq!(manifest.effective_upscale_below(), 800);
        assert_eq!(manifest.effective_tolerance(), 10);
        assert_eq!(manifest.excludes, vec!["*.svg", "flags/*"]);
    }

    #[test]
    fn test_default_manifest() {
        let manifest = Manifest::default();

        assert_eq!(manifest.dictionary, PathBuf::from("emoji_dict.json"));
        assert_eq!(manifest.output, PathBuf::from("dist"));
        assert_eq!(manifest.effective_cell_size(), DEFAULT_CELL_SIZE);
        assert_eq!(manifest.effective_sort_key(), SortKey::L);
        assert_eq!(manifest.effective_upscale_below(), 500);
        assert_eq!(manifest.effective_tolerance(), 15);
    }

    #[test]
    fn test_invalid_sort_key() {
        let result = Manifest::parse("sort_key: q");
        assert!(matches!(result, Err(MosaicError::Parse { .. })));
    }

    #[test]
    fn test_parse_empty_manifest() {
        let manifest = Manifest::parse("").unwrap();
        assert_eq!(manifest.output, PathBuf::from("dist"));
    }

    #[test]
    fn test_yaml_round_trip_keeps_settings() {
        let manifest = Manifest {
            cell_size: Some(8),
            sort_key: Some(SortKey::S),
            ..Default::default()
        };
        let parsed = Manifest::parse(&manifest.to_yaml().unwrap()).unwrap();
        assert_eq!(parsed.cell_size, Some(8));
        assert_eq!(parsed.sort_key, Some(SortKey::S));
    }

    #[test]
    fn test_is_excluded_extension() {
        let manifest = Manifest {
            excludes: vec!["*.bak".to_string()],
            ..Default::default()
        };

        assert!(manifest.is_excluded(Path::new("grin.png.bak")));
        assert!(manifest.is_excluded(Path::new("tiles/grin.bak")));
        assert!(!manifest.is_excluded(Path::new("grin.png")));
    }

    #[test]
    fn test_is_excluded_directory() {
        let manifest = Manifest {
            excludes: vec!["flags/*".to_string()],
            ..Default::default()
        };

        assert!(manifest.is_excluded(Path::new("flags/fr.png")));
        assert!(manifest.is_excluded(Path::new("tiles/flags/fr.png")));
        assert!(!manifest.is_excluded(Path::new("tiles/grin.png")));
    }

    #[test]
    fn test_is_excluded_substring() {
        let manifest = Manifest {
            excludes: vec!["skin-tone".to_string()],
            ..Default::default()
        };

        assert!(manifest.is_excluded(Path::new("tiles/wave-skin-tone-2.png")));
        assert!(!manifest.is_excluded(Path::new("tiles/wave.png")));
    }
}
