//! In-memory tile feature store.
//!
//! The store is the only mutable state of a mosaic run. It is built once by
//! the extractor (or loaded from a dictionary) and borrowed mutably by the
//! matcher, which re-sorts it when asked for a different key.

pub mod dictionary;

use image::RgbaImage;

use crate::error::Result;
use crate::extract::tile_feature;
use crate::types::{Features, SortKey, TileFeature};

/// Ordered collection of tile features.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileFeatureStore {
    tiles: Vec<TileFeature>,
    /// Key the tiles are currently sorted by, if any.
    order: Option<SortKey>,
}

impl TileFeatureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract features from every tile, keeping input order.
    ///
    /// # Errors
    ///
    /// Fails on the first tile whose features cannot be extracted, e.g. a
    /// fully transparent one.
    pub fn build<'a, I, S>(tiles: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, &'a RgbaImage)>,
        S: AsRef<str>,
    {
        let tiles = tiles
            .into_iter()
            .map(|(id, image)| tile_feature(id.as_ref(), image))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from(tiles))
    }

    pub fn push(&mut self, tile: TileFeature) {
        self.tiles.push(tile);
        self.order = None;
    }

    /// Stable ascending sort by `key`; equal keys keep their relative order.
    pub fn sort_by(&mut self, key: SortKey) {
        self.tiles.sort_by_key(|tile| tile.value(key));
        self.order = Some(key);
    }

    /// Tiles in ascending `key` order, sorting first if needed.
    pub fn sorted_by(&mut self, key: SortKey) -> &[TileFeature] {
        if self.order != Some(key) {
            self.sort_by(key);
        }
        &self.tiles
    }

    /// The key the store is currently ordered by.
    pub fn order(&self) -> Option<SortKey> {
        self.order
    }

    pub fn get(&self, id: &str) -> Option<&TileFeature> {
        self.tiles.iter().find(|tile| tile.id == id)
    }

    pub fn as_slice(&self) -> &[TileFeature] {
        &self.tiles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TileFeature> {
        self.tiles.iter()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

impl From<Vec<TileFeature>> for TileFeatureStore {
    fn from(tiles: Vec<TileFeature>) -> Self {
        Self { tiles, order: None }
    }
}

impl Extend<TileFeature> for TileFeatureStore {
    fn extend<T: IntoIterator<Item = TileFeature>>(&mut self, iter: T) {
        self.tiles.extend(iter);
        self.order = None;
    }
}

impl<'a> IntoIterator for &'a TileFeatureStore {
    type Item = &'a TileFeature;
    type IntoIter = std::slice::Iter<'a, TileFeature>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}
