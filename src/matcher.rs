//! Nearest-tile matching.
//!
//! Tiles are kept sorted by a single feature. A cell is matched by finding
//! where it would slot into that order, then walking from there until a
//! tile of similar lightness turns up. This is an approximate search: it
//! costs a binary search plus a short scan per cell instead of a distance
//! computation against every tile, and it can return a tile outside the
//! lightness tolerance when the walk runs out of window.
//!
//! The walk is confined to the scan window `1..=n-4`. The cursor starts at
//! the insertion index and moves toward lower indices when that index lies
//! in the upper half of the store, toward higher indices otherwise. It stops
//! on the first tile within tolerance or as soon as it leaves the window, so
//! the result may be the first tile or one of the last three without any
//! lightness check.

use crate::error::{MosaicError, Result};
use crate::store::TileFeatureStore;
use crate::types::{Features, SortKey, TileFeature};

/// Default maximum lightness difference, in percentage points.
pub const LIGHTNESS_TOLERANCE: u8 = 15;

/// Smallest store the scan window is non-empty for.
pub const MIN_STORE_LEN: usize = 5;

/// Positions at the end of the store the walk never enters.
const TAIL_GUARD: usize = 3;

/// Picks a tile for each cell colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matcher {
    tolerance: i32,
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Matcher {
    pub fn new() -> Self {
        Self::with_tolerance(LIGHTNESS_TOLERANCE)
    }

    pub fn with_tolerance(tolerance: u8) -> Self {
        Self {
            tolerance: tolerance as i32,
        }
    }

    pub fn tolerance(&self) -> u8 {
        self.tolerance as u8
    }

    /// Find the tile for `cell`, sorting the store by `key` first if needed.
    ///
    /// The store's contents are not changed; its order is `key` order
    /// afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::StoreTooSmall`] for stores with fewer than
    /// [`MIN_STORE_LEN`] tiles.
    pub fn find<'s, C>(
        &self,
        store: &'s mut TileFeatureStore,
        cell: &C,
        key: SortKey,
    ) -> Result<&'s TileFeature>
    where
        C: Features + ?Sized,
    {
        if store.len() < MIN_STORE_LEN {
            return Err(MosaicError::StoreTooSmall {
                len: store.len(),
                minimum: MIN_STORE_LEN,
            });
        }

        let tiles = store.sorted_by(key);
        let index = self.find_index(tiles, cell, key);
        Ok(&tiles[index])
    }

    /// Index of the matching tile in `tiles`, which must be sorted by `key`
    /// and hold at least [`MIN_STORE_LEN`] entries.
    pub fn find_index<C>(&self, tiles: &[TileFeature], cell: &C, key: SortKey) -> usize
    where
        C: Features + ?Sized,
    {
        let n = tiles.len();
        let start = insertion_index(tiles, cell, key);
        let lightness = cell.lightness();

        let window = 1..n.saturating_sub(TAIL_GUARD);
        let step_down = 2 * start >= n;

        let mut cursor = start;
        while window.contains(&cursor)
            && (tiles[cursor].lightness() - lightness).abs() > self.tolerance
        {
            if step_down {
                cursor -= 1;
            } else {
                cursor += 1;
            }
        }

        // A cell sorting after every tile lands one past the end.
        cursor.min(n.saturating_sub(1))
    }
}

/// Where `cell` would be placed if appended to `tiles` and stably re-sorted
/// by `key`: after every tile whose key is less than or equal to its own.
pub fn insertion_index<C>(tiles: &[TileFeature], cell: &C, key: SortKey) -> usize
where
    C: Features + ?Sized,
{
    let target = cell.value(key);
    tiles.partition_point(|tile| tile.value(key) <= target)
}
