//! End-to-end mosaic runs over in-memory tile libraries.

use std::collections::HashMap;

use emosaic::render::{compose, compose_with_progress, ComposeOptions};
use emosaic::{rgb_to_hsl, Features, MosaicError, Rgb, SortKey, TileFeatureStore, TileSource};
use image::{Rgba, RgbaImage};
use pretty_assertions::assert_eq;

/// Five opaque grey tiles with lightness 0, 25, 50, 75 and 100.
fn library() -> HashMap<String, RgbaImage> {
    [
        ("grey000.png", 0u8),
        ("grey064.png", 64),
        ("grey128.png", 128),
        ("grey192.png", 192),
        ("grey255.png", 255),
    ]
    .into_iter()
    .map(|(id, v)| (id.to_string(), RgbaImage::from_pixel(16, 16, Rgba([v, v, v, 255]))))
    .collect()
}

fn store_for(tiles: &HashMap<String, RgbaImage>) -> TileFeatureStore {
    let mut ids: Vec<&String> = tiles.keys().collect();
    ids.sort();
    TileFeatureStore::build(ids.into_iter().map(|id| (id.as_str(), &tiles[id]))).unwrap()
}

#[test]
fn single_cell_takes_tile_at_insertion_index() {
    let tiles = library();
    let mut store = store_for(&tiles);
    let source = RgbaImage::from_pixel(4, 4, Rgba([200, 100, 50, 255]));
    let options = ComposeOptions::new(4, SortKey::L).with_upscale_below(0);

    let mosaic = compose(&source, &mut store, &tiles, &options).unwrap();

    assert_eq!(mosaic.dimensions(), (4, 4));

    // l = 49 slots in after grey064 (l = 25); index 2 is outside the scan
    // window of a five tile store and is returned as is
    assert_eq!(rgb_to_hsl(Rgb::new(200, 100, 50)).l, 49);
    assert_eq!(store.get("grey128.png").unwrap().lightness(), 50);
    assert!(mosaic.pixels().all(|p| *p == Rgba([128, 128, 128, 255])));
}

#[test]
fn small_sources_are_upscaled_by_default() {
    let tiles = library();
    let mut store = store_for(&tiles);
    let source = RgbaImage::from_pixel(4, 4, Rgba([200, 100, 50, 255]));

    let mosaic = compose(&source, &mut store, &tiles, &ComposeOptions::new(4, SortKey::L)).unwrap();

    assert_eq!(mosaic.dimensions(), (8, 8));
}

#[test]
fn remainder_strips_are_dropped() {
    let tiles = library();
    let mut store = store_for(&tiles);
    let source = RgbaImage::from_pixel(11, 9, Rgba([10, 10, 10, 255]));
    let options = ComposeOptions::new(4, SortKey::B).with_upscale_below(0);

    let mut calls = Vec::new();
    let mosaic = compose_with_progress(&source, &mut store, &tiles, &options, |done, total| {
        calls.push((done, total))
    })
    .unwrap();

    assert_eq!(mosaic.dimensions(), (8, 8));
    assert_eq!(calls, vec![(1, 4), (2, 4), (3, 4), (4, 4)]);
}

#[test]
fn cells_are_matched_independently() {
    let tiles = library();
    let mut store = store_for(&tiles);

    // left column near black, right column near white
    let mut source = RgbaImage::from_pixel(8, 4, Rgba([250, 250, 250, 255]));
    for y in 0..4 {
        for x in 0..4 {
            source.put_pixel(x, y, Rgba([5, 5, 5, 255]));
        }
    }
    let options = ComposeOptions::new(4, SortKey::L).with_upscale_below(0);

    let mosaic = compose(&source, &mut store, &tiles, &options).unwrap();

    // l = 1 slots in at index 1; grey064 (l = 25) is too bright, the walk
    // moves up and leaves the window at grey128
    assert_eq!(mosaic.get_pixel(0, 0), &Rgba([128, 128, 128, 255]));
    // a cell brighter than every tile lands past the end and takes the last
    assert_eq!(mosaic.get_pixel(7, 3), &Rgba([255, 255, 255, 255]));
}

#[test]
fn transparent_tile_pixels_show_cell_colour() {
    let mut tiles = library();
    let mut ring = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 0]));
    ring.put_pixel(0, 0, Rgba([128, 128, 128, 255]));
    tiles.insert("grey128.png".to_string(), ring);

    // features still come from the solid grey tile
    let mut store = store_for(&library());
    let source = RgbaImage::from_pixel(4, 4, Rgba([200, 100, 50, 255]));
    let options = ComposeOptions::new(4, SortKey::L).with_upscale_below(0);

    let mosaic = compose(&source, &mut store, &tiles, &options).unwrap();

    assert_eq!(mosaic.get_pixel(0, 0), &Rgba([128, 128, 128, 255]));
    assert_eq!(mosaic.get_pixel(3, 3), &Rgba([200, 100, 50, 255]));
}

#[test]
fn identical_runs_are_byte_identical() {
    let tiles = library();
    let mut source = RgbaImage::new(24, 16);
    for (x, y, p) in source.enumerate_pixels_mut() {
        *p = Rgba([(x * 10) as u8, (y * 15) as u8, ((x + y) * 5) as u8, 255]);
    }
    let options = ComposeOptions::new(4, SortKey::H).with_upscale_below(0);

    let mut first_store = store_for(&tiles);
    let first = compose(&source, &mut first_store, &tiles, &options).unwrap();
    let mut second_store = store_for(&tiles);
    let second = compose(&source, &mut second_store, &tiles, &options).unwrap();

    assert_eq!(first.as_raw(), second.as_raw());
    assert_eq!(first_store, second_store);
}

#[test]
fn store_is_unchanged_by_a_run() {
    let tiles = library();
    let mut store = store_for(&tiles);
    store.sort_by(SortKey::S);
    let before = store.clone();

    let source = RgbaImage::from_pixel(12, 12, Rgba([90, 160, 30, 255]));
    let options = ComposeOptions::new(3, SortKey::S).with_upscale_below(0);
    compose(&source, &mut store, &tiles, &options).unwrap();

    assert_eq!(store, before);
}

#[test]
fn zero_cell_size_is_divide_by_zero() {
    let tiles = library();
    let mut store = store_for(&tiles);
    let source = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));

    let result = compose(&source, &mut store, &tiles, &ComposeOptions::new(0, SortKey::L));
    assert!(matches!(result, Err(MosaicError::DivideByZero { .. })));
}

#[test]
fn source_smaller_than_a_cell_is_rejected() {
    let tiles = library();
    let mut store = store_for(&tiles);
    let source = RgbaImage::from_pixel(3, 3, Rgba([0, 0, 0, 255]));
    let options = ComposeOptions::new(4, SortKey::L).with_upscale_below(0);

    let result = compose(&source, &mut store, &tiles, &options);
    assert!(matches!(result, Err(MosaicError::InvalidArgument { .. })));
}

#[test]
fn too_few_tiles_is_reported() {
    let mut tiles = library();
    tiles.remove("grey192.png");
    let mut store = store_for(&tiles);
    let source = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
    let options = ComposeOptions::new(4, SortKey::L).with_upscale_below(0);

    let result = compose(&source, &mut store, &tiles, &options);
    assert!(matches!(
        result,
        Err(MosaicError::StoreTooSmall { len: 4, .. })
    ));
}

#[test]
fn missing_tile_image_is_reported() {
    let tiles = library();
    let mut store = store_for(&tiles);
    let empty: HashMap<String, RgbaImage> = HashMap::new();
    assert!(empty.tile("grey000.png").is_err());

    let source = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
    let options = ComposeOptions::new(4, SortKey::L).with_upscale_below(0);

    let result = compose(&source, &mut store, &empty, &options);
    assert!(matches!(result, Err(MosaicError::MissingTile { .. })));
}
