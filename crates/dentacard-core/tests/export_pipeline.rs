//! End-to-end export pipeline tests: record -> rendered surface ->
//! rasterized JPEG, driven headlessly against a plain SurfaceStore.

use chrono::NaiveDate;
use dentacard_core::{
    render, update, CardError, CardField, CardRecord, CardSide, PageSizeMm, RasterOptions,
    Rasterizer, SurfaceStore, CARD_HEIGHT_MM, CARD_WIDTH_MM,
};

fn sample_record() -> CardRecord {
    let record = CardRecord::new(NaiveDate::from_ymd_opt(2025, 3, 7).unwrap());
    let record = update(&record, CardField::SerialNumber, "2025-001");
    let record = update(&record, CardField::Doctor, "Dr. A. Sharma");
    let record = update(&record, CardField::Patient, "R. Verma");
    let record = update(&record, CardField::WorkType, "Crown");
    let record = update(&record, CardField::WarrantyPeriod, "5 years");
    update(&record, CardField::UpperRight, "11, 12")
}

fn mounted_store() -> SurfaceStore {
    let record = sample_record();
    let mut store = SurfaceStore::new();
    store.mount(render(&record, CardSide::Front));
    store.mount(render(&record, CardSide::Back));
    store
}

fn raster_options(pixel_ratio: f32) -> RasterOptions {
    RasterOptions {
        pixel_ratio,
        ..RasterOptions::default()
    }
}

#[test]
fn unit_pixel_ratio_yields_the_exact_css_pixel_size() {
    let rasterizer = Rasterizer::new();
    let image = rasterizer
        .rasterize_active(
            &mounted_store(),
            CardSide::Front,
            CARD_WIDTH_MM,
            CARD_HEIGHT_MM,
            &raster_options(1.0),
        )
        .unwrap()
        .expect("surface is mounted");

    // round(85.6 / 25.4 * 96) x round(54.0 / 25.4 * 96)
    assert_eq!((image.width, image.height), (324, 204));
}

#[test]
fn default_pixel_ratio_triples_the_output() {
    let rasterizer = Rasterizer::new();
    let image = rasterizer
        .rasterize_active(
            &mounted_store(),
            CardSide::Back,
            CARD_WIDTH_MM,
            CARD_HEIGHT_MM,
            &RasterOptions::default(),
        )
        .unwrap()
        .expect("surface is mounted");

    assert_eq!((image.width, image.height), (972, 612));
}

#[test]
fn payload_is_a_jpeg_stream() {
    let rasterizer = Rasterizer::new();
    let image = rasterizer
        .rasterize_active(
            &mounted_store(),
            CardSide::Front,
            CARD_WIDTH_MM,
            CARD_HEIGHT_MM,
            &raster_options(1.0),
        )
        .unwrap()
        .unwrap();

    // JPEG SOI marker, EOI trailer.
    assert_eq!(&image.jpeg[..2], &[0xFF, 0xD8]);
    assert_eq!(&image.jpeg[image.jpeg.len() - 2..], &[0xFF, 0xD9]);
}

#[test]
fn exporting_an_unmounted_side_produces_no_file() {
    let rasterizer = Rasterizer::new();
    let mut store = mounted_store();
    store.unmount(CardSide::Front);

    let result = rasterizer
        .rasterize_active(
            &store,
            CardSide::Front,
            CARD_WIDTH_MM,
            CARD_HEIGHT_MM,
            &raster_options(1.0),
        )
        .unwrap();

    assert!(result.is_none());
}

#[test]
fn size_other_than_the_card_footprint_is_rejected() {
    let rasterizer = Rasterizer::new();
    let err = rasterizer
        .rasterize_active(
            &mounted_store(),
            CardSide::Front,
            100.0,
            CARD_HEIGHT_MM,
            &raster_options(1.0),
        )
        .unwrap_err();

    assert!(matches!(err, CardError::PageSizeMismatch { .. }));
}

#[test]
fn export_always_reads_the_most_recently_mounted_surface() {
    let rasterizer = Rasterizer::new();
    let mut store = mounted_store();

    let before = store.active(CardSide::Front).unwrap().svg.clone();
    let edited = update(&sample_record(), CardField::Patient, "Someone Else");
    store.mount(render(&edited, CardSide::Front));
    let after = store.active(CardSide::Front).unwrap().svg.clone();
    assert_ne!(before, after);

    // Both captures succeed; each reads its own immutable snapshot.
    let image = rasterizer
        .rasterize_active(
            &store,
            CardSide::Front,
            CARD_WIDTH_MM,
            CARD_HEIGHT_MM,
            &raster_options(1.0),
        )
        .unwrap()
        .unwrap();
    assert_eq!((image.width, image.height), (324, 204));
}

#[test]
fn concurrent_exports_both_complete() {
    let rasterizer = std::sync::Arc::new(Rasterizer::new());
    let store = mounted_store();

    let handles: Vec<_> = [CardSide::Front, CardSide::Back]
        .into_iter()
        .map(|side| {
            let rasterizer = std::sync::Arc::clone(&rasterizer);
            let store = store.clone();
            std::thread::spawn(move || {
                rasterizer.rasterize_active(
                    &store,
                    side,
                    CARD_WIDTH_MM,
                    CARD_HEIGHT_MM,
                    &raster_options(1.0),
                )
            })
        })
        .collect();

    for handle in handles {
        let image = handle.join().unwrap().unwrap().unwrap();
        assert_eq!((image.width, image.height), (324, 204));
    }
}

#[test]
fn mismatched_raster_size_never_reaches_the_encoder() {
    let rasterizer = Rasterizer::new();
    let surface = render(&sample_record(), CardSide::Front);
    let err = rasterizer
        .rasterize(&surface, PageSizeMm::card().width, 60.0, &raster_options(1.0))
        .unwrap_err();
    assert!(matches!(err, CardError::PageSizeMismatch { .. }));
}
