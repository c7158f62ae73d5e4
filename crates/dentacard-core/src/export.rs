//! Raster export: [`RenderSurface`] -> JPEG bytes at exact physical scale.
//!
//! The one precision-sensitive contract in the system: millimetres are
//! converted to CSS reference pixels at 96 per inch and rounded to whole
//! pixels, then the surface is rasterized at `pixel_ratio` times that
//! size. Because the capture re-renders the vector tree into a fresh
//! pixmap with a plain scale transform, ambient preview state (zoom,
//! scroll, CSS transforms) can never distort the output geometry.

use std::io::Cursor;
use std::sync::Arc;

use image::codecs::jpeg::JpegEncoder;
use image::RgbImage;

use crate::error::CardError;
use crate::geometry::mm_to_css_px;
use crate::surface::{CardSide, RenderSurface, SurfaceStore};

/// Options for raster export.
#[derive(Debug, Clone)]
pub struct RasterOptions {
    /// Opaque background fill (`#RRGGBB` or `#RGB`); JPEG has no alpha
    /// channel, so transparency is flattened onto this colour.
    pub background: String,
    /// Output sharpness multiplier over the CSS pixel size.
    pub pixel_ratio: f32,
    /// JPEG encoder quality in `[0, 1]`.
    pub quality: f32,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            background: "#FFFFFF".to_string(),
            pixel_ratio: 3.0,
            quality: 0.95,
        }
    }
}

/// An encoded raster export.
#[derive(Debug, Clone)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub jpeg: Vec<u8>,
}

/// SVG rasterizer with a pre-loaded system font database.
///
/// Construction scans system fonts once; the rasterizer is cheap to
/// share behind an [`Arc`] after that.
pub struct Rasterizer {
    fontdb: Arc<usvg::fontdb::Database>,
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer {
    pub fn new() -> Self {
        let mut fontdb = usvg::fontdb::Database::new();
        fontdb.load_system_fonts();
        if fontdb.is_empty() {
            tracing::warn!("no system fonts found, card text may not render");
        }
        Self {
            fontdb: Arc::new(fontdb),
        }
    }

    /// Rasterize the mounted surface for `side`, or silently do nothing.
    ///
    /// Returns `Ok(None)` when no surface is mounted for that side: an
    /// export triggered during a tab switch must never produce a stale
    /// or blank file.
    pub fn rasterize_active(
        &self,
        store: &SurfaceStore,
        side: CardSide,
        width_mm: f64,
        height_mm: f64,
        options: &RasterOptions,
    ) -> Result<Option<RasterImage>, CardError> {
        match store.active(side) {
            Some(surface) => self.rasterize(surface, width_mm, height_mm, options).map(Some),
            None => {
                tracing::debug!(side = side.as_str(), "no mounted surface, skipping export");
                Ok(None)
            }
        }
    }

    /// Rasterize one surface at the requested physical size.
    pub fn rasterize(
        &self,
        surface: &RenderSurface,
        width_mm: f64,
        height_mm: f64,
        options: &RasterOptions,
    ) -> Result<RasterImage, CardError> {
        if width_mm != surface.size.width || height_mm != surface.size.height {
            return Err(CardError::PageSizeMismatch {
                requested_width: width_mm,
                requested_height: height_mm,
                surface_width: surface.size.width,
                surface_height: surface.size.height,
            });
        }

        let css_w = mm_to_css_px(width_mm);
        let css_h = mm_to_css_px(height_mm);
        let width = (css_w as f32 * options.pixel_ratio).round() as u32;
        let height = (css_h as f32 * options.pixel_ratio).round() as u32;

        let mut pixmap = tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| CardError::Pixmap(format!("failed to create pixmap ({width}x{height})")))?;
        pixmap.fill(parse_background(&options.background));

        let tree = {
            let mut opts = usvg::Options::default();
            opts.fontdb = Arc::clone(&self.fontdb);
            usvg::Tree::from_str(&surface.svg, &opts)
                .map_err(|e| CardError::SvgParse(e.to_string()))?
        };

        let sx = width as f32 / tree.size().width();
        let sy = height as f32 / tree.size().height();
        resvg::render(&tree, tiny_skia::Transform::from_scale(sx, sy), &mut pixmap.as_mut());

        let jpeg = encode_jpeg(&pixmap, options.quality)?;
        Ok(RasterImage { width, height, jpeg })
    }
}

/// Download file name: `warranty-<side>-<timestamp>.jpeg`. The caller
/// supplies a monotonically increasing timestamp (epoch millis), which
/// keeps repeated exports within a session distinct.
pub fn export_file_name(side: CardSide, timestamp_ms: i64) -> String {
    format!("warranty-{side}-{timestamp_ms}.jpeg")
}

/// Flatten the premultiplied pixmap to RGB and encode as JPEG.
fn encode_jpeg(pixmap: &tiny_skia::Pixmap, quality: f32) -> Result<Vec<u8>, CardError> {
    let mut rgb = Vec::with_capacity(pixmap.width() as usize * pixmap.height() as usize * 3);
    for pixel in pixmap.pixels() {
        let c = pixel.demultiply();
        rgb.extend_from_slice(&[c.red(), c.green(), c.blue()]);
    }
    let img = RgbImage::from_raw(pixmap.width(), pixmap.height(), rgb)
        .ok_or_else(|| CardError::Pixmap("pixel buffer size mismatch".to_string()))?;

    let mut out = Vec::new();
    let encoder = JpegEncoder::new_with_quality(Cursor::new(&mut out), jpeg_quality(quality));
    img.write_with_encoder(encoder)?;
    Ok(out)
}

/// Map the `[0, 1]` quality contract onto the encoder's `1..=100` scale.
fn jpeg_quality(quality: f32) -> u8 {
    (quality.clamp(0.0, 1.0) * 100.0).round().max(1.0) as u8
}

/// Parse a `#RRGGBB`/`#RGB` colour, falling back to opaque white.
fn parse_background(raw: &str) -> tiny_skia::Color {
    let hex = raw.trim().trim_start_matches('#');
    let rgb = match hex.len() {
        6 => u32::from_str_radix(hex, 16).ok().map(|v| {
            ((v >> 16) as u8, (v >> 8) as u8, v as u8)
        }),
        3 => u32::from_str_radix(hex, 16).ok().map(|v| {
            let (r, g, b) = ((v >> 8) as u8 & 0xf, (v >> 4) as u8 & 0xf, v as u8 & 0xf);
            (r << 4 | r, g << 4 | g, b << 4 | b)
        }),
        _ => None,
    };
    match rgb {
        Some((r, g, b)) => tiny_skia::Color::from_rgba8(r, g, b, 255),
        None => tiny_skia::Color::WHITE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_carry_side_and_timestamp() {
        assert_eq!(
            export_file_name(CardSide::Front, 1_725_000_000_000),
            "warranty-front-1725000000000.jpeg"
        );
        assert_eq!(
            export_file_name(CardSide::Back, 7),
            "warranty-back-7.jpeg"
        );
    }

    #[test]
    fn consecutive_exports_get_distinct_names() {
        let first = export_file_name(CardSide::Front, 1000);
        let second = export_file_name(CardSide::Front, 1001);
        assert_ne!(first, second);
    }

    #[test]
    fn quality_maps_onto_the_encoder_scale() {
        assert_eq!(jpeg_quality(0.95), 95);
        assert_eq!(jpeg_quality(1.0), 100);
        assert_eq!(jpeg_quality(0.0), 1);
        assert_eq!(jpeg_quality(2.5), 100);
        assert_eq!(jpeg_quality(-1.0), 1);
    }

    #[test]
    fn background_parses_hex_and_falls_back_to_white() {
        let c = parse_background("#336699");
        assert_eq!((c.red(), c.green(), c.blue()), (0.2, 0.4, 0.6));

        let short = parse_background("#fff");
        assert_eq!(short, tiny_skia::Color::WHITE);

        assert_eq!(parse_background("bogus"), tiny_skia::Color::WHITE);
        assert_eq!(parse_background(""), tiny_skia::Color::WHITE);
    }
}
