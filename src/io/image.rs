//! PNG preview of compiled geometry
//!
//! Tiles are filled by kind with an even-odd point-in-polygon test at pixel
//! centres, then outlined. The view is fitted to the geometry's bounding box
//! with a fixed margin and y pointing up.

use crate::analysis::statistics::Bounds;
use crate::io::configuration::IMAGE_MARGIN_PX;
use crate::io::error::{Result, TilingError};
use crate::spatial::geometry::CompiledGeometry;
use crate::spatial::point::Point2;
use crate::spatial::tiles::TileKind;
use image::{Rgba, RgbaImage};
use std::path::Path;

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 0]);
const OUTLINE: Rgba<u8> = Rgba([40, 40, 48, 255]);

/// Fill colour used for `kind`
pub const fn kind_color(kind: TileKind) -> Rgba<u8> {
    match kind {
        TileKind::ThickRhombus => Rgba([233, 170, 64, 255]),
        TileKind::ThinRhombus => Rgba([66, 121, 181, 255]),
        TileKind::Kite => Rgba([120, 179, 104, 255]),
        TileKind::Dart => Rgba([196, 84, 84, 255]),
        TileKind::RobinsonLarge => Rgba([171, 131, 196, 255]),
        TileKind::RobinsonSmall => Rgba([140, 140, 140, 255]),
    }
}

// Maps plane coordinates to pixel coordinates
struct Viewport {
    origin: Point2,
    scale: f64,
    size: f64,
}

impl Viewport {
    fn fit(bounds: &Bounds, size: u32) -> Self {
        let drawable = f64::from(size.saturating_sub(2 * IMAGE_MARGIN_PX).max(1));
        let extent = bounds.width().max(bounds.height());
        let scale = if extent > 0.0 { drawable / extent } else { 1.0 };
        let center = bounds.center();
        let half = f64::from(size) / (2.0 * scale);

        Self {
            origin: Point2::new(center.x - half, center.y - half),
            scale,
            size: f64::from(size),
        }
    }

    const fn to_pixel(&self, p: Point2) -> Point2 {
        Point2::new(
            (p.x - self.origin.x) * self.scale,
            self.size - (p.y - self.origin.y) * self.scale,
        )
    }
}

/// Rasterize `geometry` onto a square canvas of `size` pixels
///
/// # Errors
///
/// Returns `EmptyTiling` if the geometry has no vertices
pub fn render_geometry(geometry: &CompiledGeometry, size: u32) -> Result<RgbaImage> {
    let bounds = Bounds::from_points(geometry.vertices.iter().copied())
        .ok_or(TilingError::EmptyTiling)?;
    let viewport = Viewport::fit(&bounds, size);
    let mut img = RgbaImage::from_pixel(size, size, BACKGROUND);

    for record in &geometry.metadata.per_tile {
        let polygon: Vec<Point2> = geometry
            .tile_vertices(record)
            .iter()
            .map(|&v| viewport.to_pixel(v))
            .collect();
        fill_polygon(&mut img, &polygon, kind_color(record.kind));
        outline_polygon(&mut img, &polygon, OUTLINE);
    }

    Ok(img)
}

/// Render `geometry` and save it as a PNG at `output_path`
///
/// # Errors
///
/// Returns an error if:
/// - The geometry has no vertices
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_geometry_as_png(
    geometry: &CompiledGeometry,
    size: u32,
    output_path: &Path,
) -> Result<()> {
    let img = render_geometry(geometry, size)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| TilingError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| TilingError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}

fn contains(polygon: &[Point2], x: f64, y: f64) -> bool {
    let mut inside = false;
    let shifted = polygon.iter().cycle().skip(polygon.len().saturating_sub(1));
    for (a, b) in polygon.iter().zip(shifted) {
        if (a.y > y) != (b.y > y) {
            let crossing = (b.x - a.x) * (y - a.y) / (b.y - a.y) + a.x;
            if x < crossing {
                inside = !inside;
            }
        }
    }
    inside
}

fn fill_polygon(img: &mut RgbaImage, polygon: &[Point2], color: Rgba<u8>) {
    let Some(bounds) = Bounds::from_points(polygon.iter().copied()) else {
        return;
    };
    let (width, height) = img.dimensions();
    let x0 = bounds.min.x.floor().max(0.0) as u32;
    let y0 = bounds.min.y.floor().max(0.0) as u32;
    let x1 = (bounds.max.x.ceil().max(0.0) as u32).min(width);
    let y1 = (bounds.max.y.ceil().max(0.0) as u32).min(height);

    for py in y0..y1 {
        for px in x0..x1 {
            if contains(polygon, f64::from(px) + 0.5, f64::from(py) + 0.5) {
                img.put_pixel(px, py, color);
            }
        }
    }
}

fn outline_polygon(img: &mut RgbaImage, polygon: &[Point2], color: Rgba<u8>) {
    let next = polygon.iter().cycle().skip(1);
    for (&a, &b) in polygon.iter().zip(next) {
        draw_line(img, a, b, color);
    }
}

fn draw_line(img: &mut RgbaImage, from: Point2, to: Point2, color: Rgba<u8>) {
    let (width, height) = img.dimensions();
    let steps = (to.x - from.x).abs().max((to.y - from.y).abs()).ceil().max(1.0);

    for i in 0..=(steps as u32) {
        let p = from.lerp(to, f64::from(i) / steps);
        if p.x < 0.0 || p.y < 0.0 {
            continue;
        }
        let (px, py) = (p.x as u32, p.y as u32);
        if px < width && py < height {
            img.put_pixel(px, py, color);
        }
    }
}
