//! Full-content raster export.
//!
//! Exports always render the whole logical canvas at 1:1, whatever the live
//! view is zoomed or panned to, and without selection decorations.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::NaiveDate;
use image::RgbaImage;
use polycanvas_raster::{Canvas, RasterError};

use crate::render::{RenderOptions, Renderer};
use crate::scene::Scene;

const DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Render the scene's full content onto a fresh canvas of the scene's size.
pub fn render_canvas(scene: &Scene, renderer: &Renderer) -> Result<Canvas, RasterError> {
    let (width, height) = scene.canvas_size();
    let mut canvas = Canvas::new(width, height)?;
    canvas.execute(&renderer.build(scene, &RenderOptions::export()));
    Ok(canvas)
}

pub fn render_full(scene: &Scene, renderer: &Renderer) -> Result<RgbaImage, RasterError> {
    Ok(render_canvas(scene, renderer)?.to_rgba_image())
}

/// PNG bytes of the full content.
pub fn export_png(scene: &Scene, renderer: &Renderer) -> Result<Vec<u8>, RasterError> {
    let png = render_canvas(scene, renderer)?.encode_png()?;
    log::info!("📤 Exported {} bytes of PNG", png.len());
    Ok(png)
}

/// `data:image/png;base64,...` serialization for storage collaborators.
pub fn to_data_url(scene: &Scene, renderer: &Renderer) -> Result<String, RasterError> {
    let png = export_png(scene, renderer)?;
    Ok(format!("{}{}", DATA_URL_PREFIX, STANDARD.encode(png)))
}

/// Download name for an export made on `date`.
pub fn export_filename(date: NaiveDate) -> String {
    format!("drawing_{}.png", date.format("%Y-%m-%d"))
}

/// Download name for an export made today (local time).
pub fn export_filename_today() -> String {
    export_filename(chrono::Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn scene() -> Scene {
        let mut scene = Scene::with_canvas_size(40, 30);
        scene.start_new_polygon();
        for (x, y) in [(0.0, 0.0), (20.0, 0.0), (20.0, 20.0), (0.0, 20.0)] {
            scene.add_vertex(Point::new(x, y));
        }
        scene.finish_current_polygon(None);
        scene
    }

    #[test]
    fn test_export_filename() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(export_filename(date), "drawing_2024-03-07.png");
        assert!(export_filename_today().starts_with("drawing_"));
    }

    #[test]
    fn test_export_ignores_live_view() {
        let renderer = Renderer::default();
        let plain = render_full(&scene(), &renderer).unwrap();

        let mut zoomed = scene();
        zoomed.zoom_at(3.0, Point::new(35.0, 25.0));
        zoomed.pan_view(-100.0, 40.0);
        assert_eq!(render_full(&zoomed, &renderer).unwrap(), plain);
        assert_eq!(plain.dimensions(), (40, 30));
    }

    #[test]
    fn test_data_url_decodes_to_png() {
        let url = to_data_url(&scene(), &Renderer::default()).unwrap();
        let payload = url.strip_prefix(DATA_URL_PREFIX).unwrap();
        let bytes = STANDARD.decode(payload).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (40, 30));
    }
}
