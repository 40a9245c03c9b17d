//! End-to-end editor scenarios.
//!
//! These drive the editor through messages the way a host would and check
//! the resulting scene and exported pixels.


use image::{Rgba, RgbaImage};
use polycanvas_raster::Color;

use crate::background::BackgroundImage;
use crate::editor::Editor;
use crate::geometry::Point;
use crate::input::{Modifiers, PointerButton, Tool};
use crate::message::Message;
use crate::model::PolygonId;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// A 100x100 editor with one active tag.
fn editor_with_tag(tag: &str) -> Editor {
    let mut editor = Editor::with_canvas_size(Default::default(), 100, 100);
    editor.add_tag(tag, Color::rgb(0x33, 0x66, 0x99), 1.0).unwrap();
    editor
}

fn white_background(size: u32) -> BackgroundImage {
    BackgroundImage::new(RgbaImage::from_pixel(size, size, Rgba([255, 255, 255, 255])))
}

fn press(editor: &mut Editor, x: f64, y: f64, button: PointerButton, modifiers: Modifiers) {
    editor
        .update(Message::PointerPressed {
            position: Point::new(x, y),
            button,
            modifiers,
        })
        .unwrap();
}

fn move_to(editor: &mut Editor, x: f64, y: f64) {
    editor
        .update(Message::PointerMoved {
            position: Point::new(x, y),
        })
        .unwrap();
}

fn release(editor: &mut Editor, x: f64, y: f64, button: PointerButton) {
    editor
        .update(Message::PointerReleased {
            position: Point::new(x, y),
            button,
        })
        .unwrap();
}

fn click(editor: &mut Editor, x: f64, y: f64) {
    click_with(editor, x, y, Modifiers::NONE);
}

fn click_with(editor: &mut Editor, x: f64, y: f64, modifiers: Modifiers) {
    press(editor, x, y, PointerButton::Left, modifiers);
    release(editor, x, y, PointerButton::Left);
}

fn tool(editor: &mut Editor, tool: Tool) {
    editor.update(Message::ActivateTool(tool)).unwrap();
}

/// Draw a polygon in screen coordinates and close it with a right click.
/// Returns the id of the committed polygon.
fn draw_polygon(editor: &mut Editor, vertices: &[(f64, f64)]) -> PolygonId {
    tool(editor, Tool::Draw);
    for (x, y) in vertices {
        click(editor, *x, *y);
    }
    let before = editor.scene().polygons().len();
    press(editor, 0.0, 0.0, PointerButton::Right, Modifiers::NONE);
    let polygons = editor.scene().polygons();
    assert_eq!(polygons.len(), before + 1, "polygon was not committed");
    polygons[before].id()
}
