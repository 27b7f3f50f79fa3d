use variant_track_core::{DrawingSurface, Rect};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Paints straight onto a 2d canvas context.
pub struct CanvasSurface<'a> {
    ctx: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasSurface<'a> {
    pub fn new(ctx: &'a CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl DrawingSurface for CanvasSurface<'_> {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn set_fill_style(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.ctx.set_stroke_style_str(color);
    }

    // Tags only matter to recording surfaces.
    fn push_object(&mut self, _index: usize) {}
    fn pop_object(&mut self) {}

    fn fill_rect(&mut self, rect: Rect) {
        self.ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
    }

    fn stroke_rect(&mut self, rect: Rect) {
        self.ctx.stroke_rect(rect.x, rect.y, rect.width, rect.height);
    }
}

pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, String> {
    canvas
        .get_context("2d")
        .map_err(|e| format!("get_context failed: {e:?}"))?
        .ok_or_else(|| "canvas has no 2d context".to_string())?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| "2d context has an unexpected type".to_string())
}

/// Size the backing store for the device pixel ratio and scale the context so
/// drawing code keeps working in CSS pixels. Only touches `width`/`height`
/// when they change, since assigning them wipes the canvas. Returns whether
/// that happened.
pub fn size_canvas(
    canvas: &HtmlCanvasElement,
    ctx: &CanvasRenderingContext2d,
    width: f64,
    height: f64,
) -> Result<bool, String> {
    let ratio = web_sys::window()
        .map(|w| w.device_pixel_ratio())
        .filter(|r| *r > 0.0)
        .unwrap_or(1.0);
    let backing_w = (width * ratio).round() as u32;
    let backing_h = (height * ratio).round() as u32;
    let resized = canvas.width() != backing_w || canvas.height() != backing_h;
    if resized {
        canvas.set_width(backing_w);
        canvas.set_height(backing_h);
        let style = canvas.style();
        style
            .set_property("width", &format!("{width}px"))
            .and_then(|_| style.set_property("height", &format!("{height}px")))
            .map_err(|e| format!("failed to set canvas css size: {e:?}"))?;
    }
    ctx.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0)
        .map_err(|e| format!("set_transform failed: {e:?}"))?;
    Ok(resized)
}

/// Prepare `canvas` for a pass at `width`×`height` CSS pixels and hand a
/// painting surface to `draw`, along with whether sizing wiped the canvas.
/// A zero width leaves the canvas untouched.
pub fn paint<R>(
    canvas: &HtmlCanvasElement,
    width: f64,
    height: f64,
    draw: impl FnOnce(&mut CanvasSurface<'_>, bool) -> R,
) -> Result<R, String> {
    let ctx = context_2d(canvas)?;
    let wiped = width > 0.0 && size_canvas(canvas, &ctx, width, height)?;
    let mut surface = CanvasSurface::new(&ctx);
    Ok(draw(&mut surface, wiped))
}
