use crate::types::Rect;

/// The draw-call contract the scene renderer is written against.
///
/// Implementations either put pixels somewhere (a canvas) or only watch the
/// geometry go by (hit tracking, call logging). The renderer must issue the
/// same sequence of calls to every implementation.
pub trait DrawingSurface {
    fn clear(&mut self, width: f64, height: f64);
    fn save(&mut self);
    fn restore(&mut self);
    fn set_fill_style(&mut self, color: &str);
    fn set_stroke_style(&mut self, color: &str);
    /// Tag everything drawn until the matching `pop_object` with `index`.
    fn push_object(&mut self, index: usize);
    fn pop_object(&mut self);
    fn fill_rect(&mut self, rect: Rect);
    fn stroke_rect(&mut self, rect: Rect);
}

/// Records which tagged objects were drawn over a single pixel.
///
/// Never produces visible output.
#[derive(Debug)]
pub struct HitTrackingSurface {
    x: f64,
    y: f64,
    // Open tags and whether each has been recorded yet; a glyph that is
    // filled and stroked counts once.
    stack: Vec<(usize, bool)>,
    hits: Vec<usize>,
}

impl HitTrackingSurface {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            stack: Vec::new(),
            hits: Vec::new(),
        }
    }

    /// Tagged objects hit so far, in draw order.
    pub fn hits(&self) -> &[usize] {
        &self.hits
    }

    pub fn into_hits(self) -> Vec<usize> {
        self.hits
    }

    fn check(&mut self, rect: Rect) {
        let Some((top, recorded)) = self.stack.last_mut() else { return };
        if !*recorded && rect.contains(self.x, self.y) {
            self.hits.push(*top);
            *recorded = true;
        }
    }
}

impl DrawingSurface for HitTrackingSurface {
    fn clear(&mut self, _width: f64, _height: f64) {}
    fn save(&mut self) {}
    fn restore(&mut self) {}
    fn set_fill_style(&mut self, _color: &str) {}
    fn set_stroke_style(&mut self, _color: &str) {}

    fn push_object(&mut self, index: usize) {
        self.stack.push((index, false));
    }

    fn pop_object(&mut self) {
        self.stack.pop();
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.check(rect);
    }

    fn stroke_rect(&mut self, rect: Rect) {
        self.check(rect);
    }
}

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear { width: f64, height: f64 },
    Save,
    Restore,
    FillStyle(String),
    StrokeStyle(String),
    PushObject(usize),
    PopObject,
    FillRect(Rect),
    StrokeRect(Rect),
}

/// A headless surface that keeps every call it receives.
#[derive(Clone, Debug, Default)]
pub struct DrawLog {
    calls: Vec<DrawCall>,
}

impl DrawLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    pub fn clear_log(&mut self) {
        self.calls.clear();
    }

    /// Rectangles passed to `fill_rect`, in order.
    pub fn filled_rects(&self) -> Vec<Rect> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::FillRect(r) => Some(*r),
                _ => None,
            })
            .collect()
    }
}

impl DrawingSurface for DrawLog {
    fn clear(&mut self, width: f64, height: f64) {
        self.calls.push(DrawCall::Clear { width, height });
    }

    fn save(&mut self) {
        self.calls.push(DrawCall::Save);
    }

    fn restore(&mut self) {
        self.calls.push(DrawCall::Restore);
    }

    fn set_fill_style(&mut self, color: &str) {
        self.calls.push(DrawCall::FillStyle(color.to_string()));
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.calls.push(DrawCall::StrokeStyle(color.to_string()));
    }

    fn push_object(&mut self, index: usize) {
        self.calls.push(DrawCall::PushObject(index));
    }

    fn pop_object(&mut self) {
        self.calls.push(DrawCall::PopObject);
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.calls.push(DrawCall::FillRect(rect));
    }

    fn stroke_rect(&mut self, rect: Rect) {
        self.calls.push(DrawCall::StrokeRect(rect));
    }
}
