use std::fmt;
use std::rc::Rc;

use crate::hit_test::hit_test;
use crate::interval::GenomicInterval;
use crate::options::FrequencyDisplayConfig;
use crate::renderer::{render_scene, RenderStats, Scene};
use crate::scale::scale_for;
use crate::source::VariantSource;
use crate::style::TrackStyle;
use crate::surface::DrawingSurface;
use crate::types::{VariantInfo, VariantRecord};

/// A pointer hook: the variants under the pointer plus the raw event.
pub struct VariantCallback<E>(Rc<dyn Fn(&[VariantInfo], &E)>);

impl<E> VariantCallback<E> {
    pub fn new(f: impl Fn(&[VariantInfo], &E) + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn call(&self, variants: &[VariantInfo], event: &E) {
        (self.0)(variants, event)
    }
}

impl<E> Clone for VariantCallback<E> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

// Identity, not behavior: two hooks are equal when they are the same closure.
impl<E> PartialEq for VariantCallback<E> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<E> fmt::Debug for VariantCallback<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("VariantCallback")
    }
}

/// Optional pointer hooks. A missing hook falls back to logging for click and
/// move; leave has no fallback.
pub struct TrackCallbacks<E> {
    pub on_variant_mouse_move: Option<VariantCallback<E>>,
    pub on_variant_mouse_leave: Option<VariantCallback<E>>,
    pub on_variant_clicked: Option<VariantCallback<E>>,
}

impl<E> Default for TrackCallbacks<E> {
    fn default() -> Self {
        Self {
            on_variant_mouse_move: None,
            on_variant_mouse_leave: None,
            on_variant_clicked: None,
        }
    }
}

impl<E> Clone for TrackCallbacks<E> {
    fn clone(&self) -> Self {
        Self {
            on_variant_mouse_move: self.on_variant_mouse_move.clone(),
            on_variant_mouse_leave: self.on_variant_mouse_leave.clone(),
            on_variant_clicked: self.on_variant_clicked.clone(),
        }
    }
}

impl<E> PartialEq for TrackCallbacks<E> {
    fn eq(&self, other: &Self) -> bool {
        self.on_variant_mouse_move == other.on_variant_mouse_move
            && self.on_variant_mouse_leave == other.on_variant_mouse_leave
            && self.on_variant_clicked == other.on_variant_clicked
    }
}

impl<E> fmt::Debug for TrackCallbacks<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrackCallbacks")
            .field("on_variant_mouse_move", &self.on_variant_mouse_move.is_some())
            .field("on_variant_mouse_leave", &self.on_variant_mouse_leave.is_some())
            .field("on_variant_clicked", &self.on_variant_clicked.is_some())
            .finish()
    }
}

/// Inputs a redraw depends on. Compared field by field to skip redundant redraws.
#[derive(Debug)]
pub struct TrackProps<E> {
    pub range: GenomicInterval,
    pub width: f64,
    pub height: f64,
    pub display: FrequencyDisplayConfig,
    pub callbacks: TrackCallbacks<E>,
}

impl<E> Clone for TrackProps<E> {
    fn clone(&self) -> Self {
        Self {
            range: self.range.clone(),
            width: self.width,
            height: self.height,
            display: self.display.clone(),
            callbacks: self.callbacks.clone(),
        }
    }
}

impl<E> PartialEq for TrackProps<E> {
    fn eq(&self, other: &Self) -> bool {
        self.range == other.range
            && self.width == other.width
            && self.height == other.height
            && self.display == other.display
            && self.callbacks == other.callbacks
    }
}

impl<E> TrackProps<E> {
    pub fn new(range: GenomicInterval, width: f64, height: f64) -> Self {
        Self {
            range,
            width,
            height,
            display: FrequencyDisplayConfig::default(),
            callbacks: TrackCallbacks::default(),
        }
    }

    pub fn with_display(mut self, display: FrequencyDisplayConfig) -> Self {
        self.display = display;
        self
    }

    pub fn with_callbacks(mut self, callbacks: TrackCallbacks<E>) -> Self {
        self.callbacks = callbacks;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RedrawOutcome {
    Drawn(RenderStats),
    /// Props matched the previous snapshot.
    Unchanged,
    /// Width is still zero; layout has not settled.
    Deferred,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Move,
    Leave,
    Click,
}

/// Redraw bookkeeping and pointer dispatch for one variant track.
pub struct TrackController<S, E> {
    source: S,
    style: TrackStyle,
    props: TrackProps<E>,
}

impl<S: VariantSource, E: fmt::Debug> TrackController<S, E> {
    pub fn new(source: S, style: TrackStyle, props: TrackProps<E>) -> Self {
        Self { source, style, props }
    }

    pub fn props(&self) -> &TrackProps<E> {
        &self.props
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Initial draw after the surface exists.
    pub fn mount<D: DrawingSurface + ?Sized>(&mut self, surface: &mut D) -> RedrawOutcome {
        self.redraw(surface)
    }

    /// Accept new props; redraw only if they differ from the last snapshot.
    pub fn update<D: DrawingSurface + ?Sized>(
        &mut self,
        props: TrackProps<E>,
        surface: &mut D,
    ) -> RedrawOutcome {
        if props == self.props {
            return RedrawOutcome::Unchanged;
        }
        self.props = props;
        self.redraw(surface)
    }

    /// Like [`update`](Self::update), but the surface lost its pixels (for
    /// example a canvas resize), so the pass runs even when props are equal.
    pub fn update_after_reset<D: DrawingSurface + ?Sized>(
        &mut self,
        props: TrackProps<E>,
        surface: &mut D,
    ) -> RedrawOutcome {
        self.props = props;
        self.redraw(surface)
    }

    /// The source reported new data.
    pub fn data_arrived<D: DrawingSurface + ?Sized>(&mut self, surface: &mut D) -> RedrawOutcome {
        self.redraw(surface)
    }

    pub fn redraw<D: DrawingSurface + ?Sized>(&mut self, surface: &mut D) -> RedrawOutcome {
        if self.props.width == 0.0 {
            return RedrawOutcome::Deferred;
        }
        let variants = self.source.features_in_range(&self.props.range);
        RedrawOutcome::Drawn(self.with_scene(&variants, |scene| render_scene(surface, scene)))
    }

    /// Variants under pixel `(x, y)` as they would be painted right now.
    pub fn hit_test(&self, x: f64, y: f64) -> Vec<VariantInfo> {
        if self.props.width == 0.0 {
            return Vec::new();
        }
        let variants = self.source.features_in_range(&self.props.range);
        self.with_scene(&variants, |scene| {
            hit_test(scene, x, y).into_iter().map(VariantInfo::from).collect()
        })
    }

    /// Run the hit-test for a pointer event at local offset `(x, y)` and hand
    /// the result to the matching hook, or log it.
    pub fn handle_pointer(&self, kind: PointerKind, x: f64, y: f64, event: &E) -> Vec<VariantInfo> {
        let variants = self.hit_test(x, y);
        let callbacks = &self.props.callbacks;
        match kind {
            PointerKind::Click => match &callbacks.on_variant_clicked {
                Some(cb) => cb.call(&variants, event),
                None => log::info!("Variants clicked: {variants:?} {event:?}"),
            },
            PointerKind::Move => match &callbacks.on_variant_mouse_move {
                Some(cb) => cb.call(&variants, event),
                None if !variants.is_empty() => {
                    log::info!("Variants mouse move: {variants:?} {event:?}")
                }
                None => {}
            },
            PointerKind::Leave => {
                if let Some(cb) = &callbacks.on_variant_mouse_leave {
                    cb.call(&variants, event);
                }
            }
        }
        variants
    }

    fn with_scene<R>(&self, variants: &[VariantRecord], f: impl FnOnce(&Scene<'_>) -> R) -> R {
        let scale = scale_for(&self.props.range, self.props.width);
        let scene = Scene {
            scale: &scale,
            variants,
            width: self.props.width,
            height: self.props.height,
            display: &self.props.display,
            style: &self.style,
        };
        f(&scene)
    }
}
