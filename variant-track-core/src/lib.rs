//! Rendering and hit-testing core for a genome browser variant track.
//!
//! Variants are drawn as small rectangles along a genomic axis. Their height
//! can follow an allele frequency. Pointer hit-tests replay the same draw pass
//! against a recording surface instead of keeping a spatial index, so what is
//! reported under the pointer is exactly what was painted there.

pub mod interval;
pub mod options;
pub mod renderer;
pub mod scale;
pub mod source;
pub mod style;
pub mod surface;
pub mod track;
pub mod types;

pub use hit_test::hit_test;
pub use interval::{GenomicInterval, IntervalError};
pub use options::{AlleleFrequencyStrategy, FrequencyDisplayConfig};
pub use renderer::{render_scene, RenderDiagnostic, RenderStats, Scene};
pub use scale::{scale_for, LinearScale};
pub use source::{ListenerId, MemoryVariantSource, VariantSource};
pub use style::TrackStyle;
pub use surface::{DrawCall, DrawLog, DrawingSurface, HitTrackingSurface};
pub use track::{
    PointerKind, RedrawOutcome, TrackCallbacks, TrackController, TrackProps, VariantCallback,
};
pub use types::{Rect, VariantInfo, VariantRecord};
