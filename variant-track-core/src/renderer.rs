use crate::options::{AlleleFrequencyStrategy, FrequencyDisplayConfig};
use crate::scale::LinearScale;
use crate::style::TrackStyle;
use crate::surface::DrawingSurface;
use crate::types::{Rect, VariantRecord};

/// Everything one render pass reads.
#[derive(Clone, Copy, Debug)]
pub struct Scene<'a> {
    pub scale: &'a LinearScale,
    pub variants: &'a [VariantRecord],
    pub width: f64,
    pub height: f64,
    pub display: &'a FrequencyDisplayConfig,
    pub style: &'a TrackStyle,
}

/// Non-fatal problems noticed during a pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderDiagnostic {
    UnknownFrequencyStrategy(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderStats {
    pub glyphs: usize,
    pub diagnostics: Vec<RenderDiagnostic>,
}

/// Fraction of the maximum glyph height a variant gets.
///
/// Returns the unrecognized strategy name alongside the full-height fallback
/// so the caller can report it.
pub fn height_ratio<'c>(
    variant: &VariantRecord,
    display: &'c FrequencyDisplayConfig,
) -> (f64, Option<&'c str>) {
    if !display.variant_height_by_frequency {
        return (1.0, None);
    }
    let frequency = match &display.allele_frequency_strategy {
        None | Some(AlleleFrequencyStrategy::Major) => variant.major_frequency,
        Some(AlleleFrequencyStrategy::Minor) => variant.minor_frequency,
        Some(AlleleFrequencyStrategy::Unrecognized(name)) => return (1.0, Some(name.as_str())),
    };
    (frequency.unwrap_or(1.0), None)
}

/// Top of the glyph band: glyphs sit on the bottom of the track with 1px spare.
pub fn baseline(track_height: f64, style: &TrackStyle) -> f64 {
    track_height - style.variant_height - 1.0
}

/// Rectangle for one variant, on half-pixel edges so 1px strokes stay crisp.
/// Shorter glyphs lose height from the top; the bottom edge never moves.
pub fn glyph_rect(
    variant: &VariantRecord,
    ratio: f64,
    scale: &LinearScale,
    baseline_y: f64,
    style: &TrackStyle,
) -> Rect {
    let max_h = style.variant_height;
    let height = max_h * ratio;
    let y = baseline_y - 0.5 + max_h - height;
    let x = snap(scale.apply(variant.position)) - 0.5;
    let width = snap(scale.apply(variant.position + 1)) - 0.5 - x;
    Rect::new(x, y, width, height)
}

/// Nearest whole pixel, with halves going up (`-0.5` snaps to `0`, not `-1`).
fn snap(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Draw one glyph per variant onto `surface`.
///
/// The call sequence depends only on the scene, never on the surface, so a
/// hit-tracking replay sees the same geometry the canvas got.
pub fn render_scene<S: DrawingSurface + ?Sized>(surface: &mut S, scene: &Scene<'_>) -> RenderStats {
    let y = baseline(scene.height, scene.style);
    let mut stats = RenderStats::default();

    surface.clear(scene.width, scene.height);
    surface.save();
    surface.set_fill_style(&scene.style.variant_fill);
    surface.set_stroke_style(&scene.style.variant_stroke);

    for (idx, variant) in scene.variants.iter().enumerate() {
        let (ratio, unknown) = height_ratio(variant, scene.display);
        if let Some(name) = unknown {
            if stats.diagnostics.is_empty() {
                log::warn!("Unknown allele frequency strategy: {name:?}, drawing full-height variants");
                stats
                    .diagnostics
                    .push(RenderDiagnostic::UnknownFrequencyStrategy(name.to_string()));
            }
        }
        let rect = glyph_rect(variant, ratio, scene.scale, y, scene.style);

        surface.push_object(idx);
        surface.fill_rect(rect);
        surface.stroke_rect(rect);
        surface.pop_object();
        stats.glyphs += 1;
    }

    surface.restore();
    stats
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::interval::GenomicInterval;
    use crate::scale::scale_for;
    use crate::surface::{DrawCall, DrawLog};

    pub(crate) fn variant(id: &str, position: i64, major: Option<f64>, minor: Option<f64>) -> VariantRecord {
        VariantRecord {
            id: id.to_string(),
            contig: "chr1".to_string(),
            position,
            ref_allele: "A".to_string(),
            alt: "T".to_string(),
            major_frequency: major,
            minor_frequency: minor,
            vcf_line: format!("chr1\t{position}\t{id}\tA\tT"),
        }
    }

    fn render(
        variants: &[VariantRecord],
        display: &FrequencyDisplayConfig,
        max_height: f64,
        track_height: f64,
    ) -> (DrawLog, RenderStats) {
        let interval = GenomicInterval::new("chr1", 100, 200).unwrap();
        let scale = scale_for(&interval, 100.0);
        let style = TrackStyle::default().with_variant_height(max_height);
        let scene = Scene {
            scale: &scale,
            variants,
            width: 100.0,
            height: track_height,
            display,
            style: &style,
        };
        let mut log = DrawLog::new();
        let stats = render_scene(&mut log, &scene);
        (log, stats)
    }

    #[test]
    fn test_full_height_when_not_by_frequency() {
        let vs = vec![
            variant("a", 110, Some(0.2), Some(0.8)),
            variant("b", 120, Some(0.9), None),
            variant("c", 130, None, None),
        ];
        let (log, stats) = render(&vs, &FrequencyDisplayConfig::default(), 10.0, 50.0);
        assert_eq!(stats.glyphs, 3);
        for rect in log.filled_rects() {
            assert_eq!(rect.height, 10.0);
        }
    }

    #[test]
    fn test_height_follows_selected_frequency() {
        let vs = vec![variant("a", 110, Some(0.25), Some(0.75))];

        let (log, _) = render(&vs, &FrequencyDisplayConfig::by_frequency(None), 10.0, 50.0);
        assert_eq!(log.filled_rects()[0].height, 2.5);

        let major = FrequencyDisplayConfig::by_frequency(Some(AlleleFrequencyStrategy::Major));
        let (log, _) = render(&vs, &major, 10.0, 50.0);
        assert_eq!(log.filled_rects()[0].height, 2.5);

        let minor = FrequencyDisplayConfig::by_frequency(Some(AlleleFrequencyStrategy::Minor));
        let (log, _) = render(&vs, &minor, 10.0, 50.0);
        assert_eq!(log.filled_rects()[0].height, 7.5);
    }

    #[test]
    fn test_missing_frequency_falls_back_to_full_height() {
        let vs = vec![variant("a", 110, Some(0.4), None)];
        let minor = FrequencyDisplayConfig::by_frequency(Some(AlleleFrequencyStrategy::Minor));
        let (log, stats) = render(&vs, &minor, 10.0, 50.0);
        assert_eq!(log.filled_rects()[0].height, 10.0);
        assert!(stats.diagnostics.is_empty());
    }

    #[test]
    fn test_bottom_edge_fixed_across_ratios() {
        let vs: Vec<_> = [0.0, 0.1, 0.33, 0.5, 0.9, 1.0]
            .iter()
            .enumerate()
            .map(|(i, &f)| variant(&format!("v{i}"), 110 + i as i64, Some(f), None))
            .collect();
        let (log, _) = render(&vs, &FrequencyDisplayConfig::by_frequency(None), 10.0, 50.0);
        let expected = baseline(50.0, &TrackStyle::default().with_variant_height(10.0)) - 0.5 + 10.0;
        for rect in log.filled_rects() {
            assert!((rect.bottom() - expected).abs() < 1e-9, "bottom {} != {}", rect.bottom(), expected);
        }
    }

    #[test]
    fn test_reference_scenario() {
        let vs = vec![variant("rs1", 150, Some(0.5), None)];
        let major = FrequencyDisplayConfig::by_frequency(Some(AlleleFrequencyStrategy::Major));
        let track_height = 40.0;
        let (log, stats) = render(&vs, &major, 10.0, track_height);

        let interval = GenomicInterval::new("chr1", 100, 200).unwrap();
        let scale = scale_for(&interval, 100.0);
        let rect = log.filled_rects()[0];
        assert_eq!(rect.height, 5.0);
        assert_eq!(rect.x, snap(scale.apply(150)) - 0.5);
        assert_eq!(rect.width, 1.0);
        assert_eq!(baseline(track_height, &TrackStyle::default().with_variant_height(10.0)), track_height - 11.0);
        assert_eq!(rect.bottom(), track_height - 11.0 - 0.5 + 10.0);
        assert!(stats.diagnostics.is_empty());
    }

    #[test]
    fn test_unknown_strategy_falls_back_with_one_diagnostic() {
        let vs = vec![variant("rs1", 150, Some(0.5), None)];
        let bogus = FrequencyDisplayConfig::by_frequency(Some(AlleleFrequencyStrategy::Unrecognized(
            "Bogus".into(),
        )));
        let (log, stats) = render(&vs, &bogus, 10.0, 40.0);
        assert_eq!(log.filled_rects()[0].height, 10.0);
        assert_eq!(
            stats.diagnostics,
            vec![RenderDiagnostic::UnknownFrequencyStrategy("Bogus".into())]
        );
    }

    #[test]
    fn test_call_sequence_tags_each_glyph() {
        let vs = vec![variant("a", 110, None, None), variant("b", 120, None, None)];
        let (log, _) = render(&vs, &FrequencyDisplayConfig::default(), 10.0, 40.0);
        let calls = log.calls();
        assert_eq!(calls[0], DrawCall::Clear { width: 100.0, height: 40.0 });
        assert_eq!(calls[1], DrawCall::Save);
        assert_eq!(calls[2], DrawCall::FillStyle("#ddd".into()));
        assert_eq!(calls[3], DrawCall::StrokeStyle("blue".into()));
        assert_eq!(calls[4], DrawCall::PushObject(0));
        assert!(matches!(calls[5], DrawCall::FillRect(_)));
        assert!(matches!(calls[6], DrawCall::StrokeRect(_)));
        assert_eq!(calls[7], DrawCall::PopObject);
        assert_eq!(calls[8], DrawCall::PushObject(1));
        assert_eq!(calls.last(), Some(&DrawCall::Restore));
    }

    #[test]
    fn test_glyph_width_spans_one_base() {
        let interval = GenomicInterval::new("chr1", 0, 10).unwrap();
        let scale = scale_for(&interval, 100.0);
        let style = TrackStyle::default();
        let rect = glyph_rect(&variant("a", 3, None, None), 1.0, &scale, 0.0, &style);
        assert_eq!(rect.x, 29.5);
        assert_eq!(rect.width, 10.0);
    }

    #[test]
    fn test_half_pixel_positions_snap_upward() {
        // Two bases per pixel: position -1 maps to x = -0.5.
        let interval = GenomicInterval::new("chr1", 0, 200).unwrap();
        let scale = scale_for(&interval, 100.0);
        let style = TrackStyle::default();
        let left = glyph_rect(&variant("a", -1, None, None), 1.0, &scale, 0.0, &style);
        assert_eq!(left.x, -0.5);
        assert_eq!(left.width, 0.0);

        let next = glyph_rect(&variant("b", 0, None, None), 1.0, &scale, 0.0, &style);
        assert_eq!(next.x, -0.5);
        assert_eq!(next.width, 1.0);
        assert_eq!(snap(-1.5), -1.0);
        assert_eq!(snap(2.5), 3.0);
    }
}
