use crate::interval::GenomicInterval;

/// Linear map from genomic position to pixel x.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        }
    }

    /// Pixel x for `position`. Positions outside the domain extrapolate.
    pub fn apply(&self, position: i64) -> f64 {
        self.apply_f64(position as f64)
    }

    pub fn apply_f64(&self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        if span == 0.0 {
            return self.range_start;
        }
        // Multiply before dividing so whole-base positions land on exact pixels.
        self.range_start + (value - self.domain_start) * (self.range_end - self.range_start) / span
    }

    /// Pixels per base.
    pub fn px_per_base(&self) -> f64 {
        let span = self.domain_end - self.domain_start;
        if span == 0.0 {
            0.0
        } else {
            (self.range_end - self.range_start) / span
        }
    }
}

/// Track scale spanning the visible interval across `width` pixels.
pub fn scale_for(interval: &GenomicInterval, width: f64) -> LinearScale {
    LinearScale::new(
        (interval.start() as f64, interval.stop() as f64),
        (0.0, width.max(0.0)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chr1(start: i64, stop: i64) -> GenomicInterval {
        GenomicInterval::new("chr1", start, stop).unwrap()
    }

    #[test]
    fn test_endpoints_map_to_edges() {
        let scale = scale_for(&chr1(100, 200), 100.0);
        assert_eq!(scale.apply(100), 0.0);
        assert_eq!(scale.apply(200), 100.0);
        assert_eq!(scale.apply(150), 50.0);
        assert_eq!(scale.px_per_base(), 1.0);
    }

    #[test]
    fn test_extrapolates_beyond_interval() {
        let scale = scale_for(&chr1(0, 10), 100.0);
        assert_eq!(scale.apply(-1), -10.0);
        assert_eq!(scale.apply(11), 110.0);
    }

    #[test]
    fn test_extrapolation_is_exact_past_both_ends() {
        let scale = scale_for(&chr1(0, 10), 100.0);
        for pos in [-7, -3, 13, 17, 23, 99] {
            assert_eq!(scale.apply(pos), pos as f64 * 10.0, "position {pos}");
        }
        let scale = scale_for(&chr1(0, 200), 100.0);
        assert_eq!(scale.apply(-1), -0.5);
        assert_eq!(scale.apply(201), 100.5);
    }

    #[test]
    fn test_monotonic_and_stable() {
        let iv = chr1(1_000, 1_700);
        let a = scale_for(&iv, 640.0);
        let b = scale_for(&iv, 640.0);
        let mut last = f64::NEG_INFINITY;
        for pos in 990..1_710 {
            let x = a.apply(pos);
            assert!(x > last, "scale must increase at {pos}");
            assert_eq!(x, b.apply(pos));
            last = x;
        }
    }

    #[test]
    fn test_empty_interval_does_not_divide_by_zero() {
        let scale = scale_for(&chr1(50, 50), 100.0);
        assert_eq!(scale.apply(50), 0.0);
        assert_eq!(scale.apply(70), 0.0);
        assert_eq!(scale.px_per_base(), 0.0);
    }

    #[test]
    fn test_zero_width_collapses_range() {
        let scale = scale_for(&chr1(0, 100), 0.0);
        assert_eq!(scale.apply(40), 0.0);
    }
}
