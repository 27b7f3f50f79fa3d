use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntervalError {
    #[error("invalid interval format: expected 'contig:start-stop', got '{0}'")]
    InvalidFormat(String),
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(#[from] std::num::ParseIntError),
    #[error("interval contig must not be empty")]
    EmptyContig,
    #[error("start ({start}) must not exceed stop ({stop})")]
    InvalidRange { start: i64, stop: i64 },
}

/// A half-open genomic interval `[start, stop)` on a single contig.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GenomicInterval {
    contig: String,
    start: i64,
    stop: i64,
}

impl GenomicInterval {
    pub fn new(contig: impl Into<String>, start: i64, stop: i64) -> Result<Self, IntervalError> {
        let contig = contig.into();
        if contig.is_empty() {
            return Err(IntervalError::EmptyContig);
        }
        if start > stop {
            return Err(IntervalError::InvalidRange { start, stop });
        }
        Ok(Self { contig, start, stop })
    }

    pub fn contig(&self) -> &str {
        &self.contig
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn stop(&self) -> i64 {
        self.stop
    }

    /// Number of bases covered.
    pub fn len(&self) -> i64 {
        self.stop - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, position: i64) -> bool {
        position >= self.start && position < self.stop
    }

    /// Whether `name` refers to this interval's contig. A leading "chr" is
    /// optional on either side, so "chr17" and "17" match.
    pub fn is_on_contig(&self, name: &str) -> bool {
        strip_chr(&self.contig) == strip_chr(name)
    }
}

fn strip_chr(name: &str) -> &str {
    name.strip_prefix("chr").unwrap_or(name)
}

impl fmt::Display for GenomicInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.contig, self.start, self.stop)
    }
}

impl FromStr for GenomicInterval {
    type Err = IntervalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (contig, rest) = s
            .rsplit_once(':')
            .ok_or_else(|| IntervalError::InvalidFormat(s.to_string()))?;
        let (start_str, stop_str) = rest
            .split_once('-')
            .ok_or_else(|| IntervalError::InvalidFormat(s.to_string()))?;
        let start: i64 = start_str.trim().replace(',', "").parse()?;
        let stop: i64 = stop_str.trim().replace(',', "").parse()?;
        GenomicInterval::new(contig, start, stop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let iv = GenomicInterval::new("chr1", 100, 200).unwrap();
        assert_eq!(iv.contig(), "chr1");
        assert_eq!(iv.start(), 100);
        assert_eq!(iv.stop(), 200);
        assert_eq!(iv.len(), 100);
        assert!(!iv.is_empty());
    }

    #[test]
    fn test_empty_interval_is_valid() {
        let iv = GenomicInterval::new("chr1", 100, 100).unwrap();
        assert!(iv.is_empty());
        assert!(!iv.contains(100));
    }

    #[test]
    fn test_rejects_inverted_range() {
        let err = GenomicInterval::new("chr1", 200, 100).unwrap_err();
        assert_eq!(err, IntervalError::InvalidRange { start: 200, stop: 100 });
        let msg = err.to_string();
        assert!(msg.contains("200"));
        assert!(msg.contains("100"));
    }

    #[test]
    fn test_rejects_empty_contig() {
        assert_eq!(
            GenomicInterval::new("", 1, 2).unwrap_err(),
            IntervalError::EmptyContig
        );
    }

    #[test]
    fn test_contains_is_half_open() {
        let iv = GenomicInterval::new("chr1", 100, 200).unwrap();
        assert!(iv.contains(100));
        assert!(iv.contains(199));
        assert!(!iv.contains(200));
        assert!(!iv.contains(99));
    }

    #[test]
    fn test_contig_matching_ignores_chr_prefix() {
        let iv = GenomicInterval::new("chr17", 0, 10).unwrap();
        assert!(iv.is_on_contig("17"));
        assert!(iv.is_on_contig("chr17"));
        assert!(!iv.is_on_contig("chr1"));

        let bare = GenomicInterval::new("X", 0, 10).unwrap();
        assert!(bare.is_on_contig("chrX"));
    }

    #[test]
    fn test_display_and_parse() {
        let iv = GenomicInterval::new("chr17", 10958130, 11017414).unwrap();
        assert_eq!(iv.to_string(), "chr17:10958130-11017414");
        let parsed: GenomicInterval = "chr17:10,958,130-11,017,414".parse().unwrap();
        assert_eq!(parsed, iv);
    }

    #[test]
    fn test_parse_invalid() {
        assert!("chr1".parse::<GenomicInterval>().is_err());
        assert!("chr1:100".parse::<GenomicInterval>().is_err());
        assert!("chr1:abc-def".parse::<GenomicInterval>().is_err());
        assert!(":1-2".parse::<GenomicInterval>().is_err());
        assert!("chr1:200-100".parse::<GenomicInterval>().is_err());
    }
}
