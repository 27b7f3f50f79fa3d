use serde::{Deserialize, Serialize};

/// One variant as supplied by a data source.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantRecord {
    pub id: String,
    pub contig: String,
    pub position: i64,
    #[serde(rename = "ref")]
    pub ref_allele: String,
    pub alt: String,
    #[serde(default)]
    pub major_frequency: Option<f64>,
    #[serde(default)]
    pub minor_frequency: Option<f64>,
    /// The source line this record was read from.
    pub vcf_line: String,
}

/// The slice of a variant handed to pointer callbacks.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantInfo {
    pub id: String,
    pub vcf_line: String,
    pub position: i64,
    #[serde(rename = "ref")]
    pub ref_allele: String,
    pub alt: String,
}

impl From<&VariantRecord> for VariantInfo {
    fn from(v: &VariantRecord) -> Self {
        Self {
            id: v.id.clone(),
            vcf_line: v.vcf_line.clone(),
            position: v.position,
            ref_allele: v.ref_allele.clone(),
            alt: v.alt.clone(),
        }
    }
}

/// Axis-aligned rectangle in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Inclusive containment. Negative extents are normalized.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        let (x0, x1) = ordered(self.x, self.right());
        let (y0, y1) = ordered(self.y, self.bottom());
        px >= x0 && px <= x1 && py >= y0 && py <= y1
    }
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}
