/// Fixed styling for the variant track.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackStyle {
    /// Maximum glyph height in pixels.
    pub variant_height: f64,
    pub variant_fill: String,
    pub variant_stroke: String,
}

impl Default for TrackStyle {
    fn default() -> Self {
        Self {
            variant_height: 14.0,
            variant_fill: "#ddd".to_string(),
            variant_stroke: "blue".to_string(),
        }
    }
}

impl TrackStyle {
    pub fn with_variant_height(mut self, height: f64) -> Self {
        self.variant_height = height;
        self
    }
}
