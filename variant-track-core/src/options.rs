use serde::{Deserialize, Serialize};

/// Which allele frequency drives glyph height.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AlleleFrequencyStrategy {
    Major,
    Minor,
    /// A name the host passed that matches neither strategy.
    Unrecognized(String),
}

impl From<String> for AlleleFrequencyStrategy {
    fn from(name: String) -> Self {
        match name.as_str() {
            "Major" => Self::Major,
            "Minor" => Self::Minor,
            _ => Self::Unrecognized(name),
        }
    }
}

impl From<AlleleFrequencyStrategy> for String {
    fn from(s: AlleleFrequencyStrategy) -> Self {
        match s {
            AlleleFrequencyStrategy::Major => "Major".to_string(),
            AlleleFrequencyStrategy::Minor => "Minor".to_string(),
            AlleleFrequencyStrategy::Unrecognized(name) => name,
        }
    }
}

/// Frequency-related display options. `None` strategy means Major.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FrequencyDisplayConfig {
    pub variant_height_by_frequency: bool,
    #[serde(rename = "allelFrequencyStrategy")]
    pub allele_frequency_strategy: Option<AlleleFrequencyStrategy>,
}

impl FrequencyDisplayConfig {
    pub fn by_frequency(strategy: Option<AlleleFrequencyStrategy>) -> Self {
        Self {
            variant_height_by_frequency: true,
            allele_frequency_strategy: strategy,
        }
    }

    /// Parse from the host's options object. Unknown keys are ignored.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
