//! JSON configuration for correlation inquiries.

use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use littersurv_analysis::correlation::Inquiry;

/// The correlation mode's configuration: which predictor → outcome
/// inquiries to run and which columns the per-partition correlation
/// heatmap covers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct InquiryConfig {
    pub inquiries: Vec<Inquiry>,
    pub heatmap_columns: Vec<String>,
}

impl InquiryConfig {
    /// Loads a configuration from a JSON file.
    pub(crate) fn load(path: &Path) -> anyhow::Result<Self> {
        let file =
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to parse inquiry config {}", path.display()))
    }

    /// The built-in inquiry set of the original transect survey.
    pub(crate) fn survey_default() -> Self {
        let owned = |names: &[&str]| names.iter().map(|&n| n.to_owned()).collect::<Vec<_>>();
        Self {
            inquiries: vec![
                Inquiry {
                    label: "Bin Density -> Waste Volume".to_owned(),
                    predictor: "Trash Bins per 200m".to_owned(),
                    outcomes: owned(&["Waste Volume"]),
                },
                Inquiry {
                    label: "Burning Intensity -> Waste Volume".to_owned(),
                    predictor: "Burning per 200m".to_owned(),
                    outcomes: owned(&["Waste Volume"]),
                },
                Inquiry {
                    label: "Building Density -> Waste Indicators".to_owned(),
                    predictor: "Building Density per 200m".to_owned(),
                    outcomes: owned(&[
                        "Waste Volume",
                        "Open Dumping per 200m",
                        "Burning per 200m",
                        "Waste Diversity",
                        "Waste Disposition",
                    ]),
                },
            ],
            heatmap_columns: owned(&[
                "Waste Volume",
                "Open Dumping per 200m",
                "Burning per 200m",
                "Waste Diversity",
                "Waste Disposition",
                "Building Density per 200m",
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_shape() {
        let config = InquiryConfig::survey_default();
        assert_eq!(config.inquiries.len(), 3);
        assert_eq!(config.inquiries[2].outcomes.len(), 5);
        assert_eq!(config.heatmap_columns.len(), 6);
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = InquiryConfig::survey_default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: InquiryConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.inquiries[0].predictor, config.inquiries[0].predictor);
    }
}
