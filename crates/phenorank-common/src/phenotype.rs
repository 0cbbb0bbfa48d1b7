//! Output shape of the phenotype-extraction service.
//!
//! The extraction model is an external collaborator; its JSON is only
//! trusted after [`PhenotypeReport::validate`] has accepted it.

use serde::{Deserialize, Serialize};

use crate::entities::PhenotypeTerm;
use crate::error::{PhenorankError, Result};

/// One extracted phenotype term with the model's confidence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HpoItem {
    pub id: String,
    pub label: String,
    pub confidence: f64,
}

/// Narrative plus extracted HPO terms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhenotypeReport {
    pub phenotype_text: String,
    pub hpo: Vec<HpoItem>,
}

impl PhenotypeReport {
    /// Parse and validate a report from loosely structured JSON.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let report: PhenotypeReport = serde_json::from_value(value)
            .map_err(|e| PhenorankError::InvalidPhenotype(e.to_string()))?;
        report.validate()?;
        Ok(report)
    }

    /// Check the narrative is present and every item carries a canonical
    /// `HP:nnnnnnn` id with a confidence in `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.phenotype_text.trim().is_empty() {
            return Err(PhenorankError::InvalidPhenotype(
                "phenotype_text must not be empty".to_string(),
            ));
        }

        for (i, item) in self.hpo.iter().enumerate() {
            // Ids are checked verbatim: the extraction contract promises uppercase.
            let canonical = PhenotypeTerm::parse(&item.id)
                .filter(|t| t.is_canonical() && t.as_str() == item.id);
            if canonical.is_none() {
                return Err(PhenorankError::InvalidPhenotype(format!(
                    "hpo[{i}].id {:?} is not of the form HP:nnnnnnn",
                    item.id
                )));
            }
            if !(0.0..=1.0).contains(&item.confidence) {
                return Err(PhenorankError::InvalidPhenotype(format!(
                    "hpo[{i}].confidence {} is outside [0, 1]",
                    item.confidence
                )));
            }
        }
        Ok(())
    }

    /// Term ids reported with at least `min_confidence`, in report order.
    pub fn term_ids(&self, min_confidence: f64) -> Vec<String> {
        self.hpo
            .iter()
            .filter(|item| item.confidence >= min_confidence)
            .map(|item| item.id.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn report() -> serde_json::Value {
        json!({
            "phenotype_text": "Infant with recurrent febrile seizures and ataxia.",
            "hpo": [
                { "id": "HP:0002373", "label": "Febrile seizure", "confidence": 0.92 },
                { "id": "HP:0001251", "label": "Ataxia", "confidence": 0.40 }
            ]
        })
    }

    #[test]
    fn test_valid_report_parses() {
        let parsed = PhenotypeReport::from_value(report()).unwrap();
        assert_eq!(parsed.hpo.len(), 2);
    }

    #[test]
    fn test_term_ids_filters_by_confidence() {
        let parsed = PhenotypeReport::from_value(report()).unwrap();
        assert_eq!(parsed.term_ids(0.0), ["HP:0002373", "HP:0001251"]);
        assert_eq!(parsed.term_ids(0.5), ["HP:0002373"]);
    }

    #[test]
    fn test_empty_narrative_rejected() {
        let mut value = report();
        value["phenotype_text"] = json!("  ");
        assert!(PhenotypeReport::from_value(value).is_err());
    }

    #[test]
    fn test_short_id_rejected() {
        let mut value = report();
        value["hpo"][0]["id"] = json!("HP:2373");
        let err = PhenotypeReport::from_value(value).unwrap_err();
        assert!(err.to_string().contains("hpo[0].id"));
    }

    #[test]
    fn test_confidence_out_of_range_rejected() {
        let mut value = report();
        value["hpo"][1]["confidence"] = json!(1.5);
        let err = PhenotypeReport::from_value(value).unwrap_err();
        assert!(err.to_string().contains("hpo[1].confidence"));
    }

    #[test]
    fn test_missing_fields_rejected() {
        assert!(PhenotypeReport::from_value(json!({ "hpo": [] })).is_err());
    }
}
