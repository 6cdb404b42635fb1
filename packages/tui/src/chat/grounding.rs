use ratatui::style::Color;
use uwc_client::types::{HallucinationReport, RiskRating};

/// Display tier for a groundedness score.
///
/// Stateless: every value here is derived from the score on demand and
/// never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroundingTier {
    Well,
    Partial,
    Low,
}

impl GroundingTier {
    pub fn from_score(score: f32) -> Self {
        if score >= 80.0 {
            GroundingTier::Well
        } else if score >= 50.0 {
            GroundingTier::Partial
        } else {
            GroundingTier::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GroundingTier::Well => "Well Grounded",
            GroundingTier::Partial => "Partially Grounded",
            GroundingTier::Low => "Low Grounding",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            GroundingTier::Well => Color::Green,
            GroundingTier::Partial => Color::Yellow,
            GroundingTier::Low => Color::Red,
        }
    }
}

/// The four sub-factor scores of a hallucination report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroundingFactor {
    RetrievalConfidence,
    ResponseGrounding,
    NumericalFidelity,
    EntityConsistency,
}

impl GroundingFactor {
    pub const ALL: [GroundingFactor; 4] = [
        GroundingFactor::RetrievalConfidence,
        GroundingFactor::ResponseGrounding,
        GroundingFactor::NumericalFidelity,
        GroundingFactor::EntityConsistency,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            GroundingFactor::RetrievalConfidence => "Retrieval Confidence",
            GroundingFactor::ResponseGrounding => "Response Grounding",
            GroundingFactor::NumericalFidelity => "Numerical Fidelity",
            GroundingFactor::EntityConsistency => "Entity Consistency",
        }
    }

    /// Pick this factor's score out of a report
    pub fn score(&self, report: &HallucinationReport) -> f32 {
        match self {
            GroundingFactor::RetrievalConfidence => report.retrieval_confidence,
            GroundingFactor::ResponseGrounding => report.response_grounding,
            GroundingFactor::NumericalFidelity => report.numerical_fidelity,
            GroundingFactor::EntityConsistency => report.entity_consistency,
        }
    }

    /// One-line explanation for this factor at a given tier
    pub fn explanation(&self, tier: GroundingTier) -> &'static str {
        match (self, tier) {
            (GroundingFactor::RetrievalConfidence, GroundingTier::Well) => {
                "Retrieved passages match the question closely."
            }
            (GroundingFactor::RetrievalConfidence, GroundingTier::Partial) => {
                "Retrieved passages are only loosely related to the question."
            }
            (GroundingFactor::RetrievalConfidence, GroundingTier::Low) => {
                "Little relevant material was found for this question."
            }
            (GroundingFactor::ResponseGrounding, GroundingTier::Well) => {
                "Nearly every sentence is supported by a source passage."
            }
            (GroundingFactor::ResponseGrounding, GroundingTier::Partial) => {
                "Some sentences lack clear support in the sources."
            }
            (GroundingFactor::ResponseGrounding, GroundingTier::Low) => {
                "Most of the answer is not supported by the sources."
            }
            (GroundingFactor::NumericalFidelity, GroundingTier::Well) => {
                "Figures in the answer appear verbatim in the documents."
            }
            (GroundingFactor::NumericalFidelity, GroundingTier::Partial) => {
                "Some figures could not be traced back to the documents."
            }
            (GroundingFactor::NumericalFidelity, GroundingTier::Low) => {
                "Figures in the answer do not match the documents."
            }
            (GroundingFactor::EntityConsistency, GroundingTier::Well) => {
                "Named parties, dates and policies match the documents."
            }
            (GroundingFactor::EntityConsistency, GroundingTier::Partial) => {
                "Some named entities were not found in the documents."
            }
            (GroundingFactor::EntityConsistency, GroundingTier::Low) => {
                "Named entities conflict with the documents."
            }
        }
    }
}

/// Whether a backend risk rating should raise the low-confidence banner.
///
/// Only `medium` and `high` risk qualify; a well-grounded (`low` risk)
/// response never arms it.
pub fn banner_worthy(rating: RiskRating) -> bool {
    matches!(rating, RiskRating::Medium | RiskRating::High)
}

/// Display label for a backend risk rating
pub fn rating_label(rating: RiskRating) -> &'static str {
    match rating {
        RiskRating::Low => "low",
        RiskRating::Medium => "medium",
        RiskRating::High => "high",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_labels_at_reference_scores() {
        assert_eq!(GroundingTier::from_score(85.0).label(), "Well Grounded");
        assert_eq!(GroundingTier::from_score(65.0).label(), "Partially Grounded");
        assert_eq!(GroundingTier::from_score(30.0).label(), "Low Grounding");
    }

    #[test]
    fn test_tier_boundaries_inclusive() {
        assert_eq!(GroundingTier::from_score(80.0), GroundingTier::Well);
        assert_eq!(GroundingTier::from_score(79.9), GroundingTier::Partial);
        assert_eq!(GroundingTier::from_score(50.0), GroundingTier::Partial);
        assert_eq!(GroundingTier::from_score(49.9), GroundingTier::Low);
        assert_eq!(GroundingTier::from_score(0.0), GroundingTier::Low);
    }

    #[test]
    fn test_tier_colors() {
        assert_eq!(GroundingTier::Well.color(), Color::Green);
        assert_eq!(GroundingTier::Partial.color(), Color::Yellow);
        assert_eq!(GroundingTier::Low.color(), Color::Red);
    }

    #[test]
    fn test_factor_scores_map_to_report_fields() {
        let report = HallucinationReport {
            overall_score: 70.0,
            retrieval_confidence: 10.0,
            response_grounding: 20.0,
            numerical_fidelity: 30.0,
            entity_consistency: 40.0,
            sentence_details: Vec::new(),
            flagged_claims: Vec::new(),
            rating: RiskRating::Medium,
        };

        assert_eq!(GroundingFactor::RetrievalConfidence.score(&report), 10.0);
        assert_eq!(GroundingFactor::ResponseGrounding.score(&report), 20.0);
        assert_eq!(GroundingFactor::NumericalFidelity.score(&report), 30.0);
        assert_eq!(GroundingFactor::EntityConsistency.score(&report), 40.0);
    }

    #[test]
    fn test_banner_rule() {
        assert!(!banner_worthy(RiskRating::Low));
        assert!(banner_worthy(RiskRating::Medium));
        assert!(banner_worthy(RiskRating::High));
    }

    #[test]
    fn test_every_factor_has_tier_text() {
        for factor in GroundingFactor::ALL {
            for tier in [GroundingTier::Well, GroundingTier::Partial, GroundingTier::Low] {
                assert!(!factor.explanation(tier).is_empty());
            }
        }
    }
}
