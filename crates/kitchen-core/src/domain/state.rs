//! Production status of an order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::ValidationError;

/// Where an order currently sits in the kitchen pipeline.
///
/// State transitions (intended):
/// - Received -> InPreparation -> Done -> Finished
///
/// Nothing enforces that order: an update may set any status from any other.
///
/// The wire/storage names are the ones the ordering system and the kitchen
/// display already speak, so they are kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductionStatus {
    /// Accepted by the kitchen, not started yet.
    #[serde(rename = "RECEBIDO")]
    Received,

    /// Being cooked/assembled.
    #[serde(rename = "EM_PREPARACAO")]
    InPreparation,

    /// Ready for pickup.
    #[serde(rename = "PRONTO")]
    Done,

    /// Handed over; no longer shown on the kitchen display.
    #[serde(rename = "FINALIZADO")]
    Finished,
}

impl ProductionStatus {
    /// All statuses in pipeline order.
    pub const ALL: [ProductionStatus; 4] = [
        ProductionStatus::Received,
        ProductionStatus::InPreparation,
        ProductionStatus::Done,
        ProductionStatus::Finished,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ProductionStatus::Received => "RECEBIDO",
            ProductionStatus::InPreparation => "EM_PREPARACAO",
            ProductionStatus::Done => "PRONTO",
            ProductionStatus::Finished => "FINALIZADO",
        }
    }

    /// Is this order still on the kitchen display?
    pub fn is_active(self) -> bool {
        !matches!(self, ProductionStatus::Finished)
    }

    /// Human-readable list of the accepted values, surfaced to API clients.
    pub fn allowed_values_message() -> String {
        format!(
            "must be between {}, {}, {} or {}",
            ProductionStatus::Received,
            ProductionStatus::InPreparation,
            ProductionStatus::Done,
            ProductionStatus::Finished,
        )
    }
}

impl fmt::Display for ProductionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductionStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProductionStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                ValidationError::new("status", ProductionStatus::allowed_values_message())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::received("RECEBIDO", ProductionStatus::Received)]
    #[case::in_preparation("EM_PREPARACAO", ProductionStatus::InPreparation)]
    #[case::done("PRONTO", ProductionStatus::Done)]
    #[case::finished("FINALIZADO", ProductionStatus::Finished)]
    fn parses_wire_names(#[case] raw: &str, #[case] expected: ProductionStatus) {
        assert_eq!(raw.parse::<ProductionStatus>().unwrap(), expected);
        assert_eq!(expected.to_string(), raw);
    }

    #[rstest]
    #[case::free_text("status invalido")]
    #[case::lowercase("recebido")]
    #[case::english("RECEIVED")]
    #[case::padded(" PRONTO")]
    #[case::empty("")]
    fn rejects_unknown_values_listing_allowed_ones(#[case] raw: &str) {
        let err = raw.parse::<ProductionStatus>().unwrap_err();
        assert_eq!(err.field(), "status");
        assert_eq!(
            err.to_string(),
            "status: must be between RECEBIDO, EM_PREPARACAO, PRONTO or FINALIZADO"
        );
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&ProductionStatus::InPreparation).unwrap();
        assert_eq!(json, "\"EM_PREPARACAO\"");
        let back: ProductionStatus = serde_json::from_str("\"PRONTO\"").unwrap();
        assert_eq!(back, ProductionStatus::Done);
    }

    #[test]
    fn only_finished_leaves_the_display() {
        let inactive: Vec<_> = ProductionStatus::ALL
            .into_iter()
            .filter(|s| !s.is_active())
            .collect();
        assert_eq!(inactive, vec![ProductionStatus::Finished]);
    }
}
