//! Invoice inputs: a customer and the performances billed to them.

use serde::{Deserialize, Serialize};

use theater_core::{PlayId, ValueObject};

/// One performance on an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performance {
    #[serde(rename = "playID", alias = "play_id")]
    play_id: PlayId,
    /// Number of seats sold.
    audience: u32,
}

impl Performance {
    pub fn new(play_id: impl Into<PlayId>, audience: u32) -> Self {
        Self {
            play_id: play_id.into(),
            audience,
        }
    }

    pub fn play_id(&self) -> &PlayId {
        &self.play_id
    }

    pub fn audience(&self) -> u32 {
        self.audience
    }
}

impl ValueObject for Performance {}

/// Customer invoice: performances are billed in the order listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    customer: String,
    performances: Vec<Performance>,
}

impl Invoice {
    pub fn new(customer: impl Into<String>, performances: Vec<Performance>) -> Self {
        Self {
            customer: customer.into(),
            performances,
        }
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn performances(&self) -> &[Performance] {
        &self.performances
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_classic_invoice_shape() {
        let json = r#"{
            "customer": "BigCo",
            "performances": [
                {"playID": "hamlet", "audience": 55},
                {"playID": "as-like", "audience": 35}
            ]
        }"#;
        let invoice: Invoice = serde_json::from_str(json).unwrap();

        assert_eq!(invoice.customer(), "BigCo");
        assert_eq!(invoice.performances().len(), 2);
        assert_eq!(invoice.performances()[0].play_id().as_str(), "hamlet");
        assert_eq!(invoice.performances()[1].audience(), 35);
    }

    #[test]
    fn billing_inputs_are_shareable_values() {
        fn assert_value<T: ValueObject + Send + Sync>() {}
        assert_value::<Performance>();
        assert_value::<crate::Play>();
        assert_value::<crate::PlayType>();
        assert_value::<crate::FeeSchedule>();
        assert_value::<crate::PerformanceCharge>();
    }

    #[test]
    fn empty_play_id_is_rejected_at_deserialization() {
        let json = r#"{"playID": "", "audience": 10}"#;
        assert!(serde_json::from_str::<Performance>(json).is_err());
    }

    #[test]
    fn negative_audience_is_rejected_at_deserialization() {
        let json = r#"{"playID": "hamlet", "audience": -1}"#;
        assert!(serde_json::from_str::<Performance>(json).is_err());
    }
}
