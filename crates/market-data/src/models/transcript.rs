use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Earnings call transcript as returned by the provider.
///
/// The payload shape varies between providers and over time, so every field is
/// kept and passed through verbatim.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EarningsTranscript {
    pub fields: Map<String, Value>,
}

impl EarningsTranscript {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_passthrough_fields() {
        let transcript: EarningsTranscript = serde_json::from_value(json!({
            "date": "2024-07-30",
            "transcript": "Good afternoon, everyone.",
            "participants": ["CEO", "CFO"]
        }))
        .unwrap();

        assert_eq!(transcript.fields["date"], "2024-07-30");
        assert_eq!(transcript.fields.len(), 3);
        assert_eq!(
            serde_json::to_value(&transcript).unwrap()["participants"][1],
            "CFO"
        );
    }
}
