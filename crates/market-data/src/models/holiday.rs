use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A public holiday as listed by the provider.
///
/// Serialized with the provider's field names (`day_of_week`, `type`) so the
/// entry can be passed through to API consumers unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub name: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub day_of_week: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub holiday_type: Option<String>,
}

impl Holiday {
    pub fn new(name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            date,
            day_of_week: date.format("%A").to_string(),
            holiday_type: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_provider_entry() {
        let json = r#"{
            "country": "United States",
            "iso": "US",
            "year": 2024,
            "date": "2024-12-25",
            "day": "Wednesday",
            "day_of_week": "Wednesday",
            "name": "Christmas Day",
            "type": "NATIONAL_HOLIDAY"
        }"#;
        let holiday: Holiday = serde_json::from_str(json).unwrap();
        assert_eq!(holiday.name, "Christmas Day");
        assert_eq!(holiday.date, NaiveDate::from_ymd_opt(2024, 12, 25).unwrap());
        assert_eq!(holiday.day_of_week, "Wednesday");
        assert_eq!(holiday.holiday_type.as_deref(), Some("NATIONAL_HOLIDAY"));
    }

    #[test]
    fn test_new_derives_day_of_week() {
        let holiday = Holiday::new("Independence Day", NaiveDate::from_ymd_opt(2024, 7, 4).unwrap());
        assert_eq!(holiday.day_of_week, "Thursday");
    }

    #[test]
    fn test_serialize_keeps_provider_field_names() {
        let holiday = Holiday::new("Labor Day", NaiveDate::from_ymd_opt(2024, 9, 2).unwrap());
        let value = serde_json::to_value(&holiday).unwrap();
        assert_eq!(value["date"], "2024-09-02");
        assert_eq!(value["day_of_week"], "Monday");
        assert!(value.get("type").is_none());
    }
}
