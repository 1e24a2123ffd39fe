//! Alert records as returned by the remote list store
//!
//! The list API returns items with PascalCase field names wrapped in a
//! `{ "value": [...] }` envelope. Fields are lenient: a missing or null
//! column deserializes to its default rather than failing the whole list.

use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;

/// A single alert entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AlertRecord {
    /// Short label shown first in the card
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    /// Body text
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    /// Category column. The list defines no fixed choices, so any JSON
    /// value is kept as-is and only turned into text when rendered.
    #[serde(default)]
    pub alert_type: serde_json::Value,

    /// Only active records are displayed
    #[serde(default, deserialize_with = "null_as_default")]
    pub active: bool,

    /// Display ordering key, ascending
    #[serde(default, deserialize_with = "null_as_default")]
    pub position: f64,
}

impl AlertRecord {
    pub fn new(title: impl Into<String>, position: f64, active: bool) -> Self {
        Self {
            title: title.into(),
            position,
            active,
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_alert_type(mut self, alert_type: impl Into<serde_json::Value>) -> Self {
        self.alert_type = alert_type.into();
        self
    }

    /// Text form of the alert type
    pub fn alert_type_text(&self) -> String {
        match &self.alert_type {
            serde_json::Value::Null => String::new(),
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// Envelope returned by the list items endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListItemsResponse {
    #[serde(default)]
    pub value: Vec<AlertRecord>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Keep only active records, ordered by ascending position.
///
/// The sort is stable, so records sharing a position keep their input
/// order. NaN positions sort after every number.
pub fn select_and_order(records: impl IntoIterator<Item = AlertRecord>) -> Vec<AlertRecord> {
    let mut selected: Vec<AlertRecord> = records.into_iter().filter(|r| r.active).collect();
    selected.sort_by(|a, b| position_cmp(a.position, b.position));

    tracing::debug!(count = selected.len(), "Selected active alerts");
    selected
}

/// Total order on positions with NaN last
fn position_cmp(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.total_cmp(&b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(records: &[AlertRecord]) -> Vec<&str> {
        records.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_filters_inactive_and_sorts() {
        let records = vec![
            AlertRecord::new("A", 2.0, true),
            AlertRecord::new("B", 1.0, true),
            AlertRecord::new("C", 5.0, false),
        ];

        let ordered = select_and_order(records);
        assert_eq!(titles(&ordered), vec!["B", "A"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(select_and_order(Vec::new()).is_empty());
    }

    #[test]
    fn test_ties_keep_input_order() {
        let records = vec![
            AlertRecord::new("first", 3.0, true),
            AlertRecord::new("second", 1.0, true),
            AlertRecord::new("third", 3.0, true),
            AlertRecord::new("fourth", 1.0, true),
        ];

        let ordered = select_and_order(records);
        assert_eq!(titles(&ordered), vec!["second", "fourth", "first", "third"]);
    }

    #[test]
    fn test_selection_properties() {
        let records: Vec<AlertRecord> = (0..40)
            .map(|i| AlertRecord::new(format!("r{i}"), ((i * 7) % 11) as f64, i % 3 != 0))
            .collect();
        let expected_active = records.iter().filter(|r| r.active).count();

        let ordered = select_and_order(records.clone());

        assert_eq!(ordered.len(), expected_active);
        assert!(ordered.iter().all(|r| r.active));
        assert!(ordered.windows(2).all(|w| w[0].position <= w[1].position));
        for record in records.iter().filter(|r| r.active) {
            assert!(ordered.contains(record));
        }

        // Applying the pipeline again changes nothing
        assert_eq!(select_and_order(ordered.clone()), ordered);
    }

    #[test]
    fn test_nan_positions() {
        let records: Vec<AlertRecord> = (0..100)
            .map(|i| {
                let position = if i % 5 == 0 {
                    f64::NAN
                } else {
                    ((i * 37) % 23) as f64
                };
                AlertRecord::new(format!("r{i}"), position, true)
            })
            .collect();
        let nan_titles: Vec<String> = records
            .iter()
            .filter(|r| r.position.is_nan())
            .map(|r| r.title.clone())
            .collect();

        let ordered = select_and_order(records);
        assert_eq!(ordered.len(), 100);

        let finite = ordered.len() - nan_titles.len();
        assert!(ordered[..finite].iter().all(|r| !r.position.is_nan()));
        assert!(ordered[..finite].windows(2).all(|w| w[0].position <= w[1].position));

        // NaN positions go last and keep their input order
        let tail: Vec<String> = ordered[finite..].iter().map(|r| r.title.clone()).collect();
        assert_eq!(tail, nan_titles);
    }

    #[test]
    fn test_deserialize_list_response() {
        let json = r#"{
            "value": [
                {"Title": "Outage", "Description": "Email is down", "AlertType": "Critical", "Active": true, "Position": 2},
                {"Title": "Notice", "Description": null, "AlertType": {"Label": "Info"}, "Active": false, "Position": 1.5},
                {"Title": "Bare"}
            ]
        }"#;

        let response: ListItemsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.value.len(), 3);

        let outage = &response.value[0];
        assert_eq!(outage.title, "Outage");
        assert_eq!(outage.alert_type_text(), "Critical");
        assert!(outage.active);
        assert_eq!(outage.position, 2.0);

        let notice = &response.value[1];
        assert_eq!(notice.description, "");
        assert_eq!(notice.alert_type_text(), r#"{"Label":"Info"}"#);

        let bare = &response.value[2];
        assert!(!bare.active);
        assert_eq!(bare.position, 0.0);
        assert_eq!(bare.alert_type_text(), "");
    }

    #[test]
    fn test_missing_value_is_empty() {
        let response: ListItemsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.value.is_empty());
    }

    #[test]
    fn test_alert_type_number_text() {
        let record = AlertRecord::new("n", 1.0, true).with_alert_type(3);
        assert_eq!(record.alert_type_text(), "3");
    }
}
