//! Classifier label map
//!
//! The fallback classifier speaks its own label space (`LABEL_0`, ...).
//! This table translates it onto intent categories explicitly instead of
//! relying on label strings happening to equal category names.

use aurora_ivr_core::{ClassifierLabel, IntentCategory};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// What a classifier label means
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LabelTarget {
    /// The model's designated "no intent" label
    NoIntent,
    Category(IntentCategory),
}

impl TryFrom<String> for LabelTarget {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_lowercase();
        if normalized == "no_intent" || normalized == "none" {
            return Ok(Self::NoIntent);
        }
        match normalized.parse::<IntentCategory>() {
            Ok(IntentCategory::Unknown) => Ok(Self::NoIntent),
            Ok(category) => Ok(Self::Category(category)),
            Err(e) => Err(e.to_string()),
        }
    }
}

impl From<LabelTarget> for String {
    fn from(target: LabelTarget) -> Self {
        match target {
            LabelTarget::NoIntent => "no_intent".to_string(),
            LabelTarget::Category(c) => c.as_str().to_string(),
        }
    }
}

/// Case-insensitive mapping from classifier label to target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "HashMap<String, LabelTarget>", into = "HashMap<String, LabelTarget>")]
pub struct LabelMap {
    labels: HashMap<String, LabelTarget>,
}

impl LabelMap {
    pub fn new(labels: HashMap<String, LabelTarget>) -> Self {
        Self {
            labels: labels
                .into_iter()
                .map(|(k, v)| (k.trim().to_lowercase(), v))
                .collect(),
        }
    }

    /// `None` when the label is not declared
    pub fn lookup(&self, label: &ClassifierLabel) -> Option<LabelTarget> {
        self.labels
            .get(&label.as_str().trim().to_lowercase())
            .copied()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl From<HashMap<String, LabelTarget>> for LabelMap {
    fn from(labels: HashMap<String, LabelTarget>) -> Self {
        Self::new(labels)
    }
}

impl From<LabelMap> for HashMap<String, LabelTarget> {
    fn from(map: LabelMap) -> Self {
        map.labels
    }
}

impl Default for LabelMap {
    /// `LABEL_0` is the no-intent label; category names map to themselves
    fn default() -> Self {
        let mut labels = HashMap::new();
        labels.insert("label_0".to_string(), LabelTarget::NoIntent);
        for category in IntentCategory::ACTIONABLE {
            labels.insert(category.as_str().to_string(), LabelTarget::Category(category));
        }
        Self { labels }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_map() {
        let map = LabelMap::default();
        assert_eq!(
            map.lookup(&ClassifierLabel::new("LABEL_0")),
            Some(LabelTarget::NoIntent)
        );
        assert_eq!(
            map.lookup(&ClassifierLabel::new("Flight_Status")),
            Some(LabelTarget::Category(IntentCategory::FlightStatus))
        );
        assert_eq!(map.lookup(&ClassifierLabel::new("LABEL_1")), None);
    }

    #[test]
    fn test_yaml_map() {
        let yaml = r#"
LABEL_0: no_intent
LABEL_1: booking
LABEL_2: baggage information
"#;
        let map: LabelMap = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(map.len(), 3);
        assert_eq!(
            map.lookup(&ClassifierLabel::new("label_2")),
            Some(LabelTarget::Category(IntentCategory::BaggageInformation))
        );
    }

    #[test]
    fn test_yaml_rejects_undeclared_category() {
        let yaml = "LABEL_9: lounge_access\n";
        assert!(serde_yaml::from_str::<LabelMap>(yaml).is_err());
    }
}
