use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::schema::schema_model::{FieldType, FlatField};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A proposed value offered while prompting. Never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub value: String,
    pub label: String,
}

impl Suggestion {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// How a specific identifier gets its suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SuggestionRule {
    /// Fresh random UUID
    Uuid,
    /// Current calendar date
    Today,
    /// Fixed value from configuration
    Literal { value: String },
}

impl SuggestionRule {
    fn suggest(&self, today: NaiveDate) -> Suggestion {
        match self {
            SuggestionRule::Uuid => Suggestion::new(uuid::Uuid::new_v4().to_string(), "generated"),
            SuggestionRule::Today => today_suggestion(today),
            SuggestionRule::Literal { value } => Suggestion::new(value.clone(), "configured"),
        }
    }
}

/// Identifier-specific rules used when no configuration overrides them.
pub fn default_rules() -> BTreeMap<String, SuggestionRule> {
    BTreeMap::from([("info.id".to_string(), SuggestionRule::Uuid)])
}

// ============================================================================
// SuggestionEngine — prioritized rule chain
// ============================================================================

/// Rules are tried in order: identifier table, declared default, field type.
#[derive(Debug, Clone)]
pub struct SuggestionEngine {
    rules: BTreeMap<String, SuggestionRule>,
    today: Option<NaiveDate>,
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::new(default_rules())
    }
}

impl SuggestionEngine {
    pub fn new(rules: BTreeMap<String, SuggestionRule>) -> Self {
        Self { rules, today: None }
    }

    /// Pin the date used by date suggestions instead of reading the clock.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn rules(&self) -> &BTreeMap<String, SuggestionRule> {
        &self.rules
    }

    pub fn suggest_for(&self, field: &FlatField<'_>) -> Option<Suggestion> {
        self.by_identifier(field)
            .or_else(|| by_default(field))
            .or_else(|| self.by_field_type(field))
    }

    fn by_identifier(&self, field: &FlatField<'_>) -> Option<Suggestion> {
        self.rules
            .get(&field.identifier)
            .map(|rule| rule.suggest(self.today()))
    }

    fn by_field_type(&self, field: &FlatField<'_>) -> Option<Suggestion> {
        match field.field.field_type {
            FieldType::Date => Some(today_suggestion(self.today())),
            _ => None,
        }
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}

fn by_default(field: &FlatField<'_>) -> Option<Suggestion> {
    field
        .field
        .default_value()
        .map(|d| Suggestion::new(d, "default"))
}

fn today_suggestion(today: NaiveDate) -> Suggestion {
    Suggestion::new(today.format(DATE_FORMAT).to_string(), "today")
}
