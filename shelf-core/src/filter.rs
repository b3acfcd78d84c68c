//! Local filter engine.
//!
//! A [`FilterState`] holds one optional constraint per field. Blank values
//! mean "no constraint". Every non-blank constraint must hold for an item to
//! be kept (plain conjunction, no OR/NOT).

use std::collections::BTreeMap;

use crate::item::{CatalogItem, Field, MatchRule};

/// Per-field filter values for one list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState<F: Field> {
    values: BTreeMap<F, String>,
}

impl<F: Field> Default for FilterState<F> {
    fn default() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }
}

impl<F: Field> FilterState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, field: F, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Set the filter value for a field. A blank value clears it.
    pub fn set(&mut self, field: F, value: impl Into<String>) {
        let value = value.into();
        if value.trim().is_empty() {
            self.values.remove(&field);
        } else {
            self.values.insert(field, value);
        }
    }

    /// Current filter value for a field (blank when unconstrained).
    pub fn get(&self, field: F) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// True when no field is constrained.
    pub fn is_blank(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over the constrained fields.
    pub fn constraints(&self) -> impl Iterator<Item = (F, &str)> {
        self.values.iter().map(|(f, v)| (*f, v.as_str()))
    }

    /// Whether a single item satisfies every constraint.
    pub fn matches<T: CatalogItem<Field = F>>(&self, item: &T) -> bool {
        self.constraints()
            .all(|(field, wanted)| field_matches(field.rule(), item.get(field), wanted))
    }
}

/// Return the items that satisfy every constraint in `state`, in input order.
pub fn filter_items<T: CatalogItem>(items: &[T], state: &FilterState<T::Field>) -> Vec<T> {
    if state.is_blank() {
        return items.to_vec();
    }
    let kept: Vec<T> = items
        .iter()
        .filter(|item| state.matches(*item))
        .cloned()
        .collect();
    log::debug!(
        "filter: kept {} of {} {} item(s)",
        kept.len(),
        items.len(),
        T::KIND.short_name()
    );
    kept
}

fn field_matches(rule: MatchRule, value: &str, wanted: &str) -> bool {
    match rule {
        MatchRule::Contains => value.to_lowercase().contains(&wanted.to_lowercase()),
        MatchRule::Exact => match (parse_int(value), parse_int(wanted)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        },
    }
}

/// Parse a numeric-as-string value. Surrounding whitespace is ignored.
pub(crate) fn parse_int(s: &str) -> Option<i64> {
    s.trim().parse().ok()
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;
