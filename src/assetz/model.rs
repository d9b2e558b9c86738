use serde::{Deserialize, Serialize};
use std::fmt;

/// One inventory row. Field order matches the on-disk column order.
///
/// None of the fields are validated: `category` is conventionally a three-digit
/// code and `price` is usually numeric, but both are kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub category: String,
    pub name: String,
    pub price: String,
}

impl Record {
    pub fn new(category: impl Into<String>, name: impl Into<String>, price: impl ToString) -> Self {
        Self {
            category: category.into(),
            name: name.into(),
            price: price.to_string(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {} | {}", self.category, self.name, self.price)
    }
}

/// A single field of a partial update.
///
/// `Keep` leaves the current value alone. `Set("")` is a real change that
/// blanks the field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldChange<T> {
    #[default]
    Keep,
    Set(T),
}

impl<T> FieldChange<T> {
    pub fn apply(self, current: &mut T) {
        if let FieldChange::Set(value) = self {
            *current = value;
        }
    }

    pub fn is_keep(&self) -> bool {
        matches!(self, FieldChange::Keep)
    }
}

impl<T> From<Option<T>> for FieldChange<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => FieldChange::Set(v),
            None => FieldChange::Keep,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordPatch {
    pub category: FieldChange<String>,
    pub name: FieldChange<String>,
    pub price: FieldChange<String>,
}

impl RecordPatch {
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = FieldChange::Set(category.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = FieldChange::Set(name.into());
        self
    }

    pub fn price(mut self, price: impl ToString) -> Self {
        self.price = FieldChange::Set(price.to_string());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_keep() && self.name.is_keep() && self.price.is_keep()
    }

    /// Returns a copy of `record` with this patch applied.
    pub fn apply_to(self, record: &Record) -> Record {
        let mut updated = record.clone();
        self.category.apply(&mut updated.category);
        self.name.apply(&mut updated.name);
        self.price.apply(&mut updated.price);
        updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_coerces_price_to_text() {
        let record = Record::new("001", "Tilapia", 45);
        assert_eq!(record.price, "45");
    }

    #[test]
    fn empty_patch_keeps_everything() {
        let record = Record::new("001", "Tilapia", "45");
        let patch = RecordPatch::default();
        assert!(patch.is_empty());
        assert_eq!(patch.apply_to(&record), record);
    }

    #[test]
    fn set_empty_differs_from_keep() {
        let record = Record::new("001", "Tilapia", "45");
        let updated = RecordPatch::default().name("").apply_to(&record);
        assert_eq!(updated, Record::new("001", "", "45"));
    }

    #[test]
    fn patch_only_touches_given_fields() {
        let record = Record::new("001", "Tilapia", "45");
        let updated = RecordPatch::default().price(50).apply_to(&record);
        assert_eq!(updated, Record::new("001", "Tilapia", "50"));
    }

    #[test]
    fn option_converts_to_field_change() {
        assert_eq!(FieldChange::from(None::<String>), FieldChange::Keep);
        assert_eq!(
            FieldChange::from(Some("x".to_string())),
            FieldChange::Set("x".to_string())
        );
    }
}
