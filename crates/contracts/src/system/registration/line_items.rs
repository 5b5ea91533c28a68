use serde::{Deserialize, Serialize};

/// One income or expense entry. The amount stays as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub label: String,
    pub amount: String,
}

/// Editable part of a line item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineItemField {
    Label,
    Amount,
}

impl LineItem {
    pub fn new(label: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            amount: amount.into(),
        }
    }

    /// Amount as a number; empty, non-numeric or non-finite text counts as 0
    pub fn amount_value(&self) -> f64 {
        parse_amount(&self.amount)
    }

    /// A popup draft is worth keeping if either part has content
    pub fn is_blank(&self) -> bool {
        self.label.trim().is_empty() && self.amount.trim().is_empty()
    }

    pub fn set(&mut self, field: LineItemField, value: String) {
        match field {
            LineItemField::Label => self.label = value,
            LineItemField::Amount => self.amount = value,
        }
    }
}

pub fn parse_amount(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Sum of all amounts
pub fn total(items: &[LineItem]) -> f64 {
    items.iter().map(LineItem::amount_value).sum()
}

/// True when no item carries a non-zero amount (an empty list included)
pub fn has_no_amount(items: &[LineItem]) -> bool {
    items.iter().all(|item| item.amount_value() == 0.0)
}
