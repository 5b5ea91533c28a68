use super::field::{FormKey, LineItemKind, RegistrationField};
use super::line_items::{self, LineItem, LineItemField};
use super::normalize;
use super::rules::{parse_date_of_birth, validate_field, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

/// Error map of a registration attempt, ordered by form position
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("registration has {} invalid field(s)", .0.len())]
pub struct FieldErrors(BTreeMap<FormKey, ValidationError>);

impl FieldErrors {
    pub fn get(&self, key: impl Into<FormKey>) -> Option<ValidationError> {
        self.0.get(&key.into()).copied()
    }

    pub fn contains(&self, key: impl Into<FormKey>) -> bool {
        self.0.contains_key(&key.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormKey, ValidationError)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }

    fn set(&mut self, key: FormKey, result: Result<(), ValidationError>) {
        match result {
            Ok(()) => {
                self.0.remove(&key);
            }
            Err(e) => {
                self.0.insert(key, e);
            }
        }
    }

    fn clear(&mut self, key: FormKey) {
        self.0.remove(&key);
    }
}

/// Validated registration handed to the next step after a successful submit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub email: String,
    pub pan_number: String,
    /// Bare 12 digits, no grouping
    pub aadhar_number: String,
    pub annual_income: Option<f64>,
    pub income: Vec<LineItem>,
    pub expenses: Vec<LineItem>,
    pub total_income: f64,
    pub total_expenses: f64,
}

/// State of one registration session: values, touched set, errors and line items
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationForm {
    full_name: String,
    date_of_birth: String,
    email: String,
    pan_number: String,
    aadhar_number: String,
    annual_income: String,
    income: Vec<LineItem>,
    expenses: Vec<LineItem>,
    touched: BTreeSet<RegistrationField>,
    errors: FieldErrors,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Form as first shown: one blank rent income and a 1000 shop expense
    pub fn with_suggested_items() -> Self {
        Self {
            income: vec![LineItem::new("Rent Amount", "")],
            expenses: vec![LineItem::new("Shop", "1000")],
            ..Self::default()
        }
    }

    pub fn value(&self, field: RegistrationField) -> &str {
        match field {
            RegistrationField::FullName => &self.full_name,
            RegistrationField::DateOfBirth => &self.date_of_birth,
            RegistrationField::Email => &self.email,
            RegistrationField::PanNumber => &self.pan_number,
            RegistrationField::AadharNumber => &self.aadhar_number,
        }
    }

    fn value_mut(&mut self, field: RegistrationField) -> &mut String {
        match field {
            RegistrationField::FullName => &mut self.full_name,
            RegistrationField::DateOfBirth => &mut self.date_of_birth,
            RegistrationField::Email => &mut self.email,
            RegistrationField::PanNumber => &mut self.pan_number,
            RegistrationField::AadharNumber => &mut self.aadhar_number,
        }
    }

    /// Store a keystroke. The raw value is normalized first and any
    /// previous error on the field is cleared until the next blur.
    pub fn set_value(&mut self, field: RegistrationField, raw: &str) {
        *self.value_mut(field) = normalize::normalize_field(field, raw);
        self.errors.clear(field.into());
    }

    /// Field lost focus: mark it touched and re-check it
    pub fn blur(&mut self, field: RegistrationField, today: NaiveDate) {
        self.touched.insert(field);
        let result = validate_field(field, self.value(field), today);
        self.errors.set(field.into(), result);
    }

    pub fn is_touched(&self, field: RegistrationField) -> bool {
        self.touched.contains(&field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Error to display under a field; hidden until the field is touched
    pub fn visible_error(&self, field: RegistrationField) -> Option<ValidationError> {
        if !self.is_touched(field) {
            return None;
        }
        self.errors.get(field)
    }

    /// Error under the income or expense list, set by a submit attempt
    pub fn list_error(&self, kind: LineItemKind) -> Option<ValidationError> {
        self.errors.get(kind.form_key())
    }

    /// Touched, valid and non-blank: drives the success tick next to the input
    pub fn is_field_complete(&self, field: RegistrationField, today: NaiveDate) -> bool {
        let value = self.value(field);
        self.is_touched(field)
            && !value.trim().is_empty()
            && !self.errors.contains(field)
            && validate_field(field, value, today).is_ok()
    }

    pub fn annual_income(&self) -> &str {
        &self.annual_income
    }

    pub fn set_annual_income(&mut self, raw: &str) {
        self.annual_income = raw.to_string();
    }

    /// Optional annual income; `None` when blank or not a number
    pub fn annual_income_value(&self) -> Option<f64> {
        let trimmed = self.annual_income.trim();
        if trimmed.is_empty() {
            return None;
        }
        trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
    }

    // ------------------------------------------------------------------
    // Line items
    // ------------------------------------------------------------------

    pub fn items(&self, kind: LineItemKind) -> &[LineItem] {
        match kind {
            LineItemKind::Income => &self.income,
            LineItemKind::Expense => &self.expenses,
        }
    }

    fn items_mut(&mut self, kind: LineItemKind) -> &mut Vec<LineItem> {
        match kind {
            LineItemKind::Income => &mut self.income,
            LineItemKind::Expense => &mut self.expenses,
        }
    }

    /// Append a popup draft. Drafts with a blank label and a blank amount
    /// are dropped; returns whether the item was added.
    pub fn add_line_item(&mut self, kind: LineItemKind, draft: LineItem) -> bool {
        if draft.is_blank() {
            return false;
        }
        self.items_mut(kind).push(draft);
        true
    }

    /// Edit the label or amount of the item at `index`.
    /// Editing an amount clears the list-level error.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn update_line_item(
        &mut self,
        kind: LineItemKind,
        index: usize,
        field: LineItemField,
        value: String,
    ) {
        self.items_mut(kind)[index].set(field, value);
        if field == LineItemField::Amount {
            self.errors.clear(kind.form_key());
        }
    }

    /// Remove and return the item at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn remove_line_item(&mut self, kind: LineItemKind, index: usize) -> LineItem {
        self.items_mut(kind).remove(index)
    }

    pub fn total(&self, kind: LineItemKind) -> f64 {
        line_items::total(self.items(kind))
    }

    pub fn total_income(&self) -> f64 {
        self.total(LineItemKind::Income)
    }

    pub fn total_expenses(&self) -> f64 {
        self.total(LineItemKind::Expense)
    }

    // ------------------------------------------------------------------
    // Whole form
    // ------------------------------------------------------------------

    /// Every rule at once, without touching any state
    pub fn validate_all(&self, today: NaiveDate) -> FieldErrors {
        let mut errors = FieldErrors::default();
        for field in RegistrationField::ALL {
            errors.set(field.into(), validate_field(field, self.value(field), today));
        }
        if line_items::has_no_amount(&self.income) {
            errors.set(FormKey::Income, Err(ValidationError::IncomeMissing));
        }
        if line_items::has_no_amount(&self.expenses) {
            errors.set(FormKey::Expenses, Err(ValidationError::ExpensesMissing));
        }
        errors
    }

    /// Submit attempt: touches all identity fields so their errors show,
    /// stores the error map and returns the validated registration on success.
    pub fn submit(&mut self, today: NaiveDate) -> Result<Registration, FieldErrors> {
        self.touched.extend(RegistrationField::ALL);
        self.errors = self.validate_all(today);
        if !self.errors.is_empty() {
            return Err(self.errors.clone());
        }

        let date_of_birth = match parse_date_of_birth(&self.date_of_birth) {
            Some(date) => date,
            None => {
                self.errors.set(
                    RegistrationField::DateOfBirth.into(),
                    Err(ValidationError::DateOfBirthRequired),
                );
                return Err(self.errors.clone());
            }
        };

        Ok(Registration {
            full_name: self.full_name.trim().to_string(),
            date_of_birth,
            email: self.email.trim().to_string(),
            pan_number: self.pan_number.clone(),
            aadhar_number: normalize::aadhar_digits(&self.aadhar_number),
            annual_income: self.annual_income_value(),
            income: self.income.clone(),
            expenses: self.expenses.clone(),
            total_income: self.total_income(),
            total_expenses: self.total_expenses(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use RegistrationField::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn filled_form() -> RegistrationForm {
        let mut form = RegistrationForm::with_suggested_items();
        form.set_value(FullName, "Priya Nair");
        form.set_value(DateOfBirth, "1995-06-15");
        form.set_value(Email, "priya@example.in");
        form.set_value(PanNumber, "abcde1234f");
        form.set_value(AadharNumber, "123456789012");
        form.update_line_item(
            LineItemKind::Income,
            0,
            LineItemField::Amount,
            "25000".into(),
        );
        form
    }

    #[test]
    fn test_set_value_normalizes_at_capture() {
        let mut form = RegistrationForm::new();
        form.set_value(PanNumber, "ab-cde 1234fxyz");
        assert_eq!(form.value(PanNumber), "ABCDE1234F");
        form.set_value(AadharNumber, "1234-5678-9012");
        assert_eq!(form.value(AadharNumber), "1234 5678 9012");
        form.set_value(FullName, "R2D2 Unit");
        assert_eq!(form.value(FullName), "RD Unit");
    }

    #[test]
    fn test_errors_hidden_until_touched() {
        let mut form = RegistrationForm::new();
        assert_eq!(form.visible_error(Email), None);
        form.blur(Email, today());
        assert_eq!(form.visible_error(Email), Some(ValidationError::EmailRequired));
        assert_eq!(form.visible_error(FullName), None);
    }

    #[test]
    fn test_editing_clears_error_until_next_blur() {
        let mut form = RegistrationForm::new();
        form.set_value(PanNumber, "abcde123");
        form.blur(PanNumber, today());
        assert_eq!(form.visible_error(PanNumber), Some(ValidationError::PanLength));
        form.set_value(PanNumber, "abcde1234");
        assert_eq!(form.visible_error(PanNumber), None);
        form.blur(PanNumber, today());
        assert_eq!(form.visible_error(PanNumber), Some(ValidationError::PanLength));
        form.set_value(PanNumber, "abcde1234f");
        form.blur(PanNumber, today());
        assert_eq!(form.visible_error(PanNumber), None);
    }

    #[test]
    fn test_field_complete() {
        let mut form = RegistrationForm::new();
        form.set_value(FullName, "Priya");
        assert!(!form.is_field_complete(FullName, today()));
        form.blur(FullName, today());
        assert!(form.is_field_complete(FullName, today()));
        form.set_value(FullName, "Pr");
        assert!(!form.is_field_complete(FullName, today()));
        form.set_value(FullName, "");
        form.blur(FullName, today());
        assert!(!form.is_field_complete(FullName, today()));
    }

    #[test]
    fn test_submit_touches_every_field() {
        let mut form = RegistrationForm::new();
        let errors = form.submit(today()).unwrap_err();
        for field in RegistrationField::ALL {
            assert!(form.is_touched(field));
            assert!(form.visible_error(field).is_some(), "{:?}", field);
        }
        assert_eq!(errors.get(FormKey::Income), Some(ValidationError::IncomeMissing));
        assert_eq!(
            errors.get(FormKey::Expenses),
            Some(ValidationError::ExpensesMissing)
        );
        assert_eq!(errors.len(), 7);
    }

    #[test]
    fn test_submit_requires_an_income_amount() {
        let mut form = filled_form();
        form.update_line_item(LineItemKind::Income, 0, LineItemField::Amount, "0".into());
        let errors = form.submit(today()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            form.list_error(LineItemKind::Income),
            Some(ValidationError::IncomeMissing)
        );
        form.update_line_item(LineItemKind::Income, 0, LineItemField::Amount, "10".into());
        assert_eq!(form.list_error(LineItemKind::Income), None);
    }

    #[test]
    fn test_submit_success() {
        let mut form = filled_form();
        form.set_annual_income("600000");
        let registration = form.submit(today()).unwrap();
        assert!(form.errors().is_empty());
        assert_eq!(registration.full_name, "Priya Nair");
        assert_eq!(
            registration.date_of_birth,
            NaiveDate::from_ymd_opt(1995, 6, 15).unwrap()
        );
        assert_eq!(registration.pan_number, "ABCDE1234F");
        assert_eq!(registration.aadhar_number, "123456789012");
        assert_eq!(registration.annual_income, Some(600000.0));
        assert_eq!(registration.total_income, 25000.0);
        assert_eq!(registration.total_expenses, 1000.0);

        let json = serde_json::to_value(&registration).unwrap();
        assert_eq!(json["date_of_birth"], "1995-06-15");
    }

    #[test]
    fn test_annual_income_is_optional() {
        let mut form = filled_form();
        assert_eq!(form.annual_income_value(), None);
        form.set_annual_income("lots");
        assert_eq!(form.annual_income_value(), None);
        assert!(form.submit(today()).is_ok());
    }

    #[test]
    fn test_add_line_item_requires_label_or_amount() {
        let mut form = RegistrationForm::new();
        assert!(!form.add_line_item(LineItemKind::Expense, LineItem::new(" ", "")));
        assert!(form.items(LineItemKind::Expense).is_empty());
        assert!(form.add_line_item(LineItemKind::Expense, LineItem::new("Groceries", "")));
        assert!(form.add_line_item(LineItemKind::Expense, LineItem::new("", "300")));
        assert_eq!(form.items(LineItemKind::Expense).len(), 2);
        assert!(form.items(LineItemKind::Income).is_empty());
    }

    #[test]
    fn test_totals_round_trip_add_then_remove() {
        let mut form = filled_form();
        form.add_line_item(LineItemKind::Income, LineItem::new("Salary", "1234.56"));
        let income_before = form.total_income();
        let expenses_before = form.total_expenses();

        assert!(form.add_line_item(LineItemKind::Income, LineItem::new("Gift", "")));
        assert_eq!(form.total_income(), income_before);
        let last = form.items(LineItemKind::Income).len() - 1;
        form.remove_line_item(LineItemKind::Income, last);
        assert_eq!(form.total_income(), income_before);

        assert!(form.add_line_item(LineItemKind::Expense, LineItem::new("Fuel", "99.9")));
        let last = form.items(LineItemKind::Expense).len() - 1;
        let removed = form.remove_line_item(LineItemKind::Expense, last);
        assert_eq!(removed.label, "Fuel");
        assert_eq!(form.total_expenses(), expenses_before);
    }

    #[test]
    fn test_update_label_keeps_order() {
        let mut form = RegistrationForm::with_suggested_items();
        form.add_line_item(LineItemKind::Income, LineItem::new("Salary", "100"));
        form.update_line_item(LineItemKind::Income, 0, LineItemField::Label, "Rent".into());
        let labels: Vec<&str> = form
            .items(LineItemKind::Income)
            .iter()
            .map(|i| i.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Rent", "Salary"]);
    }

    #[test]
    #[should_panic]
    fn test_remove_out_of_range_panics() {
        let mut form = RegistrationForm::new();
        form.remove_line_item(LineItemKind::Income, 0);
    }

    #[test]
    fn test_field_errors_display() {
        let mut form = RegistrationForm::new();
        let errors = form.submit(today()).unwrap_err();
        assert_eq!(errors.to_string(), "registration has 7 invalid field(s)");
    }
}
