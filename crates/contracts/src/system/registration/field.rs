use serde::{Deserialize, Serialize};

/// Identity fields of the registration form that carry a validation rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RegistrationField {
    FullName,
    DateOfBirth,
    Email,
    PanNumber,
    AadharNumber,
}

impl RegistrationField {
    pub const ALL: [RegistrationField; 5] = [
        RegistrationField::FullName,
        RegistrationField::DateOfBirth,
        RegistrationField::Email,
        RegistrationField::PanNumber,
        RegistrationField::AadharNumber,
    ];

    /// Stable key, also used as the DOM id of the input
    pub fn key(&self) -> &'static str {
        match self {
            RegistrationField::FullName => "fullName",
            RegistrationField::DateOfBirth => "dateOfBirth",
            RegistrationField::Email => "email",
            RegistrationField::PanNumber => "panNumber",
            RegistrationField::AadharNumber => "aadharNumber",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RegistrationField::FullName => "FULL NAME",
            RegistrationField::DateOfBirth => "DATE OF BIRTH",
            RegistrationField::Email => "EMAIL ADDRESS",
            RegistrationField::PanNumber => "PAN NUMBER",
            RegistrationField::AadharNumber => "AADHAR NUMBER",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            RegistrationField::FullName => "Enter your full name",
            RegistrationField::DateOfBirth => "",
            RegistrationField::Email => "you@example.com",
            RegistrationField::PanNumber => "ABCDE1234F",
            RegistrationField::AadharNumber => "XXXX XXXX XXXX",
        }
    }

    /// HTML input type
    pub fn input_type(&self) -> &'static str {
        match self {
            RegistrationField::DateOfBirth => "date",
            RegistrationField::Email => "email",
            _ => "text",
        }
    }

    /// Max length hint for the input element, after normalization
    pub fn max_length(&self) -> Option<usize> {
        match self {
            RegistrationField::PanNumber => Some(10),
            RegistrationField::AadharNumber => Some(14),
            _ => None,
        }
    }
}

/// Which line-item list an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LineItemKind {
    Income,
    Expense,
}

impl LineItemKind {
    pub fn title(&self) -> &'static str {
        match self {
            LineItemKind::Income => "Income",
            LineItemKind::Expense => "Expenses",
        }
    }

    /// Fallback label for an item whose label is blank
    pub fn item_noun(&self) -> &'static str {
        match self {
            LineItemKind::Income => "Income",
            LineItemKind::Expense => "Expense",
        }
    }

    pub fn label_placeholder(&self) -> &'static str {
        match self {
            LineItemKind::Income => "e.g. Rent, Salary",
            LineItemKind::Expense => "e.g. Shop, Rent",
        }
    }

    pub fn form_key(&self) -> FormKey {
        match self {
            LineItemKind::Income => FormKey::Income,
            LineItemKind::Expense => FormKey::Expenses,
        }
    }
}

/// Key of the error map: every identity field plus the two list-level checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FormKey {
    Field(RegistrationField),
    Income,
    Expenses,
}

impl From<RegistrationField> for FormKey {
    fn from(field: RegistrationField) -> Self {
        FormKey::Field(field)
    }
}
