use crate::layout::modal_service::ModalService;
use chrono::NaiveDate;
use contracts::system::registration::{
    LineItem, LineItemField, LineItemKind, Registration, RegistrationField, RegistrationForm,
};
use leptos::prelude::*;

/// Local calendar date used for the age rule
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// ViewModel for the registration form
#[derive(Clone, Copy)]
pub struct RegisterViewModel {
    pub form: RwSignal<RegistrationForm>,
    /// Which list the add-item popup appends to
    pub popup_kind: RwSignal<LineItemKind>,
    /// Label and amount typed into the popup
    pub draft: RwSignal<LineItem>,
    pub modal: ModalService,
    /// Set once a submit attempt passes validation
    pub registered: RwSignal<Option<Registration>>,
}

impl RegisterViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(RegistrationForm::with_suggested_items()),
            popup_kind: RwSignal::new(LineItemKind::Income),
            draft: RwSignal::new(LineItem::default()),
            modal: ModalService::new(),
            registered: RwSignal::new(None),
        }
    }

    // ------------------------------------------------------------------
    // Identity fields
    // ------------------------------------------------------------------

    pub fn value(&self, field: RegistrationField) -> String {
        self.form.with(|f| f.value(field).to_string())
    }

    pub fn set_field(&self, field: RegistrationField, raw: String) {
        self.form.update(|f| f.set_value(field, &raw));
    }

    pub fn blur(&self, field: RegistrationField) {
        self.form.update(|f| f.blur(field, today()));
    }

    pub fn field_error(&self, field: RegistrationField) -> Option<String> {
        self.form
            .with(|f| f.visible_error(field).map(|e| e.to_string()))
    }

    pub fn field_complete(&self, field: RegistrationField) -> bool {
        self.form.with(|f| f.is_field_complete(field, today()))
    }

    pub fn annual_income(&self) -> String {
        self.form.with(|f| f.annual_income().to_string())
    }

    pub fn set_annual_income(&self, raw: String) {
        self.form.update(|f| f.set_annual_income(&raw));
    }

    // ------------------------------------------------------------------
    // Line items
    // ------------------------------------------------------------------

    pub fn item_count(&self, kind: LineItemKind) -> usize {
        self.form.with(|f| f.items(kind).len())
    }

    /// Item at `index`, or `None` while a removed row is being torn down
    pub fn item(&self, kind: LineItemKind, index: usize) -> Option<LineItem> {
        self.form.with(|f| f.items(kind).get(index).cloned())
    }

    pub fn total(&self, kind: LineItemKind) -> f64 {
        self.form.with(|f| f.total(kind))
    }

    pub fn list_error(&self, kind: LineItemKind) -> Option<String> {
        self.form
            .with(|f| f.list_error(kind).map(|e| e.to_string()))
    }

    pub fn update_item(&self, kind: LineItemKind, index: usize, field: LineItemField, value: String) {
        self.form.update(|f| {
            if index < f.items(kind).len() {
                f.update_line_item(kind, index, field, value);
            }
        });
    }

    pub fn remove_item(&self, kind: LineItemKind, index: usize) {
        self.form.update(|f| {
            if index < f.items(kind).len() {
                let removed = f.remove_line_item(kind, index);
                log::debug!("removed {} item '{}'", kind.item_noun(), removed.label);
            }
        });
    }

    // ------------------------------------------------------------------
    // Add-item popup
    // ------------------------------------------------------------------

    /// Open the popup for `kind` with an empty draft
    pub fn open_popup(&self, kind: LineItemKind) {
        self.popup_kind.set(kind);
        self.draft.set(LineItem::default());
        self.modal.show();
    }

    pub fn set_draft(&self, field: LineItemField, value: String) {
        self.draft.update(|d| d.set(field, value));
    }

    /// Append the draft (blank drafts are dropped) and close the popup
    pub fn confirm_popup(&self) {
        let kind = self.popup_kind.get_untracked();
        let draft = self.draft.get_untracked();
        let mut added = false;
        self.form.update(|f| added = f.add_line_item(kind, draft));
        if !added {
            log::debug!("blank {} draft dropped", kind.item_noun());
        }
        self.modal.hide();
    }

    // ------------------------------------------------------------------
    // Submit
    // ------------------------------------------------------------------

    pub fn submit(&self) {
        let mut outcome = None;
        self.form.update(|f| outcome = Some(f.submit(today())));

        match outcome {
            Some(Ok(registration)) => {
                match serde_json::to_string(&registration) {
                    Ok(json) => log::info!("registration accepted: {json}"),
                    Err(e) => log::warn!("registration accepted, cannot serialize: {e}"),
                }
                self.registered.set(Some(registration));
            }
            Some(Err(errors)) => {
                log::info!("registration rejected: {errors}");
                for (key, error) in errors.iter() {
                    log::debug!("  {key:?}: {error}");
                }
            }
            None => {}
        }
    }
}

impl Default for RegisterViewModel {
    fn default() -> Self {
        Self::new()
    }
}
