use super::view_model::RegisterViewModel;
use crate::layout::modal_service::Modal;
use crate::routes::AppRoute;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::FormField;
use crate::shared::format::format_rupees;
use crate::shared::icons::icon;
use contracts::system::registration::{LineItemField, LineItemKind, RegistrationField};
use leptos::prelude::*;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let vm = RegisterViewModel::new();

    view! {
        <div class="register-page">
            <Show when=move || vm.registered.with(Option::is_some)>
                <SuccessOverlay />
            </Show>

            <PageHeader subtitle="CREATE YOUR ACCOUNT" back_href=AppRoute::Login.path() />

            <AddItemPopup vm=vm />

            <div class="register-page__content">
                <div class="form-section">
                    <div class="form-section__title">"Personal Details"</div>
                    {RegistrationField::ALL
                        .into_iter()
                        .map(|field| view! { <IdentityField vm=vm field=field /> })
                        .collect_view()}
                    <FormField
                        label="ANNUAL INCOME"
                        id="annualIncome"
                        value=Signal::derive(move || vm.annual_income())
                        on_input=Callback::new(move |v: String| vm.set_annual_income(v))
                        placeholder="0"
                        input_type="number"
                        optional=true
                    />
                </div>

                <LineItemSection vm=vm kind=LineItemKind::Income />
                <LineItemSection vm=vm kind=LineItemKind::Expense />

                <button class="button button--primary button--block" on:click=move |_| vm.submit()>
                    "Create Account"
                </button>

                <p class="register-page__login">
                    "Already have an account? "
                    <a class="link" href=AppRoute::Login.path()>"Sign In"</a>
                </p>
            </div>
        </div>
    }
}

/// One of the five validated inputs, wired to normalize on input and
/// validate on blur
#[component]
fn IdentityField(vm: RegisterViewModel, field: RegistrationField) -> impl IntoView {
    view! {
        <FormField
            label=field.label()
            id=field.key()
            value=Signal::derive(move || vm.value(field))
            on_input=Callback::new(move |v: String| vm.set_field(field, v))
            on_blur=Callback::new(move |_| vm.blur(field))
            error=Signal::derive(move || vm.field_error(field))
            complete=Signal::derive(move || vm.field_complete(field))
            placeholder=field.placeholder()
            input_type=field.input_type()
            max_length=field.max_length()
        />
    }
}

/// Income or expense list with inline amount editing and a running total
#[component]
fn LineItemSection(vm: RegisterViewModel, kind: LineItemKind) -> impl IntoView {
    let total_class = match kind {
        LineItemKind::Income => "summary-row__value summary-row__value--green",
        LineItemKind::Expense => "summary-row__value summary-row__value--red",
    };

    view! {
        <div class="form-section">
            <div class="form-section__title">
                {kind.title()}
                <span class="form__required">" *"</span>
            </div>

            // Rows keyed by position so an input keeps focus while its value changes
            <For
                each=move || 0..vm.item_count(kind)
                key=|index| *index
                children=move |index| view! { <LineItemRow vm=vm kind=kind index=index /> }
            />

            {move || vm.list_error(kind).map(|e| view! { <div class="form__error">{e}</div> })}

            <div class="summary-row">
                <div>
                    <div class="summary-row__meta">{format!("Total {}", kind.title())}</div>
                    <div class=total_class>{move || format_rupees(vm.total(kind))}</div>
                </div>
                <button class="button button--round" on:click=move |_| vm.open_popup(kind)>
                    {icon("plus")}
                </button>
            </div>
        </div>
    }
}

#[component]
fn LineItemRow(vm: RegisterViewModel, kind: LineItemKind, index: usize) -> impl IntoView {
    let item = move || vm.item(kind, index).unwrap_or_default();
    let label = move || {
        let label = item().label;
        if label.trim().is_empty() {
            kind.item_noun().to_string()
        } else {
            label
        }
    };

    view! {
        <div class="item-row">
            <div class="item-row__info">
                <div class="item-row__label">{label}</div>
                <div class="item-row__amount">{move || format_rupees(item().amount_value())}</div>
            </div>
            <div class="item-row__actions">
                <input
                    class="form__input form__input--inline"
                    type="number"
                    placeholder="0"
                    prop:value=move || item().amount
                    on:input=move |ev| {
                        vm.update_item(kind, index, LineItemField::Amount, event_target_value(&ev))
                    }
                />
                <button class="button button--icon" on:click=move |_| vm.remove_item(kind, index)>
                    {icon("x")}
                </button>
            </div>
        </div>
    }
}

/// Popup that collects a label and an amount for a new line item
#[component]
fn AddItemPopup(vm: RegisterViewModel) -> impl IntoView {
    let title = Signal::derive(move || format!("Add {}", vm.popup_kind.get().item_noun()));

    view! {
        <Modal modal=vm.modal title=title>
            <label class="form__label form__label--caps" for="popupLabel">"LABEL"</label>
            <input
                id="popupLabel"
                class="form__input"
                placeholder=move || vm.popup_kind.get().label_placeholder()
                prop:value=move || vm.draft.with(|d| d.label.clone())
                on:input=move |ev| vm.set_draft(LineItemField::Label, event_target_value(&ev))
                autofocus
            />
            <label class="form__label form__label--caps" for="popupAmount">"AMOUNT"</label>
            <div class="amount-input">
                <span class="amount-input__currency">"₹"</span>
                <input
                    id="popupAmount"
                    class="form__input"
                    type="number"
                    placeholder="0"
                    prop:value=move || vm.draft.with(|d| d.amount.clone())
                    on:input=move |ev| vm.set_draft(LineItemField::Amount, event_target_value(&ev))
                />
            </div>
            <button class="button button--primary button--block" on:click=move |_| vm.confirm_popup()>
                {move || format!("+ Add {}", vm.popup_kind.get().item_noun())}
            </button>
        </Modal>
    }
}

#[component]
fn SuccessOverlay() -> impl IntoView {
    view! {
        <div class="success-overlay">
            <div class="success-overlay__box">
                <div class="success-overlay__icon">{icon("check")}</div>
                <div class="success-overlay__title">"Registration Successful!"</div>
                <div class="success-overlay__sub">"Your account is ready."</div>
                <a class="button button--primary" href=AppRoute::Login.path()>
                    "Continue to Sign In"
                </a>
            </div>
        </div>
    }
}
