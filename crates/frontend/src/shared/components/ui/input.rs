use crate::shared::icons::icon;
use leptos::prelude::*;

/// Labelled form input with touched-state feedback.
///
/// Shows `error` under the input when present, and a tick when `complete`.
#[component]
pub fn FormField(
    /// Label text
    #[prop(into)]
    label: String,
    /// ID for the input element
    #[prop(into)]
    id: String,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    on_input: Callback<String>,
    /// Blur event handler
    #[prop(optional)]
    on_blur: Option<Callback<()>>,
    /// Error message to display (already gated on touched)
    #[prop(optional, into)]
    error: Signal<Option<String>>,
    /// Touched, valid and non-blank
    #[prop(optional, into)]
    complete: Signal<bool>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "date", "email", ...
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// maxlength attribute
    #[prop(default = None)]
    max_length: Option<usize>,
    /// Show the optional marker instead of the required asterisk
    #[prop(optional)]
    optional: bool,
) -> impl IntoView {
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let input_class = move || {
        if error.get().is_some() {
            "form__input form__input--error"
        } else if complete.get() {
            "form__input form__input--success"
        } else {
            "form__input"
        }
    };

    view! {
        <div class="form__group">
            <label class="form__label" for=id.clone()>
                {label}
                {if optional {
                    view! { <span class="form__optional">" (Optional)"</span> }.into_any()
                } else {
                    view! { <span class="form__required">" *"</span> }.into_any()
                }}
            </label>
            <div class="form__control">
                <input
                    id=id
                    class=input_class
                    type=input_t
                    prop:value=move || value.get()
                    placeholder=input_placeholder
                    maxlength=max_length.map(|m| m.to_string())
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                    on:blur=move |_| {
                        if let Some(handler) = on_blur {
                            handler.run(());
                        }
                    }
                />
                <Show when=move || complete.get()>
                    <span class="form__tick">{icon("check")}</span>
                </Show>
            </div>
            {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}
