use crate::shared::icons::icon;
use leptos::prelude::*;

/// Visibility of the single popup a page can show at a time
#[derive(Clone, Copy)]
pub struct ModalService {
    is_visible: RwSignal<bool>,
}

impl ModalService {
    pub fn new() -> Self {
        Self {
            is_visible: RwSignal::new(false),
        }
    }

    pub fn show(&self) {
        self.is_visible.set(true);
    }

    pub fn hide(&self) {
        self.is_visible.set(false);
    }

    pub fn is_open(&self) -> bool {
        self.is_visible.get()
    }
}

impl Default for ModalService {
    fn default() -> Self {
        Self::new()
    }
}

/// Popup with a title bar. Clicking the overlay or the close button hides it.
#[component]
pub fn Modal(
    modal: ModalService,
    #[prop(into)]
    title: Signal<String>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || modal.is_open()>
            <div class="modal-overlay" on:click=move |_| modal.hide()>
                <div class="modal-content" on:click=|e| e.stop_propagation()>
                    <div class="modal-header">
                        <span class="modal-title">{move || title.get()}</span>
                        <button class="modal-close" on:click=move |_| modal.hide()>
                            {icon("x")}
                        </button>
                    </div>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
