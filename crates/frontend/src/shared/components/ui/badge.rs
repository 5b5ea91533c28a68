use contracts::enums::BookingStatus;
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "admin", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "admin" => "badge--admin",
        _ => "badge--neutral",
    };

    view! {
        <span class=move || format!("badge {}", variant_class())>
            {children()}
        </span>
    }
}

/// Coloured pill for a booking or query status
#[component]
pub fn StatusBadge(
    #[prop(into)]
    status: Signal<BookingStatus>,
) -> impl IntoView {
    let style = move || {
        let s = status.get();
        format!("color: {}; background: {};", s.color(), s.background())
    };

    view! {
        <span class="badge badge--status" style=style>
            {move || status.get().display_name()}
        </span>
    }
}
