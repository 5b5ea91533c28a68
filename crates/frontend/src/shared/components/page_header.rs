use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Top bar with back button, brand and an optional right-hand slot
#[component]
pub fn PageHeader(
    /// Small caps line under the brand
    #[prop(into)]
    subtitle: String,

    /// Route the back arrow leads to
    back_href: &'static str,

    /// Right-hand content
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let ctx = AppGlobalContext::expect();
    let brand = ctx.config.with_value(|c| c.app.brand.clone());

    view! {
        <div class="page-header">
            <a class="page-header__back" href=back_href>
                {icon("back")}
            </a>
            <div class="page-header__brand">
                <div class="page-header__title">{brand}</div>
                <div class="page-header__subtitle">{subtitle}</div>
            </div>
            <div class="page-header__actions">
                {children.map(|c| c())}
            </div>
        </div>
    }
}
