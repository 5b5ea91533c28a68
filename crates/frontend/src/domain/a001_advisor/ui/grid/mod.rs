use crate::shared::format::format_rupees;
use contracts::domain::a001_advisor::Advisor;
use contracts::shared::catalog;
use leptos::prelude::*;

/// Admin view of every advisor in the catalog
#[component]
#[allow(non_snake_case)]
pub fn AdvisorGrid() -> impl IntoView {
    view! {
        <div>
            <h2 class="page-title">"Advisors"</h2>
            <div class="advisor-grid">
                {catalog::advisors()
                    .into_iter()
                    .map(|advisor| view! { <AdvisorTile advisor=advisor /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn AdvisorTile(advisor: Advisor) -> impl IntoView {
    let tags = advisor
        .tags
        .iter()
        .map(|t| view! { <span class="tag">{t.clone()}</span> })
        .collect_view();

    view! {
        <div class="card">
            <div class="advisor-tile__row">
                <img class="avatar avatar--lg" src=advisor.avatar_url.clone() alt=advisor.name.clone() />
                <div>
                    <div class="advisor-tile__name">{advisor.name.clone()}</div>
                    <div class="advisor-tile__role">{advisor.role.clone()}</div>
                    <div class="tag-row">{tags}</div>
                </div>
            </div>
            <div class="advisor-tile__footer">
                <span>{format!("★ {} · {} reviews", advisor.rating, advisor.review_count)}</span>
                <span class="advisor-tile__fee">
                    {format!("{}/session", format_rupees(f64::from(advisor.fee)))}
                </span>
            </div>
        </div>
    }
}
