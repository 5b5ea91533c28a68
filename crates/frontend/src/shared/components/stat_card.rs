use crate::shared::icons::icon;
use contracts::dashboards::d400_admin_summary::StatCard as StatCardData;
use leptos::prelude::*;

#[component]
pub fn StatCard(card: StatCardData) -> impl IntoView {
    let change_class = if card.positive {
        "stat-card__change stat-card__change--up"
    } else {
        "stat-card__change stat-card__change--down"
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__label">{card.label}</div>
            <div class="stat-card__row">
                <div class="stat-card__content">
                    <div class="stat-card__value">{card.value}</div>
                    <div class=change_class>{card.change}</div>
                </div>
                <div class="stat-card__icon" style=format!("color: {};", card.accent)>
                    {icon(&card.icon)}
                </div>
            </div>
        </div>
    }
}
