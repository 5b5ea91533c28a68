use crate::domain::a002_booking::ui::table::BookingsTable;
use crate::shared::components::stat_card::StatCard;
use contracts::dashboards::d400_admin_summary::admin_stat_cards;
use contracts::domain::a002_booking::{bar_height_percent, DailyBookings};
use contracts::domain::a003_query::PendingQueries;
use contracts::shared::catalog;
use leptos::prelude::*;

/// Number of advisors listed in the "Top Advisors" card
const TOP_ADVISORS: usize = 3;

/// Admin landing dashboard: stat cards, weekly bookings chart, top advisors
/// and the recent bookings table
#[component]
pub fn AdminSummaryDashboard(queries: RwSignal<PendingQueries>) -> impl IntoView {
    let stats = move || {
        admin_stat_cards(queries.with(|q| q.len()))
            .into_iter()
            .map(|card| view! { <StatCard card=card /> })
            .collect_view()
    };

    view! {
        <div class="stats-grid">{stats}</div>

        <div class="chart-grid">
            <div class="card">
                <h3 class="card__title">"Bookings This Week"</h3>
                <WeeklyBookingsChart series=catalog::weekly_bookings() />
            </div>

            <div class="card">
                <h3 class="card__title">"Top Advisors"</h3>
                {catalog::advisors()
                    .into_iter()
                    .take(TOP_ADVISORS)
                    .map(|a| view! {
                        <div class="advisor-row">
                            <img class="avatar" src=a.avatar_url alt=a.name.clone() />
                            <div>
                                <div class="advisor-row__name">{a.name}</div>
                                <div class="advisor-row__rating">{format!("★ {}", a.rating)}</div>
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>

        <div class="card card--spaced">
            <h3 class="card__title">"Recent Bookings"</h3>
            <BookingsTable bookings=catalog::recent_bookings() with_actions=true />
        </div>
    }
}

/// Plain CSS bar chart, bars scaled to the busiest day
#[component]
fn WeeklyBookingsChart(series: Vec<DailyBookings>) -> impl IntoView {
    let bars = series
        .iter()
        .map(|day| {
            let height = bar_height_percent(&series, day);
            view! {
                <div class="bar-chart__column" title=format!("{}: {}", day.day, day.bookings)>
                    <div class="bar-chart__track">
                        <div class="bar-chart__bar" style=format!("height: {height:.1}%;")></div>
                    </div>
                    <div class="bar-chart__label">{day.day.clone()}</div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="bar-chart">{bars}</div>
    }
}
