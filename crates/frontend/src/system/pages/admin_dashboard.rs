use crate::dashboards::AdminSummaryDashboard;
use crate::domain::a001_advisor::ui::grid::AdvisorGrid;
use crate::domain::a002_booking::ui::table::BookingsTable;
use crate::domain::a003_query::ui::moderation::PendingQueriesPanel;
use crate::layout::global_context::AppGlobalContext;
use crate::routes::AppRoute;
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use contracts::domain::a003_query::PendingQueries;
use contracts::shared::catalog;
use leptos::prelude::*;

/// Sidebar sections of the admin panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminSection {
    Dashboard,
    Advisors,
    Bookings,
    Queries,
    Settings,
}

impl AdminSection {
    pub const ALL: [AdminSection; 5] = [
        AdminSection::Dashboard,
        AdminSection::Advisors,
        AdminSection::Bookings,
        AdminSection::Queries,
        AdminSection::Settings,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AdminSection::Dashboard => "Dashboard",
            AdminSection::Advisors => "Advisors",
            AdminSection::Bookings => "Bookings",
            AdminSection::Queries => "Queries",
            AdminSection::Settings => "Settings",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AdminSection::Dashboard => "grid",
            AdminSection::Advisors => "users",
            AdminSection::Bookings => "calendar",
            AdminSection::Queries => "message",
            AdminSection::Settings => "settings",
        }
    }
}

const SETTINGS_ITEMS: [&str; 4] = ["General", "Notifications", "Security", "Integrations"];

#[component]
pub fn AdminPage() -> impl IntoView {
    let ctx = AppGlobalContext::expect();
    let brand = ctx.config.with_value(|c| c.app.brand.clone());

    let (section, set_section) = signal(AdminSection::Dashboard);
    let queries = RwSignal::new(PendingQueries::new(catalog::pending_queries()));

    view! {
        <div class="admin-page">
            <aside class="sidebar">
                <div class="sidebar__logo">
                    <span class="sidebar__brand">{brand}</span>
                    <Badge variant="admin">"ADMIN"</Badge>
                </div>

                <nav class="sidebar__nav">
                    {AdminSection::ALL
                        .into_iter()
                        .map(|s| {
                            let class = move || {
                                if section.get() == s { "sidebar__item sidebar__item--active" } else { "sidebar__item" }
                            };
                            view! {
                                <button class=class on:click=move |_| set_section.set(s)>
                                    {icon(s.icon())}
                                    {s.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>

                <div class="sidebar__bottom">
                    <a class="sidebar__item" href=AppRoute::Login.path()>
                        {icon("back")}
                        "Back to Login"
                    </a>
                    <a class="sidebar__item" href=AppRoute::Login.path()>
                        {icon("logout")}
                        "Log Out"
                    </a>
                </div>
            </aside>

            <main class="admin-page__main">
                <div class="top-bar">
                    <div class="search-box">
                        <span class="search-box__icon">{icon("search")}</span>
                        <input class="search-box__input" placeholder="Search anything..." />
                    </div>
                    <button class="button button--primary">
                        {icon("plus")}
                        "Add New Advisor"
                    </button>
                </div>

                {move || match section.get() {
                    AdminSection::Dashboard => view! { <AdminSummaryDashboard queries=queries /> }.into_any(),
                    AdminSection::Advisors => view! { <AdvisorGrid /> }.into_any(),
                    AdminSection::Bookings => view! {
                        <div>
                            <h2 class="page-title">"All Bookings"</h2>
                            <div class="card">
                                <BookingsTable bookings=catalog::recent_bookings() />
                            </div>
                        </div>
                    }.into_any(),
                    AdminSection::Queries => view! { <PendingQueriesPanel queries=queries /> }.into_any(),
                    AdminSection::Settings => view! { <AdminSettings /> }.into_any(),
                }}
            </main>
        </div>
    }
}

#[component]
fn AdminSettings() -> impl IntoView {
    view! {
        <div>
            <h2 class="page-title">"Settings"</h2>
            <div class="card settings-card">
                {SETTINGS_ITEMS
                    .into_iter()
                    .map(|label| view! {
                        <div class="settings-row">
                            <span class="settings-row__label">{label}</span>
                            {icon("chevron-right")}
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_start_with_dashboard() {
        assert_eq!(AdminSection::ALL[0], AdminSection::Dashboard);
        assert_eq!(AdminSection::ALL.len(), 5);
        assert!(AdminSection::ALL.iter().all(|s| !s.label().is_empty()));
    }
}
