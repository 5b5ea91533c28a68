use crate::domain::a001_advisor::ui::list::AdvisorList;
use crate::domain::a002_booking::ui::list::MyBookings;
use crate::domain::a003_query::ui::list::MyQueries;
use crate::layout::global_context::{AppGlobalContext, Toast};
use crate::routes::AppRoute;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use contracts::domain::a001_advisor::Advisor;
use contracts::domain::a002_booking::UserBooking;
use contracts::domain::a003_query::UserQuery;
use leptos::prelude::*;

/// Tabs of the client dashboard, in bottom-nav order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserTab {
    Advisors,
    Bookings,
    Queries,
    Settings,
}

impl UserTab {
    pub const ALL: [UserTab; 4] = [
        UserTab::Advisors,
        UserTab::Bookings,
        UserTab::Queries,
        UserTab::Settings,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            UserTab::Advisors => "Advisors",
            UserTab::Bookings => "Bookings",
            UserTab::Queries => "Queries",
            UserTab::Settings => "Settings",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            UserTab::Advisors => "users",
            UserTab::Bookings => "calendar",
            UserTab::Queries => "message",
            UserTab::Settings => "settings",
        }
    }
}

const SETTINGS_ITEMS: [(&str, &str); 5] = [
    ("Personal Information", "user"),
    ("Notification Preferences", "bell"),
    ("Payment Methods", "card"),
    ("Security & Privacy", "shield"),
    ("Support Center", "help"),
];

#[component]
pub fn UserPage() -> impl IntoView {
    let ctx = AppGlobalContext::expect();
    let (slot, toast_ms) = ctx
        .config
        .with_value(|c| (c.booking.default_slot.clone(), c.booking.toast_ms));

    let (tab, set_tab) = signal(UserTab::Advisors);
    let bookings = RwSignal::new(Vec::<UserBooking>::new());
    let queries = RwSignal::new(Vec::<UserQuery>::new());

    let on_book = Callback::new(move |advisor: Advisor| {
        let today = chrono::Local::now().date_naive();
        let booking = UserBooking::book(&advisor, &slot, today);
        log::info!("booked {} at {}", advisor.name, booking.time);
        bookings.update(|b| b.push(booking));
        ctx.show_toast(format!("Booked with {}!", advisor.name), toast_ms);
    });

    view! {
        <div class="user-page">
            <PageHeader subtitle="EXPERT FINANCIAL GUIDANCE" back_href=AppRoute::Login.path()>
                <span class="page-header__bell">
                    {icon("bell")}
                    <span class="page-header__bell-dot"></span>
                </span>
            </PageHeader>

            <Toast />

            <div class="user-page__content">
                {move || match tab.get() {
                    UserTab::Advisors => view! { <AdvisorList on_book=on_book /> }.into_any(),
                    UserTab::Bookings => view! { <MyBookings bookings=bookings /> }.into_any(),
                    UserTab::Queries => view! { <MyQueries queries=queries /> }.into_any(),
                    UserTab::Settings => view! { <UserSettings /> }.into_any(),
                }}
            </div>

            <nav class="bottom-nav">
                {UserTab::ALL
                    .into_iter()
                    .map(|t| {
                        let class = move || {
                            if tab.get() == t { "bottom-nav__item bottom-nav__item--active" } else { "bottom-nav__item" }
                        };
                        view! {
                            <button class=class on:click=move |_| set_tab.set(t)>
                                {icon(t.icon())}
                                <span class="bottom-nav__label">{t.label()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </div>
    }
}

#[component]
fn UserSettings() -> impl IntoView {
    view! {
        <div class="tab-padding">
            <h2 class="page-title">"Settings"</h2>
            <div class="settings-card">
                {SETTINGS_ITEMS
                    .into_iter()
                    .map(|(label, icon_name)| view! {
                        <div class="settings-row">
                            <div class="settings-row__left">
                                {icon(icon_name)}
                                <span class="settings-row__label">{label}</span>
                            </div>
                            {icon("chevron-right")}
                        </div>
                    })
                    .collect_view()}
            </div>
            <a class="button button--danger-outline button--block" href=AppRoute::Login.path()>
                "Sign Out"
            </a>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs_in_nav_order() {
        let labels: Vec<_> = UserTab::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, ["Advisors", "Bookings", "Queries", "Settings"]);
    }
}
