use crate::shared::format::format_rupees;
use crate::shared::icons::icon;
use contracts::domain::a001_advisor::{filter_advisors, Advisor};
use contracts::enums::AdvisorCategory;
use contracts::shared::catalog;
use leptos::prelude::*;

/// Client-side advisor browser: free-text search, category chips and a
/// "Book Now" action per card. The filter reruns on every keystroke.
#[component]
#[allow(non_snake_case)]
pub fn AdvisorList(on_book: Callback<Advisor>) -> impl IntoView {
    let advisors = StoredValue::new(catalog::advisors());
    let (search, set_search) = signal(String::new());
    let (category, set_category) = signal(AdvisorCategory::default());

    let visible = move || {
        advisors.with_value(|all| {
            filter_advisors(all, &search.get(), category.get())
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="tab-padding">
            <div class="search-box">
                <span class="search-box__icon">{icon("search")}</span>
                <input
                    class="search-box__input"
                    placeholder="Search advisors, expertise..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
            </div>

            <div class="chip-row">
                {catalog::categories()
                    .into_iter()
                    .map(|c| {
                        let class = move || {
                            if category.get() == c { "chip chip--active" } else { "chip" }
                        };
                        view! {
                            <button class=class on:click=move |_| set_category.set(c)>
                                {c.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="section-label">"AVAILABLE ADVISORS"</div>

            <For
                each=visible
                key=|a| a.id
                children=move |advisor| view! { <AdvisorCard advisor=advisor on_book=on_book /> }
            />

            <Show when=move || visible().is_empty()>
                <div class="empty-state">
                    <div class="empty-state__title">"No advisors match your search"</div>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn AdvisorCard(advisor: Advisor, on_book: Callback<Advisor>) -> impl IntoView {
    let fee = format_rupees(f64::from(advisor.fee));
    let meta = format!(
        "{} Yrs Exp. · {} Reviews",
        advisor.experience_years, advisor.review_count
    );
    let tags = advisor
        .tags
        .iter()
        .map(|t| view! { <span class="tag">{t.clone()}</span> })
        .collect_view();
    let booked = advisor.clone();

    view! {
        <div class="advisor-card">
            <div class="advisor-card__top">
                <div class="advisor-card__avatar">
                    <img src=advisor.avatar_url.clone() alt=advisor.name.clone() />
                    <div class="advisor-card__rating">{format!("★ {}", advisor.rating)}</div>
                </div>
                <div>
                    <div class="advisor-card__name">{advisor.name.clone()}</div>
                    <div class="advisor-card__role">{advisor.role.clone()}</div>
                    <div class="tag-row">{tags}</div>
                </div>
            </div>
            <div class="advisor-card__bottom">
                <div>
                    <div class="advisor-card__fee-label">"Consultation Fee"</div>
                    <div class="advisor-card__fee">{fee}</div>
                </div>
                <button class="button button--dark" on:click=move |_| on_book.run(booked.clone())>
                    "Book Now "
                    {icon("chevron-right")}
                </button>
            </div>
            <div class="advisor-card__meta">{meta}</div>
        </div>
    }
}
