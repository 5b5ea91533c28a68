use crate::shared::components::ui::StatusBadge;
use contracts::domain::a003_query::UserQuery;
use leptos::prelude::*;

/// Client query box plus the list of submitted queries
#[component]
#[allow(non_snake_case)]
pub fn MyQueries(queries: RwSignal<Vec<UserQuery>>) -> impl IntoView {
    let (text, set_text) = signal(String::new());

    let submit = move |_| {
        if let Some(query) = UserQuery::submit(&text.get_untracked()) {
            log::info!("query submitted");
            queries.update(|q| q.push(query));
            set_text.set(String::new());
        }
    };

    view! {
        <div class="tab-padding">
            <h2 class="page-title">"My Queries"</h2>
            <div class="query-box">
                <textarea
                    class="query-box__input"
                    placeholder="Ask your financial question..."
                    prop:value=move || text.get()
                    on:input=move |ev| set_text.set(event_target_value(&ev))
                />
                <button class="button button--primary button--block" on:click=submit>
                    "Submit Query"
                </button>
            </div>
            {move || {
                queries
                    .get()
                    .into_iter()
                    .map(|q| {
                        let status = q.status;
                        view! {
                            <div class="query-item">
                                <div class="query-item__text">{q.text}</div>
                                <StatusBadge status=status />
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
