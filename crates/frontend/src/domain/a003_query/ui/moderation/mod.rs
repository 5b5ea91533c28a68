use contracts::domain::a003_query::{PendingQueries, PendingQuery};
use leptos::prelude::*;

/// Admin moderation queue. Approve and reject both remove the query.
#[component]
#[allow(non_snake_case)]
pub fn PendingQueriesPanel(queries: RwSignal<PendingQueries>) -> impl IntoView {
    let resolve = move |id: u32, action: &'static str| {
        let mut removed = false;
        queries.update(|q| removed = q.resolve(id));
        if removed {
            log::info!("query #{id} {action}");
        } else {
            log::warn!("query #{id} already resolved");
        }
    };

    view! {
        <div>
            <h2 class="page-title">"Pending Queries"</h2>
            <Show
                when=move || queries.with(|q| !q.is_empty())
                fallback=|| view! {
                    <div class="empty-state">
                        <div class="empty-state__icon">"✓"</div>
                        <div class="empty-state__title">"All queries resolved"</div>
                    </div>
                }
            >
                <For
                    each=move || queries.with(|q| q.items().to_vec())
                    key=|q| q.id
                    children=move |query: PendingQuery| {
                        let id = query.id;
                        view! {
                            <div class="query-card">
                                <div>
                                    <div class="query-card__question">{query.question}</div>
                                    <div class="query-card__from">{format!("From: User #{id}")}</div>
                                </div>
                                <div class="query-card__actions">
                                    <button class="button button--success" on:click=move |_| resolve(id, "approved")>
                                        "Approve"
                                    </button>
                                    <button class="button button--danger" on:click=move |_| resolve(id, "rejected")>
                                        "Reject"
                                    </button>
                                </div>
                            </div>
                        }
                    }
                />
            </Show>
        </div>
    }
}
