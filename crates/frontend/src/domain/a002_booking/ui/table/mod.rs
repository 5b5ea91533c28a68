use crate::shared::components::ui::StatusBadge;
use crate::shared::format::format_rupees;
use contracts::domain::a002_booking::RecentBooking;
use leptos::prelude::*;

/// Admin bookings table. `with_actions` adds the trailing menu column shown
/// on the dashboard.
#[component]
#[allow(non_snake_case)]
pub fn BookingsTable(
    bookings: Vec<RecentBooking>,
    #[prop(optional)] with_actions: bool,
) -> impl IntoView {
    let mut headers = vec!["USER", "ADVISOR", "TIME", "STATUS", "AMOUNT"];
    if with_actions {
        headers.push("");
    }

    view! {
        <table class="table">
            <thead>
                <tr class="table__head">
                    {headers.into_iter().map(|h| view! { <th class="table__th">{h}</th> }).collect_view()}
                </tr>
            </thead>
            <tbody>
                {bookings
                    .into_iter()
                    .map(|b| {
                        let status = b.status;
                        view! {
                            <tr class="table__row">
                                <td class="table__cell table__cell--strong">{b.user}</td>
                                <td class="table__cell">{b.advisor}</td>
                                <td class="table__cell table__cell--muted">{b.time}</td>
                                <td class="table__cell"><StatusBadge status=status /></td>
                                <td class="table__cell table__cell--strong">
                                    {format_rupees(f64::from(b.amount))}
                                </td>
                                {with_actions.then(|| view! { <td class="table__cell table__cell--muted">"⋮"</td> })}
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}
