use crate::shared::components::ui::StatusBadge;
use crate::shared::format::{format_booking_date, format_rupees};
use contracts::domain::a002_booking::UserBooking;
use leptos::prelude::*;

/// Client's own bookings, newest last
#[component]
#[allow(non_snake_case)]
pub fn MyBookings(#[prop(into)] bookings: Signal<Vec<UserBooking>>) -> impl IntoView {
    view! {
        <div class="tab-padding">
            <h2 class="page-title">"My Bookings"</h2>
            <Show
                when=move || bookings.with(|b| !b.is_empty())
                fallback=|| view! {
                    <div class="empty-state">
                        <div class="empty-state__title">"No bookings yet"</div>
                        <div class="empty-state__subtitle">"Book a consultation from the Advisors tab"</div>
                    </div>
                }
            >
                {move || bookings.get().into_iter().map(|b| view! { <BookingCard booking=b /> }).collect_view()}
            </Show>
        </div>
    }
}

#[component]
fn BookingCard(booking: UserBooking) -> impl IntoView {
    let amount = format_rupees(f64::from(booking.amount()));
    let when = format!("{} · {}", format_booking_date(booking.date), booking.time);
    let status = booking.status;

    view! {
        <div class="booking-card">
            <div class="booking-card__top">
                <div class="booking-card__name">{booking.advisor.name}</div>
                <StatusBadge status=status />
            </div>
            <div class="booking-card__role">{booking.advisor.role}</div>
            <div class="booking-card__bottom">
                <span>{when}</span>
                <span class="booking-card__amount">{amount}</span>
            </div>
        </div>
    }
}
