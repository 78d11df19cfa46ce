//! Private confirmation page shown after a booking.

use leptos::prelude::*;

#[component]
pub fn BookingConfirmationPage() -> impl IntoView {
    view! {
        <section class="booking-confirmation">
            <h1>"Booking confirmed"</h1>
            <p>"We've sent the details to your email."</p>
            <a href="/profile" class="btn">"View my trips"</a>
        </section>
    }
}
