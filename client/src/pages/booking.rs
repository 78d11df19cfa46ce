//! Private booking page for one destination.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[component]
pub fn BookingPage() -> impl IntoView {
    let params = use_params_map();
    let destination_id = move || params.with(|p| p.get("id").unwrap_or_default());

    view! {
        <section class="booking">
            <h1>"Book your trip"</h1>
            <p>"Destination #" {destination_id}</p>
            <a href="/booking-confirmation" class="btn btn--primary">"Confirm booking"</a>
        </section>
    }
}
