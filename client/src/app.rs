//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::require_session::RequireSession;
use crate::components::site_header::SiteHeader;
use crate::pages::{
    booking::BookingPage, booking_confirmation::BookingConfirmationPage, discover::DiscoverPage, home::HomePage,
    login::LoginPage, not_found::NotFoundPage, profile::ProfilePage,
};
use crate::state::navigation::NavigationState;
use crate::state::session::SessionStore;
use crate::util::session_persistence;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and navigation contexts, restores any persisted
/// session once running in the browser, and keeps storage in sync after that.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionStore::new());
    let navigation = RwSignal::new(NavigationState::default());
    provide_context(session);
    provide_context(navigation);

    // Effects only run in the browser, after hydration.
    Effect::new(move || {
        let stored = session_persistence::load_identity();
        session.update(|s| s.restore(stored));
    });
    Effect::new(move || {
        session.with(|s| {
            if s.is_restored() {
                session_persistence::save_session(s.current());
            }
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/wayfarer.css"/>
        <Title text="Wayfarer"/>

        <Router>
            <SiteHeader/>
            <main class="site-main">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("discover") view=DiscoverPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route
                        path=StaticSegment("profile")
                        view=|| view! { <RequireSession><ProfilePage/></RequireSession> }
                    />
                    <Route
                        path=(StaticSegment("booking"), ParamSegment("id"))
                        view=|| view! { <RequireSession><BookingPage/></RequireSession> }
                    />
                    <Route
                        path=StaticSegment("booking-confirmation")
                        view=|| view! { <RequireSession><BookingConfirmationPage/></RequireSession> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
