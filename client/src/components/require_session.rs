//! Wrapper that renders its children only for a signed-in visitor.
//!
//! SYSTEM CONTEXT
//! ==============
//! Private routes wrap their page in `<RequireSession>`. The guard decision
//! comes from `util::auth::evaluate`; this component only applies it: render
//! on `Allow`, remember the destination and navigate on `RedirectTo`.
//!
//! Nothing is decided until the persisted session has been restored, so the
//! server render and the first hydrated frame agree (both empty) and a
//! returning visitor is not bounced to `/login` before their stored identity
//! is read.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::navigation::{IntendedDestination, NavigationState};
use crate::state::session::SessionStore;
use crate::util::auth::{GuardDecision, evaluate};

#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let navigation = expect_context::<RwSignal<NavigationState>>();
    let location = use_location();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| {
        let store = session.get();
        if !store.is_restored() {
            return None;
        }
        let requested = IntendedDestination::new(location.pathname.get(), location.search.get());
        Some(evaluate(store.current(), requested))
    });

    Effect::new(move || {
        if let Some(GuardDecision::RedirectTo(redirect)) = decision.get() {
            navigation.update(|nav| nav.remember(redirect.intended.clone()));
            navigate(redirect.to, redirect.navigate_options());
        }
    });

    view! {
        <Show when=move || matches!(decision.get(), Some(GuardDecision::Allow))>
            {children()}
        </Show>
    }
}
