//! Sign-in page: credential form plus the post-login forward.
//!
//! SYSTEM CONTEXT
//! ==============
//! Private routes send unauthenticated visitors here after remembering their
//! destination in `NavigationState`. A successful sign-in started from this
//! page consumes that destination and replaces the current history entry
//! with it, falling back to the default landing page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::navigation::NavigationState;
use crate::state::session::SessionStore;
use crate::util::auth::post_sign_in_target;

pub(crate) const EMAIL_REQUIRED: &str = "Email is required";
pub(crate) const EMAIL_INVALID: &str = "Please enter a valid email";
pub(crate) const PASSWORD_REQUIRED: &str = "Password is required";

/// Per-field validation messages for the sign-in form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct FieldErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

/// Check the form before anything is sent. Returns the trimmed email and the
/// password as typed.
pub(crate) fn validate_credentials(email: &str, password: &str) -> Result<(String, String), FieldErrors> {
    let email = email.trim();
    let mut errors = FieldErrors::default();
    if email.is_empty() {
        errors.email = Some(EMAIL_REQUIRED);
    } else if !looks_like_email(email) {
        errors.email = Some(EMAIL_INVALID);
    }
    if password.is_empty() {
        errors.password = Some(PASSWORD_REQUIRED);
    }
    if errors.is_empty() { Ok((email.to_owned(), password.to_owned())) } else { Err(errors) }
}

/// `local@domain.tld` with no whitespace, roughly `\S+@\S+\.\S+`.
pub(crate) fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain
            .char_indices()
            .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let navigation = expect_context::<RwSignal<NavigationState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let field_errors = RwSignal::new(FieldErrors::default());
    let submitted = RwSignal::new(false);

    let busy = move || session.with(SessionStore::is_busy);
    let failure = move || session.with(|s| s.current().failure_reason());

    // Forward once an attempt from this page lands.
    Effect::new(move || {
        if !submitted.get() || !session.with(|s| s.current().is_authenticated()) {
            return;
        }
        submitted.set(false);
        let intended = navigation.try_update(NavigationState::take).flatten();
        let target = post_sign_in_target(intended.as_ref());
        navigate(
            &target,
            leptos_router::NavigateOptions { replace: true, ..leptos_router::NavigateOptions::default() },
        );
    });

    let clear_failure = move || {
        if session.with_untracked(|s| s.current().failure().is_some()) {
            session.update(|s| {
                s.dismiss_failure();
            });
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }
        let (email_value, password_value) = match validate_credentials(&email.get(), &password.get()) {
            Ok(valid) => valid,
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
        };
        field_errors.set(FieldErrors::default());
        submitted.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::config::AuthConfig;
            use crate::net::auth::WebhookCollaborator;

            let collaborator = WebhookCollaborator::new(AuthConfig::from_build_env());
            if crate::state::session::sign_in(&collaborator, &session, &email_value, &password_value)
                .await
                .is_err()
            {
                leptos::logging::log!("sign-in already in progress");
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Welcome Back"</h1>
                <p class="login-card__subtitle">"Sign in to your account to continue your journey"</p>
                <form class="login-form" on:submit=on_submit>
                    <Show when=move || failure().is_some()>
                        <p class="login-message login-message--error">{move || failure().unwrap_or_default()}</p>
                    </Show>
                    <label class="login-label">
                        "Email Address"
                        <input
                            class="login-input"
                            type="email"
                            placeholder="Enter your email"
                            prop:value=move || email.get()
                            on:input=move |ev| {
                                email.set(event_target_value(&ev));
                                field_errors.update(|e| e.email = None);
                                clear_failure();
                            }
                        />
                    </label>
                    <Show when=move || field_errors.with(|e| e.email.is_some())>
                        <p class="login-field-error">{move || field_errors.with(|e| e.email.unwrap_or_default())}</p>
                    </Show>
                    <label class="login-label">
                        "Password"
                        <input
                            class="login-input"
                            type=move || if show_password.get() { "text" } else { "password" }
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| {
                                password.set(event_target_value(&ev));
                                field_errors.update(|e| e.password = None);
                                clear_failure();
                            }
                        />
                    </label>
                    <button
                        class="login-toggle"
                        type="button"
                        on:click=move |_| show_password.update(|shown| *shown = !*shown)
                    >
                        {move || if show_password.get() { "Hide" } else { "Show" }}
                    </button>
                    <Show when=move || field_errors.with(|e| e.password.is_some())>
                        <p class="login-field-error">{move || field_errors.with(|e| e.password.unwrap_or_default())}</p>
                    </Show>
                    <button class="login-button" type="submit" disabled=busy>
                        {move || if busy() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
