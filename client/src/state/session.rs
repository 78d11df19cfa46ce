//! Sign-in session state for the current browser visitor.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionStore` is the single writable copy of the session. The app root
//! wraps it in an `RwSignal` and provides it as context; route guards, the
//! header, and profile views read it, and only the sign-in flow and explicit
//! sign-out write it.
//!
//! DESIGN
//! ======
//! Transitions are explicit methods rather than field pokes:
//!
//! ```text
//! Anonymous ──begin──▶ Authenticating ──complete──▶ Authenticated | Failed
//! Failed ──begin──▶ Authenticating      Failed ──dismiss──▶ Anonymous
//! any ──sign_out──▶ Anonymous
//! ```
//!
//! Only `Session::Authenticated` carries an `Identity`, so "identity present
//! iff authenticated" holds by construction. Each `begin_sign_in` hands out
//! an attempt id; a reply for an attempt that is no longer in flight (for
//! example after a sign-out) is dropped.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;

use leptos::prelude::{RwSignal, Update};
use serde::{Deserialize, Serialize};

use crate::net::auth::{AuthCollaborator, AuthReply, SignInRequest, TransportError};

/// Display name given to a visitor whose sign-in the webhook accepted.
/// The webhook does not return a profile.
pub const PLACEHOLDER_DISPLAY_NAME: &str = "User";

/// Reason shown when the webhook rejects credentials without a message.
pub const DEFAULT_REJECTION_MESSAGE: &str = "invalid credentials";

/// Minimal profile of a signed-in visitor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub display_name: String,
    pub email: String,
}

/// Why the last sign-in attempt ended without a session.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthFailure {
    /// The webhook answered and said no.
    #[error("{0}")]
    CredentialRejected(String),
    /// No usable answer came back.
    #[error("connection error, retry later")]
    Transport(TransportError),
}

/// A sign-in attempt is already in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("a sign-in attempt is already in progress")]
pub struct Busy;

/// Current authentication status of the visitor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticating,
    Authenticated(Identity),
    Failed(AuthFailure),
}

impl Session {
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn failure(&self) -> Option<&AuthFailure> {
        match self {
            Self::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    /// User-facing failure text, if the last attempt failed.
    pub fn failure_reason(&self) -> Option<String> {
        self.failure().map(ToString::to_string)
    }
}

/// Ticket for one dispatched sign-in: the attempt id to report back with and
/// the body to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingSignIn {
    pub attempt: u64,
    pub request: SignInRequest,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct InFlight {
    attempt: u64,
    email: String,
}

/// Owner of the session value and its transitions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionStore {
    session: Session,
    in_flight: Option<InFlight>,
    last_attempt: u64,
    restored: bool,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current session value. Never blocks.
    pub fn current(&self) -> &Session {
        &self.session
    }

    /// True while a sign-in attempt is waiting on the webhook.
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// True once persisted state has been loaded (or found absent).
    pub fn is_restored(&self) -> bool {
        self.restored
    }

    /// Start a sign-in attempt.
    ///
    /// Credential shape is validated by the caller. Starting from
    /// `Authenticated` discards the existing identity.
    ///
    /// # Errors
    ///
    /// Returns [`Busy`] when another attempt is in flight; nothing changes and
    /// no request is produced.
    pub fn begin_sign_in(&mut self, email: &str, password: &str) -> Result<PendingSignIn, Busy> {
        if self.in_flight.is_some() {
            return Err(Busy);
        }
        self.last_attempt += 1;
        let attempt = self.last_attempt;
        self.in_flight = Some(InFlight { attempt, email: email.to_owned() });
        self.session = Session::Authenticating;
        Ok(PendingSignIn { attempt, request: SignInRequest::new(email, password) })
    }

    /// Apply the webhook outcome for `attempt`.
    ///
    /// Returns `false` (and changes nothing) if `attempt` is not the one in
    /// flight.
    pub fn complete_sign_in(&mut self, attempt: u64, outcome: Result<AuthReply, TransportError>) -> bool {
        let Some(in_flight) = self.in_flight.take_if(|pending| pending.attempt == attempt) else {
            return false;
        };

        self.session = match outcome {
            Ok(reply) if reply.is_success() => Session::Authenticated(Identity {
                display_name: PLACEHOLDER_DISPLAY_NAME.to_owned(),
                email: in_flight.email,
            }),
            Ok(reply) => Session::Failed(AuthFailure::CredentialRejected(
                reply
                    .message
                    .filter(|message| !message.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_REJECTION_MESSAGE.to_owned()),
            )),
            Err(e) => Session::Failed(AuthFailure::Transport(e)),
        };
        true
    }

    /// Clear a failed attempt back to `Anonymous`. Returns whether anything
    /// changed.
    pub fn dismiss_failure(&mut self) -> bool {
        if matches!(self.session, Session::Failed(_)) {
            self.session = Session::Anonymous;
            true
        } else {
            false
        }
    }

    /// Drop the session and any in-flight attempt. Idempotent.
    ///
    /// The webhook call for a dropped attempt is not cancelled; its reply is
    /// discarded by `complete_sign_in`. A new attempt begun right after this
    /// can therefore overlap that call on the wire.
    pub fn sign_out(&mut self) {
        self.session = Session::Anonymous;
        self.in_flight = None;
    }

    /// Load a persisted identity once at startup.
    ///
    /// Only an `Anonymous` store is promoted; a sign-in that started before
    /// restore keeps precedence.
    pub fn restore(&mut self, persisted: Option<Identity>) {
        if self.restored {
            return;
        }
        self.restored = true;
        if let (Some(identity), Session::Anonymous) = (persisted, &self.session) {
            self.session = Session::Authenticated(identity);
        }
    }
}

/// Shared handle through which the sign-in driver reaches the store.
pub trait SessionCell {
    /// Run `f` against the store. Returns `None` if the store is gone.
    fn with_store<R>(&self, f: impl FnOnce(&mut SessionStore) -> R) -> Option<R>;
}

impl SessionCell for RwSignal<SessionStore> {
    fn with_store<R>(&self, f: impl FnOnce(&mut SessionStore) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl SessionCell for RefCell<SessionStore> {
    fn with_store<R>(&self, f: impl FnOnce(&mut SessionStore) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Run one full sign-in: begin, call the webhook, apply the reply.
///
/// Returns the session as it stands after this attempt resolved. If the
/// attempt was superseded while waiting, that is whatever replaced it.
///
/// # Errors
///
/// Returns [`Busy`] without contacting `collaborator` when another attempt is
/// already in flight.
pub async fn sign_in<C, S>(collaborator: &C, cell: &S, email: &str, password: &str) -> Result<Session, Busy>
where
    C: AuthCollaborator,
    S: SessionCell,
{
    let Some(begun) = cell.with_store(|store| store.begin_sign_in(email, password)) else {
        return Ok(Session::Anonymous);
    };
    let pending = begun?;

    let outcome = collaborator.submit(&pending.request).await;
    if let Err(e) = &outcome {
        leptos::logging::warn!("sign-in transport failure: {e}");
    }

    let session = cell
        .with_store(|store| {
            if !store.complete_sign_in(pending.attempt, outcome) {
                leptos::logging::log!("discarding reply for superseded sign-in attempt {}", pending.attempt);
            }
            store.current().clone()
        })
        .unwrap_or_default();
    Ok(session)
}
