use super::*;
use crate::state::session::AuthFailure;

fn alice() -> Identity {
    Identity { display_name: "User".to_owned(), email: "alice@example.com".to_owned() }
}

#[test]
fn decode_reads_stored_identity() {
    let raw = r#"{"display_name":"User","email":"alice@example.com"}"#;
    assert_eq!(decode_identity(raw), Some(alice()));
}

#[test]
fn decode_rejects_corrupt_or_partial_entries() {
    assert_eq!(decode_identity("not json"), None);
    assert_eq!(decode_identity(r#"{"display_name":"User"}"#), None);
    assert_eq!(decode_identity(r#"{"display_name":"User","email":"  "}"#), None);
}

#[test]
fn only_authenticated_sessions_are_persisted() {
    assert_eq!(persisted_identity(&Session::Authenticated(alice())), Some(&alice()));
    assert_eq!(persisted_identity(&Session::Anonymous), None);
    assert_eq!(persisted_identity(&Session::Authenticating), None);
    assert_eq!(
        persisted_identity(&Session::Failed(AuthFailure::CredentialRejected("nope".to_owned()))),
        None
    );
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn storage_calls_are_noops_without_hydrate() {
    save_session(&Session::Authenticated(alice()));
    assert_eq!(load_identity(), None);
}
