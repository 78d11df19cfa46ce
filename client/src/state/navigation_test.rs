use super::*;

#[test]
fn new_drops_empty_query() {
    assert_eq!(IntendedDestination::new("/profile", "").query, None);
    assert_eq!(IntendedDestination::new("/profile", "?").query, None);
}

#[test]
fn href_joins_path_and_query() {
    assert_eq!(IntendedDestination::new("/booking/42", "?guests=2").href(), "/booking/42?guests=2");
    assert_eq!(IntendedDestination::new("/booking/42", "").href(), "/booking/42");

    let bare = IntendedDestination { path: "/booking/42".to_owned(), query: Some("guests=2".to_owned()) };
    assert_eq!(bare.href(), "/booking/42?guests=2");
}

#[test]
fn remember_overwrites_previous_destination() {
    let mut nav = NavigationState::default();
    nav.remember(IntendedDestination::new("/profile", ""));
    nav.remember(IntendedDestination::new("/booking/7", ""));
    assert_eq!(nav.peek().map(|d| d.path.as_str()), Some("/booking/7"));
}

#[test]
fn take_consumes_destination() {
    let mut nav = NavigationState::default();
    nav.remember(IntendedDestination::new("/profile", ""));
    assert_eq!(nav.take(), Some(IntendedDestination::new("/profile", "")));
    assert_eq!(nav.take(), None);
    assert!(nav.peek().is_none());
}
