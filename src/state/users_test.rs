use super::*;

fn user(id: &str, email: &str) -> PublicUser {
    PublicUser {
        id: id.to_owned(),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        username: None,
        email: email.to_owned(),
        avatar_url: None,
    }
}

#[test]
fn results_commit_against_the_query_that_started_them() {
    let mut s = UserSearchState::default();
    let seq = s.begin("ada");

    assert!(s.apply_results(seq, vec![user("u-1", "ada@example.com")]));
    assert_eq!(s.query, "ada");
    assert_eq!(s.results.len(), 1);
    assert!(!s.searching);
}

#[test]
fn a_newer_query_invalidates_an_in_flight_one() {
    let mut s = UserSearchState::default();
    let stale = s.begin("ad");
    let fresh = s.begin("ada");

    // The shorter query resolves last but must not overwrite.
    assert!(s.apply_results(fresh, vec![user("u-2", "ada@example.com")]));
    assert!(!s.apply_results(stale, vec![user("u-1", "ad@example.com")]));

    assert_eq!(s.results[0].id, "u-2");
}

#[test]
fn clearing_drops_results_and_cancels_in_flight_work() {
    let mut s = UserSearchState::default();
    let seq = s.begin("ada");
    s.apply_results(seq, vec![user("u-1", "ada@example.com")]);

    let pending = s.begin("adam");
    s.clear();

    assert!(!s.apply_results(pending, vec![user("u-3", "adam@example.com")]));
    assert!(s.results.is_empty());
    assert!(s.query.is_empty());
    assert!(!s.searching);
}

#[test]
fn errors_show_without_clearing_the_query() {
    let mut s = UserSearchState::default();
    let seq = s.begin("ada");

    assert!(s.apply_error(seq, "search unavailable".to_owned()));
    assert_eq!(s.query, "ada");
    assert_eq!(s.error.as_deref(), Some("search unavailable"));
}
