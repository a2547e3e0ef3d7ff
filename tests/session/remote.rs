//! Remote index loading and merging with page entries.

use super::common::{
    ok_response, storefront_session, storefront_session_with_remote, type_and_settle,
    REMOTE_PAYLOAD, REMOTE_URL,
};
use allo_search::FetchOutcome;

#[test]
fn test_request_is_issued_once() {
    let mut s = storefront_session_with_remote();
    let request = s.take_remote_request().expect("remote configured");
    assert_eq!(request.url, REMOTE_URL);
    assert!(s.take_remote_request().is_none());
}

#[test]
fn test_disabled_remote_issues_no_request() {
    let mut s = storefront_session();
    assert!(s.take_remote_request().is_none());
    assert!(s.remote_entries().is_empty());
}

#[test]
fn test_remote_entries_join_the_ranking() {
    let mut s = storefront_session_with_remote();
    let _ = s.take_remote_request();
    assert!(s.settle_remote(ok_response(REMOTE_PAYLOAD)));
    // the title-less record and the bare number are skipped
    assert_eq!(s.remote_entries().len(), 2);

    type_and_settle(&mut s, "steam", 0);
    let titles: Vec<_> = s.results().iter().map(|r| r.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Steam Gift Card", "Steam Keys", "Steam Wallet 20 EUR", "Streaming"]
    );
    // prefix 65 + keyword exact 35 + product 12
    assert_eq!(s.results()[0].score, 112);
    assert_eq!(s.results()[0].url, "/p/steam-gift");
}

#[test]
fn test_remote_wins_ties() {
    let mut s = storefront_session_with_remote();
    let _ = s.take_remote_request();
    let payload = r#"[{"title": "Netflix 1 Month", "url": "/remote/netflix", "type": "Product", "keywords": ["Netflix 1 Month"]}]"#;
    s.settle_remote(ok_response(payload));

    type_and_settle(&mut s, "netflix", 0);
    assert_eq!(s.results().len(), 2);
    assert_eq!(s.results()[0].score, s.results()[1].score);
    assert_eq!(s.results()[0].url, "/remote/netflix");
    assert_eq!(s.results()[1].url, "/p/netflix");
}

#[test]
fn test_http_error_falls_back_to_page() {
    let mut s = storefront_session_with_remote();
    let _ = s.take_remote_request();
    s.settle_remote(FetchOutcome::Response {
        status: 500,
        body: REMOTE_PAYLOAD.to_string(),
    });
    assert!(s.remote_entries().is_empty());

    type_and_settle(&mut s, "steam", 0);
    assert_eq!(s.results().len(), 3);
    assert_eq!(s.results()[0].title, "Steam Keys");
}

#[test]
fn test_network_error_falls_back_to_page() {
    let mut s = storefront_session_with_remote();
    let _ = s.take_remote_request();
    s.settle_remote(FetchOutcome::NetworkError("offline".to_string()));

    type_and_settle(&mut s, "steam", 0);
    assert_eq!(s.results().len(), 3);
}

#[test]
fn test_malformed_payloads_fall_back_to_page() {
    for body in ["not json", r#"{"title": "Steam"}"#, ""] {
        let mut s = storefront_session_with_remote();
        let _ = s.take_remote_request();
        s.settle_remote(ok_response(body));
        assert!(s.remote_entries().is_empty(), "body {:?}", body);

        type_and_settle(&mut s, "steam", 0);
        assert_eq!(s.results().len(), 3, "body {:?}", body);
    }
}

#[test]
fn test_late_remote_is_used_by_next_search() {
    let mut s = storefront_session_with_remote();
    let _ = s.take_remote_request();

    // fetch still in flight: page entries only
    let t = type_and_settle(&mut s, "playstation", 0);
    assert_eq!(s.results().len(), 1);

    s.settle_remote(ok_response(REMOTE_PAYLOAD));
    // the open list is not refreshed by the arrival itself
    assert_eq!(s.results().len(), 1);

    type_and_settle(&mut s, "playstation", t);
    assert_eq!(s.results().len(), 2);
    // exact page match 149 beats the remote prefix match 75
    assert_eq!(s.results()[0].url, "/c/playstation");
    assert_eq!(s.results()[1].url, "/p/ps-plus");
}

#[test]
fn test_second_settlement_is_ignored() {
    let mut s = storefront_session_with_remote();
    let _ = s.take_remote_request();
    assert!(s.settle_remote(ok_response(REMOTE_PAYLOAD)));
    assert!(!s.settle_remote(ok_response("[]")));
    assert_eq!(s.remote_entries().len(), 2);
}
