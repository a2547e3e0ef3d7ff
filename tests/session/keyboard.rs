//! Arrow, Enter and Escape handling.

use super::common::{
    local_config, session_with, two_steam_entries, type_and_settle, RecordingSink, SinkEvent,
};
use allo_search::{DefaultAction, Key, PendingNavigation, SearchSession};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn test_arrow_down_clamps_at_last_row() {
    let mut s = session_with(two_steam_entries());
    type_and_settle(&mut s, "steam", 0);
    assert_eq!(s.results().len(), 2);

    for _ in 0..3 {
        assert_eq!(s.on_key(Key::ArrowDown), DefaultAction::Suppress);
    }
    assert_eq!(s.active(), Some(1));
    assert_eq!(s.state().active_index(), 1);

    // the third press changed nothing, so no third select
    let selects: Vec<_> = s
        .sink()
        .events
        .iter()
        .filter(|e| matches!(e, SinkEvent::Select(_)))
        .collect();
    assert_eq!(
        selects,
        vec![&SinkEvent::Select(Some(0)), &SinkEvent::Select(Some(1))]
    );
}

#[test]
fn test_arrow_up_returns_to_no_selection() {
    let mut s = session_with(two_steam_entries());
    type_and_settle(&mut s, "steam", 0);

    let _ = s.on_key(Key::ArrowDown);
    assert_eq!(s.on_key(Key::ArrowUp), DefaultAction::Suppress);
    assert_eq!(s.state().active_index(), -1);
    assert_eq!(s.on_key(Key::ArrowUp), DefaultAction::Suppress);
    assert_eq!(s.active(), None);
    assert_eq!(s.sink().selected, vec![false, false]);
}

#[test]
fn test_aria_selected_follows_active_row() {
    let mut s = session_with(two_steam_entries());
    type_and_settle(&mut s, "steam", 0);
    assert!(s.sink().expanded);
    assert_eq!(s.sink().selected, vec![false, false]);

    let _ = s.on_key(Key::ArrowDown);
    let _ = s.on_key(Key::ArrowDown);
    assert_eq!(s.sink().selected, vec![false, true]);
}

#[test]
fn test_enter_navigates_to_active_row() {
    let mut s = session_with(two_steam_entries());
    type_and_settle(&mut s, "steam", 0);
    let _ = s.on_key(Key::ArrowDown);
    let _ = s.on_key(Key::ArrowDown);

    assert_eq!(s.on_key(Key::Enter), DefaultAction::Suppress);
    assert_eq!(s.navigator().visited, vec!["/steam-wallet"]);
    assert!(!s.is_open());
    assert!(!s.sink().expanded);
}

#[test]
fn test_enter_without_selection_is_left_to_the_form() {
    let mut s = session_with(two_steam_entries());
    type_and_settle(&mut s, "steam", 0);

    assert_eq!(s.on_key(Key::Enter), DefaultAction::Allow);
    assert!(s.navigator().visited.is_empty());
    assert!(s.is_open());
}

#[test]
fn test_escape_closes_and_keeps_query() {
    let mut s = session_with(two_steam_entries());
    type_and_settle(&mut s, "steam", 0);

    assert_eq!(s.on_key(Key::Escape), DefaultAction::Allow);
    assert!(!s.is_open());
    assert!(s.results().is_empty());
    assert_eq!(s.state().raw_query(), "steam");
    assert_eq!(s.sink().events.last(), Some(&SinkEvent::Hide));
}

#[test]
fn test_keys_while_closed_are_ignored() {
    let mut s = session_with(two_steam_entries());
    for key in [Key::ArrowDown, Key::ArrowUp, Key::Enter, Key::Other] {
        assert_eq!(s.on_key(key), DefaultAction::Allow);
    }
    assert_eq!(s.active(), None);
    assert!(s.sink().events.is_empty());
    assert!(s.navigator().visited.is_empty());
}

#[test]
fn test_other_keys_leave_selection_alone() {
    let mut s = session_with(two_steam_entries());
    type_and_settle(&mut s, "steam", 0);
    let _ = s.on_key(Key::ArrowDown);

    assert_eq!(s.on_key(Key::Other), DefaultAction::Allow);
    assert_eq!(s.active(), Some(0));
    assert!(s.is_open());
}

#[test]
fn test_navigation_callback_can_reenter_the_session() {
    let session = Rc::new(RefCell::new(SearchSession::new(
        local_config(),
        two_steam_entries(),
        RecordingSink::default(),
        PendingNavigation::default(),
    )));
    {
        let mut s = session.borrow_mut();
        s.on_input("steam", 0);
        s.advance(110);
        let _ = s.on_key(Key::ArrowDown);
    }

    // event handler: the session call, then navigation once the borrow ends
    let action = session.borrow_mut().on_key(Key::Enter);
    assert_eq!(action, DefaultAction::Suppress);
    let url = session.borrow_mut().navigator_mut().take();

    let mut seen = Vec::new();
    let mut callback = |url: &str| {
        let s = session.borrow();
        seen.push((url.to_string(), s.is_open()));
    };
    if let Some(url) = url {
        callback(&url);
    }
    assert_eq!(seen, vec![("/steam-keys".to_string(), false)]);
}
