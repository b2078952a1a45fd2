// Integration tests for F2F Algo

use f2f_algo::core::{EventDraft, EventPolicy, Membership, SwipeLedger};
use f2f_algo::models::{ChatKind, FilterCriteria, Interest, SwipeDecision, SwipeDirection, ViewMode};
use f2f_algo::seed::{self, LOCAL_USER_ID};
use f2f_algo::{Matcher, Session, SessionError, SwipeOutcome};
use std::collections::BTreeSet;

fn registered_session() -> Session {
    registered_session_with(EventPolicy::default())
}

fn registered_session_with(policy: EventPolicy) -> Session {
    let mut session = Session::new(seed::demo(), Matcher::default(), policy);
    session
        .register(seed::demo_local_profile())
        .expect("demo profile is valid");
    session
}

fn swipe_ids(session: &Session) -> Vec<String> {
    session
        .candidates(ViewMode::Swipe)
        .unwrap()
        .candidates
        .iter()
        .map(|c| c.profile.id.clone())
        .collect()
}

#[test]
fn test_integration_like_with_three_shared_interests_matches() {
    let mut session = registered_session();

    let outcome = session.like("1").unwrap();

    let expected: BTreeSet<Interest> = [Interest::Coffee, Interest::Reading, Interest::Running]
        .into_iter()
        .collect();
    assert_eq!(
        outcome,
        SwipeOutcome::Matched {
            candidate_id: "1".to_string(),
            common_interests: expected,
            new_match: true,
        }
    );

    let chat = session.chats().get("1").expect("direct chat created");
    assert_eq!(chat.kind, ChatKind::Direct);
    assert!(chat.messages.is_empty());
    assert_eq!(chat.unread, 0);
    assert_eq!(session.ledger().decision("1"), Some(SwipeDecision::Matched));
}

#[test]
fn test_integration_like_without_overlap_is_ledgered_only() {
    let mut session = registered_session();

    let outcome = session.like("2").unwrap();

    match outcome {
        SwipeOutcome::NoMatch {
            candidate_id,
            common_interests,
            required,
            explanation,
        } => {
            assert_eq!(candidate_id, "2");
            assert!(common_interests.is_empty());
            assert_eq!(required, 3);
            assert!(explanation.is_none());
        }
        other => panic!("expected no match, got {:?}", other),
    }

    assert!(session.chats().is_empty());
    assert!(!swipe_ids(&session).contains(&"2".to_string()));
    assert_eq!(session.ledger().decision("2"), Some(SwipeDecision::Liked));
}

#[test]
fn test_integration_double_like_keeps_one_chat() {
    let mut session = registered_session();

    session.like("1").unwrap();
    let second = session.like("1").unwrap();

    assert!(matches!(second, SwipeOutcome::Matched { new_match: false, .. }));
    assert_eq!(session.chats().len(), 1);
    assert_eq!(session.ledger().len(), 1);
}

#[test]
fn test_integration_decided_candidates_leave_swipe_view_until_reset() {
    let mut session = registered_session();
    let before = swipe_ids(&session);

    session.pass("3").unwrap();
    session.like("2").unwrap();

    let after = swipe_ids(&session);
    assert_eq!(after.len(), before.len() - 2);
    assert!(!after.contains(&"3".to_string()));

    // Map view still shows everyone
    assert_eq!(session.candidates(ViewMode::Map).unwrap().candidates.len(), before.len());

    let cleared = session.reset_ledger();
    assert_eq!(cleared, 2);
    assert_eq!(swipe_ids(&session), before);
}

#[test]
fn test_integration_swipe_view_preserves_pool_order() {
    let session = registered_session();
    assert_eq!(swipe_ids(&session), vec!["1", "2", "3", "4", "5", "6"]);
}

#[test]
fn test_integration_swipe_through_whole_pool() {
    let mut session = registered_session();
    let mut matched = Vec::new();

    loop {
        match session.swipe(SwipeDirection::Like).unwrap() {
            SwipeOutcome::Matched { candidate_id, .. } => matched.push(candidate_id),
            SwipeOutcome::Exhausted => break,
            _ => {}
        }
    }

    // Maria and Elena each share three interests
    assert_eq!(matched, vec!["1", "5"]);
    assert_eq!(session.chats().len(), 2);

    let stats = session.ledger().stats();
    assert_eq!(stats.total_decided, 6);
    assert_eq!(stats.matched, 2);
    assert_eq!(stats.liked, 4);
    assert_eq!(stats.passed, 0);
}

#[test]
fn test_integration_accept_pending_like_matches() {
    let mut session = registered_session();
    assert_eq!(session.incoming_likes().len(), 1);

    let outcome = session.accept_incoming("5").unwrap();

    assert!(matches!(outcome, SwipeOutcome::Matched { ref candidate_id, .. } if candidate_id == "5"));
    assert!(session.incoming_likes().is_empty());
    assert!(session.chats().get("5").is_some());
}

#[test]
fn test_integration_accept_below_threshold_explains() {
    let mut session = registered_session();
    assert!(session.receive_like("4").unwrap());
    assert!(!session.receive_like("4").unwrap());

    let outcome = session.accept_incoming("4").unwrap();

    match outcome {
        SwipeOutcome::NoMatch { explanation, .. } => {
            let explanation = explanation.expect("pending like explains the miss");
            assert!(explanation.contains("Ivan"));
            assert!(explanation.contains("1 of the 3"));
        }
        other => panic!("expected no match, got {:?}", other),
    }

    assert!(session.chats().get("4").is_none());
    assert_eq!(
        session.accept_incoming("4").unwrap_err(),
        SessionError::NotPending("4".to_string())
    );
}

#[test]
fn test_integration_join_event_opens_empty_chat() {
    let mut session = registered_session();

    let toggle = session.toggle_event("e1").unwrap();

    assert_eq!(toggle.membership, Membership::Joined);
    assert!(toggle.chat_created);

    let event = session.events().iter().find(|e| e.id == "e1").unwrap();
    assert!(event.has_participant(LOCAL_USER_ID));

    let chat = session.chats().get("e1").unwrap();
    assert_eq!(chat.kind, ChatKind::Event);
    assert_eq!(chat.event_id.as_deref(), Some("e1"));
    assert!(chat.messages.is_empty());
    assert_eq!(chat.unread, 0);
    assert_eq!(session.chats().active_id(), Some("e1"));
}

#[test]
fn test_integration_leave_and_rejoin_event() {
    let mut session = registered_session();

    session.toggle_event("e2").unwrap();
    let left = session.toggle_event("e2").unwrap();
    assert_eq!(left.membership, Membership::Left);
    assert!(!session.events()[1].has_participant(LOCAL_USER_ID));

    // The chat survives leaving, so rejoining does not create another
    let rejoined = session.toggle_event("e2").unwrap();
    assert_eq!(rejoined.membership, Membership::Joined);
    assert!(!rejoined.chat_created);
    assert_eq!(session.chats().len(), 1);

    assert_eq!(
        session.toggle_event("missing").unwrap_err(),
        SessionError::UnknownEvent("missing".to_string())
    );
}

#[test]
fn test_integration_organizer_leave_policy() {
    let draft = EventDraft::default;

    let mut strict = registered_session_with(EventPolicy {
        organizer_can_leave: false,
    });
    let event = strict.create_event(draft()).unwrap();
    assert_eq!(
        strict.toggle_event(&event.id).unwrap_err(),
        SessionError::OrganizerCannotLeave(event.id.clone())
    );

    let mut relaxed = registered_session();
    let event = relaxed.create_event(draft()).unwrap();
    assert_eq!(relaxed.toggle_event(&event.id).unwrap().membership, Membership::Left);
}

#[test]
fn test_integration_created_event_defaults() {
    let mut session = registered_session();

    let event = session.create_event(EventDraft::default()).unwrap();

    assert_eq!(event.title, "New event");
    assert_eq!(event.location_name, "Not specified");
    assert_eq!(event.participant_ids, vec![LOCAL_USER_ID.to_string()]);
    assert_eq!(session.events().len(), 4);
}

#[test]
fn test_integration_unread_counts() {
    let mut session = registered_session();
    session.like("1").unwrap();
    session.like("5").unwrap();

    session.open_chat("1").unwrap();
    session.receive_message("1", "1", "Hi!").unwrap();
    session.receive_message("5", "5", "Hello").unwrap();
    session.receive_message("5", "5", "Are you there?").unwrap();

    // Messages into the open chat are read on arrival
    assert_eq!(session.chats().get("1").unwrap().unread, 0);
    assert_eq!(session.chats().get("5").unwrap().unread, 2);
    assert_eq!(session.chats().total_unread(), 2);

    // The local user's own messages never count
    session.send_message("5", "Yes!", false).unwrap();
    assert_eq!(session.chats().total_unread(), 2);

    session.open_chat("5").unwrap();
    assert_eq!(session.chats().total_unread(), 0);
    assert_eq!(session.chats().get("5").unwrap().messages.len(), 3);
}

#[test]
fn test_integration_filters_narrow_candidates() {
    let mut session = registered_session();

    session
        .set_filters(FilterCriteria {
            min_age: 26,
            max_age: 32,
            interests: [Interest::Reading].into_iter().collect(),
            ..FilterCriteria::default()
        })
        .unwrap();

    // Only Elena reads and is within 26..=32
    assert_eq!(swipe_ids(&session), vec!["5"]);
}

#[test]
fn test_integration_map_markers() {
    let session = registered_session();
    let markers = session.map_markers().unwrap();

    assert_eq!(markers.len(), 7);
    assert_eq!(markers[0].id, LOCAL_USER_ID);
    assert_eq!(markers[1].label, "Maria, 25");
}

#[test]
fn test_integration_empty_ledger_default() {
    let ledger = SwipeLedger::default();
    assert!(ledger.is_empty());
    assert_eq!(ledger.stats().total_decided, 0);
}

#[test]
fn test_integration_zero_threshold_setting_keeps_default() {
    let mut settings = f2f_algo::config::Settings::default();
    settings.matching.match_threshold = 0;

    let mut session = Session::new(seed::demo(), settings.matcher(), settings.event_policy());
    session.register(seed::demo_local_profile()).unwrap();

    // Ivan shares only Gym
    let outcome = session.like("4").unwrap();
    assert!(matches!(outcome, SwipeOutcome::NoMatch { required: 3, .. }));
    assert!(session.chats().is_empty());
}
