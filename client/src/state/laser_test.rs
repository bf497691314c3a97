use super::*;

#[test]
fn session_starts_inactive() {
    assert!(!LaserSession::default().is_active());
}

#[test]
fn activating_notifies_channel_flag_only() {
    let mut session = LaserSession::default();
    let effects = session.set_active(true);
    assert_eq!(effects, vec![SessionEffect::NotifyActive(true)]);
    assert!(session.is_active());
}

#[test]
fn deactivating_clears_local_then_channel() {
    let mut session = LaserSession::default();
    session.set_active(true);
    let effects = session.set_active(false);
    assert_eq!(
        effects,
        vec![
            SessionEffect::ClearLocalTrail,
            SessionEffect::NotifyActive(false),
            SessionEffect::ClearChannel,
        ]
    );
    assert!(!session.is_active());
}

#[test]
fn redundant_transitions_produce_no_effects() {
    let mut session = LaserSession::default();
    assert!(session.set_active(false).is_empty());
    session.set_active(true);
    assert!(session.set_active(true).is_empty());
}
