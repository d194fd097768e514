use instabiz::controller::{reduce, Event, State, Status};
use instabiz::normalize_handle;
use proptest::prelude::*;

proptest! {
    #[test]
    fn strips_leading_at_and_surrounding_whitespace(
        handle in "[a-z0-9_.]{1,30}",
        left in "[ \t]{0,4}",
        right in "[ \t]{0,4}",
    ) {
        let raw = format!("{}@{}{}", left, handle, right);
        prop_assert_eq!(normalize_handle(&raw), handle);
    }

    #[test]
    fn normalization_is_idempotent(raw in "[ @a-z_]{0,20}") {
        let once = normalize_handle(&raw);
        // a second leading "@" survives the first pass
        if !once.starts_with('@') {
            prop_assert_eq!(normalize_handle(&once), once.clone());
        }
    }

    #[test]
    fn blank_submissions_never_leave_idle(raw in "[ \t]{0,6}@?[ \t]{0,6}") {
        let (state, commands) = reduce(State::default(), Event::Submit(raw));
        prop_assert_eq!(state.status, Status::Idle);
        prop_assert!(commands.is_empty());
    }
}
