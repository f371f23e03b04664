use proptest::prelude::*;
use thalamus_core::config::SessionConfig;
use thalamus_core::models::{Message, Role};
use thalamus_session::SessionStore;

proptest! {
    #[test]
    fn transcript_never_exceeds_twice_max_history(
        max_history in 1usize..16,
        appends in 0usize..96,
    ) {
        let store = SessionStore::new(SessionConfig {
            max_history,
            timeout_secs: 3_600,
        });
        let id = store.create_session();
        for i in 0..appends {
            store
                .append_message(&id, Message::now(Role::User, format!("m{i}")))
                .unwrap();
        }

        let session = store.get_session(&id).unwrap();
        prop_assert!(session.messages.len() <= 2 * max_history);
        prop_assert_eq!(session.messages.len(), appends.min(2 * max_history));

        // What survives is always the newest suffix, in order.
        for (offset, message) in session.messages.iter().enumerate() {
            let expected = appends - session.messages.len() + offset;
            prop_assert_eq!(&message.content, &format!("m{expected}"));
        }
    }

    #[test]
    fn history_window_is_a_suffix_of_the_transcript(
        appends in 1usize..64,
        limit in 1usize..16,
    ) {
        let store = SessionStore::new(SessionConfig {
            max_history: 32,
            timeout_secs: 3_600,
        });
        let id = store.create_session();
        for i in 0..appends {
            store
                .append_message(&id, Message::now(Role::User, format!("m{i}")))
                .unwrap();
        }

        let session = store.get_session(&id).unwrap();
        let window = store.history(&id, limit);
        prop_assert!(window.len() <= limit);
        let tail = &session.messages[session.messages.len() - window.len()..];
        for (a, b) in window.iter().zip(tail.iter()) {
            prop_assert_eq!(&a.content, &b.content);
        }
    }
}
