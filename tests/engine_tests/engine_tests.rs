//! Tests for Engine
//!
//! These tests verify:
//! - Command routing to each manager
//! - Input validation
//! - Post submission into forums
//! - Comments attached to posts
//! - Configuration flowing into managers

use agora::protocol::{Command, Reply, Status};
use agora::{AgoraError, CommentRemoval, Config, Engine};

// =============================================================================
// Helper Functions
// =============================================================================

fn register(engine: &Engine, name: &str) -> String {
    match engine
        .execute(Command::RegisterUser {
            display_name: name.to_string(),
        })
        .unwrap()
    {
        Reply::Account(account) => account.id,
        other => panic!("unexpected reply {:?}", other),
    }
}

// =============================================================================
// Routing Tests
// =============================================================================

#[test]
fn test_execute_ping() {
    let engine = Engine::default();

    assert_eq!(engine.execute(Command::Ping).unwrap(), Reply::Pong);
}

#[test]
fn test_execute_register_and_fetch() {
    let engine = Engine::default();
    let user_id = register(&engine, "alice");

    let reply = engine
        .execute(Command::FetchUser {
            user_id: user_id.clone(),
        })
        .unwrap();

    match reply {
        Reply::Account(account) => {
            assert_eq!(account.id, user_id);
            assert_eq!(account.username, "alice");
        }
        other => panic!("unexpected reply {:?}", other),
    }
}

#[test]
fn test_execute_delete_absent_is_false() {
    let engine = Engine::default();

    for command in [
        Command::RemoveForum { forum_id: "forum_x".into() },
        Command::RemoveUser { user_id: "user_x".into() },
        Command::RemovePost { post_id: "post_x".into() },
        Command::RemoveComment { comment_id: "comment_x".into() },
        Command::RemoveMessage { message_id: "message_x".into() },
    ] {
        assert_eq!(engine.execute(command).unwrap(), Reply::Removed(false));
    }
}

#[test]
fn test_execute_missing_entities_are_not_found() {
    let engine = Engine::default();

    for command in [
        Command::RetrieveForum { forum_id: "forum_x".into() },
        Command::FetchUser { user_id: "user_x".into() },
        Command::RetrievePost { post_id: "post_x".into() },
        Command::FetchComment { comment_id: "comment_x".into() },
        Command::FetchMessage { message_id: "message_x".into() },
    ] {
        let err = engine.execute(command).unwrap_err();
        assert_eq!(err.status(), Status::NotFound);
    }
}

#[test]
fn test_execute_messages_round_trip() {
    let engine = Engine::default();

    let sent = match engine
        .execute(Command::SendMessage {
            from_user_id: "u1".into(),
            to_user_id: "u2".into(),
            body: "hi".into(),
        })
        .unwrap()
    {
        Reply::Message(message) => message,
        other => panic!("unexpected reply {:?}", other),
    };

    let inbox = engine
        .execute(Command::FetchMessages { user_id: "u2".into() })
        .unwrap();
    assert_eq!(inbox, Reply::Messages(vec![sent]));
}

#[test]
fn test_execute_comment_with_missing_parent() {
    let engine = Engine::default();

    let err = engine
        .execute(Command::AddComment {
            parent_id: Some("comment_gone".into()),
            author_id: "user_1".into(),
            content: "reply".into(),
        })
        .unwrap_err();

    assert!(matches!(err, AgoraError::ParentNotFound(_)));
    assert_eq!(err.status(), Status::ParentNotFound);
    assert_eq!(err.status().http_code(), 400);
}

// =============================================================================
// Validation Tests
// =============================================================================

#[test]
fn test_empty_names_are_invalid() {
    let engine = Engine::default();

    let err = engine
        .execute(Command::RegisterUser {
            display_name: "  ".into(),
        })
        .unwrap_err();
    assert!(matches!(err, AgoraError::InvalidInput(_)));

    let err = engine
        .execute(Command::AddForum { name: String::new() })
        .unwrap_err();
    assert_eq!(err.status(), Status::InvalidInput);

    assert!(engine.members().list_users().is_empty());
    assert!(engine.forums().list_forums().is_empty());
}

#[test]
fn test_empty_message_participants_are_invalid() {
    let engine = Engine::default();

    let err = engine
        .execute(Command::SendMessage {
            from_user_id: "u1".into(),
            to_user_id: "".into(),
            body: "hi".into(),
        })
        .unwrap_err();

    assert!(matches!(err, AgoraError::InvalidInput(_)));
    assert!(engine.messages().fetch_messages("u1").is_empty());
}

// =============================================================================
// Post Submission Tests
// =============================================================================

#[test]
fn test_submit_post_links_forum() {
    let engine = Engine::default();
    let forum = engine.forums().add_forum("rust");
    let author = register(&engine, "alice");

    let submission = engine.submit_post(&forum.id, &author, "hello").unwrap();

    assert!(submission.forum_linked);
    let forum = engine.forums().retrieve_forum(&forum.id).unwrap();
    assert_eq!(forum.post_ids, vec![submission.post.id.clone()]);
    assert_eq!(
        engine.posts().retrieve_post(&submission.post.id).unwrap(),
        submission.post
    );
}

#[test]
fn test_submit_post_to_missing_forum() {
    let engine = Engine::default();

    let submission = engine.submit_post("forum_gone", "user_1", "hello").unwrap();

    assert!(!submission.forum_linked);
    assert!(engine.posts().retrieve_post(&submission.post.id).is_ok());
}

#[test]
fn test_forum_holds_ids_not_copies() {
    let engine = Engine::default();
    let forum = engine.forums().add_forum("rust");
    let submission = engine.submit_post(&forum.id, "user_1", "hello").unwrap();

    engine.add_upvote(&submission.post.id, "voter").unwrap();

    // The only post data lives in the PostManager
    let forum = engine.forums().retrieve_forum(&forum.id).unwrap();
    let post = engine.posts().retrieve_post(&forum.post_ids[0]).unwrap();
    assert_eq!(post.upvotes, 1);
}

#[test]
fn test_remove_post_unlinks_forum() {
    let engine = Engine::default();
    let forum = engine.forums().add_forum("rust");
    let kept = engine.submit_post(&forum.id, "user_1", "kept").unwrap();
    let gone = engine.submit_post(&forum.id, "user_1", "gone").unwrap();

    let reply = engine
        .execute(Command::RemovePost {
            post_id: gone.post.id.clone(),
        })
        .unwrap();

    assert_eq!(reply, Reply::Removed(true));
    let forum = engine.forums().retrieve_forum(&forum.id).unwrap();
    assert_eq!(forum.post_ids, vec![kept.post.id.clone()]);
    assert!(engine.posts().retrieve_post(&gone.post.id).is_err());
}

#[test]
fn test_remove_post_without_forum() {
    let engine = Engine::default();
    let submission = engine.submit_post("forum_gone", "user_1", "hello").unwrap();

    assert!(engine.remove_post(&submission.post.id));
    assert!(!engine.remove_post(&submission.post.id));
}

// =============================================================================
// Comment Attachment Tests
// =============================================================================

#[test]
fn test_reply_to_post_attaches_top_level_only() {
    let engine = Engine::default();
    let post = engine.posts().add_post("forum_1", "user_1", "hello");

    let top = engine
        .reply_to_post(&post.id, None, "user_2", "top")
        .unwrap();
    let nested = engine
        .reply_to_post(&post.id, Some(&top.id), "user_3", "nested")
        .unwrap();

    let post = engine.posts().retrieve_post(&post.id).unwrap();
    assert_eq!(post.comment_ids, vec![top.id.clone()]);

    let top = engine.comments().fetch_comment(&top.id).unwrap();
    assert_eq!(top.reply_ids(), vec![nested.id.as_str()]);
}

#[test]
fn test_reply_to_missing_post() {
    let engine = Engine::default();

    let err = engine
        .reply_to_post("post_gone", None, "user_1", "hello")
        .unwrap_err();

    assert!(matches!(err, AgoraError::NotFound { .. }));
    assert_eq!(engine.comments().comment_count(), 0);
}

#[test]
fn test_remove_comment_unlinks_post() {
    let engine = Engine::default();
    let post = engine.posts().add_post("forum_1", "user_1", "hello");
    let kept = engine.reply_to_post(&post.id, None, "user_2", "kept").unwrap();
    let gone = engine.reply_to_post(&post.id, None, "user_2", "gone").unwrap();

    let reply = engine
        .execute(Command::RemoveComment {
            comment_id: gone.id.clone(),
        })
        .unwrap();

    assert_eq!(reply, Reply::Removed(true));
    let post = engine.posts().retrieve_post(&post.id).unwrap();
    assert!(!post.comment_ids.contains(&gone.id));
    assert_eq!(post.comment_ids, vec![kept.id.clone()]);
}

#[test]
fn test_remove_reply_leaves_post_list_alone() {
    let engine = Engine::default();
    let post = engine.posts().add_post("forum_1", "user_1", "hello");
    let top = engine.reply_to_post(&post.id, None, "user_2", "top").unwrap();
    let nested = engine
        .reply_to_post(&post.id, Some(&top.id), "user_3", "nested")
        .unwrap();

    assert!(engine.remove_comment(&nested.id));

    let post = engine.posts().retrieve_post(&post.id).unwrap();
    assert_eq!(post.comment_ids, vec![top.id.clone()]);
    assert!(engine.comments().fetch_comment(&top.id).unwrap().replies.is_empty());
    assert!(!engine.remove_comment(&nested.id));
}

// =============================================================================
// Configuration Tests
// =============================================================================

#[test]
fn test_config_sets_comment_policy() {
    let config = Config::builder()
        .comment_removal(CommentRemoval::Cascade)
        .build();
    let engine = Engine::new(config);

    assert_eq!(engine.comments().removal_policy(), CommentRemoval::Cascade);
    assert_eq!(engine.config().comment_removal, CommentRemoval::Cascade);
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.request_timeout_ms, 5000);
    assert_eq!(config.comment_removal, CommentRemoval::Orphan);
    assert_eq!(config.request_timeout().as_secs(), 5);
}

#[test]
fn test_config_validation() {
    assert!(Config::default().validate().is_ok());

    let no_timeout = Config::builder().request_timeout_ms(0).build();
    assert!(matches!(no_timeout.validate(), Err(AgoraError::Config(_))));

    let no_connections = Config::builder().max_connections(0).build();
    assert!(matches!(no_connections.validate(), Err(AgoraError::Config(_))));
}

#[test]
fn test_dispatcher_rejects_zero_timeout() {
    let config = Config::builder().request_timeout_ms(0).build();
    let engine = std::sync::Arc::new(Engine::new(config));

    let result = agora::Dispatcher::for_engine(engine);

    assert!(matches!(result, Err(AgoraError::Config(_))));
}
