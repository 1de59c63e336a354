//! Tests for ForumManager

use agora::managers::ForumManager;
use agora::AgoraError;

#[test]
fn test_add_forum_starts_empty() {
    let forums = ForumManager::new();

    let forum = forums.add_forum("rust");

    assert!(forum.id.starts_with("forum_"));
    assert_eq!(forum.name, "rust");
    assert_eq!(forum.member_count(), 0);
    assert!(forum.post_ids.is_empty());
}

#[test]
fn test_retrieve_matches_created() {
    let forums = ForumManager::new();
    let forum = forums.add_forum("rust");

    assert_eq!(forums.retrieve_forum(&forum.id).unwrap(), forum);
}

#[test]
fn test_retrieve_missing_forum() {
    let forums = ForumManager::new();

    assert!(matches!(
        forums.retrieve_forum("forum_0"),
        Err(AgoraError::NotFound { .. })
    ));
}

#[test]
fn test_remove_forum() {
    let forums = ForumManager::new();
    let forum = forums.add_forum("rust");

    assert!(forums.remove_forum(&forum.id));
    assert!(!forums.remove_forum(&forum.id));
    assert!(forums.retrieve_forum(&forum.id).is_err());
}

#[test]
fn test_membership_is_presence() {
    let forums = ForumManager::new();
    let forum = forums.add_forum("rust");

    forums.add_member(&forum.id, "user_1").unwrap();
    let joined_twice = forums.add_member(&forum.id, "user_1").unwrap();
    assert_eq!(joined_twice.member_count(), 1);
    assert!(joined_twice.is_member("user_1"));

    let left = forums.remove_member(&forum.id, "user_1").unwrap();
    assert!(!left.is_member("user_1"));

    // Leaving again is harmless
    assert_eq!(forums.remove_member(&forum.id, "user_1").unwrap().member_count(), 0);
}

#[test]
fn test_member_of_missing_forum() {
    let forums = ForumManager::new();

    assert!(forums.add_member("forum_nope", "user_1").is_err());
}

#[test]
fn test_attach_post_keeps_order() {
    let forums = ForumManager::new();
    let forum = forums.add_forum("rust");

    forums.attach_post(&forum.id, "post_1").unwrap();
    let forum = forums.attach_post(&forum.id, "post_2").unwrap();

    assert_eq!(forum.post_ids, vec!["post_1", "post_2"]);
}

#[test]
fn test_detach_post() {
    let forums = ForumManager::new();
    let forum = forums.add_forum("rust");
    forums.attach_post(&forum.id, "post_1").unwrap();
    forums.attach_post(&forum.id, "post_2").unwrap();

    let forum = forums.detach_post(&forum.id, "post_1").unwrap();

    assert_eq!(forum.post_ids, vec!["post_2"]);
    assert!(matches!(
        forums.detach_post("forum_nope", "post_2"),
        Err(AgoraError::NotFound { .. })
    ));
}

#[test]
fn test_list_forums() {
    let forums = ForumManager::new();
    forums.add_forum("a");
    forums.add_forum("b");

    let mut names: Vec<String> = forums.list_forums().into_iter().map(|f| f.name).collect();
    names.sort();
    assert_eq!(names, vec!["a", "b"]);
}
