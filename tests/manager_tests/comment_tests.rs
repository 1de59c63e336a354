//! Tests for CommentManager
//!
//! These tests verify:
//! - Root comments and replies
//! - Missing parents are rejected
//! - The flat registry finds comments at any depth
//! - Orphan and cascade removal

use agora::managers::CommentManager;
use agora::{AgoraError, CommentRemoval};

// =============================================================================
// Helper Functions
// =============================================================================

/// root ─┬─ a ── a1
///       └─ b
fn build_tree(comments: &CommentManager) -> (String, String, String, String) {
    let root = comments.add_comment(None, "user_1", "root").unwrap();
    let a = comments.add_comment(Some(&root.id), "user_2", "a").unwrap();
    let a1 = comments.add_comment(Some(&a.id), "user_3", "a1").unwrap();
    let b = comments.add_comment(Some(&root.id), "user_2", "b").unwrap();
    (root.id, a.id, a1.id, b.id)
}

// =============================================================================
// Creation Tests
// =============================================================================

#[test]
fn test_root_comment() {
    let comments = CommentManager::default();

    let comment = comments.add_comment(None, "user_1", "first").unwrap();

    assert!(comment.id.starts_with("comment_"));
    assert!(comment.is_root());
    assert!(comment.replies.is_empty());
    assert_eq!(comments.fetch_comment(&comment.id).unwrap(), comment);
}

#[test]
fn test_empty_parent_means_root() {
    let comments = CommentManager::default();

    let comment = comments.add_comment(Some(""), "user_1", "first").unwrap();

    assert!(comment.is_root());
}

#[test]
fn test_reply_attaches_to_parent() {
    let comments = CommentManager::default();
    let parent = comments.add_comment(None, "user_1", "parent").unwrap();

    let reply = comments
        .add_comment(Some(&parent.id), "user_2", "reply")
        .unwrap();

    assert_eq!(reply.parent_id.as_deref(), Some(parent.id.as_str()));
    let parent = comments.fetch_comment(&parent.id).unwrap();
    assert_eq!(parent.reply_ids(), vec![reply.id.as_str()]);
    assert_eq!(parent.replies[0].content, "reply");
}

#[test]
fn test_missing_parent_is_rejected() {
    let comments = CommentManager::default();

    let result = comments.add_comment(Some("comment_missing"), "user_1", "reply");

    match result {
        Err(AgoraError::ParentNotFound(id)) => assert_eq!(id, "comment_missing"),
        other => panic!("expected ParentNotFound, got {:?}", other),
    }
    assert_eq!(comments.comment_count(), 0);
}

#[test]
fn test_nested_comments_fetchable_by_id() {
    let comments = CommentManager::default();
    let (root, a, a1, _b) = build_tree(&comments);

    let deep = comments.fetch_comment(&a1).unwrap();
    assert_eq!(deep.content, "a1");

    let tree = comments.fetch_comment(&root).unwrap();
    assert_eq!(tree.descendant_count(), 3);
    assert_eq!(tree.find(&a1).map(|c| c.content.as_str()), Some("a1"));
    assert_eq!(tree.find(&a).unwrap().replies.len(), 1);
}

#[test]
fn test_fetch_missing_comment() {
    let comments = CommentManager::default();

    assert!(matches!(
        comments.fetch_comment("comment_0"),
        Err(AgoraError::NotFound { .. })
    ));
}

// =============================================================================
// Removal Tests
// =============================================================================

#[test]
fn test_remove_absent_comment_is_false() {
    let comments = CommentManager::default();

    assert!(!comments.remove_comment("comment_absent"));
}

#[test]
fn test_remove_detaches_from_parent() {
    let comments = CommentManager::default();
    let (root, a, _a1, b) = build_tree(&comments);

    assert!(comments.remove_comment(&b));

    let tree = comments.fetch_comment(&root).unwrap();
    assert_eq!(tree.reply_ids(), vec![a.as_str()]);
    assert!(comments.fetch_comment(&b).is_err());
}

#[test]
fn test_orphan_removal_keeps_descendants() {
    let comments = CommentManager::new(CommentRemoval::Orphan);
    let parent = comments.add_comment(None, "user_1", "A").unwrap();
    let child = comments.add_comment(Some(&parent.id), "user_2", "B").unwrap();

    assert!(comments.remove_comment(&parent.id));

    assert!(comments.fetch_comment(&parent.id).is_err());
    let orphan = comments.fetch_comment(&child.id).unwrap();
    assert_eq!(orphan.content, "B");
    assert_eq!(comments.comment_count(), 1);
}

#[test]
fn test_orphaned_subtree_stays_intact() {
    let comments = CommentManager::new(CommentRemoval::Orphan);
    let (root, a, a1, b) = build_tree(&comments);

    comments.remove_comment(&root);

    let a_tree = comments.fetch_comment(&a).unwrap();
    assert_eq!(a_tree.reply_ids(), vec![a1.as_str()]);
    assert!(comments.fetch_comment(&b).is_ok());
    assert_eq!(comments.comment_count(), 3);
}

#[test]
fn test_cascade_removal_drops_subtree() {
    let comments = CommentManager::new(CommentRemoval::Cascade);
    let (root, a, a1, b) = build_tree(&comments);
    let other = comments.add_comment(None, "user_9", "unrelated").unwrap();

    assert!(comments.remove_comment(&root));

    for id in [&root, &a, &a1, &b] {
        assert!(comments.fetch_comment(id).is_err(), "{} survived", id);
    }
    assert!(comments.fetch_comment(&other.id).is_ok());
    assert_eq!(comments.comment_count(), 1);
}

#[test]
fn test_cascade_removal_of_inner_node() {
    let comments = CommentManager::new(CommentRemoval::Cascade);
    let (root, a, a1, b) = build_tree(&comments);

    assert!(comments.remove_comment(&a));

    assert!(comments.fetch_comment(&a1).is_err());
    let tree = comments.fetch_comment(&root).unwrap();
    assert_eq!(tree.reply_ids(), vec![b.as_str()]);
}
