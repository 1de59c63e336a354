//! Command definitions
//!
//! Typed requests, one variant per manager or coordinator operation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which mailbox handles a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Forum,
    Member,
    Post,
    Comment,
    Message,
    /// Cross-manager operations and health checks
    Coordinator,
}

impl Target {
    /// Every target, in mailbox start order
    pub const ALL: [Target; 6] = [
        Target::Forum,
        Target::Member,
        Target::Post,
        Target::Comment,
        Target::Message,
        Target::Coordinator,
    ];
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Target::Forum => "forum",
            Target::Member => "member",
            Target::Post => "post",
            Target::Comment => "comment",
            Target::Message => "message",
            Target::Coordinator => "coordinator",
        };
        f.write_str(name)
    }
}

/// A request from a client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    // -------------------------------------------------------------------------
    // Forums
    // -------------------------------------------------------------------------
    AddForum { name: String },
    RetrieveForum { forum_id: String },
    RemoveForum { forum_id: String },
    ListForums,
    JoinForum { forum_id: String, user_id: String },
    LeaveForum { forum_id: String, user_id: String },

    // -------------------------------------------------------------------------
    // Members
    // -------------------------------------------------------------------------
    RegisterUser { display_name: String },
    FetchUser { user_id: String },
    RemoveUser { user_id: String },
    ListUsers,
    RenameUser { user_id: String, display_name: String },

    // -------------------------------------------------------------------------
    // Posts
    // -------------------------------------------------------------------------
    /// Create a post without linking it into its forum
    AddPost {
        forum_id: String,
        author_id: String,
        content: String,
    },
    RetrievePost { post_id: String },
    RetrieveAllPosts,
    RemovePost { post_id: String },

    // -------------------------------------------------------------------------
    // Comments
    // -------------------------------------------------------------------------
    AddComment {
        parent_id: Option<String>,
        author_id: String,
        content: String,
    },
    FetchComment { comment_id: String },
    RemoveComment { comment_id: String },

    // -------------------------------------------------------------------------
    // Messages
    // -------------------------------------------------------------------------
    SendMessage {
        from_user_id: String,
        to_user_id: String,
        body: String,
    },
    FetchMessages { user_id: String },
    FetchMessage { message_id: String },
    RemoveMessage { message_id: String },

    // -------------------------------------------------------------------------
    // Coordinated operations
    // -------------------------------------------------------------------------
    Upvote { post_id: String, user_id: String },
    Downvote { post_id: String, user_id: String },
    /// Create a post and link it into its forum
    SubmitPost {
        forum_id: String,
        author_id: String,
        content: String,
    },
    /// Comment on a post, optionally as a reply to another comment
    ReplyToPost {
        post_id: String,
        parent_id: Option<String>,
        author_id: String,
        content: String,
    },

    /// Health check
    Ping,
}

impl Command {
    /// Mailbox this command is routed to
    pub fn target(&self) -> Target {
        match self {
            Command::AddForum { .. }
            | Command::RetrieveForum { .. }
            | Command::RemoveForum { .. }
            | Command::ListForums
            | Command::JoinForum { .. }
            | Command::LeaveForum { .. } => Target::Forum,

            Command::RegisterUser { .. }
            | Command::FetchUser { .. }
            | Command::RemoveUser { .. }
            | Command::ListUsers
            | Command::RenameUser { .. } => Target::Member,

            Command::AddPost { .. }
            | Command::RetrievePost { .. }
            | Command::RetrieveAllPosts
            | Command::RemovePost { .. } => Target::Post,

            Command::AddComment { .. }
            | Command::FetchComment { .. }
            | Command::RemoveComment { .. } => Target::Comment,

            Command::SendMessage { .. }
            | Command::FetchMessages { .. }
            | Command::FetchMessage { .. }
            | Command::RemoveMessage { .. } => Target::Message,

            Command::Upvote { .. }
            | Command::Downvote { .. }
            | Command::SubmitPost { .. }
            | Command::ReplyToPost { .. }
            | Command::Ping => Target::Coordinator,
        }
    }
}
