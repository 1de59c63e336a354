//! Engine Module
//!
//! Owns the five managers and coordinates operations that span them.
//!
//! ## Responsibilities
//! - Construct every manager once, for the lifetime of the process
//! - Route commands to the right manager
//! - Vote → karma propagation
//! - Linking new posts into forums and new comments into posts
//!
//! ## Consistency
//! Managers never take each other's locks. A coordinated operation is a
//! sequence of independent locked steps, so an interruption between steps
//! can leave e.g. a vote without its karma change. This is accepted:
//! cross-manager updates are best-effort, not transactional.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::entities::{Account, Comment, Post};
use crate::error::{AgoraError, Result};
use crate::managers::{CommentManager, ForumManager, MemberManager, MessageManager, PostManager};
use crate::protocol::{Command, Reply};

/// Direction of a vote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    /// Karma change applied to the post's author
    pub fn karma_delta(&self) -> i64 {
        match self {
            VoteDirection::Up => 1,
            VoteDirection::Down => -1,
        }
    }
}

/// What happened to the author's karma after a vote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum KarmaChange {
    /// Karma adjusted; the updated account
    Applied { account: Account },

    /// The post's author has no account; the vote stands, karma untouched
    AuthorMissing { author_id: String },
}

/// Result of a vote: the updated post and the karma outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteOutcome {
    pub post: Post,
    pub karma: KarmaChange,
}

impl VoteOutcome {
    /// Whether the author's karma was adjusted
    pub fn karma_applied(&self) -> bool {
        matches!(self.karma, KarmaChange::Applied { .. })
    }
}

/// Result of submitting a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSubmission {
    pub post: Post,

    /// False when the forum did not exist; the post is stored regardless
    pub forum_linked: bool,
}

/// The coordinating layer over all managers
pub struct Engine {
    /// Engine configuration
    config: Config,

    forums: ForumManager,
    members: MemberManager,
    posts: PostManager,
    comments: CommentManager,
    messages: MessageManager,
}

impl Engine {
    /// Build an engine with empty managers
    pub fn new(config: Config) -> Self {
        tracing::info!(comment_removal = ?config.comment_removal, "engine initialized");
        Self {
            comments: CommentManager::new(config.comment_removal),
            forums: ForumManager::new(),
            members: MemberManager::new(),
            posts: PostManager::new(),
            messages: MessageManager::new(),
            config,
        }
    }

    /// Execute a command
    ///
    /// Routes commands to appropriate handlers. Required ids and names must
    /// be non-empty; otherwise `InvalidInput` is returned and no manager is
    /// touched.
    pub fn execute(&self, command: Command) -> Result<Reply> {
        tracing::trace!(?command, "execute");

        match command {
            // Forums
            Command::AddForum { name } => {
                require("name", &name)?;
                Ok(Reply::Forum(self.forums.add_forum(&name)))
            }
            Command::RetrieveForum { forum_id } => {
                self.forums.retrieve_forum(&forum_id).map(Reply::Forum)
            }
            Command::RemoveForum { forum_id } => {
                Ok(Reply::Removed(self.forums.remove_forum(&forum_id)))
            }
            Command::ListForums => Ok(Reply::Forums(self.forums.list_forums())),
            Command::JoinForum { forum_id, user_id } => {
                require("user_id", &user_id)?;
                self.forums.add_member(&forum_id, &user_id).map(Reply::Forum)
            }
            Command::LeaveForum { forum_id, user_id } => {
                self.forums.remove_member(&forum_id, &user_id).map(Reply::Forum)
            }

            // Members
            Command::RegisterUser { display_name } => {
                require("display_name", &display_name)?;
                Ok(Reply::Account(self.members.register_user(&display_name)))
            }
            Command::FetchUser { user_id } => self.members.fetch_user(&user_id).map(Reply::Account),
            Command::RemoveUser { user_id } => {
                Ok(Reply::Removed(self.members.remove_user(&user_id)))
            }
            Command::ListUsers => Ok(Reply::Accounts(self.members.list_users())),
            Command::RenameUser {
                user_id,
                display_name,
            } => {
                require("display_name", &display_name)?;
                self.members
                    .rename_user(&user_id, &display_name)
                    .map(Reply::Account)
            }

            // Posts
            Command::AddPost {
                forum_id,
                author_id,
                content,
            } => {
                require("forum_id", &forum_id)?;
                require("author_id", &author_id)?;
                Ok(Reply::Post(self.posts.add_post(&forum_id, &author_id, &content)))
            }
            Command::RetrievePost { post_id } => self.posts.retrieve_post(&post_id).map(Reply::Post),
            Command::RetrieveAllPosts => Ok(Reply::Posts(self.posts.retrieve_all_posts())),
            Command::RemovePost { post_id } => Ok(Reply::Removed(self.remove_post(&post_id))),

            // Comments
            Command::AddComment {
                parent_id,
                author_id,
                content,
            } => {
                require("author_id", &author_id)?;
                self.comments
                    .add_comment(parent_id.as_deref(), &author_id, &content)
                    .map(Reply::Comment)
            }
            Command::FetchComment { comment_id } => {
                self.comments.fetch_comment(&comment_id).map(Reply::Comment)
            }
            Command::RemoveComment { comment_id } => {
                Ok(Reply::Removed(self.remove_comment(&comment_id)))
            }

            // Messages
            Command::SendMessage {
                from_user_id,
                to_user_id,
                body,
            } => {
                require("from_user_id", &from_user_id)?;
                require("to_user_id", &to_user_id)?;
                Ok(Reply::Message(
                    self.messages
                        .send_message(&from_user_id, &to_user_id, &body),
                ))
            }
            Command::FetchMessages { user_id } => {
                Ok(Reply::Messages(self.messages.fetch_messages(&user_id)))
            }
            Command::FetchMessage { message_id } => {
                self.messages.fetch_message(&message_id).map(Reply::Message)
            }
            Command::RemoveMessage { message_id } => {
                Ok(Reply::Removed(self.messages.remove_message(&message_id)))
            }

            // Coordinated
            Command::Upvote { post_id, user_id } => {
                self.add_upvote(&post_id, &user_id).map(Reply::Vote)
            }
            Command::Downvote { post_id, user_id } => {
                self.add_downvote(&post_id, &user_id).map(Reply::Vote)
            }
            Command::SubmitPost {
                forum_id,
                author_id,
                content,
            } => self
                .submit_post(&forum_id, &author_id, &content)
                .map(Reply::Submission),
            Command::ReplyToPost {
                post_id,
                parent_id,
                author_id,
                content,
            } => self
                .reply_to_post(&post_id, parent_id.as_deref(), &author_id, &content)
                .map(Reply::Comment),

            Command::Ping => Ok(Reply::Pong),
        }
    }

    // =========================================================================
    // Vote / Karma
    // =========================================================================

    /// Upvote a post and credit its author one karma
    pub fn add_upvote(&self, post_id: &str, voter_id: &str) -> Result<VoteOutcome> {
        self.apply_vote(post_id, voter_id, VoteDirection::Up)
    }

    /// Downvote a post and debit its author one karma
    pub fn add_downvote(&self, post_id: &str, voter_id: &str) -> Result<VoteOutcome> {
        self.apply_vote(post_id, voter_id, VoteDirection::Down)
    }

    /// Record a vote, then adjust the author's karma
    ///
    /// Votes are not deduplicated; each call counts. A missing post fails
    /// with `NotFound`. A missing author is reported through
    /// `KarmaChange::AuthorMissing` rather than as an error.
    fn apply_vote(
        &self,
        post_id: &str,
        voter_id: &str,
        direction: VoteDirection,
    ) -> Result<VoteOutcome> {
        require("post_id", post_id)?;

        // Step 1: post counter (PostManager lock)
        let post = match direction {
            VoteDirection::Up => self.posts.upvote(post_id)?,
            VoteDirection::Down => self.posts.downvote(post_id)?,
        };

        // Step 2: author karma (MemberManager lock)
        let karma = match self
            .members
            .adjust_karma(&post.author_id, direction.karma_delta())
        {
            Ok(account) => KarmaChange::Applied { account },
            Err(AgoraError::NotFound { .. }) => {
                tracing::debug!(post_id, author_id = %post.author_id, "vote author has no account");
                KarmaChange::AuthorMissing {
                    author_id: post.author_id.clone(),
                }
            }
            Err(e) => return Err(e),
        };

        tracing::debug!(post_id, voter_id, ?direction, "vote recorded");
        Ok(VoteOutcome { post, karma })
    }

    // =========================================================================
    // Posts and Comments
    // =========================================================================

    /// Create a post and append it to its forum's post list
    ///
    /// The forum is a soft reference: if it does not exist the post is still
    /// created and `forum_linked` is false.
    pub fn submit_post(
        &self,
        forum_id: &str,
        author_id: &str,
        content: &str,
    ) -> Result<PostSubmission> {
        require("forum_id", forum_id)?;
        require("author_id", author_id)?;

        let post = self.posts.add_post(forum_id, author_id, content);

        let forum_linked = match self.forums.attach_post(forum_id, &post.id) {
            Ok(_) => true,
            Err(AgoraError::NotFound { .. }) => false,
            Err(e) => return Err(e),
        };

        Ok(PostSubmission { post, forum_linked })
    }

    /// Comment on a post
    ///
    /// The post must exist. Top-level comments are appended to the post's
    /// comment list; replies hang off their parent comment only.
    pub fn reply_to_post(
        &self,
        post_id: &str,
        parent_id: Option<&str>,
        author_id: &str,
        content: &str,
    ) -> Result<Comment> {
        require("post_id", post_id)?;
        require("author_id", author_id)?;

        self.posts.retrieve_post(post_id)?;

        let comment = self.comments.add_comment(parent_id, author_id, content)?;

        if comment.is_root() {
            self.posts.attach_comment(post_id, &comment.id)?;
        }

        Ok(comment)
    }

    /// Remove a post and unlink it from its forum
    ///
    /// The forum is best-effort, as in `submit_post`: a missing forum does
    /// not stop the removal.
    pub fn remove_post(&self, post_id: &str) -> bool {
        let Some(post) = self.posts.take_post(post_id) else {
            return false;
        };

        if let Err(e) = self.forums.detach_post(&post.forum_id, post_id) {
            tracing::debug!(post_id, forum_id = %post.forum_id, "post had no forum to unlink: {}", e);
        }
        true
    }

    /// Remove a comment and unlink it from the post listing it
    ///
    /// Only top-level comments are listed on posts; replies are unlinked
    /// from their parent comment by the CommentManager itself.
    pub fn remove_comment(&self, comment_id: &str) -> bool {
        if !self.comments.remove_comment(comment_id) {
            return false;
        }

        if let Some(post_id) = self.posts.detach_comment(comment_id) {
            tracing::debug!(comment_id, post_id = %post_id, "comment unlinked from post");
        }
        true
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn forums(&self) -> &ForumManager {
        &self.forums
    }

    pub fn members(&self) -> &MemberManager {
        &self.members
    }

    pub fn posts(&self) -> &PostManager {
        &self.posts
    }

    pub fn comments(&self) -> &CommentManager {
        &self.comments
    }

    pub fn messages(&self) -> &MessageManager {
        &self.messages
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

/// Reject empty required fields
fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AgoraError::InvalidInput(format!("{} must not be empty", field)));
    }
    Ok(())
}
