//! Response definitions
//!
//! Represents replies to clients.

use serde::{Deserialize, Serialize};

use crate::engine::{PostSubmission, VoteOutcome};
use crate::entities::{Account, Comment, Forum, Message, Post};
use crate::error::{AgoraError, Result};

/// Response status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum Status {
    Ok = 0x00,
    NotFound = 0x01,
    ParentNotFound = 0x02,
    InvalidInput = 0x03,
    Timeout = 0x04,
    Internal = 0x05,
}

impl Status {
    /// Equivalent HTTP status code
    pub fn http_code(&self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::NotFound => 404,
            Status::ParentNotFound | Status::InvalidInput => 400,
            Status::Timeout => 503,
            Status::Internal => 500,
        }
    }
}

/// Successful result of a command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reply {
    Forum(Forum),
    Forums(Vec<Forum>),
    Account(Account),
    Accounts(Vec<Account>),
    Post(Post),
    Posts(Vec<Post>),
    Comment(Comment),
    Message(Message),
    Messages(Vec<Message>),
    /// Outcome of a delete: whether anything was removed
    Removed(bool),
    Vote(VoteOutcome),
    Submission(PostSubmission),
    Pong,
}

/// A response to send to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Response {
    Ok(Reply),
    Err { status: Status, message: String },
}

impl Response {
    /// Build a response from the outcome of a command
    pub fn from_result(result: Result<Reply>) -> Self {
        match result {
            Ok(reply) => Response::Ok(reply),
            Err(err) => Response::error(&err),
        }
    }

    /// Create an error response carrying the error's status
    pub fn error(err: &AgoraError) -> Self {
        Response::Err {
            status: err.status(),
            message: err.to_string(),
        }
    }

    pub fn status(&self) -> Status {
        match self {
            Response::Ok(_) => Status::Ok,
            Response::Err { status, .. } => *status,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Response::Ok(_))
    }
}
