//! Agora CLI Client
//!
//! Command-line interface for interacting with Agora.

use agora::network::Client;
use agora::protocol::{Command, Response};
use clap::{Parser, Subcommand};

/// Agora CLI
#[derive(Parser, Debug)]
#[command(name = "agora-cli")]
#[command(about = "CLI for the Agora forum store")]
struct Args {
    /// Server address
    #[arg(short, long, default_value = "127.0.0.1:7878")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ping the server
    Ping,

    /// Register a user
    Register {
        /// Display name
        name: String,
    },

    /// Show a user
    User {
        /// User id
        id: String,
    },

    /// Create a forum
    Forum {
        /// Forum name
        name: String,
    },

    /// Join a forum
    Join {
        forum_id: String,
        user_id: String,
    },

    /// Submit a post to a forum
    Post {
        forum_id: String,
        author_id: String,
        content: String,
    },

    /// List every post
    Posts,

    /// Upvote a post
    Upvote { post_id: String, user_id: String },

    /// Downvote a post
    Downvote { post_id: String, user_id: String },

    /// Comment on a post
    Comment {
        post_id: String,
        author_id: String,
        content: String,

        /// Reply to this comment instead of the post
        #[arg(short, long)]
        parent: Option<String>,
    },

    /// Send a direct message
    Send {
        from: String,
        to: String,
        body: String,
    },

    /// Show a user's messages
    Inbox {
        /// User id
        user_id: String,
    },
}

impl Commands {
    fn into_command(self) -> Command {
        match self {
            Commands::Ping => Command::Ping,
            Commands::Register { name } => Command::RegisterUser { display_name: name },
            Commands::User { id } => Command::FetchUser { user_id: id },
            Commands::Forum { name } => Command::AddForum { name },
            Commands::Join { forum_id, user_id } => Command::JoinForum { forum_id, user_id },
            Commands::Post {
                forum_id,
                author_id,
                content,
            } => Command::SubmitPost {
                forum_id,
                author_id,
                content,
            },
            Commands::Posts => Command::RetrieveAllPosts,
            Commands::Upvote { post_id, user_id } => Command::Upvote { post_id, user_id },
            Commands::Downvote { post_id, user_id } => Command::Downvote { post_id, user_id },
            Commands::Comment {
                post_id,
                author_id,
                content,
                parent,
            } => Command::ReplyToPost {
                post_id,
                parent_id: parent,
                author_id,
                content,
            },
            Commands::Send { from, to, body } => Command::SendMessage {
                from_user_id: from,
                to_user_id: to,
                body,
            },
            Commands::Inbox { user_id } => Command::FetchMessages { user_id },
        }
    }
}

fn main() {
    let args = Args::parse();

    let mut client = match Client::connect(&args.server) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    match client.request(&args.command.into_command()) {
        Ok(Response::Ok(reply)) => println!("{:#?}", reply),
        Ok(Response::Err { status, message }) => {
            eprintln!("error ({}): {}", status.http_code(), message);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
