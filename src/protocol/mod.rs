//! Protocol Module
//!
//! Typed commands and replies, plus the frame codec used on the wire.
//!
//! ### Request
//! A bincode-encoded [`Command`] inside a frame.
//!
//! ### Response
//! A bincode-encoded [`Response`]: either `Ok(Reply)` or an error with a
//! [`Status`] and a message.
//!
//! ### Status Codes
//! - 0x00: OK
//! - 0x01: NOT_FOUND
//! - 0x02: PARENT_NOT_FOUND
//! - 0x03: INVALID_INPUT
//! - 0x04: TIMEOUT
//! - 0x05: INTERNAL

mod codec;
mod command;
mod response;

pub use codec::{
    decode_frame, encode_frame, read_command, read_frame, read_response, write_command,
    write_frame, write_response, HEADER_SIZE, MAX_PAYLOAD_SIZE,
};
pub use command::{Command, Target};
pub use response::{Reply, Response, Status};
