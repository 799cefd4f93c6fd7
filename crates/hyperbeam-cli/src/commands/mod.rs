pub mod address;
pub mod message_id;
pub mod parse;
pub mod resolve;
pub mod verify;
