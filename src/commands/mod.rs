pub mod search;
pub mod verify;
