pub mod adapter;
pub mod console;
pub mod messages;
