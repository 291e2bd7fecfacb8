pub mod client;
pub mod collab;
pub mod dashboard;
pub mod error;
pub mod state;
