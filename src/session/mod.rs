//! Wizard session state and persistence

pub mod model;
pub mod store;

pub use model::{InterviewMode, SessionState, SessionStep, SessionUpdate};
pub use store::SessionStore;
