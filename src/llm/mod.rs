//! Generative service integration

pub mod client;
pub mod coach;
pub mod extract;
pub mod mock;
pub mod prompts;

pub use client::{ChatRole, ChatTurn, GeminiClient};
pub use coach::CareerCoach;
