// src/prompt/mod.rs
// Prompt content: tables, random selection, instruction building

pub mod builder;
pub mod context;
pub mod selector;
pub mod tables;

pub use builder::{build_system_instruction, build_user_instruction};
pub use context::{PromptContext, Season};
pub use selector::{SeededSelector, Selector, ThreadRngSelector};
