//! CLI module graph.

pub mod chat_id;
pub mod check;
pub mod command;
pub mod output;
pub mod run;
