pub mod ai;
pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod git;
pub mod github;
pub mod prompt;
pub mod utils;
pub mod workflows;
