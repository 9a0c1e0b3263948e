//! # Tudo - a tiny command-line to-do list
//!
//! A command-line utility for keeping a short list of tasks in a plain
//! JSON file.
//!
//! ## Features
//!
//! - **Task Management**: Add, list, edit, complete, and delete tasks
//! - **Plain Storage**: The whole list lives in one JSON file under the
//!   platform data directory
//! - **Swappable Backend**: Persistence goes through a small key-value
//!   interface that tests replace with an in-memory fake
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tudo::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
pub mod store;
