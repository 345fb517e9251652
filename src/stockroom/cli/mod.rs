//! # CLI Behavior
//!
//! This is **one possible UI client** for stockroom, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! For the overall architecture, see the library crate docs.
//!
//! ## Naked Execution (`stockroom`)
//!
//! Running `stockroom` with no arguments lists the first page, newest first.
//!
//! ## One-shot vs. Shell
//!
//! Every one-shot command starts a fresh session, so search, sort and page
//! apply to that call only. `stockroom shell` keeps one session alive and
//! re-renders the current page after each action.
//!
//! `add` and `edit` go through the same form validation as the shell: a blank
//! name, a negative price or a fractional stock is rejected and nothing is written.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that drive the session and print output
//! - `render`: Output formatting (tables, product detail, messages)
//! - `setup`: Argument parsing via clap
//! - `shell`: The interactive loop
//! - `styles`: Terminal styling
//! - `templates`: Output templates

mod commands;
mod render;
pub mod setup;
mod shell;
mod styles;
mod templates;

pub use commands::run;
