//! # Stockroom Architecture
//!
//! Stockroom is a **UI-agnostic inventory library**: a small product catalog with
//! search, ordering, pagination, JSON export and import. The `stockroom` binary is
//! one client of it; nothing below `cli/` knows about a terminal.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - One-shot commands and the interactive shell              │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session (session.rs)                                       │
//! │  - Page, search, sort and the open form as explicit state   │
//! │  - Validates forms, assigns ids and timestamps              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, applies configuration         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Read-modify-write of the whole collection                │
//! │  - Query → paginate → present for listings                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - KeyValueStore trait, one JSON value per key              │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `session.rs` inward, code takes regular arguments and returns
//! `Result<CmdResult>` or plain view structs. It never writes to stdout/stderr
//! and never exits the process. Export takes any `io::Write`, import takes text.
//!
//! ## Testing Strategy
//!
//! 1. **Pure modules** (`query`, `sort`, `pagination`, `money`, `presenter`):
//!    unit tests over plain values.
//! 2. **Commands** (`commands/*.rs`): unit tests against `InMemoryStore`
//!    built with `StoreFixture`.
//! 3. **API / Session**: dispatch and state transition tests.
//! 4. **CLI**: rendering tests on canned views, plus `tests/` running the
//!    binary against a temporary data directory.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic per operation
//! - [`session`]: Transient UI state and user actions
//! - [`store`]: Storage abstraction, implementations, and the product catalog key
//! - [`model`]: `Product`, the edit form and its validation
//! - [`query`], [`sort`], [`pagination`]: the view pipeline
//! - [`presenter`], [`money`]: display values
//! - [`config`]: Configuration management
//! - [`init`]: Data directory resolution and API construction
//! - [`ids`]: Product id generation
//! - [`error`]: Error types
//! - `cli`: Argument parsing, templated rendering and the shell for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod ids;
pub mod init;
pub mod model;
pub mod money;
pub mod pagination;
pub mod presenter;
pub mod query;
pub mod session;
pub mod sort;
pub mod store;
