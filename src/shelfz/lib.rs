//! # Shelfz Architecture
//!
//! Shelfz is a UI-agnostic catalog-browsing library with a thin CLI client
//! on top. Everything that decides *what is in* the rendered table lives
//! behind a structured API; the binary only parses arguments and prints.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, renders the table, prints messages     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic: load → join → filter                │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract CatalogStore trait                              │
//! │  - FileStore (production), InMemoryStore (testing),         │
//! │    bundled seed catalog                                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Data Pipeline
//!
//! Data flows one direction. The store loads three flat relations (users,
//! categories, products); [`join`] denormalizes them into enriched rows;
//! [`filter::FilterState`] narrows the rows to the visible subset. All
//! three steps are pure over their inputs, so the same filter state
//! applied twice produces identical output.
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments and returns
//! `Result<CmdResult>`. Nothing below the CLI writes to stdout or stderr,
//! assumes a terminal, or exits the process. A web view or a test harness
//! drives the same core the binary does.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): unit tests of business logic against
//!    `InMemoryStore`. This is where the lion's share of testing lives.
//! 2. **Join and filter** (`join.rs`, `filter.rs`): unit tests of
//!    ordering, composition, and failure modes.
//! 3. **CLI**: integration tests drive the compiled binary in a tempdir
//!    and assert on rendered output.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Dataset loading abstraction and implementations
//! - [`model`]: Core data types (`User`, `Category`, `Product`, `CatalogProduct`)
//! - [`join`]: The join engine producing enriched rows
//! - [`filter`]: Filter state and the filter pipeline
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod join;
pub mod model;
pub mod store;
