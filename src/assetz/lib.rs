//! # Assetz Architecture
//!
//! Assetz edits a flat inventory file: one `category,name,price` row per line. The
//! interactive menu is only a client; everything it does goes through the library.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts, confirmation, table printing         │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Range checks, patch application, matching                │
//! │  - Returns records and leveled messages, never prints       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - AssetStore: the in-memory sequence, saved on every write │
//! │  - Backend trait: FileBackend, MemBackend (testing)         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Positional identity
//!
//! A record has no key of its own. The number shown next to it is its zero-based
//! position in the current sequence, so deleting record `i` renumbers everything
//! after it. See [`index`].
//!
//! ## Durability
//!
//! Every mutating call rewrites the whole file before it returns, so the file and
//! the in-memory sequence match after any successful mutation. There is no temp file
//! or rename; a crash mid-write can truncate the file.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`store`]: The record store and its backends
//! - [`model`]: `Record` and the partial-update types
//! - [`index`]: Positional indexes and index parsing
//! - [`config`]: Configuration file
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod store;
