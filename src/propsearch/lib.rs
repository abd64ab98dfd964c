//! # Propsearch Architecture
//!
//! Propsearch is a **UI-agnostic property browsing library**: search a fixed
//! catalog of listings, keep a list of favorites, and look at one listing in
//! detail. The terminal client in `main.rs` is one front end; a browser
//! front end would drive the same API.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the session: catalog, favorites, criteria, results  │
//! │  - Normalizes inputs (zone names, routes, criteria edits)   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic, returns CmdResult                        │
//! │  - Pairs every favorites mutation with a store write        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - KeyValueStore trait, JSON slots                          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Model
//!
//! Nothing a user does inside a session is fatal. Unreadable stored state
//! falls back to defaults, failed writes are logged and dropped, unknown
//! property ids become "not found" messages, and criteria edits that would
//! put a minimum above its maximum are ignored. Errors are only returned for
//! bad input at the edges: an unreadable catalog file, an unknown route or
//! drop zone.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Key-value storage port and implementations
//! - [`model`]: Listing types (`Property`, `PropertyType`, `Added`)
//! - [`catalog`]: The read-only listing collection
//! - [`criteria`]: Search criteria and its edit reducer
//! - [`favorites`]: The favorites set
//! - [`dnd`]: Drag-and-drop event interpretation
//! - [`route`]: Addressable views
//! - [`config`]: Configuration management
//! - [`logging`]: `tracing` subscriber setup for binaries
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod criteria;
pub mod dnd;
pub mod error;
pub mod favorites;
pub mod logging;
pub mod model;
pub mod route;
pub mod store;
