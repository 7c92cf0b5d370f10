//! # Garage Architecture
//!
//! Garage is a **UI-agnostic car list library**. This is not a CLI application
//! that happens to have some library code—it's a library that happens to have
//! a CLI client.
//!
//! ## The Layered Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, formats output, handles terminal I/O   │
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
//! │  - Business logic per operation                             │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Collection Manager (collection.rs)                         │
//! │  - Owns the canonical in-memory collection                  │
//! │  - Create/update/delete/query, id generation, change events │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract CarStore trait, full-snapshot load/save         │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, collection, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! (The one deliberate exception is the delete confirmation prompt, which
//! reads stdin unless the caller passes `skip_confirm`.)
//!
//! ## Data Flow
//!
//! CLI event → command → `Garage` mutation → full snapshot persisted via
//! `CarStore` → change listeners notified → CLI re-renders its projection.
//! The collection is loaded from the store exactly once, at startup.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`collection`]: The collection manager and change notification
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Car`, `CarFields`) and validation
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod collection;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
