//! # Kanban Architecture
//!
//! Kanban is the **core of a task-board backend**: a flat collection of cards, each in
//! one of four status columns, with CRUD and a drag-and-drop batch status update.
//! It knows nothing about HTTP; a transport sits on top and maps results to responses.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Transport (external: HTTP routes, envelopes, status codes) │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs, shared.rs)                              │
//! │  - Thin facade over commands                                │
//! │  - Normalizes raw ids, statuses and query values            │
//! │  - SharedKanban: one mutex around the api for threaded hosts│
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - list, get, create, update, delete, batch                 │
//! │  - Validates before committing, returns snapshots           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - CardStore trait, InMemoryStore                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Callers Only See Snapshots
//!
//! The store owns every live [`model::Card`]. Each operation returns
//! [`model::CardSnapshot`] values, so nothing outside the store can change a card
//! without going through validation.
//!
//! ## Errors
//!
//! Two caller-facing failures, both in [`error::KanbanError`]:
//! - `Validation`: malformed input, always with a readable reason
//! - `CardNotFound`: the id names no card
//!
//! The batch update never fails per pair; invalid pairs are skipped.
//!
//! ## Logging
//!
//! The crate emits `log` records (ids and statuses only, never card text). Installing a
//! logger is up to the host.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`shared`]: Mutex-guarded handle for multi-threaded hosts
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and the in-memory implementation
//! - [`model`]: Core data types (`Card`, `CardStatus`, `CardSnapshot`, `CardUpdate`)
//! - [`config`]: Configuration loading
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod shared;
pub mod store;
