//! # Citas Architecture
//!
//! Citas is a **UI-agnostic appointment-tracking library** with a CLI client.
//! At heart it is a form over a locally persisted list: one editable draft,
//! one ordered list of records, one JSON blob on disk.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, formats output, prompts for confirms   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Form Session (session.rs)                                  │
//! │  - The one editable draft, Closed → Creating/Editing        │
//! │  - Validates required fields, commits into the repository   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Patient Repository (repo.rs)                               │
//! │  - Authoritative ordered list, create/update/delete/find    │
//! │  - Persists the full list after every mutation              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract RecordStore trait, one JSON blob                │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `session.rs` inward, code takes regular Rust arguments, returns
//! regular Rust types, and never writes to stdout/stderr or exits. A missing
//! record is `None`, never an error; a failed save is logged via `tracing`
//! and the in-memory list stays authoritative.
//!
//! ## Module Overview
//!
//! - [`session`]: the form's draft-state machine
//! - [`repo`]: the in-memory list and its four mutations
//! - [`store`]: storage abstraction and implementations
//! - [`model`]: [`model::PatientRecord`] and id generation
//! - [`dates`]: date display formatting
//! - [`error`]: error types

pub mod dates;
pub mod error;
pub mod model;
pub mod repo;
pub mod session;
pub mod store;
