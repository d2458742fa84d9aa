//! Client-side session and entity synchronization engine for an API-backed
//! project task tracker, plus the `tb` CLI that renders it.
//!
//! Data flows one direction: the session manager gates access, the
//! workspace store loads entities, the task lifecycle engine mutates them
//! through the store's entry points, and view derivation recomputes
//! presentation from snapshots.

pub mod api;
pub mod cli;
pub mod model;
pub mod ops;
pub mod store;
pub mod view;
