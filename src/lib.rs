//! Library crate for usercards.
//!
//! This crate exposes the building blocks of the TUI:
//! - Remote users API client and background loader (`api`)
//! - Application state and update loop (`app`)
//! - Error and result types (`error`)
//! - Client-side filtering (`search`)
//! - The current user set (`store`)
//! - Pure card descriptions (`view`) and their ratatui rendering (`ui`)
//!
//! It is used by the `usercards` binary and by tests.
#![doc = include_str!("../README.md")]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod api;
pub mod app;
pub mod error;
pub mod search;
pub mod store;
pub mod ui;
pub mod view;

/// Convenient error and result types shared across the crate.
pub use error::{DynError, LoadError, Result};
