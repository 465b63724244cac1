//! Nubayrah Player library
//!
//! Client controller for a Nubayrah e-book library server: uploads book
//! files, lists the catalogue, deletes entries and opens covers. The binary
//! in `src/main.rs` wires these modules into an iced application; the library
//! is exposed mainly so controller flows can be tested without a window.

pub mod app;
pub mod common;
pub mod domains;
pub mod infra;
pub mod state;
pub mod update;
pub mod view;
