//! Library update handlers

pub mod books_loaded;
pub mod refresh_library;

pub use books_loaded::*;
pub use refresh_library::*;
