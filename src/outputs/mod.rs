//! Output generation for the persisted catalog.
//!
//! One submodule today:
//!
//! - [`json`]: writes the deduplicated catalog to its published JSON path

pub mod json;
