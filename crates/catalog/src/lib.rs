//! # Catalog Crate
//!
//! Data model and course catalog for the LearnMate recommendation engine.
//!
//! ## Main Components
//!
//! - **types**: `Level`, `DurationClass`, `TimeAvailability`, `Course`, `LearnerProfile`
//! - **index**: the ordered, read-only `Catalog`
//! - **builtin**: the built-in course fixture
//! - **parser**: JSON catalog files and course validation
//! - **error**: error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{Catalog, LearnerProfile, Level};
//! use std::path::Path;
//!
//! let catalog = Catalog::builtin();
//! // or: Catalog::load_from_file(Path::new("catalog.json"))?
//!
//! let react = catalog.get("react-101").unwrap();
//! println!("{} on {}", react.title, react.platform);
//! ```

pub mod builtin;
pub mod error;
pub mod index;
pub mod parser;
pub mod types;

pub use builtin::builtin_courses;
pub use error::{CatalogError, Result};
pub use index::Catalog;
pub use types::{Course, DurationClass, LearnerProfile, Level, TimeAvailability};
