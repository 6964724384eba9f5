// src/config/mod.rs

//! Configuration loading and validation for LIGYSIS.
//!
//! Responsibilities:
//! - Parse INI-like text into a raw section/key document (`ini.rs`).
//! - Expand `%(name)s` references when values are read (`interpolate.rs`).
//! - Define the validated, immutable data model (`model.rs`).
//! - Coerce and check required keys (`validate.rs`).
//! - Load a config file from disk (`loader.rs`).

pub mod ini;
pub mod interpolate;
pub mod loader;
pub mod model;
pub mod validate;

pub use ini::{DEFAULT_SECTION, IniDocument};
pub use loader::{default_config_path, load, load_from_str, load_raw};
pub use model::{ConfigDocument, OtherSection, PathsSection};
