//! rkenum-core: enum source generation library
//!
//! Turns a package name, an enum type name, an ordered list of value names and
//! optional `alias=value` pairs into a complete Go source file declaring a
//! typed integer enum with parsing and string helpers.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use rkenum_core::prelude::*;
//!
//! let source = EnumSpec::new("colors", "Color")
//!     .values(["red", "green", "blue"])
//!     .alias("r=red")
//!     .generate()?;
//! print!("{}", source);
//! ```
//!
//! # Module Organization
//!
//! - [`normalize`]: Value token to identifier conversion, helper visibility
//! - [`model`]: Input validation and the immutable [`EnumModel`]
//! - [`render`]: Deterministic source rendering
//! - [`writer`]: First-error-wins write sink used by the renderer
//! - [`builder`]: Fluent builder API
//! - [`config`]: rkenum.toml loading
//! - [`logging`]: tracing subscriber setup
//! - [`error`]: Typed error handling

pub mod builder;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod normalize;
pub mod prelude;
pub mod render;
pub mod writer;

// Error types
pub use error::{EnumError, EnumResult};

// Builder API
pub use builder::EnumSpec;

// Configuration
pub use config::{
    default_config_path, load_config, load_config_file, DefaultsConfig, LoadedConfig, LogConfig,
    RkenumConfig,
};

// Logging
pub use logging::{init_logging, init_logging_from_config, LogFormat};

// Model building
pub use model::{build, parse_aliases, AliasEntry, EnumModel, EnumValue};

// Name normalization
pub use normalize::{go_lowercase, split_values, to_identifier, Visibility};

// Rendering
pub use render::{render, render_into, GENERATED_HEADER};
pub use writer::SourceWriter;
