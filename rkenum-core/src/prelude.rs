//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use rkenum_core::prelude::*;
//! ```

// Errors
pub use crate::error::{EnumError, EnumResult};

// Building and rendering
pub use crate::builder::EnumSpec;
pub use crate::model::{build, EnumModel, EnumValue};
pub use crate::render::render;

// Configuration
pub use crate::config::{load_config, RkenumConfig};
