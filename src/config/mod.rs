//! Configuration module.

pub mod loader;

pub use loader::{
    apply_query_overrides, load_bundled_config, merge_config, parse_config, resolve, ConfigFile,
    ResolvedConfig,
};
