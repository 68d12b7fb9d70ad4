//! Widget configuration
//!
//! `widget.toml` is compiled into the image and parsed once at boot.

use defmt::*;

use vitrine_core::config::{parse_config, WidgetConfig};

/// Embedded configuration; edit widget.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../../widget.toml");

/// Parse the embedded configuration, falling back to defaults
pub fn load() -> WidgetConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Parsed embedded configuration");
            config
        }
        Err(e) => {
            // build.rs validates the file, so this means the two disagree
            error!("Failed to parse embedded config: {}", e);
            error!("Using default configuration");
            WidgetConfig::default()
        }
    }
}
