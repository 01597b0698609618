//! Configuration loading with precedence handling.
//!
//! Precedence (lowest to highest):
//! 1. Hard-coded defaults ([`ResolvedConfig::default`])
//! 2. The bundled `site.toml`, compiled into the binary
//! 3. URL query overrides (`?log=debug`)

use crate::model::error::ConfigError;
use crate::state::reveal::VisibilityOptions;
use serde::Deserialize;

/// Contents of the bundled `site.toml`.
pub const BUNDLED_CONFIG: &str = include_str!("../../site.toml");

/// Name reported in parse errors for the bundled file.
const BUNDLED_SOURCE_NAME: &str = "site.toml";

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Tracing filter directive (e.g. "info", "vaum_site=debug").
    #[serde(default)]
    pub log_level: Option<String>,

    /// Section reveal observer.
    #[serde(default)]
    pub reveal: Option<RevealSection>,

    /// About-section count-up statistics.
    #[serde(default)]
    pub counters: Option<CounterSection>,

    /// Favourite-tools percentages.
    #[serde(default)]
    pub tools: Option<ToolsSection>,

    /// Testimonial carousel.
    #[serde(default)]
    pub carousel: Option<CarouselSection>,
}

/// `[reveal]` table.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RevealSection {
    /// Fraction of a section that must be visible.
    pub threshold: Option<f64>,
    /// Trigger line distance above the viewport bottom.
    pub bottom_margin_px: Option<u32>,
}

/// `[counters]` table.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CounterSection {
    /// Fraction of the about section that must be visible.
    pub threshold: Option<f64>,
    /// Count-up duration.
    pub duration_ms: Option<f64>,
}

/// `[tools]` table.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ToolsSection {
    /// Fraction of the tools section that must be visible.
    pub threshold: Option<f64>,
    /// Wait between first sight and the start of the run.
    pub start_delay_ms: Option<f64>,
    /// Percentage run duration.
    pub duration_ms: Option<f64>,
}

/// `[carousel]` table.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CarouselSection {
    /// Minimum horizontal travel for a drag to navigate.
    pub drag_threshold_px: Option<f64>,
    /// Track slide duration.
    pub transition_ms: Option<u32>,
    /// Widest viewport that uses the compact layout.
    pub compact_breakpoint_px: Option<f64>,
}

/// Resolved configuration after applying precedence rules.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Tracing filter directive.
    pub log_level: String,
    /// Observer settings for `scroll-animate` sections.
    pub reveal: VisibilityOptions,
    /// Visibility threshold of the about section.
    pub counter_threshold: f64,
    /// Count-up duration.
    pub counter_duration_ms: f64,
    /// Visibility threshold of the tools section.
    pub tools_threshold: f64,
    /// Pause between the tools section appearing and the percentages starting.
    pub tools_start_delay_ms: f64,
    /// Percentage run duration.
    pub tools_duration_ms: f64,
    /// Minimum drag distance that navigates the carousel.
    pub drag_threshold_px: f64,
    /// Snap animation duration when not dragging.
    pub carousel_transition_ms: u32,
    /// Viewports at or below this width use the compact track layout.
    pub compact_breakpoint_px: f64,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            reveal: VisibilityOptions {
                threshold: 0.1,
                bottom_margin_px: 50,
            },
            counter_threshold: 0.3,
            counter_duration_ms: 1200.0,
            tools_threshold: 0.3,
            tools_start_delay_ms: 300.0,
            tools_duration_ms: 2000.0,
            drag_threshold_px: 50.0,
            carousel_transition_ms: 500,
            compact_breakpoint_px: 480.0,
        }
    }
}

impl ResolvedConfig {
    /// Observer settings for the about section (counters and badges).
    pub fn counter_visibility(&self) -> VisibilityOptions {
        VisibilityOptions {
            threshold: self.counter_threshold,
            bottom_margin_px: 0,
        }
    }

    /// Observer settings for the tools section.
    pub fn tools_visibility(&self) -> VisibilityOptions {
        VisibilityOptions {
            threshold: self.tools_threshold,
            bottom_margin_px: 0,
        }
    }
}

/// Parse a TOML config source.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] on invalid TOML or unknown keys, and
/// [`ConfigError::InvalidValue`] when a value is out of range.
pub fn parse_config(source_name: &str, contents: &str) -> Result<ConfigFile, ConfigError> {
    let config: ConfigFile = toml::from_str(contents).map_err(|e| ConfigError::Parse {
        source_name: source_name.to_string(),
        reason: e.to_string(),
    })?;
    validate(&config)?;
    Ok(config)
}

/// Parse the bundled `site.toml`.
pub fn load_bundled_config() -> Result<ConfigFile, ConfigError> {
    parse_config(BUNDLED_SOURCE_NAME, BUNDLED_CONFIG)
}

fn validate(config: &ConfigFile) -> Result<(), ConfigError> {
    let thresholds = [
        ("reveal.threshold", config.reveal.as_ref().and_then(|s| s.threshold)),
        ("counters.threshold", config.counters.as_ref().and_then(|s| s.threshold)),
        ("tools.threshold", config.tools.as_ref().and_then(|s| s.threshold)),
    ];
    for (key, value) in thresholds {
        if let Some(value) = value {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(key, "must be within 0.0..=1.0"));
            }
        }
    }

    let durations = [
        ("counters.duration_ms", config.counters.as_ref().and_then(|s| s.duration_ms)),
        ("tools.start_delay_ms", config.tools.as_ref().and_then(|s| s.start_delay_ms)),
        ("tools.duration_ms", config.tools.as_ref().and_then(|s| s.duration_ms)),
        (
            "carousel.drag_threshold_px",
            config.carousel.as_ref().and_then(|s| s.drag_threshold_px),
        ),
        (
            "carousel.compact_breakpoint_px",
            config.carousel.as_ref().and_then(|s| s.compact_breakpoint_px),
        ),
    ];
    for (key, value) in durations {
        if let Some(value) = value {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(key, "must be a finite, non-negative number"));
            }
        }
    }

    if let Some(level) = &config.log_level {
        if level.trim().is_empty() {
            return Err(invalid("log_level", "must not be empty"));
        }
    }

    Ok(())
}

fn invalid(key: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    let reveal = config.reveal.unwrap_or_default();
    let counters = config.counters.unwrap_or_default();
    let tools = config.tools.unwrap_or_default();
    let carousel = config.carousel.unwrap_or_default();

    ResolvedConfig {
        log_level: config.log_level.unwrap_or(defaults.log_level),
        reveal: VisibilityOptions {
            threshold: reveal.threshold.unwrap_or(defaults.reveal.threshold),
            bottom_margin_px: reveal
                .bottom_margin_px
                .unwrap_or(defaults.reveal.bottom_margin_px),
        },
        counter_threshold: counters.threshold.unwrap_or(defaults.counter_threshold),
        counter_duration_ms: counters
            .duration_ms
            .unwrap_or(defaults.counter_duration_ms),
        tools_threshold: tools.threshold.unwrap_or(defaults.tools_threshold),
        tools_start_delay_ms: tools
            .start_delay_ms
            .unwrap_or(defaults.tools_start_delay_ms),
        tools_duration_ms: tools.duration_ms.unwrap_or(defaults.tools_duration_ms),
        drag_threshold_px: carousel
            .drag_threshold_px
            .unwrap_or(defaults.drag_threshold_px),
        carousel_transition_ms: carousel
            .transition_ms
            .unwrap_or(defaults.carousel_transition_ms),
        compact_breakpoint_px: carousel
            .compact_breakpoint_px
            .unwrap_or(defaults.compact_breakpoint_px),
    }
}

/// Apply URL query overrides to resolved config.
///
/// Recognises:
/// - `log=<filter>`: Override the tracing filter
///
/// `search` is `location.search`, with or without the leading `?`. Unknown
/// parameters and empty values are ignored.
pub fn apply_query_overrides(mut config: ResolvedConfig, search: &str) -> ResolvedConfig {
    let query = search.strip_prefix('?').unwrap_or(search);
    for pair in query.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if key == "log" && !value.is_empty() {
            config.log_level = value.to_string();
        }
    }
    config
}

/// Resolve configuration from the bundled file and the page query string.
///
/// # Errors
///
/// Returns error only if the bundled file is invalid.
pub fn resolve(search: &str) -> Result<ResolvedConfig, ConfigError> {
    let file = load_bundled_config()?;
    Ok(apply_query_overrides(merge_config(Some(file)), search))
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
