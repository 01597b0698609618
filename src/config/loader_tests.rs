//! Tests for configuration loading.

use super::*;

#[test]
fn bundled_config_parses() {
    let result = load_bundled_config();
    assert!(result.is_ok(), "site.toml must always parse: {:?}", result);
}

#[test]
fn bundled_config_matches_defaults() {
    let resolved = merge_config(Some(load_bundled_config().unwrap()));
    assert_eq!(
        resolved,
        ResolvedConfig::default(),
        "site.toml documents the defaults and should agree with them"
    );
}

#[test]
fn empty_source_is_all_none() {
    let config = parse_config("empty.toml", "").unwrap();
    assert_eq!(config, ConfigFile::default());
}

#[test]
fn parse_reads_nested_sections() {
    let toml_content = r#"
log_level = "debug"

[reveal]
threshold = 0.25

[carousel]
drag_threshold_px = 80
transition_ms = 300
"#;

    let config = parse_config("test.toml", toml_content).unwrap();

    assert_eq!(config.log_level.as_deref(), Some("debug"));
    assert_eq!(
        config.reveal,
        Some(RevealSection {
            threshold: Some(0.25),
            bottom_margin_px: None,
        })
    );
    let carousel = config.carousel.unwrap();
    assert_eq!(carousel.drag_threshold_px, Some(80.0));
    assert_eq!(carousel.transition_ms, Some(300));
    assert_eq!(carousel.compact_breakpoint_px, None);
    assert!(config.counters.is_none());
}

#[test]
fn parse_rejects_invalid_toml() {
    let result = parse_config("broken.toml", "log_level = ");
    match result {
        Err(ConfigError::Parse { source_name, .. }) => assert_eq!(source_name, "broken.toml"),
        other => panic!("Expected ParseError, got: {:?}", other),
    }
}

#[test]
fn parse_rejects_unknown_keys() {
    let result = parse_config("typo.toml", "[reveal]\nthreshhold = 0.2\n");
    assert!(
        matches!(result, Err(ConfigError::Parse { .. })),
        "Unknown keys should be rejected, got: {:?}",
        result
    );
}

#[test]
fn parse_rejects_threshold_out_of_range() {
    let result = parse_config("range.toml", "[tools]\nthreshold = 1.5\n");
    assert_eq!(
        result,
        Err(ConfigError::InvalidValue {
            key: "tools.threshold".to_string(),
            reason: "must be within 0.0..=1.0".to_string(),
        })
    );
}

#[test]
fn parse_rejects_negative_durations() {
    let result = parse_config("neg.toml", "[counters]\nduration_ms = -1\n");
    assert!(matches!(
        result,
        Err(ConfigError::InvalidValue { ref key, .. }) if key == "counters.duration_ms"
    ));
}

#[test]
fn parse_rejects_blank_log_level() {
    let result = parse_config("blank.toml", "log_level = \"  \"\n");
    assert!(matches!(
        result,
        Err(ConfigError::InvalidValue { ref key, .. }) if key == "log_level"
    ));
}

#[test]
fn merge_without_file_uses_defaults() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn merge_overrides_only_present_fields() {
    let config_file = ConfigFile {
        tools: Some(ToolsSection {
            start_delay_ms: Some(0.0),
            ..ToolsSection::default()
        }),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(config_file));
    let defaults = ResolvedConfig::default();

    assert_eq!(resolved.tools_start_delay_ms, 0.0);
    assert_eq!(resolved.tools_duration_ms, defaults.tools_duration_ms);
    assert_eq!(resolved.tools_threshold, defaults.tools_threshold);
    assert_eq!(resolved.reveal, defaults.reveal);
}

#[test]
fn query_override_sets_log_level() {
    let config = apply_query_overrides(ResolvedConfig::default(), "?log=debug");
    assert_eq!(config.log_level, "debug");
}

#[test]
fn query_override_accepts_missing_question_mark_and_other_params() {
    let config = apply_query_overrides(ResolvedConfig::default(), "utm=x&log=trace&ref=y");
    assert_eq!(config.log_level, "trace");
}

#[test]
fn query_override_ignores_empty_and_unrelated_values() {
    for search in ["", "?", "?log=", "?log", "?level=debug"] {
        let config = apply_query_overrides(ResolvedConfig::default(), search);
        assert_eq!(config.log_level, "info", "search {:?}", search);
    }
}

#[test]
fn resolve_applies_full_chain() {
    let config = resolve("?log=warn").unwrap();
    assert_eq!(config.log_level, "warn");
    assert_eq!(config.drag_threshold_px, 50.0);
}

#[test]
fn section_visibility_has_no_margin() {
    let config = ResolvedConfig::default();
    assert_eq!(config.counter_visibility().bottom_margin_px, 0);
    assert_eq!(config.tools_visibility().threshold, 0.3);
}
