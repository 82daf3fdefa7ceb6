//! Property-based tests for leveled_logger using proptest

use leveled_logger::prelude::*;
use leveled_logger::validate;
use proptest::prelude::*;
use serde_json::{json, Value};
use std::sync::Arc;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Fatal),
    ]
}

fn build(min: LogLevel, stringify: bool) -> (Logger, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    let options = LoggerOptions {
        log_level: min,
        stringify_arguments: stringify,
        ..LoggerOptions::default()
    };
    (Logger::build(options, sink.clone()).unwrap(), sink)
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Test that LogLevel string conversions roundtrip correctly
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.as_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Test that LogLevel ordering agrees with the index
    #[test]
    fn test_log_level_ordering(a in any_level(), b in any_level()) {
        prop_assert_eq!(a <= b, a.index() <= b.index());
        prop_assert_eq!(a.passes(b), a.index() >= b.index());
    }
}

// ============================================================================
// Threshold Tests
// ============================================================================

proptest! {
    /// Levels below the minimum never reach the sink
    #[test]
    fn test_below_threshold_writes_nothing(
        min in any_level(),
        level in any_level(),
        text in ".*",
        number in any::<i64>(),
    ) {
        prop_assume!(level < min);
        let (logger, sink) = build(min, true);

        let mut unserializable = std::collections::BTreeMap::new();
        unserializable.insert((number, number), text.clone());

        prop_assert!(logger.log(level, &[&text, &number, &unserializable]).is_ok());
        prop_assert!(sink.is_empty());
    }

    /// Levels at or above the minimum write exactly once, carrying the value
    #[test]
    fn test_at_or_above_threshold_writes_once(
        min in any_level(),
        level in any_level(),
        text in "[a-z ]{0,24}",
        stringify in any::<bool>(),
    ) {
        prop_assume!(level >= min);
        let (logger, sink) = build(min, stringify);

        logger.log(level, &[&text]).unwrap();

        let records = sink.records();
        prop_assert_eq!(records.len(), 1);
        let expected = if stringify {
            serde_json::to_string(&text).unwrap()
        } else {
            text.clone()
        };
        prop_assert_eq!(&records[0].args, &vec![expected]);
        prop_assert_eq!(records[0].level, Some(level));
    }

    /// Two loggers built from the same options write the same records
    #[test]
    fn test_identical_builds_are_idempotent(
        min in any_level(),
        calls in proptest::collection::vec((any_level(), "[a-z]{1,8}"), 0..16),
        show_level in any::<bool>(),
    ) {
        let options = LoggerOptions {
            log_level: min,
            show_log_level: show_level,
            ..LoggerOptions::default()
        };
        let first_sink = Arc::new(MemorySink::new());
        let second_sink = Arc::new(MemorySink::new());
        let first = Logger::build(options.clone(), first_sink.clone()).unwrap();
        let second = Logger::build(options, second_sink.clone()).unwrap();

        for (level, text) in &calls {
            first.log(*level, &[text]).unwrap();
            second.log(*level, &[text]).unwrap();
        }

        prop_assert_eq!(first_sink.records(), second_sink.records());
        let expected = calls.iter().filter(|(level, _)| *level >= min).count();
        prop_assert_eq!(first_sink.len(), expected);
    }
}

// ============================================================================
// Validation Tests
// ============================================================================

proptest! {
    /// Any string outside the five names is rejected as a level
    #[test]
    fn test_unknown_level_names_rejected(name in "[a-zA-Z]{1,10}") {
        let known = LogLevel::ALL.iter().any(|level| level.as_str() == name);
        prop_assert_eq!(validate(&json!({ "logLevel": name })), known);
    }

    /// Non-boolean values for boolean flags are rejected
    #[test]
    fn test_flags_must_be_boolean(
        key in prop_oneof![
            Just("stringifyArguments"),
            Just("showLogLevel"),
            Just("showMethodName"),
            Just("showConsoleColors"),
        ],
        value in prop_oneof![
            any::<i64>().prop_map(Value::from),
            "[a-z]{0,5}".prop_map(Value::from),
            Just(json!([true])),
        ],
        flag in any::<bool>(),
    ) {
        let mut config = json!({ "logLevel": "info" });
        config[key] = value;
        prop_assert!(!validate(&config));

        config[key] = Value::Bool(flag);
        prop_assert!(validate(&config));
    }

    /// Separators are accepted up to three characters
    #[test]
    fn test_separator_length(separator in "\\PC{0,6}") {
        let config = json!({ "logLevel": "debug", "separator": separator.clone() });
        prop_assert_eq!(validate(&config), separator.chars().count() <= 3);
    }
}
