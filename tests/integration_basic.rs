//! End-to-end tests for the public redaction API.
//!
//! These tests exercise the integration of:
//! - rule lookup by exact field name,
//! - policy application at the sink boundary, and
//! - fault transparency of the decorator.

use logveil::{
    CaptureSink, FailingSink, Field, FieldValue, Level, LogEntry, RedactingSink, RuleSet, Sink,
    TextRedactionPolicy, WriteError, policy::presets,
};

fn info(message: &str) -> LogEntry {
    LogEntry::new(Level::Info, message)
}

#[test]
fn test_default_phone_rule_masks_long_values() {
    let output = CaptureSink::new();
    let sink = RedactingSink::new(output.clone(), RuleSet::with_defaults());

    sink.write(info("sms sent"), vec![Field::new("phone", "13800138000")])
        .unwrap();

    let writes = output.writes();
    assert_eq!(writes[0].fields[0].value().as_str(), Some("138****8000"));
}

#[test]
fn test_default_phone_rule_degrades_for_short_values() {
    let output = CaptureSink::new();
    let sink = RedactingSink::new(output.clone(), RuleSet::with_defaults());

    sink.write(info("sms sent"), vec![Field::new("phone", "123")])
        .unwrap();

    // Fixed-length placeholder, no out-of-bounds slicing, no panic.
    let writes = output.writes();
    assert_eq!(writes[0].fields[0].value().as_str(), Some("*******"));
}

#[test]
fn test_phone_mask_keeps_first_three_and_last_four() {
    let rules = RuleSet::with_defaults();
    let policy = rules.policy_for("phone").unwrap();

    for value in ["13800138000", "+8613800138000", "5551234", "0123456789"] {
        let masked = policy.apply_to(value);
        let chars: Vec<char> = value.chars().collect();
        let head: String = chars[..3].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        assert_eq!(masked, format!("{head}****{tail}"), "input {value:?}");
    }
}

#[test]
fn test_unregistered_names_pass_through() {
    let output = CaptureSink::new();
    let sink = RedactingSink::new(output.clone(), RuleSet::with_defaults());

    sink.write(info("login"), vec![Field::new("email", "a@b.com")])
        .unwrap();

    let writes = output.writes();
    assert_eq!(writes[0].fields[0].value().as_str(), Some("a@b.com"));
}

#[test]
fn test_matched_name_with_non_string_value_passes_through() {
    let output = CaptureSink::new();
    let sink = RedactingSink::new(output.clone(), RuleSet::with_defaults());

    sink.write(
        info("odd but legal"),
        vec![
            Field::new("phone", 13_800_138_000_u64),
            Field::new("phone", true),
            Field::new("phone", 0.5_f64),
        ],
    )
    .unwrap();

    let writes = output.writes();
    assert_eq!(*writes[0].fields[0].value(), FieldValue::Uint(13_800_138_000));
    assert_eq!(*writes[0].fields[1].value(), FieldValue::Bool(true));
    assert_eq!(*writes[0].fields[2].value(), FieldValue::Float(0.5));
}

#[test]
fn test_field_order_and_count_are_stable() {
    let output = CaptureSink::new();
    let sink = RedactingSink::new(output.clone(), RuleSet::with_defaults());

    let names = ["a", "phone", "b", "phone", "c"];
    let fields: Vec<Field> = names
        .iter()
        .map(|name| Field::new(name.to_string(), "13800138000"))
        .collect();
    sink.write(info("ordered"), fields).unwrap();

    let writes = output.writes();
    assert_eq!(writes[0].fields.len(), names.len());
    for (field, name) in writes[0].fields.iter().zip(names) {
        assert_eq!(field.name(), name);
        let expected = if name == "phone" {
            "138****8000"
        } else {
            "13800138000"
        };
        assert_eq!(field.value().as_str(), Some(expected));
    }
}

#[test]
fn test_empty_field_sequence() {
    let output = CaptureSink::new();
    let sink = RedactingSink::new(output.clone(), RuleSet::with_defaults());

    sink.write(info("no fields"), Vec::new()).unwrap();

    assert!(output.writes()[0].fields.is_empty());
}

#[test]
fn test_entry_metadata_is_untouched() {
    let output = CaptureSink::new();
    let sink = RedactingSink::new(output.clone(), RuleSet::with_defaults());

    let entry = LogEntry::new(Level::Warn, "payload 13800138000 stays");
    let stamped = entry.timestamp();
    sink.write(entry, Vec::new()).unwrap();

    let writes = output.writes();
    // The message is never scanned; only fields are subject to rules.
    assert_eq!(writes[0].entry.message(), "payload 13800138000 stays");
    assert_eq!(writes[0].entry.level(), Level::Warn);
    assert_eq!(writes[0].entry.timestamp(), stamped);
}

#[test]
fn test_inner_error_propagates_verbatim() {
    let sink = RedactingSink::new(FailingSink::new("backend gone"), RuleSet::with_defaults());

    let error = sink
        .write(info("event"), vec![Field::new("phone", "13800138000")])
        .unwrap_err();

    assert!(matches!(error, WriteError::Sink(_)));
    assert_eq!(error.to_string(), "backend gone");
}

#[test]
fn test_caller_copy_of_the_original_is_not_affected() {
    let output = CaptureSink::new();
    let sink = RedactingSink::new(output.clone(), RuleSet::with_defaults());

    // The business value survives for non-log purposes (e.g. the actual send).
    let phone = String::from("13800138000");
    sink.write(info("sms sent"), vec![Field::new("phone", phone.clone())])
        .unwrap();

    assert_eq!(phone, "13800138000");
    assert_eq!(
        output.writes()[0].fields[0].value().as_str(),
        Some("138****8000")
    );
}

#[test]
fn test_custom_rules_extend_without_touching_the_write_path() {
    let output = CaptureSink::new();
    let rules = RuleSet::builder()
        .rule("phone", presets::phone())
        .rule("email", presets::email())
        .rule("card", presets::credit_card())
        .rule("ref_code", TextRedactionPolicy::custom(|v| format!("ref:{}", v.len())))
        .build();
    let sink = RedactingSink::new(output.clone(), rules);

    sink.write(
        info("checkout"),
        vec![
            Field::new("phone", "13800138000"),
            Field::new("email", "alice@example.com"),
            Field::new("card", "4111111111111111"),
            Field::new("ref_code", "abcde"),
            Field::new("order_id", "A-1009"),
        ],
    )
    .unwrap();

    let fields = &output.writes()[0].fields;
    assert_eq!(fields[0].value().as_str(), Some("138****8000"));
    assert_eq!(fields[1].value().as_str(), Some("al***@example.com"));
    assert_eq!(fields[2].value().as_str(), Some("************1111"));
    assert_eq!(fields[3].value().as_str(), Some("ref:5"));
    assert_eq!(fields[4].value().as_str(), Some("A-1009"));
}

#[test]
fn test_shared_inner_sink_through_arc() {
    use std::sync::Arc;

    let output = Arc::new(CaptureSink::new());
    let sink = RedactingSink::new(Arc::clone(&output), RuleSet::with_defaults());

    sink.write(info("shared"), vec![Field::new("phone", "13800138000")])
        .unwrap();

    assert_eq!(output.len(), 1);
}

#[test]
fn test_concurrent_writes_need_no_external_locking() {
    use std::{sync::Arc, thread};

    let output = CaptureSink::new();
    let sink = Arc::new(RedactingSink::new(output.clone(), RuleSet::with_defaults()));

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let sink = Arc::clone(&sink);
            thread::spawn(move || {
                for _ in 0..50 {
                    sink.write(
                        LogEntry::new(Level::Info, format!("worker {worker}")),
                        vec![Field::new("phone", "13800138000")],
                    )
                    .unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let writes = output.writes();
    assert_eq!(writes.len(), 8 * 50);
    assert!(
        writes
            .iter()
            .all(|write| write.fields[0].value().as_str() == Some("138****8000"))
    );
}
