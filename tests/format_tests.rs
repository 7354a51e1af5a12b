use json2text::{escape, serialize, serialize_with_config, tree, SerializeConfig};

#[test]
fn test_strings_are_quoted_and_escaped() {
    let data = tree!({
        "plain": "hello world",
        "quoted": "say \"hi\"",
        "multiline": "line1\nline2",
        "tabbed": "a\tb"
    });

    let text = serialize(&data).unwrap();
    println!("Escaping test:\n{}", text);

    assert!(text.contains("plain \"hello world\""));
    assert!(text.contains("quoted \"say \\\"hi\\\"\""));
    assert!(text.contains("multiline \"line1\\nline2\""));
    assert!(text.contains("tabbed \"a\\tb\""));
}

#[test]
fn test_control_characters_stay_single_line() {
    let data = tree!({"ctl": "bell\u{07}escape\u{1b}del\u{7f}"});
    let text = serialize(&data).unwrap();

    assert_eq!(text, "ctl \"bell\\x07escape\\x1bdel\\x7f\"");
    assert_eq!(text.lines().count(), 1);
}

#[test]
fn test_unicode_passes_through() {
    let data = tree!({"greeting": "naïve 日本語 👍"});
    assert_eq!(serialize(&data).unwrap(), "greeting \"naïve 日本語 👍\"");
}

#[test]
fn test_escape_function_named_sequences() {
    assert_eq!(escape("a\\b"), "a\\\\b");
    assert_eq!(escape("a\"b"), "a\\\"b");
    assert_eq!(escape("a\nb\rc\td"), "a\\nb\\rc\\td");
    assert_eq!(escape("\u{0008}\u{000C}\u{000B}\0"), "\\b\\f\\v\\0");
}

#[test]
fn test_number_formats() {
    let data = tree!({
        "int": 42,
        "neg": (-7),
        "float": 3.5,
        "whole": 10.0,
        "tiny": 0.125
    });

    let text = serialize(&data).unwrap();
    println!("Number test:\n{}", text);

    assert!(text.contains("int 42"));
    assert!(text.contains("neg -7"));
    assert!(text.contains("float 3.5"));
    // Whole floats render without a trailing ".0".
    assert!(text.contains("whole 10"));
    assert!(text.contains("tiny 0.125"));
}

#[test]
fn test_float_round_trip_precision() {
    let data = tree!({"v": 0.1});
    assert_eq!(serialize(&data).unwrap(), "v 0.1");

    let data = tree!({"v": 1e300});
    let text = serialize(&data).unwrap();
    let rendered = text.strip_prefix("v ").unwrap();
    assert_eq!(rendered.parse::<f64>().unwrap(), 1e300);
}

#[test]
fn test_budget_exact_length_across_sizes() {
    let items: Vec<json2text::JsonValue> = (0..200).map(json2text::JsonValue::from).collect();
    let data = json2text::JsonValue::from(items);

    for max in [40, 64, 100, 250, 500] {
        let config = SerializeConfig::new().with_max_chars(max);
        let text = serialize_with_config(&data, &config).unwrap();
        assert_eq!(text.chars().count(), max, "budget {} not exact", max);
        assert!(text.ends_with(&format!("[Output truncated at {} chars]", max)));
    }
}

#[test]
fn test_budget_never_splits_suffix() {
    let data = tree!({"text": ("word ".repeat(100))});
    let config = SerializeConfig::new().with_max_chars(80);
    let text = serialize_with_config(&data, &config).unwrap();

    // The suffix must appear whole, exactly once, at the very end.
    let suffix = "\n[Output truncated at 80 chars]";
    assert!(text.ends_with(suffix));
    assert_eq!(text.matches("[Output truncated").count(), 1);
}

#[test]
fn test_budget_with_multibyte_output() {
    let items: Vec<json2text::JsonValue> = (0..100)
        .map(|_| json2text::JsonValue::from("日本語テキスト"))
        .collect();
    let data = json2text::JsonValue::from(items);

    let config = SerializeConfig::new().with_max_chars(120);
    let text = serialize_with_config(&data, &config).unwrap();
    assert_eq!(text.chars().count(), 120);
}

#[test]
fn test_string_cap_composes_with_escaping() {
    // The cap applies to raw characters; escapes may expand afterwards.
    let data = tree!({"s": "ab\ncdefgh"});
    let config = SerializeConfig::new().with_max_string_length(4);
    assert_eq!(
        serialize_with_config(&data, &config).unwrap(),
        "s \"ab\\nc… [truncated]\""
    );
}

#[test]
fn test_string_under_cap_untouched() {
    let data = tree!({"s": "short"});
    let config = SerializeConfig::new().with_max_string_length(10);
    assert_eq!(
        serialize_with_config(&data, &config).unwrap(),
        "s \"short\""
    );
}

#[test]
fn test_no_trailing_newline() {
    let data = tree!({"a": {"b": 1}});
    let text = serialize(&data).unwrap();
    assert!(!text.ends_with('\n'));
}
