use json2text::{
    serialize, serialize_with_config, to_string, tree, ArrayFormat, Error, JsonMap, JsonValue,
    Number, SerializeConfig, SortKeys,
};

#[test]
fn test_flat_object_sorted_ascending() {
    let data = tree!({"name": "Alice", "age": 30});
    assert_eq!(serialize(&data).unwrap(), "age 30\nname \"Alice\"");
}

#[test]
fn test_scalar_array_renders_brackets() {
    let data = tree!([1, 2, 3]);
    assert_eq!(serialize(&data).unwrap(), "[1, 2, 3]");
}

#[test]
fn test_object_array_renders_block() {
    let data = tree!([{"a": 1}, {"b": 2}]);
    assert_eq!(serialize(&data).unwrap(), "[\n  a 1\n  b 2\n]");
}

#[test]
fn test_nested_object_block() {
    let data = tree!({
        "user": {
            "name": "Alice",
            "age": 30
        },
        "ok": true
    });
    assert_eq!(
        serialize(&data).unwrap(),
        "ok true\nuser\n  age 30\n  name \"Alice\""
    );
}

#[test]
fn test_scalar_array_value_inlines_on_key_line() {
    let data = tree!({"tags": ["rust", "llm"]});
    assert_eq!(serialize(&data).unwrap(), "tags [\"rust\", \"llm\"]");
}

#[test]
fn test_container_array_value_gets_own_block() {
    let data = tree!({"items": [{"a": 1}]});
    assert_eq!(serialize(&data).unwrap(), "items\n  [\n    a 1\n  ]");
}

#[test]
fn test_sort_keys_modes() {
    let data = tree!({"b": 2, "c": 3, "a": 1});

    let asc = SerializeConfig::new().with_sort_keys(SortKeys::Asc);
    assert_eq!(serialize_with_config(&data, &asc).unwrap(), "a 1\nb 2\nc 3");

    let desc = SerializeConfig::new().with_sort_keys(SortKeys::Desc);
    assert_eq!(serialize_with_config(&data, &desc).unwrap(), "c 3\nb 2\na 1");

    let none = SerializeConfig::new().with_sort_keys(SortKeys::None);
    assert_eq!(serialize_with_config(&data, &none).unwrap(), "b 2\nc 3\na 1");
}

#[test]
fn test_ignore_falsy_drops_null_entries() {
    let data = tree!({"a": null, "b": 1, "c": null});
    assert_eq!(serialize(&data).unwrap(), "b 1");

    let keep = SerializeConfig::new().with_ignore_falsy(false);
    assert_eq!(
        serialize_with_config(&data, &keep).unwrap(),
        "a null\nb 1\nc null"
    );
}

#[test]
fn test_ignore_falsy_drops_null_items() {
    let data = tree!([1, null, 2, null]);
    assert_eq!(serialize(&data).unwrap(), "[1, 2]");

    let keep = SerializeConfig::new().with_ignore_falsy(false);
    assert_eq!(serialize_with_config(&data, &keep).unwrap(), "[1, null, 2, null]");
}

#[test]
fn test_empty_containers() {
    assert_eq!(serialize(&tree!([])).unwrap(), "EmptyArray");
    assert_eq!(serialize(&tree!({})).unwrap(), "EmptyObject");

    // Markers inline on the key line regardless of nesting.
    let data = tree!({"list": [], "obj": {}});
    assert_eq!(
        serialize(&data).unwrap(),
        "list EmptyArray\nobj EmptyObject"
    );
}

#[test]
fn test_all_null_array_is_empty_after_filtering() {
    let data = tree!([null, null]);
    assert_eq!(serialize(&data).unwrap(), "EmptyArray");
}

#[test]
fn test_max_array_items_keeps_prefix_and_counts_rest() {
    let data = tree!([1, 2, 3, 4, 5, 6]);
    let config = SerializeConfig::new().with_max_array_items(3);
    assert_eq!(
        serialize_with_config(&data, &config).unwrap(),
        "[1, 2, 3, ... [3 more items]]"
    );
}

#[test]
fn test_max_array_items_counts_filtered_length() {
    // Nulls are dropped before the cap applies.
    let data = tree!([1, null, 2, 3, null, 4]);
    let config = SerializeConfig::new().with_max_array_items(2);
    assert_eq!(
        serialize_with_config(&data, &config).unwrap(),
        "[1, 2, ... [2 more items]]"
    );
}

#[test]
fn test_max_array_items_in_block_layout() {
    let data = tree!([{"a": 1}, {"b": 2}, {"c": 3}]);
    let config = SerializeConfig::new().with_max_array_items(2);
    assert_eq!(
        serialize_with_config(&data, &config).unwrap(),
        "[\n  a 1\n  b 2\n  ... [1 more items]\n]"
    );
}

#[test]
fn test_max_string_length_truncates_with_marker() {
    let data = tree!({"text": "abcdefghij"});
    let config = SerializeConfig::new().with_max_string_length(5);
    assert_eq!(
        serialize_with_config(&data, &config).unwrap(),
        "text \"abcde… [truncated]\""
    );
}

#[test]
fn test_max_string_length_respects_char_boundaries() {
    let data = tree!({"text": "日本語のテキスト"});
    let config = SerializeConfig::new().with_max_string_length(3);
    assert_eq!(
        serialize_with_config(&data, &config).unwrap(),
        "text \"日本語… [truncated]\""
    );
}

#[test]
fn test_max_depth_marks_deep_containers() {
    let data = tree!({"a": {"b": {"c": {"d": 1}}}});
    let config = SerializeConfig::new().with_max_depth(2);
    assert_eq!(
        serialize_with_config(&data, &config).unwrap(),
        "a\n  b\n    c [Max depth reached]"
    );
}

#[test]
fn test_max_depth_leaves_scalars_alone() {
    // A scalar at the limit still renders its value; only expansion stops.
    let data = tree!({"a": {"b": {"c": 5}}});
    let config = SerializeConfig::new().with_max_depth(2);
    assert_eq!(
        serialize_with_config(&data, &config).unwrap(),
        "a\n  b\n    c 5"
    );
}

#[test]
fn test_self_referencing_object_renders_single_marker() {
    let mut map = JsonMap::new();
    map.insert("name".to_string(), JsonValue::from("root"));
    map.insert("self".to_string(), JsonValue::Object(map.clone()));
    let data = JsonValue::Object(map);

    let text = serialize(&data).unwrap();
    assert_eq!(text, "name \"root\"\nself [Circular reference]");
    assert_eq!(text.matches("[Circular reference]").count(), 1);
}

#[test]
fn test_self_referencing_list_renders_marker() {
    let list = json2text::JsonList::new();
    list.with_mut(|v| {
        v.push(JsonValue::from(1));
        v.push(JsonValue::Array(list.clone()));
    });
    let data = JsonValue::Array(list);

    let text = serialize(&data).unwrap();
    assert_eq!(text, "[1, [Circular reference]]");
}

#[test]
fn test_two_level_cycle_recovers_locally() {
    // parent -> child -> parent
    let mut parent = JsonMap::new();
    let mut child = JsonMap::new();
    child.insert("up".to_string(), JsonValue::Object(parent.clone()));
    child.insert("tag".to_string(), JsonValue::from("child"));
    parent.insert("down".to_string(), JsonValue::Object(child));
    parent.insert("tag".to_string(), JsonValue::from("parent"));
    let data = JsonValue::Object(parent);

    let text = serialize(&data).unwrap();
    assert_eq!(
        text,
        "down\n  tag \"child\"\n  up [Circular reference]\ntag \"parent\""
    );
}

#[test]
fn test_sibling_aliasing_is_not_a_cycle() {
    let mut shared = JsonMap::new();
    shared.insert("x".to_string(), JsonValue::from(1));

    let mut root = JsonMap::new();
    root.insert("first".to_string(), JsonValue::Object(shared.clone()));
    root.insert("second".to_string(), JsonValue::Object(shared));
    let data = JsonValue::Object(root);

    let text = serialize(&data).unwrap();
    assert_eq!(text, "first\n  x 1\nsecond\n  x 1");
    assert!(!text.contains("[Circular reference]"));
}

#[test]
fn test_aliased_list_in_array_is_not_a_cycle() {
    let shared = tree!([1, 2]);
    let list = json2text::JsonList::new();
    list.with_mut(|v| {
        v.push(shared.clone());
        v.push(shared);
    });
    let data = JsonValue::Array(list);

    // Nested arrays are containers, so the outer array takes block layout;
    // both aliased renderings are complete.
    assert_eq!(serialize(&data).unwrap(), "[\n  [1, 2]\n  [1, 2]\n]");
}

#[test]
fn test_forced_brackets_compacts_containers() {
    let data = tree!([{"a": 1, "b": 2}, [3, 4]]);
    let config = SerializeConfig::new().with_array_format(ArrayFormat::Brackets);
    assert_eq!(
        serialize_with_config(&data, &config).unwrap(),
        "[{a 1, b 2}, [3, 4]]"
    );
}

#[test]
fn test_forced_indented_blocks_scalars() {
    let data = tree!([1, 2]);
    let config = SerializeConfig::new().with_array_format(ArrayFormat::Indented);
    assert_eq!(serialize_with_config(&data, &config).unwrap(), "[\n  1\n  2\n]");
}

#[test]
fn test_mixed_scalar_array_stays_inline() {
    let data = tree!([1, "two", true]);
    assert_eq!(serialize(&data).unwrap(), "[1, \"two\", true]");
}

#[test]
fn test_special_numbers_render_by_name() {
    let mut map = JsonMap::new();
    map.insert("nan".to_string(), JsonValue::Number(Number::NaN));
    map.insert("inf".to_string(), JsonValue::Number(Number::Infinity));
    map.insert(
        "ninf".to_string(),
        JsonValue::Number(Number::NegativeInfinity),
    );
    map.insert("nzero".to_string(), JsonValue::Number(Number::Float(-0.0)));
    let data = JsonValue::Object(map);

    assert_eq!(
        serialize(&data).unwrap(),
        "inf Infinity\nnan NaN\nninf -Infinity\nnzero -0"
    );
}

#[test]
fn test_max_chars_output_is_exact() {
    let items: Vec<JsonValue> = (0..500).map(JsonValue::from).collect();
    let data = JsonValue::from(items);

    let config = SerializeConfig::new().with_max_chars(100);
    let text = serialize_with_config(&data, &config).unwrap();
    assert_eq!(text.chars().count(), 100);
    assert!(text.ends_with("[Output truncated at 100 chars]"));
}

#[test]
fn test_max_chars_leaves_small_output_alone() {
    let data = tree!({"a": 1});
    let config = SerializeConfig::new().with_max_chars(1000);
    assert_eq!(serialize_with_config(&data, &config).unwrap(), "a 1");
}

#[test]
fn test_max_nodes_bounds_wide_input() {
    let items: Vec<JsonValue> = (0..1000).map(JsonValue::from).collect();
    let data = JsonValue::from(items);

    let config = SerializeConfig::new().with_max_nodes(10);
    let text = serialize_with_config(&data, &config).unwrap();
    assert!(text.contains("[Node limit reached]"));
}

#[test]
fn test_scalar_roots_rejected() {
    for root in [
        JsonValue::Null,
        JsonValue::from(true),
        JsonValue::from(42),
        JsonValue::from("text"),
    ] {
        assert!(matches!(
            serialize(&root),
            Err(Error::InvalidInput { .. })
        ));
    }
}

#[test]
fn test_malformed_config_rejected_before_traversal() {
    let data = tree!({"a": 1});

    let zero_indent = SerializeConfig::new().with_indent(0);
    assert!(matches!(
        serialize_with_config(&data, &zero_indent),
        Err(Error::MalformedConfig { .. })
    ));

    let tiny_budget = SerializeConfig::new().with_max_chars(3);
    assert!(matches!(
        serialize_with_config(&data, &tiny_budget),
        Err(Error::MalformedConfig { .. })
    ));
}

#[test]
fn test_unbounded_depth_profile() {
    let mut inner = tree!({"leaf": 1});
    for _ in 0..40 {
        let mut wrapper = JsonMap::new();
        wrapper.insert("next".to_string(), inner);
        inner = JsonValue::Object(wrapper);
    }

    let config = SerializeConfig::new().with_max_depth(None);
    let text = serialize_with_config(&inner, &config).unwrap();
    assert!(text.contains("leaf 1"));
    assert!(!text.contains("[Max depth reached]"));
}

#[test]
fn test_custom_indent_width() {
    let data = tree!({"user": {"name": "Alice"}});
    let config = SerializeConfig::new().with_indent(4);
    assert_eq!(
        serialize_with_config(&data, &config).unwrap(),
        "user\n    name \"Alice\""
    );
}

#[test]
fn test_serde_json_interop() {
    let value = serde_json::json!({
        "name": "Ada",
        "active": true,
        "roles": ["admin", "ops"],
        "manager": null
    });

    let text = to_string(&value).unwrap();
    assert_eq!(
        text,
        "active true\nname \"Ada\"\nroles [\"admin\", \"ops\"]"
    );
}

#[test]
fn test_minified_text_passes_through_as_opaque_string() {
    // Pre-minified source text embedded as a leaf is only subject to
    // escaping and the string cap.
    let minified = "function f(){return 1}\nlet x=f()";
    let data = tree!({ "content": (minified) });

    let text = serialize(&data).unwrap();
    assert_eq!(text, "content \"function f(){return 1}\\nlet x=f()\"");
}
