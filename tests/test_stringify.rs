use pretty_assertions::assert_eq;
use query_string::{ArrayFormat, KeySort, ParsedQuery, StringifyConfig, Value, stringify};

fn query(entries: &[(&str, Value)]) -> ParsedQuery {
    entries
        .iter()
        .map(|(key, value)| ((*key).to_owned(), value.clone()))
        .collect()
}

#[test]
fn stringifies_simple_pairs() {
    let data = query(&[("foo", Value::from("bar"))]);
    assert_eq!(stringify(&data), "foo=bar");
}

#[test]
fn empty_mapping_is_the_empty_string() {
    assert_eq!(stringify(&ParsedQuery::new()), "");
}

#[test]
fn null_emits_the_bare_key() {
    let data = query(&[("flag", Value::Null), ("foo", Value::from("bar"))]);
    assert_eq!(stringify(&data), "flag&foo=bar");
}

#[test]
fn undefined_keys_are_skipped() {
    let data = query(&[("gone", Value::Undefined), ("foo", Value::from("bar"))]);
    assert_eq!(stringify(&data), "foo=bar");
}

#[test]
fn keys_are_sorted_by_default() {
    let data = query(&[("b", Value::from("2")), ("a", Value::from("1"))]);
    assert_eq!(stringify(&data), "a=1&b=2");
}

#[test]
fn unsorted_keeps_insertion_order() {
    let data = query(&[("b", Value::from("2")), ("a", Value::from("1"))]);
    let config = StringifyConfig::new().sort(KeySort::Unsorted);
    assert_eq!(config.stringify(&data), "b=2&a=1");
}

#[test]
fn custom_comparator_orders_keys() {
    let data = query(&[("a", Value::from("1")), ("c", Value::from("3")), ("b", Value::from("2"))]);
    let config = StringifyConfig::new().sort(KeySort::Comparator(|a, b| b.cmp(a)));
    assert_eq!(config.stringify(&data), "c=3&b=2&a=1");
}

#[test]
fn unindexed_arrays_repeat_the_key() {
    let data = query(&[("foo", Value::from(vec!["1", "2", "3"]))]);
    assert_eq!(stringify(&data), "foo=1&foo=2&foo=3");
}

#[test]
fn bracket_arrays_use_empty_brackets() {
    let data = query(&[("foo", Value::from(vec!["1", "2"]))]);
    let config = StringifyConfig::new().array_format(ArrayFormat::EmptyIndexed);
    assert_eq!(config.stringify(&data), "foo[]=1&foo[]=2");
}

#[test]
fn indexed_arrays_use_positions() {
    let data = query(&[("foo", Value::from(vec!["1", "2"]))]);
    let config = StringifyConfig::new().array_format(ArrayFormat::Indexed);
    assert_eq!(config.stringify(&data), "foo[0]=1&foo[1]=2");
}

#[test]
fn comma_arrays_collapse_into_one_segment() {
    let data = query(&[("foo", Value::from(vec![1i64, 2, 3]))]);
    let config = StringifyConfig::new().array_format(ArrayFormat::Comma);
    assert_eq!(config.stringify(&data), "foo=1,2,3");
}

#[test]
fn null_elements_emit_the_key_without_a_value() {
    let items = Value::Array(vec![Value::Null, Value::from("2")]);

    let data = query(&[("foo", items.clone())]);
    assert_eq!(stringify(&data), "foo&foo=2");

    let config = StringifyConfig::new().array_format(ArrayFormat::EmptyIndexed);
    assert_eq!(config.stringify(&data), "foo[]&foo[]=2");

    let config = StringifyConfig::new().array_format(ArrayFormat::Indexed);
    assert_eq!(config.stringify(&data), "foo[0]&foo[1]=2");
}

#[test]
fn undefined_elements_do_not_consume_an_index() {
    let items = Value::Array(vec![Value::Undefined, Value::from("a"), Value::from("b")]);
    let data = query(&[("foo", items)]);
    let config = StringifyConfig::new().array_format(ArrayFormat::Indexed);
    assert_eq!(config.stringify(&data), "foo[0]=a&foo[1]=b");
}

// The comma format drops falsy elements (null and the empty string) while
// the other formats keep them; this asymmetry is deliberate, since a
// comma-joined empty element would be indistinguishable from nothing.
#[test]
fn comma_format_drops_falsy_elements() {
    let items = Value::Array(vec![
        Value::Null,
        Value::from(""),
        Value::from("a"),
        Value::Undefined,
        Value::from("b"),
    ]);
    let data = query(&[("foo", items)]);

    let config = StringifyConfig::new().array_format(ArrayFormat::Comma);
    assert_eq!(config.stringify(&data), "foo=a,b");

    // ...but the bracket format keeps the empty string and the null
    let config = StringifyConfig::new().array_format(ArrayFormat::EmptyIndexed);
    assert_eq!(config.stringify(&data), "foo[]&foo[]=&foo[]=a&foo[]=b");
}

#[test]
fn all_falsy_comma_array_drops_the_key() {
    let data = query(&[
        ("empty", Value::Array(vec![Value::Null, Value::from("")])),
        ("foo", Value::from("bar")),
    ]);
    let config = StringifyConfig::new().array_format(ArrayFormat::Comma);
    assert_eq!(config.stringify(&data), "foo=bar");
}

#[test]
fn empty_arrays_emit_nothing() {
    let data = query(&[
        ("empty", Value::Array(Vec::new())),
        ("foo", Value::from("bar")),
    ]);
    for format in [
        ArrayFormat::Unindexed,
        ArrayFormat::EmptyIndexed,
        ArrayFormat::Indexed,
        ArrayFormat::Comma,
    ] {
        let config = StringifyConfig::new().array_format(format);
        assert_eq!(config.stringify(&data), "foo=bar", "format: {format:?}");
    }
}

#[test]
fn strict_encoding_escapes_rfc3986_reserved() {
    let data = query(&[("foo", Value::from("unicorn*(rainbow)"))]);
    assert_eq!(stringify(&data), "foo=unicorn%2A%28rainbow%29");

    let config = StringifyConfig::new().strict(false);
    assert_eq!(config.stringify(&data), "foo=unicorn*(rainbow)");
}

#[test]
fn spaces_are_percent_encoded() {
    let data = query(&[("key with space", Value::from("hello world"))]);
    assert_eq!(stringify(&data), "key%20with%20space=hello%20world");
}

#[test]
fn encode_false_passes_tokens_through_raw() {
    let data = query(&[("a key", Value::from("a & value"))]);
    let config = StringifyConfig::new().encode(false);
    assert_eq!(config.stringify(&data), "a key=a & value");
}

#[test]
fn unicode_values_are_utf8_percent_encoded() {
    let data = query(&[("name", Value::from("ståle"))]);
    assert_eq!(stringify(&data), "name=st%C3%A5le");
}
