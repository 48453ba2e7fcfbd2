use sprout::naming::{to_camel, to_pascal};

const NAMES: [&str; 6] = [
    "connection-list-container",
    "connection-list",
    "connection-preview",
    "connection",
    "a-b-c",
    "x",
];

#[test]
fn test_camel_has_no_separator_and_lowercase_head() {
    for name in NAMES {
        let camel = to_camel(name);
        assert!(!camel.contains('-'), "{camel}");
        assert!(camel.chars().next().unwrap().is_lowercase(), "{camel}");
    }
}

#[test]
fn test_pascal_has_no_separator_and_uppercase_head() {
    for name in NAMES {
        let pascal = to_pascal(name);
        assert!(!pascal.contains('-'), "{pascal}");
        assert!(pascal.chars().next().unwrap().is_uppercase(), "{pascal}");
    }
}

#[test]
fn test_variants_only_differ_in_head() {
    for name in NAMES {
        assert_eq!(to_camel(name)[1..], to_pascal(name)[1..]);
    }
}
