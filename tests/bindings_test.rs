use sprout::bindings::{build_bindings, build_inputs, BindingKind};

#[test]
fn test_absent_or_empty_list() {
    let empty: Vec<String> = Vec::new();
    assert_eq!(build_bindings(None, BindingKind::Input, "ei"), "");
    assert_eq!(build_bindings(Some(empty.as_slice()), BindingKind::Input, "ei"), "");
    assert_eq!(build_bindings(None, BindingKind::Output, "ei"), "");
    assert_eq!(build_bindings(Some(empty.as_slice()), BindingKind::Output, "ei"), "");
}

#[test]
fn test_two_inputs_keep_order() {
    let names = vec!["a".to_string(), "b".to_string()];
    assert_eq!(
        build_bindings(Some(names.as_slice()), BindingKind::Input, "ei"),
        "'a': '<eiCamelFirstUp','b': '<eiCamelFirstUp'"
    );
}

#[test]
fn test_suffix_is_not_derived_from_name() {
    let names = vec!["connection".to_string()];
    let text = build_inputs(&names, "acme");
    assert_eq!(text, "'connection': '<acmeCamelFirstUp'");
    assert!(!text.contains("Connection"));
}
