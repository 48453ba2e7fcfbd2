//! Binding declaration fragments for a component's inputs and outputs.

/// Literal suffix appended to every binding value.
///
/// It is emitted verbatim and never resolved per name; templates that want a
/// real identifier there have to rewrite it themselves.
pub const BINDING_SUFFIX: &str = "CamelFirstUp";

/// Category of a declared binding, which selects its marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    /// One-way inbound binding
    Input,
    /// Outbound event callback
    Output,
}

impl BindingKind {
    /// Character prefixed to the binding value.
    pub fn marker(self) -> char {
        match self {
            BindingKind::Input => '<',
            BindingKind::Output => '&',
        }
    }
}

/// Serialises `names` into `'<name>': '<marker><prefix>CamelFirstUp'` pairs
/// joined by `,`, preserving order.
///
/// Returns an empty string when `names` is absent or empty.
pub fn build_bindings(names: Option<&[String]>, kind: BindingKind, app_prefix: &str) -> String {
    let Some(names) = names else {
        return String::new();
    };

    names
        .iter()
        .map(|name| format!("'{name}': '{}{app_prefix}{BINDING_SUFFIX}'", kind.marker()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Bindings for a component's input list.
pub fn build_inputs(inputs: &[String], app_prefix: &str) -> String {
    build_bindings(Some(inputs), BindingKind::Input, app_prefix)
}

/// Bindings for a component's output list.
pub fn build_outputs(outputs: &[String], app_prefix: &str) -> String {
    build_bindings(Some(outputs), BindingKind::Output, app_prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers() {
        assert_eq!(BindingKind::Input.marker(), '<');
        assert_eq!(BindingKind::Output.marker(), '&');
    }

    #[test]
    fn test_single_output() {
        let outputs = vec!["onAccountClick".to_string()];
        assert_eq!(build_outputs(&outputs, "ei"), "'onAccountClick': '&eiCamelFirstUp'");
    }
}
