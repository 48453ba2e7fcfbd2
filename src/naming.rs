//! Name variants derived from a dash-separated component name.
//!
//! Only the separators are dropped and the first character's case is set;
//! word boundaries after the first are kept as written, so
//! `connection-list` becomes `connectionlist` and `Connectionlist`.

/// Removes every `-` and lowercases the first character of the result.
pub fn to_camel(dash_name: &str) -> String {
    with_first_char(&strip_dashes(dash_name), |c| c.to_lowercase().collect())
}

/// Removes every `-` and uppercases the first character of the result.
pub fn to_pascal(dash_name: &str) -> String {
    with_first_char(&strip_dashes(dash_name), |c| c.to_uppercase().collect())
}

fn strip_dashes(name: &str) -> String {
    name.replace('-', "")
}

fn with_first_char<F>(joined: &str, convert: F) -> String
where
    F: Fn(char) -> String,
{
    let mut chars = joined.chars();
    match chars.next() {
        Some(first) => convert(first) + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_strips_separators() {
        assert_eq!(to_camel("connection-list-container"), "connectionlistcontainer");
        assert_eq!(to_camel("Connection-Preview"), "connectionPreview");
    }

    #[test]
    fn test_pascal_strips_separators() {
        assert_eq!(to_pascal("connection-list-container"), "Connectionlistcontainer");
        assert_eq!(to_pascal("connection-Preview"), "ConnectionPreview");
    }

    #[test]
    fn test_name_without_separator() {
        assert_eq!(to_camel("connection"), "connection");
        assert_eq!(to_pascal("connection"), "Connection");
    }

    #[test]
    fn test_empty_and_separator_only() {
        assert_eq!(to_camel(""), "");
        assert_eq!(to_pascal(""), "");
        assert_eq!(to_camel("--"), "");
        assert_eq!(to_pascal("-"), "");
    }
}
