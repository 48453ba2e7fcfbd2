use std::io;
use std::path::PathBuf;

use sprout::error::Error;
use sprout::registry::GeneratedFileKind;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::ConfigError("invalid config".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid config.");

    let err = Error::UnknownKind { kind: GeneratedFileKind::Store };
    assert_eq!(err.to_string(), "No template registered for 'store'.");

    let err = Error::TemplateReadError {
        template: PathBuf::from("templates/store.ts.tpl"),
        source: io::Error::new(io::ErrorKind::NotFound, "missing"),
    };
    assert_eq!(err.to_string(), "Cannot read template 'templates/store.ts.tpl': missing.");
}

#[test]
fn test_error_source() {
    use std::error::Error as _;

    let err = Error::WriteError {
        path: PathBuf::from("output/a"),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    };
    assert_eq!(err.source().map(|s| s.to_string()), Some("denied".to_string()));
}
