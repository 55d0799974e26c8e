//! Tests for error types
//!
//! Error messages are shown directly in CLI output, so they must name the
//! offending flag and path.

#[cfg(test)]
mod types_tests {
    use super::super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_resource_message() {
        let err = ArgsError::MissingResource {
            field: "enterprise-dir",
            path: PathBuf::from("/src/enterprise"),
        };
        assert!(err.to_string().contains("--enterprise-dir"));
        assert!(err.to_string().contains("/src/enterprise"));
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_not_a_directory_message() {
        let err = ArgsError::NotADirectory {
            field: "enterprise-dir",
            path: PathBuf::from("/src/enterprise.tar"),
        };
        assert!(err.to_string().contains("not a directory"));
        assert!(err.to_string().contains("/src/enterprise.tar"));
    }

    #[test]
    fn test_io_error_message() {
        let err = ArgsError::Io {
            field: "enterprise-dir",
            path: PathBuf::from("/root/enterprise"),
            message: "permission denied".to_string(),
        };
        assert!(err.to_string().contains("could not access"));
        assert!(err.to_string().contains("permission denied"));
    }

    #[test]
    fn test_context_error_from() {
        let err = ArgsError::from(ContextError::MissingKey("build-id".to_string()));
        assert!(matches!(err, ArgsError::Context(_)));
        assert!(err.to_string().contains("build-id"));
        assert_eq!(err.field(), Some("build-id"));
    }

    #[test]
    fn test_type_mismatch_message() {
        let err = ContextError::TypeMismatch {
            key: "grafana".to_string(),
            detail: "expected bool, found string".to_string(),
        };
        assert!(err.to_string().contains("grafana"));
        assert!(err.to_string().contains("wrong type"));
    }

    #[test]
    fn test_field_of_filesystem_errors() {
        let err = ArgsError::MissingResource {
            field: "enterprise-dir",
            path: PathBuf::new(),
        };
        assert_eq!(err.field(), Some("enterprise-dir"));
    }
}
