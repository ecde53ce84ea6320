#![cfg(feature = "cli")]

use molang_builder::cli::{self, CallOptions, CliError};

fn options(namespace: &str, builtin: &str, args: &[&str]) -> CallOptions {
    CallOptions {
        namespace: namespace.to_string(),
        builtin: builtin.to_string(),
        args: args.iter().map(|s| s.to_string()).collect(),
        prefixes: Vec::new(),
    }
}

#[test]
fn test_call_renders_and_clamps() {
    let out = cli::execute_call(&options("q", "position", &["7"])).unwrap();
    assert_eq!(out.as_str(), "q.position(2)");
    let out = cli::execute_call(&options("math", "lerp", &["0", "1", "2"])).unwrap();
    assert_eq!(out.as_str(), "math.lerp(0, 1, 1)");
}

#[test]
fn test_call_without_builtin_is_no_input() {
    let err = cli::execute_call(&options("q", "", &[])).unwrap_err();
    assert!(matches!(err, CliError::NoInput));
}

#[test]
fn test_call_reports_arity() {
    let err = cli::execute_call(&options("q", "has_tag", &[])).unwrap_err();
    assert_eq!(err.to_string(), "q.has_tag expects 1 argument(s), got 0");
}

#[test]
fn test_batch_stops_at_first_error() {
    let result = cli::execute_lines("q is_baby\nq nonsense\n", &[]);
    assert!(result.is_err());
}

#[test]
fn test_catalog_covers_every_namespace() {
    let all = cli::catalog_entries(None).unwrap();
    for ns in ["q", "c", "v", "math"] {
        assert!(all.iter().any(|e| e.namespace == ns), "missing {ns}");
    }
}

#[test]
fn test_docs_categories() {
    assert!(cli::get_docs_overview().contains("namespaces"));
    assert!(cli::get_doc_category("quoting").unwrap().contains("QUOTING"));
    assert!(cli::get_doc_category("nope").is_err());
}
