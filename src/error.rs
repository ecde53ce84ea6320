/// Errors raised while building Molang expressions.
///
/// Rendering itself never fails: range violations clamp and out-of-catalog
/// names are only reachable through the by-name entry points.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum MolangError {
    /// A built-in name that is not in the namespace's catalog
    #[error("unknown built-in: {namespace}.{name}")]
    UnknownBuiltin { namespace: &'static str, name: String },

    /// Namespace handle that does not exist (`q`, `c`, `v`, `t`, `math`)
    #[error("unknown namespace: '{0}'")]
    UnknownNamespace(String),

    /// Wrong number of arguments for a built-in
    #[error("{name} expects {expected} argument(s), got {got}")]
    Arity {
        name: String,
        expected: String,
        got: usize,
    },

    /// Variable or temp name that is not a valid Molang identifier
    #[error("invalid identifier: '{0}'")]
    InvalidIdentifier(String),

    /// String literal containing a single quote, which Molang cannot escape
    #[error("string literal contains a single quote: {0}")]
    EmbeddedQuote(String),
}

pub type Result<T> = std::result::Result<T, MolangError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_builtin() {
        let err = MolangError::UnknownBuiltin {
            namespace: "q",
            name: "is_wizard".into(),
        };
        assert_eq!(err.to_string(), "unknown built-in: q.is_wizard");
    }

    #[test]
    fn arity_message_is_stable() {
        let err = MolangError::Arity {
            name: "math.lerp".into(),
            expected: "3".into(),
            got: 2,
        };
        assert_eq!(err.to_string(), "math.lerp expects 3 argument(s), got 2");
    }
}
