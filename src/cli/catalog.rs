//! Catalog listing for the `molang catalog` command

use serde::Serialize;

use crate::{ArgBound, Builtin, Context, Math, MolangError, Namespace, Query, Variable};

/// One built-in as listed by the CLI
#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    pub namespace: &'static str,
    pub name: &'static str,
    pub arity: String,
    pub bounds: &'static [ArgBound],
}

impl CatalogEntry {
    fn new(namespace: &'static str, builtin: &'static Builtin) -> Self {
        CatalogEntry {
            namespace,
            name: builtin.name,
            arity: builtin.arity(),
            bounds: builtin.bounds,
        }
    }
}

fn entries_of<N: Namespace>(extra: &'static [Builtin]) -> impl Iterator<Item = CatalogEntry> {
    N::builtins()
        .iter()
        .chain(extra)
        .map(|b| CatalogEntry::new(N::HANDLE, b))
}

/// Catalog entries for one namespace, or all of them
pub fn catalog_entries(namespace: Option<&str>) -> Result<Vec<CatalogEntry>, MolangError> {
    let entries: Vec<CatalogEntry> = match namespace {
        None => entries_of::<Query>(&[])
            .chain(entries_of::<Context>(Context::CONTEXT_BUILTINS))
            .chain(entries_of::<Variable>(&[]))
            .chain(entries_of::<Math>(&[]))
            .collect(),
        Some("q" | "query") => entries_of::<Query>(&[]).collect(),
        Some("c" | "context") => entries_of::<Context>(Context::CONTEXT_BUILTINS).collect(),
        Some("v" | "variable") => entries_of::<Variable>(&[]).collect(),
        Some("math") => entries_of::<Math>(&[]).collect(),
        Some(other) => return Err(MolangError::UnknownNamespace(other.to_string())),
    };
    Ok(entries)
}

/// Plain-text table: qualified name, arity, clamp bounds
pub fn format_catalog(entries: &[CatalogEntry]) -> String {
    let width = entries
        .iter()
        .map(|e| e.namespace.len() + e.name.len() + 1)
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for e in entries {
        let qualified = format!("{}.{}", e.namespace, e.name);
        let bounds: Vec<String> = e
            .bounds
            .iter()
            .map(|b| format!("#{} in {}..={}", b.index, b.bound.min, b.bound.max))
            .collect();
        let line = format!("{qualified:<width$}  {:<6} {}", e.arity, bounds.join(", "));
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
