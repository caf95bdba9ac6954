//! Dependency resolution: registry entry name -> ordered file targets

use std::collections::HashSet;

use tracing::debug;

use crate::error::{RegistryError, Result};
use crate::naming::{Case, convert_path};
use crate::registry::{Registry, RegistryEntry};

/// One file to be written, relative to the destination root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTarget {
    /// Registry entry this file belongs to
    pub item: String,
    pub relative_path: String,
    pub content: String,
}

/// Flattens an entry and its dependencies into file targets.
///
/// Dependencies come before the entries that import them, each entry appears
/// once (first-seen order), and the last requested entry is always last.
pub struct Resolver<'a> {
    registry: &'a Registry,
    naming: Case,
}

impl<'a> Resolver<'a> {
    pub fn new(registry: &'a Registry, naming: Case) -> Self {
        Self { registry, naming }
    }

    pub fn naming(&self) -> Case {
        self.naming
    }

    /// Project-relative path an entry is written to
    pub fn target_path(&self, entry: &RegistryEntry) -> String {
        convert_path(&entry.canonical_path(), self.naming)
    }

    /// Ordered entries for one requested name, without reading sources
    pub fn plan(&self, name: &str) -> Result<Vec<&'a RegistryEntry>> {
        self.plan_many(&[name])
    }

    /// Ordered entries for several requested names, sharing de-duplication
    pub fn plan_many<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<&'a RegistryEntry>> {
        let mut seen = HashSet::new();
        let mut ordered = Vec::new();

        for name in names {
            let entry = self.registry.entry(name.as_ref())?;
            self.visit(entry, &mut seen, &mut ordered)?;
        }

        Ok(ordered)
    }

    fn visit(
        &self,
        entry: &'a RegistryEntry,
        seen: &mut HashSet<&'a str>,
        ordered: &mut Vec<&'a RegistryEntry>,
    ) -> Result<()> {
        // Marked before descending; the index is acyclic so this only dedupes
        if !seen.insert(entry.name.as_str()) {
            return Ok(());
        }

        for dep in &entry.dependencies {
            let dep_entry =
                self.registry
                    .index()
                    .get(dep)
                    .ok_or_else(|| RegistryError::DanglingDependency {
                        item: entry.name.clone(),
                        dependency: dep.clone(),
                    })?;
            self.visit(dep_entry, seen, ordered)?;
        }

        ordered.push(entry);
        Ok(())
    }

    /// Resolve one name to file targets with content
    pub fn resolve(&self, name: &str) -> Result<Vec<FileTarget>> {
        self.resolve_many(&[name])
    }

    /// Resolve several names to file targets with content
    pub fn resolve_many<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<FileTarget>> {
        let entries = self.plan_many(names)?;
        debug!(
            "Resolved {} entries: {}",
            entries.len(),
            entries
                .iter()
                .map(|e| e.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );

        entries
            .into_iter()
            .map(|entry| {
                let source = self.registry.read_source(entry)?;
                Ok(FileTarget {
                    item: entry.name.clone(),
                    relative_path: self.target_path(entry),
                    content: rewrite_imports(&source, self.naming),
                })
            })
            .collect()
    }
}

/// Rename relative import specifiers to match the file naming convention.
///
/// Registry sources import each other by camelCase paths; with kebab naming
/// the files move, so `'../useEventListener/useEventListener'` must follow.
/// Covers `from '...'` (including multi-line import lists), side-effect
/// `import '...'` and dynamic `import('...')`.
fn rewrite_imports(source: &str, naming: Case) -> String {
    if naming == Case::Camel {
        return source.to_string();
    }

    let mut out = String::with_capacity(source.len());
    let mut copied = 0;
    let mut pos = 0;

    while let Some(offset) = source[pos..].find(['\'', '"']) {
        let open = pos + offset;
        let Some((start, end)) = quoted_literal(source, open) else {
            // Stray quote, e.g. an apostrophe in a comment
            pos = open + 1;
            continue;
        };

        let specifier = &source[start..end];
        if is_relative(specifier) && follows_import_keyword(&source[..open]) {
            out.push_str(&source[copied..start]);
            out.push_str(&convert_path(specifier, naming));
            copied = end;
        }
        pos = end + 1;
    }

    out.push_str(&source[copied..]);
    out
}

/// Byte range of the string literal opened at `open`. Literals never span lines.
fn quoted_literal(source: &str, open: usize) -> Option<(usize, usize)> {
    let quote = source[open..].chars().next()?;
    let start = open + 1;
    let len = source[start..].find([quote, '\n'])?;
    let end = start + len;
    source[end..].starts_with(quote).then_some((start, end))
}

fn is_relative(specifier: &str) -> bool {
    specifier.starts_with("./") || specifier.starts_with("../")
}

/// Whether the code before a literal ends in `from`, `import` or `import(`
fn follows_import_keyword(before: &str) -> bool {
    let before = before.trim_end();
    match before.strip_suffix('(') {
        Some(call) => ends_with_keyword(call.trim_end(), "import"),
        None => ends_with_keyword(before, "from") || ends_with_keyword(before, "import"),
    }
}

fn ends_with_keyword(code: &str, keyword: &str) -> bool {
    code.strip_suffix(keyword).is_some_and(|rest| {
        !rest
            .chars()
            .next_back()
            .is_some_and(|c| c.is_alphanumeric() || matches!(c, '_' | '$' | '.'))
    })
}
