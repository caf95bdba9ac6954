//! Registry index types

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use crate::error::RegistryError;

/// Kind of a registry item, which also decides where its source lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Hook,
    Util,
    Type,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Hook => write!(f, "hook"),
            ItemKind::Util => write!(f, "util"),
            ItemKind::Type => write!(f, "type"),
        }
    }
}

impl FromStr for ItemKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hook" | "hooks" => Ok(ItemKind::Hook),
            "util" | "utils" => Ok(ItemKind::Util),
            "type" | "types" => Ok(ItemKind::Type),
            other => Err(format!(
                "unknown item kind '{}' (expected hook, util or type)",
                other
            )),
        }
    }
}

/// One copyable item in the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEntry {
    pub name: String,

    #[serde(rename = "type")]
    pub kind: ItemKind,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Names of other entries this one imports, in declaration order
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl RegistryEntry {
    /// Registry-relative path of this entry's source file
    pub fn canonical_path(&self) -> String {
        match self.kind {
            ItemKind::Hook => format!("hooks/{0}/{0}.ts", self.name),
            ItemKind::Util => format!("utils/{}.ts", self.name),
            ItemKind::Type => format!("types/{}.ts", self.name),
        }
    }
}

/// The registry manifest, stored as `registry.json` at the registry root
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryIndex {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub items: Vec<RegistryEntry>,
}

impl RegistryIndex {
    /// Parse and validate an index from JSON
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let index: Self =
            serde_json::from_str(json).map_err(|e| RegistryError::Parse(e.to_string()))?;
        index.validate()?;
        Ok(index)
    }

    /// Look up an entry by exact name
    pub fn get(&self, name: &str) -> Option<&RegistryEntry> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Iterate entries of one kind, in index order
    pub fn by_kind(&self, kind: ItemKind) -> impl Iterator<Item = &RegistryEntry> {
        self.items.iter().filter(move |item| item.kind == kind)
    }

    /// Check names are unique, dependencies resolve and there are no cycles
    pub fn validate(&self) -> Result<(), RegistryError> {
        let mut names = HashSet::new();
        for item in &self.items {
            if !names.insert(item.name.as_str()) {
                return Err(RegistryError::DuplicateName(item.name.clone()));
            }
        }

        for item in &self.items {
            if let Some(missing) = item
                .dependencies
                .iter()
                .find(|dep| !names.contains(dep.as_str()))
            {
                return Err(RegistryError::DanglingDependency {
                    item: item.name.clone(),
                    dependency: missing.clone(),
                });
            }
        }

        self.check_cycles()
    }

    fn check_cycles(&self) -> Result<(), RegistryError> {
        #[derive(Clone, Copy, PartialEq)]
        enum Mark {
            Visiting,
            Done,
        }

        fn visit<'a>(
            name: &'a str,
            graph: &HashMap<&'a str, &'a [String]>,
            marks: &mut HashMap<&'a str, Mark>,
            stack: &mut Vec<&'a str>,
        ) -> Result<(), RegistryError> {
            match marks.get(name) {
                Some(Mark::Done) => return Ok(()),
                Some(Mark::Visiting) => {
                    let start = stack.iter().position(|n| *n == name).unwrap_or(0);
                    let mut cycle: Vec<String> =
                        stack[start..].iter().map(|n| n.to_string()).collect();
                    cycle.push(name.to_string());
                    return Err(RegistryError::Cycle(cycle));
                }
                None => {}
            }

            marks.insert(name, Mark::Visiting);
            stack.push(name);
            for dep in graph.get(name).copied().unwrap_or_default() {
                visit(dep, graph, marks, stack)?;
            }
            stack.pop();
            marks.insert(name, Mark::Done);
            Ok(())
        }

        let graph: HashMap<&str, &[String]> = self
            .items
            .iter()
            .map(|item| (item.name.as_str(), item.dependencies.as_slice()))
            .collect();
        let mut marks = HashMap::new();
        let mut stack = Vec::new();

        for item in &self.items {
            visit(&item.name, &graph, &mut marks, &mut stack)?;
        }
        Ok(())
    }
}
