//! Example program catalog

use std::path::Path;

use pikopad_core::prelude::*;

/// File extension of example programs
pub const EXAMPLE_EXTENSION: &str = "pyx";

/// Programs shipped with pikopad, in display order
const BUILTIN_EXAMPLES: &[(&str, &str)] = &[
    ("hello", include_str!("../programs/hello.pyx")),
    ("variables", include_str!("../programs/variables.pyx")),
    ("math", include_str!("../programs/math.pyx")),
    ("functions", include_str!("../programs/functions.pyx")),
    ("loops", include_str!("../programs/loops.pyx")),
    ("input", include_str!("../programs/input.pyx")),
    ("chains", include_str!("../programs/chains.pyx")),
];

/// Named example programs in display order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExampleCatalog {
    entries: Vec<(String, String)>,
}

impl ExampleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The examples bundled with the binary
    pub fn builtin() -> Self {
        Self::from_entries(BUILTIN_EXAMPLES.iter().copied())
    }

    /// Build a catalog from `(name, source)` pairs, keeping their order
    pub fn from_entries<I, N, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (N, S)>,
        N: Into<String>,
        S: Into<String>,
    {
        let mut catalog = Self::new();
        for (name, source) in entries {
            catalog.insert(name, source);
        }
        catalog
    }

    /// Add an example. An existing name keeps its position and gets the new source.
    pub fn insert(&mut self, name: impl Into<String>, source: impl Into<String>) {
        let name = name.into();
        let source = source.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = source,
            None => self.entries.push((name, source)),
        }
    }

    /// Insert every example of `other`, overriding same-named entries
    pub fn extend(&mut self, other: ExampleCatalog) {
        for (name, source) in other.entries {
            self.insert(name, source);
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, source)| source.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load every `*.pyx` file in `dir`; the file stem becomes the example name.
    ///
    /// Examples are ordered by file name. Unreadable files are skipped with a
    /// warning. Subdirectories are not searched.
    pub async fn load_dir(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(Error::example_dir(dir));
        }

        let mut found = Vec::new();
        let mut entries = tokio::fs::read_dir(dir)
            .await
            .with_context(|| format!("Failed to read example directory {}", dir.display()))?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(EXAMPLE_EXTENSION) {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };

            match tokio::fs::read_to_string(&path).await {
                Ok(source) => found.push((name.to_string(), source)),
                Err(e) => warn!("Skipping example {}: {}", path.display(), e),
            }
        }

        found.sort_by(|a, b| a.0.cmp(&b.0));
        let catalog = Self::from_entries(found);
        debug!("Loaded {} examples from {}", catalog.len(), dir.display());
        Ok(catalog)
    }
}
