// SPDX-License-Identifier: Apache-2.0

use crate::paths::insights_dir;
use officedir_model::Insight;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Markdown insight articles under `<root>/insights/*.md`.
#[derive(Debug, Clone)]
pub struct InsightLibrary {
    dir: PathBuf,
}

impl InsightLibrary {
    #[must_use]
    pub fn new(root: &Path) -> Self {
        Self {
            dir: insights_dir(root),
        }
    }

    /// Article slugs, derived from file names. Missing directory means
    /// no articles.
    #[must_use]
    pub fn slugs(&self) -> Vec<String> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(_) => return Vec::new(),
        };
        let mut slugs: Vec<String> = entries
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let name = entry.file_name().to_string_lossy().into_owned();
                name.strip_suffix(".md")
                    .or_else(|| name.strip_suffix(".mdx"))
                    .map(str::to_string)
            })
            .collect();
        slugs.sort();
        slugs
    }

    #[must_use]
    pub fn load(&self, slug: &str) -> Option<Insight> {
        for ext in ["md", "mdx"] {
            let path = self.dir.join(format!("{slug}.{ext}"));
            match fs::read_to_string(&path) {
                Ok(text) => return Some(Insight::from_markdown(slug, &text)),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(e) => {
                    warn!(slug, error = %e, "failed to read insight");
                    return None;
                }
            }
        }
        None
    }

    /// All articles, newest first (dates are ISO strings, so the lexical
    /// sort is the chronological one).
    #[must_use]
    pub fn all(&self) -> Vec<Insight> {
        let mut insights: Vec<Insight> = self
            .slugs()
            .iter()
            .filter_map(|slug| self.load(slug))
            .collect();
        insights.sort_by(|a, b| b.date.cmp(&a.date));
        insights
    }
}
