// SPDX-License-Identifier: Apache-2.0

use crate::paths::insights_dir;
use crate::{StoreError, StoreErrorCode};
use std::fs;
use std::path::Path;

const SEED_COLLECTIONS: [(&str, &str); 6] = [
    ("submarkets", include_str!("../../../data/submarkets.json")),
    ("buildings", include_str!("../../../data/buildings.json")),
    ("coworking", include_str!("../../../data/coworking.json")),
    ("companies", include_str!("../../../data/companies.json")),
    ("references", include_str!("../../../data/references.json")),
    ("blog-posts", include_str!("../../../data/blog-posts.json")),
];

const SEED_INSIGHTS: [(&str, &str); 2] = [
    (
        "vacancy-is-not-one-number.md",
        include_str!("../../../data/insights/vacancy-is-not-one-number.md"),
    ),
    (
        "sublease-shadow-space.md",
        include_str!("../../../data/insights/sublease-shadow-space.md"),
    ),
];

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedOutcome {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// Write the bundled starter fixtures into a data root. Existing files
/// are left alone unless `force` is set.
pub fn seed_data_root(root: &Path, force: bool) -> Result<SeedOutcome, StoreError> {
    fs::create_dir_all(root).map_err(|e| StoreError::new(StoreErrorCode::Io, e.to_string()))?;
    let mut outcome = SeedOutcome::default();

    for (name, contents) in SEED_COLLECTIONS {
        let path = root.join(format!("{name}.json"));
        if path.exists() && !force {
            outcome.skipped.push(format!("{name}.json"));
            continue;
        }
        fs::write(&path, contents)
            .map_err(|e| StoreError::new(StoreErrorCode::Io, e.to_string()))?;
        outcome.written.push(format!("{name}.json"));
    }

    let insights = insights_dir(root);
    fs::create_dir_all(&insights)
        .map_err(|e| StoreError::new(StoreErrorCode::Io, e.to_string()))?;
    for (name, contents) in SEED_INSIGHTS {
        let path = insights.join(name);
        if path.exists() && !force {
            outcome.skipped.push(format!("insights/{name}"));
            continue;
        }
        fs::write(&path, contents)
            .map_err(|e| StoreError::new(StoreErrorCode::Io, e.to_string()))?;
        outcome.written.push(format!("insights/{name}"));
    }

    Ok(outcome)
}
