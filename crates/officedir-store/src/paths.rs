// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

pub const INSIGHTS_DIR: &str = "insights";

#[must_use]
pub fn collection_path(root: &Path, collection: &str) -> PathBuf {
    root.join(format!("{collection}.json"))
}

#[must_use]
pub fn tmp_path(root: &Path, collection: &str) -> PathBuf {
    root.join(format!("{collection}.json.tmp"))
}

#[must_use]
pub fn lock_path(root: &Path, collection: &str) -> PathBuf {
    root.join(format!("{collection}.json.lock"))
}

#[must_use]
pub fn insights_dir(root: &Path) -> PathBuf {
    root.join(INSIGHTS_DIR)
}
