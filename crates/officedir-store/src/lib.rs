// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
//! Flat-file JSON collections.
//!
//! One pretty-printed JSON array per collection, kept readable and
//! hand-editable. Reads treat a missing or malformed file as an empty
//! collection; every mutation holds a per-collection lock file and lands
//! through a tmp-file rename, so a crash mid-write never corrupts the
//! visible file and concurrent writers cannot drop each other's records.

mod collection;
mod directory;
mod insights;
mod paths;
mod seed;

pub use collection::{CollectionLockGuard, JsonCollection};
pub use directory::{DirectoryStore, MarkerSource};
pub use insights::InsightLibrary;
pub use paths::{collection_path, insights_dir, lock_path, tmp_path};
pub use seed::{seed_data_root, SeedOutcome};

use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreErrorCode {
    NotFound,
    Validation,
    Conflict,
    Io,
    Internal,
}

impl StoreErrorCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::Validation => "validation_error",
            Self::Conflict => "conflict",
            Self::Io => "io_error",
            Self::Internal => "internal_error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreError {
    pub code: StoreErrorCode,
    pub message: String,
}

impl StoreError {
    #[must_use]
    pub fn new(code: StoreErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for StoreError {}

pub const CRATE_NAME: &str = "officedir-store";
