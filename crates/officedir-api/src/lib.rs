// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

mod dto;
mod errors;
pub mod params;

pub use dto::{CompanyCreatedDto, EstimateResponseDto, LeadSubmissionDto, StatusDto, VersionDto};
pub use errors::{ApiError, ApiErrorCode};

pub const CRATE_NAME: &str = "officedir-api";
pub const API_VERSION: &str = "v1";
