// SPDX-License-Identifier: Apache-2.0

use officedir_calc::{CalculatorLead, SpaceEstimate, SpaceProgram};
use officedir_model::Company;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VersionDto {
    pub name: String,
    pub version: String,
    pub api_version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatusDto {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompanyCreatedDto {
    pub success: bool,
    pub company: Company,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EstimateResponseDto {
    pub program: SpaceProgram,
    pub estimate: SpaceEstimate,
}

/// Lead capture: contact fields at the top level, program alongside.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadSubmissionDto {
    #[serde(flatten)]
    pub lead: CalculatorLead,
    #[serde(default)]
    pub program: SpaceProgram,
}
