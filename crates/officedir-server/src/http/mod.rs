// SPDX-License-Identifier: Apache-2.0

pub(crate) mod calculator;
pub(crate) mod companies;
pub(crate) mod contact;
pub(crate) mod directory;
pub(crate) mod geocode;
pub(crate) mod insights;
pub(crate) mod posts;
pub(crate) mod system;
