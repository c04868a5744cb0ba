// SPDX-License-Identifier: Apache-2.0

pub(crate) mod geocode;
pub(crate) mod mailer;
