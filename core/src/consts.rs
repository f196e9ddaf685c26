/*
 * SPDX-FileCopyrightText: 2025 Folio Authors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::{DateTime, NaiveDateTime};
use std::ops::RangeInclusive;
use std::sync::LazyLock;

pub const PORT_RANGE: RangeInclusive<usize> = 1..=65535;
pub const PROFICIENCY_RANGE: RangeInclusive<i32> = 1..=10;

pub const MAX_BIO_LENGTH: usize = 500;
pub const MAX_DESCRIPTION_LENGTH: usize = 1000;

pub const DEFAULT_TOP_SKILLS: u64 = 5;

pub static NULL_TIME: LazyLock<NaiveDateTime> =
    LazyLock::new(|| DateTime::from_timestamp(0, 0).unwrap().naive_utc());
