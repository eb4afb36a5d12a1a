/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use std::ops::RangeInclusive;

pub const PORT_RANGE: RangeInclusive<usize> = 1..=65535;

pub const FACTORY_NAME_MAX_LENGTH: usize = 20;

/// Upper bound on the queries kept per request log, oldest are dropped first.
pub const QUERY_LOG_LIMIT: usize = 9000;

pub const SCREEN_SIZE_FIELDS: [&str; 3] = ["id", "width", "height"];
pub const COLOR_DEPTH_FIELDS: [&str; 2] = ["id", "bits_per_pixel"];
