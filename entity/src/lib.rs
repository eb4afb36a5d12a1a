/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod architecture;
pub mod color_depth;
pub mod factory;
pub mod operating_system;
pub mod platform;
pub mod screen_size;
pub mod user;
