/*
 * SPDX-FileCopyrightText: 2025 Folio Authors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod link_set;
pub mod profile;
pub mod project;
pub mod skill;
pub mod user;
pub mod work_experience;
