// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how results get their numbers and their order.
//!
//! The key insight is that the match tiers are tried in order and the first
//! hit wins. An exact field match never has to compete with a substring match
//! on points; the tier test decides before the numbers do.

mod core;
pub mod ranking;

pub use self::core::*;
