// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how suggestions get their numbers and their order.
//!
//! A title hit dominates. Keywords and entry type reorder entries whose titles
//! match equally well, and a small approximate bonus keeps one-typo queries
//! from coming back empty.

mod core;
pub mod ranking;

pub use self::core::*;
pub use ranking::{compare_ranked, rank, Ranked};
