// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types shared across nearscan.
//!
//! - Gas price quotes as read from a NEAR node
//! - Fiat prices keyed by feed symbol
//! - Caller-supplied transaction shapes
//! - Degrade-to-default results with failure markers

pub mod fetched;
pub mod gas;
pub mod price;
pub mod transaction;

// Note: Public types are re-exported from lib.rs, not here
