// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Transport layer utilities for the NEAR JSON-RPC client.
//!
//! This module provides Tower middleware layered onto alloy's
//! [`ClientBuilder`](alloy_rpc_client::ClientBuilder).
//! [`create_rpc_client`](crate::provider::create_rpc_client) applies
//! [`LoggingLayer`] when the provider config enables logging.

mod logging;

pub use logging::{LoggingLayer, LoggingService};
