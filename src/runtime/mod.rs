// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Host bindings.
//!
//! The core only knows about `PageSource`, `RenderSink` and `Navigator`. This
//! is where those meet a real page: the `wasm` feature scans the DOM, owns the
//! suggestion list element, wires the input's events and performs the one
//! remote fetch.

#[cfg(feature = "wasm")]
pub mod wasm;
