// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # hemi-codec — portable binary16 ↔ binary32 conversion
//!
//! Bit-exact conversion between IEEE-754 single-precision and
//! half-precision patterns, as a family of strategies with different
//! speed/accuracy/rounding trade-offs:
//!
//! - **Reference** ([`reference`]): fully-explicit integer arithmetic, two
//!   rounding policies (ties-away, ties-to-even). Never depends on the
//!   host FPU configuration.
//! - **Fast** ([`fast`]): magic-constant refinements that let the FPU do
//!   the rebias and rounding in one multiply. The ties-to-even variant is
//!   bit-identical to the reference under default FPU configuration.
//! - **Approximate** ([`approx`]): one clamp, one multiply, no rounding,
//!   lossy NaN handling. Minimum latency only.
//! - **Widening** ([`widen`]): exact half→float expansion.
//!
//! Every operation is a pure, total function over its input patterns: all
//! 2^32 (or 2^16) inputs are legal and produce a defined output. Nothing
//! here allocates, blocks, or holds state; every function is safe to call
//! from any number of threads.
//!
//! ## Target Platforms
//! - ✅ Desktop (Linux, macOS, Windows)
//! - ✅ Embedded (`no_std`; disable the `std` feature)
//! - ✅ WASM
//!
//! ## Feature Flags
//! - **`std`** (default): enables serde derives and string parsing on
//!   [`RoundingMode`]/[`Strategy`]. The conversion algorithms themselves
//!   are `no_std`.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod bits;
pub mod reference;
pub mod fast;
pub mod approx;
pub mod widen;
pub mod mode;

// Re-export the conversion surface
pub use mode::{float_to_half, half_to_float, RoundingMode, Strategy};

#[cfg(feature = "std")]
pub use mode::ParseModeError;

// Re-export the bit-layout model for consumers that work on raw fields
pub use bits::{Binary16, Binary32, EXP_BIAS_DELTA};
