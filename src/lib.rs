// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # hemi — half-precision conversion core
//!
//! `hemi` converts between IEEE-754 binary32 (`f32`) and binary16 bit
//! patterns, bit-exactly, for compact storage of neural state buffers
//! (membrane potentials, synaptic weights) and other floating-point data
//! that tolerates 16-bit precision.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! hemi = "0.0.1-beta.4"  # Default: std + platform dispatch
//! ```
//!
//! ```rust
//! use hemi::prelude::*;
//!
//! let h = encode(1.0);
//! assert_eq!(h, 0x3C00);
//! assert_eq!(decode(h), 1.0);
//! ```
//!
//! ## Feature Flags
//!
//! - **`std`** (default): Standard Rust. Disable for RTOS/embedded targets;
//!   the conversion algorithms themselves are `no_std`.
//! - **`hal`** (default): Platform dispatch layer. On AArch64 the
//!   `encode`/`decode` pair runs on the hardware `fcvt` instructions;
//!   everywhere else it runs the portable reference algorithms. Both paths
//!   produce identical bits for every input.
//!
//! ## Components
//!
//! - [`codec`]: the portable conversion family — the fully-explicit
//!   reference converter (two rounding policies), the magic-constant fast
//!   refinements, the single-multiply approximate converter, and the exact
//!   half→float widening path.
//! - [`hal`]: compile-time platform dispatch between the hardware
//!   instructions and the portable code.
//!
//! Pick the mode-based surface ([`float_to_half`] / [`half_to_float`]) when
//! working with raw bit patterns, or the dispatcher ([`encode`] /
//! [`decode`]) when working with `f32` values and the platform's fastest
//! correct path is wanted.

#![cfg_attr(not(feature = "std"), no_std)]

pub use hemi_codec as codec;

#[cfg(feature = "hal")]
pub use hemi_hal as hal;

// Re-export the conversion surface at the crate root for convenience
pub use hemi_codec::{float_to_half, half_to_float, RoundingMode, Strategy};

#[cfg(feature = "hal")]
pub use hemi_hal::{decode, encode, Backend};

/// Commonly used items
pub mod prelude {
    pub use crate::codec::{float_to_half, half_to_float, RoundingMode, Strategy};

    #[cfg(feature = "hal")]
    pub use crate::hal::{decode, encode, Backend};
}
