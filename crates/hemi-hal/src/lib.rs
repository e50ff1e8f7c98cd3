// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # hemi-hal — platform dispatch for half conversions
//!
//! `encode` narrows an `f32` to a binary16 pattern; `decode` widens one
//! back. The backend is selected at compile time: on AArch64 both
//! operations run on the single-instruction `fcvt` forms, everywhere else
//! they run the portable reference algorithms (ties-to-even narrowing,
//! exact widening).
//!
//! ## Contract
//!
//! The hardware and software paths are bit-identical for every input,
//! assuming the ambient FPU rounding mode is round-to-nearest-even (the
//! default on every supported platform). A divergence between the two is a
//! correctness bug, never an acceptable platform variation.
//!
//! NaN inputs are part of that contract: hardware conversion instructions
//! propagate NaN payload bits and quiet signaling NaNs, where the portable
//! narrowing path canonicalizes and the portable widening path preserves
//! payloads verbatim. Both backends therefore route NaNs through the
//! portable code, so the bits match everywhere.

#![cfg_attr(not(feature = "std"), no_std)]

use hemi_codec::bits::{bits_from_float, float_from_bits, Binary16};
use hemi_codec::{reference, widen};

#[cfg(target_arch = "aarch64")]
mod aarch64;

/// Which implementation backs [`encode`]/[`decode`] on this build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Native single-instruction conversion (`fcvt`)
    Hardware,
    /// Portable reference converter + widening converter
    Software,
}

impl Backend {
    /// The backend compiled into this build. Logs the selection once, the
    /// first time it is called.
    pub fn active() -> Backend {
        let backend = Self::selected();
        #[cfg(feature = "std")]
        {
            use core::sync::atomic::{AtomicBool, Ordering};
            static LOGGED: AtomicBool = AtomicBool::new(false);
            if !LOGGED.swap(true, Ordering::Relaxed) {
                tracing::debug!(backend = backend.as_str(), "half conversion backend selected");
            }
        }
        backend
    }

    const fn selected() -> Backend {
        #[cfg(target_arch = "aarch64")]
        {
            Backend::Hardware
        }
        #[cfg(not(target_arch = "aarch64"))]
        {
            Backend::Software
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Backend::Hardware => "hardware",
            Backend::Software => "software",
        }
    }
}

impl core::fmt::Display for Backend {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Narrow an `f32` to a binary16 pattern, rounding to nearest-even.
#[inline]
pub fn encode(value: f32) -> u16 {
    if value.is_nan() {
        // NaN payload handling differs between fcvt and the portable path;
        // keep both backends on the portable code so they stay identical.
        return reference::compress_nearest_even(bits_from_float(value));
    }
    #[cfg(target_arch = "aarch64")]
    {
        aarch64::fcvt_to_half(value)
    }
    #[cfg(not(target_arch = "aarch64"))]
    {
        reference::compress_nearest_even(bits_from_float(value))
    }
}

/// Widen a binary16 pattern to the `f32` of the same value. Exact.
#[inline]
pub fn decode(bits: u16) -> f32 {
    if bits & !Binary16::SIGN_MASK > Binary16::INFINITY_BITS {
        // NaN: fcvt would quiet a signaling payload; the portable path
        // preserves it, so both backends use the portable path.
        return float_from_bits(widen::expand(bits));
    }
    #[cfg(target_arch = "aarch64")]
    {
        aarch64::fcvt_to_single(bits)
    }
    #[cfg(not(target_arch = "aarch64"))]
    {
        float_from_bits(widen::expand(bits))
    }
}
