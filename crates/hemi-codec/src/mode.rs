// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! The conversion surface: rounding-mode selection over raw bit patterns.
//!
//! [`float_to_half`] and [`half_to_float`] are the operations consumers of
//! this crate call; the mode parameter picks a policy, not an
//! implementation. The [`Strategy`] enum below additionally names every
//! implementation variant in the crate behind one interface, so the family
//! can be cross-validated in tests and benchmarks.

use crate::{approx, fast, reference, widen};

#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};

/// Rounding policy for float→half conversion.
///
/// Parsed from genome-style configuration strings via [`RoundingMode::from_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "kebab-case"))]
pub enum RoundingMode {
    /// IEEE round-to-nearest, ties to even (the correct default)
    #[default]
    NearestEven,
    /// Round-to-nearest, ties away from zero (historical default)
    TiesAway,
    /// No rounding at all: truncating single-multiply conversion with lossy
    /// NaN handling. See [`crate::approx`] before selecting this.
    Approximate,
}

impl RoundingMode {
    /// Parse from string (from genome JSON)
    #[cfg(feature = "std")]
    pub fn from_str(s: &str) -> Result<Self, ParseModeError> {
        match s.to_lowercase().as_str() {
            "nearest-even" | "rtne" => Ok(RoundingMode::NearestEven),
            "ties-away" | "rta" => Ok(RoundingMode::TiesAway),
            "approximate" | "approx" => Ok(RoundingMode::Approximate),
            _ => Err(ParseModeError(s.into())),
        }
    }

    /// Convert to string (for genome JSON)
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundingMode::NearestEven => "nearest-even",
            RoundingMode::TiesAway => "ties-away",
            RoundingMode::Approximate => "approximate",
        }
    }
}

/// Error returned when a mode or strategy string is not recognized.
#[cfg(feature = "std")]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid conversion mode '{0}': expected 'nearest-even', 'ties-away', or 'approximate'")]
pub struct ParseModeError(pub std::string::String);

/// Convert a binary32 pattern to a binary16 pattern under the given
/// rounding policy. Total over all 2^32 inputs.
///
/// `NearestEven` and `TiesAway` run the fully-explicit reference converter;
/// `Approximate` runs the truncating single-multiply variant.
#[inline]
pub fn float_to_half(bits: u32, mode: RoundingMode) -> u16 {
    match mode {
        RoundingMode::NearestEven => reference::compress_nearest_even(bits),
        RoundingMode::TiesAway => reference::compress_ties_away(bits),
        RoundingMode::Approximate => approx::compress_approx(bits),
    }
}

/// Expand a binary16 pattern to the binary32 pattern of the same value.
/// Total over all 2^16 inputs, exact, no mode parameter needed.
#[inline]
pub fn half_to_float(bits: u16) -> u32 {
    widen::expand(bits)
}

/// Every float→half implementation variant in the crate, behind one
/// interface.
///
/// The closed set exists so the family can be cross-validated: under
/// round-to-nearest-even FPU configuration, `ReferenceNearestEven` and
/// `Fast3NearestEven` are bit-identical on every input, and `Fast2`/`Fast3`
/// are bit-identical to each other on every input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "kebab-case"))]
pub enum Strategy {
    /// Fully-explicit converter, ties away from zero
    Reference,
    /// Fully-explicit converter, ties to even
    ReferenceNearestEven,
    /// Pruned-branch shift-based conversion
    Fast,
    /// Magic multiply with explicit rounding-bias add
    Fast2,
    /// Branchless magic multiply
    Fast3,
    /// Branchless magic multiply, ties to even
    Fast3NearestEven,
    /// Truncating single-multiply conversion
    Approximate,
}

impl Strategy {
    /// All variants, in lineage order
    pub const ALL: [Strategy; 7] = [
        Strategy::Reference,
        Strategy::ReferenceNearestEven,
        Strategy::Fast,
        Strategy::Fast2,
        Strategy::Fast3,
        Strategy::Fast3NearestEven,
        Strategy::Approximate,
    ];

    /// Run this variant on a binary32 pattern.
    #[inline]
    pub fn compress(self, bits: u32) -> u16 {
        match self {
            Strategy::Reference => reference::compress_ties_away(bits),
            Strategy::ReferenceNearestEven => reference::compress_nearest_even(bits),
            Strategy::Fast => fast::compress_fast(bits),
            Strategy::Fast2 => fast::compress_fast2(bits),
            Strategy::Fast3 => fast::compress_fast3(bits),
            Strategy::Fast3NearestEven => fast::compress_fast3_nearest_even(bits),
            Strategy::Approximate => approx::compress_approx(bits),
        }
    }

    /// Whether this variant implements IEEE round-to-nearest-even exactly
    /// (assuming the ambient FPU rounding mode is round-to-nearest-even).
    pub fn is_nearest_even(self) -> bool {
        matches!(self, Strategy::ReferenceNearestEven | Strategy::Fast3NearestEven)
    }

    /// Whether this variant classifies every NaN correctly. The truncating
    /// variant can emit some signaling NaNs as Infinity.
    pub fn preserves_nan(self) -> bool {
        !matches!(self, Strategy::Approximate)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Reference => "reference",
            Strategy::ReferenceNearestEven => "reference-nearest-even",
            Strategy::Fast => "fast",
            Strategy::Fast2 => "fast2",
            Strategy::Fast3 => "fast3",
            Strategy::Fast3NearestEven => "fast3-nearest-even",
            Strategy::Approximate => "approximate",
        }
    }
}
