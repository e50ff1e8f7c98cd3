// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Magic-constant float→half refinements.
//!
//! Instead of shifting mantissa bits explicitly, these variants multiply the
//! magnitude by 2^-112 (the pattern `15 << 23` read as a float) so the host
//! FPU performs the exponent rebias and the mantissa rounding in one
//! operation; the result then only needs a 13-bit shift to become a half
//! pattern.
//!
//! The lineage runs `fast` → `fast2` → `fast3`:
//! - `fast` prunes the fully-explicit path down to the branches that can
//!   actually be taken; after this crate's rewrite that is the same
//!   shift-based core the reference converter uses.
//! - `fast2` introduces the magic multiply with an explicit rounding-bias
//!   add and an overflow clamp.
//! - `fast3` folds the bias add into a single mask subtraction, leaving a
//!   branchless arithmetic core, and is the form with a ties-to-even
//!   variant.
//!
//! ## Platform caveats
//!
//! Subnormal half outputs are produced through binary32 subnormal
//! intermediates. Two consequences, both intentional trade-offs rather than
//! defects:
//! - If the host FPU flushes subnormals to zero (FTZ/DAZ), these variants
//!   flush half subnormals to zero as well. Callers that need subnormals
//!   regardless of FPU configuration must use the reference converter.
//! - The FPU rounds those intermediates to nearest-even, so `fast2`/`fast3`
//!   subnormal results can differ from the ties-away reference on exact
//!   ties. Normal outputs match the ties-away reference bit for bit.
//!
//! [`compress_fast3_nearest_even`] is bit-identical to
//! [`crate::reference::compress_nearest_even`] on every input, provided the
//! ambient rounding mode is round-to-nearest-even.

use crate::bits::{bits_from_float, float_from_bits, Binary16, Binary32};
use crate::reference;

/// Magic scale factor 2^-112 as a binary32 pattern: multiplying by it moves
/// a binary32 exponent into the binary16 exponent position.
const MAGIC_BITS: u32 = 15 << 23;

/// Half Infinity pattern, pre-shifted into binary32 field positions.
const HALF_INF_SHIFTED: u32 = 31 << 23;

/// Everything below bit 12 is dropped by the final shift; clearing it first
/// keeps the magic multiply exact for normal outputs.
const ROUND_MASK: u32 = !0xFFF;

/// Canonical quiet NaN emitted by the family.
const CANONICAL_QNAN: u16 = 0x7E00;

/// First refinement: the fully-explicit converter with its unreachable
/// branches pruned. The rewrite already has no redundant subnormal-input
/// branch, so this shares the reference shift-based core (ties away).
#[inline]
pub fn compress_fast(bits: u32) -> u16 {
    reference::compress_ties_away(bits)
}

/// Second refinement: magic multiply with an explicit rounding-bias add.
///
/// Rounds like the ties-away reference on normal outputs; see the module
/// docs for the subnormal and flush-to-zero caveats.
pub fn compress_fast2(bits: u32) -> u16 {
    let sign = bits & Binary32::SIGN_MASK;
    let mut mag = bits ^ sign;

    let out: u16 = if mag >= Binary32::INFINITY_BITS {
        // Inf or NaN (all exponent bits set): NaN->qNaN and Inf->Inf
        if mag > Binary32::INFINITY_BITS { CANONICAL_QNAN } else { Binary16::INFINITY_BITS }
    } else {
        // (De)normalized number or zero
        mag &= ROUND_MASK; // make sure we don't get sticky bits
        let scaled = float_from_bits(mag) * float_from_bits(MAGIC_BITS);
        let mut u = bits_from_float(scaled);
        u += 0x1000; // rounding bias
        if u > HALF_INF_SHIFTED {
            u = HALF_INF_SHIFTED; // clamp to signed infinity on overflow
        }
        (u >> 13) as u16
    };

    out | (sign >> 16) as u16
}

/// Third refinement: the rounding bias folded into a mask subtraction,
/// leaving a branchless arithmetic core.
///
/// Bit-identical to [`compress_fast2`] on every input.
pub fn compress_fast3(bits: u32) -> u16 {
    let sign = bits & Binary32::SIGN_MASK;
    let mut mag = bits ^ sign;

    let out: u16 = if mag >= Binary32::INFINITY_BITS {
        // Inf or NaN (all exponent bits set): NaN->qNaN and Inf->Inf
        if mag > Binary32::INFINITY_BITS { CANONICAL_QNAN } else { Binary16::INFINITY_BITS }
    } else {
        // (De)normalized number or zero
        mag &= ROUND_MASK;
        let scaled = float_from_bits(mag) * float_from_bits(MAGIC_BITS);
        // Subtracting the mask == adding the 0x1000 rounding bias
        let mut u = bits_from_float(scaled).wrapping_sub(ROUND_MASK);
        if u > HALF_INF_SHIFTED {
            u = HALF_INF_SHIFTED; // clamp to signed infinity on overflow
        }
        (u >> 13) as u16
    };

    out | (sign >> 16) as u16
}

/// Ties-to-even variant of [`compress_fast3`].
///
/// Bit-identical to [`crate::reference::compress_nearest_even`] for every
/// input when the ambient rounding mode is round-to-nearest-even. Unlike
/// `fast2`/`fast3`, the subnormal range here goes through an addition
/// against a large constant instead of a subnormal intermediate, so results
/// do not depend on flush-to-zero.
pub fn compress_fast3_nearest_even(bits: u32) -> u16 {
    // First magnitude that no longer fits a finite half: 65536.0
    const HALF_MAX_BOUND: u32 = (127 + 16) << 23;
    // Below this the output is subnormal or zero: 2^-14
    const SUBNORMAL_BOUND: u32 = 113 << 23;
    // Adding this constant makes the FPU align the 10 result mantissa bits
    // at the bottom of the binary32 mantissa, rounding to nearest-even as
    // it does so.
    const DENORM_MAGIC: u32 = ((127 - 15) + (23 - 10) + 1) << 23;
    // Rebias from 127 to 15, as a wrapping two's-complement add
    const EXP_REBIAS: u32 = ((15 - 127) << 23) as u32;

    let sign = bits & Binary32::SIGN_MASK;
    let mag = bits ^ sign;

    let out: u16 = if mag >= HALF_MAX_BOUND {
        // Result is Inf or NaN (all exponent bits set)
        if mag > Binary32::INFINITY_BITS { CANONICAL_QNAN } else { Binary16::INFINITY_BITS }
    } else if mag < SUBNORMAL_BOUND {
        // Subnormal or zero output
        let aligned = float_from_bits(mag) + float_from_bits(DENORM_MAGIC);
        // One integer subtract of the bias later, the half pattern is in
        // the low bits
        (bits_from_float(aligned) - DENORM_MAGIC) as u16
    } else {
        let mant_odd = (mag >> 13) & 1; // resulting mantissa LSB
        // Exponent update plus rounding bias part 1 (just below half an
        // ULP), then part 2: the odd bit turns a tie into a round-up
        let u = mag.wrapping_add(EXP_REBIAS).wrapping_add(0xFFF).wrapping_add(mant_odd);
        (u >> 13) as u16
    };

    out | (sign >> 16) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::bits_from_float;
    use crate::reference;

    #[test]
    fn test_canonical_values() {
        let family: [fn(u32) -> u16; 4] =
            [compress_fast, compress_fast2, compress_fast3, compress_fast3_nearest_even];
        for f in family {
            assert_eq!(f(bits_from_float(1.0)), 0x3C00);
            assert_eq!(f(bits_from_float(-1.0)), 0xBC00);
            assert_eq!(f(bits_from_float(0.0)), 0x0000);
            assert_eq!(f(bits_from_float(-0.0)), 0x8000);
            assert_eq!(f(bits_from_float(65504.0)), 0x7BFF);
            assert_eq!(f(bits_from_float(65520.0)), 0x7C00);
            assert_eq!(f(0x7F80_0000), 0x7C00);
            assert_eq!(f(0xFF80_0000), 0xFC00);
        }
    }

    #[test]
    fn test_nan_is_quieted_not_inf() {
        let family: [fn(u32) -> u16; 3] =
            [compress_fast2, compress_fast3, compress_fast3_nearest_even];
        for f in family {
            assert_eq!(f(0x7FC0_0000), 0x7E00);
            assert_eq!(f(0x7F80_0001), 0x7E00); // sNaN stays a NaN
            assert_eq!(f(0xFFC0_0000), 0xFE00);
        }
    }

    #[test]
    fn test_fast3_nearest_even_subnormals() {
        // Smallest positive half subnormal, exactly
        assert_eq!(compress_fast3_nearest_even(0x3380_0000), 0x0001);
        // Its halfway point ties to zero (even)
        assert_eq!(compress_fast3_nearest_even(0x3300_0000), 0x0000);
        // 2^-14 - 2^-25 ties up across the field into the smallest normal
        assert_eq!(compress_fast3_nearest_even(0x387F_E000), 0x0400);
        // Smallest positive normal half
        assert_eq!(compress_fast3_nearest_even(0x3880_0000), 0x0400);
    }

    #[test]
    fn test_fast3_nearest_even_ties() {
        assert_eq!(compress_fast3_nearest_even(0x3F80_1000), 0x3C00); // tie -> even
        assert_eq!(compress_fast3_nearest_even(0x3F80_3000), 0x3C02); // tie -> even
        assert_eq!(compress_fast3_nearest_even(0x3F80_1001), 0x3C01); // above tie
    }

    #[test]
    fn test_fast2_fast3_identical() {
        // The two formulations differ only in how the bias add is spelled
        let patterns = [
            0x0000_0000u32,
            0x0000_0001,
            0x3300_0000,
            0x3380_0000,
            0x387F_E000,
            0x3F80_1000,
            0x477F_E000,
            0x477F_F000,
            0x7F7F_FFFF,
            0x7F80_0000,
            0x7FFF_FFFF,
        ];
        for &p in &patterns {
            for &bits in &[p, p | 0x8000_0000] {
                assert_eq!(compress_fast2(bits), compress_fast3(bits), "{bits:#010X}");
            }
        }
    }

    #[test]
    fn test_matches_reference_on_normal_outputs() {
        // Magnitudes whose half output is normal: fast2/fast3 round exactly
        // like the ties-away reference there.
        let mut bits = 0x3880_0000u32; // 2^-14
        while bits < 0x477F_F000 {
            // 65520
            for &b in &[bits, bits | 0x8000_0000] {
                assert_eq!(compress_fast2(b), reference::compress_ties_away(b), "{b:#010X}");
            }
            bits += 0x0001_9F37; // coarse stride through the range
        }
    }
}
