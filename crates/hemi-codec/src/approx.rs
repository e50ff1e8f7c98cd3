// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Minimum-latency float→half conversion.
//!
//! One clamp, one multiply, one shift. There is no rounding (the shift
//! truncates) and no explicit NaN classification: a NaN is detected only by
//! the magnitude comparison, and its exponent field is folded down with a
//! single XOR. A signaling NaN whose top ten mantissa bits are all zero
//! therefore comes out as Infinity.
//!
//! This is an intentional trade-off, not a defect: the variant exists for
//! callers that need the fewest instructions and can guarantee their data
//! carries no NaNs worth preserving. Anywhere NaN fidelity matters, use the
//! reference or fast converters instead. Subnormal results additionally
//! inherit the flush-to-zero caveat described in [`crate::fast`].

use crate::bits::{bits_from_float, float_from_bits, Binary32};

/// Magnitudes at or above this pattern (65536.0) no longer fit a finite
/// half; clamping to it lands exactly on Infinity after the shift.
const CLAMP_BITS: u32 = (127 + 16) << 23;

/// Magic scale factor 2^-112, shared with the fast family.
const MAGIC_BITS: u32 = 15 << 23;

/// XOR-ing this into an all-ones binary32 exponent field turns it into the
/// all-ones binary16 exponent field (pre-shift).
const EXP_FLIP: u32 = (255 ^ 31) << 23;

/// Lossy single-multiply conversion. Total over all 2^32 inputs; see the
/// module docs for the NaN deviation.
pub fn compress_approx(bits: u32) -> u16 {
    let sign = bits & Binary32::SIGN_MASK;
    let mag = bits ^ sign;
    let value = float_from_bits(mag);

    let out: u16 = if !(value < f32::INFINITY) {
        // Inf or NaN: fold the exponent field down and keep the top
        // mantissa bits. NaNs with an empty top mantissa chunk become Inf.
        (((mag ^ EXP_FLIP) >> 13) & 0x7FFF) as u16
    } else {
        let clamp = float_from_bits(CLAMP_BITS);
        let clamped = if value > clamp { clamp } else { value };
        let scaled = clamped * float_from_bits(MAGIC_BITS);
        (bits_from_float(scaled) >> 13) as u16
    };

    out | (sign >> 16) as u16
}
