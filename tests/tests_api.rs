// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Umbrella-level API tests: the re-exported surface and the configuration
//! string/JSON forms consumers select a precision policy with.

use hemi::prelude::*;

#[test]
fn test_prelude_surface() {
    let h = encode(3.140625);
    assert_eq!(h, 0x4248);
    assert_eq!(decode(h), 3.140625);

    assert_eq!(float_to_half(1.0f32.to_bits(), RoundingMode::NearestEven), 0x3C00);
    assert_eq!(half_to_float(0xBC00), (-1.0f32).to_bits());

    let backend = Backend::active();
    assert!(matches!(backend, Backend::Hardware | Backend::Software));
}

#[test]
fn test_mode_from_config_strings() {
    assert_eq!(RoundingMode::from_str("nearest-even"), Ok(RoundingMode::NearestEven));
    assert_eq!(RoundingMode::from_str("ties-away"), Ok(RoundingMode::TiesAway));
    assert!(RoundingMode::from_str("float64").is_err());
    assert_eq!(RoundingMode::default().as_str(), "nearest-even");
}

#[test]
fn test_mode_from_json_config() {
    // Physiology-style configuration fragment
    let config: serde_json::Value =
        serde_json::from_str(r#"{ "precision": "fp16", "rounding": "ties-away" }"#).unwrap();
    let mode: RoundingMode =
        serde_json::from_value(config["rounding"].clone()).unwrap();
    assert_eq!(mode, RoundingMode::TiesAway);

    assert_eq!(serde_json::to_string(&RoundingMode::NearestEven).unwrap(), "\"nearest-even\"");
    assert_eq!(serde_json::to_string(&Strategy::Fast3NearestEven).unwrap(), "\"fast3-nearest-even\"");
}

#[test]
fn test_strategy_family_cross_check() {
    // A quick family agreement check through the umbrella re-exports; the
    // member crates carry the deep sweeps.
    for value in [0.0f32, 1.0, -1.0, 0.1, 65504.0, 6.1e-5, -2.5e-8] {
        let bits = value.to_bits();
        assert_eq!(
            Strategy::ReferenceNearestEven.compress(bits),
            Strategy::Fast3NearestEven.compress(bits),
            "{value}"
        );
        assert_eq!(Strategy::ReferenceNearestEven.compress(bits), encode(value), "{value}");
    }
}
