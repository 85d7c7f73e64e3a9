use narwhal_math::*;
use soroban_sdk::Env;

const UNIT: i128 = 10_000_000;

// ============================================================
// BASIC PRICING
// ============================================================

#[test]
fn test_amount_out_small_trade() {
    let env = Env::default();
    // 1000 in against 100k / 100k at 0.3%
    assert_eq!(get_amount_out(&env, 1000, 100_000, 100_000, 30), Some(987));
}

#[test]
fn test_amount_out_matches_997_form() {
    let env = Env::default();

    let cases: [(i128, i128, i128); 4] = [
        (1_000, 100_000, 100_000),
        (3_500 * UNIT, 3_500_000 * UNIT, 1_000 * UNIT),
        (1_000_000_000, 5_000_000_000_000, 2_000_000_000_000),
        (7, 13, 17),
    ];

    for (amount_in, reserve_in, reserve_out) in cases {
        let expected = amount_in * 997 * reserve_out / (reserve_in * 1000 + amount_in * 997);
        assert_eq!(
            get_amount_out(&env, amount_in, reserve_in, reserve_out, 30),
            Some(expected),
            "30 bps must equal the 997/1000 formula"
        );
    }
}

#[test]
fn test_amount_out_known_values() {
    let env = Env::default();
    assert_eq!(
        get_amount_out(&env, 1_000_000_000, 5_000_000_000_000, 2_000_000_000_000, 30),
        Some(398_720_495)
    );
    assert_eq!(
        get_amount_out(&env, 3_500 * UNIT, 3_500_000 * UNIT, 1_000 * UNIT, 30),
        Some(9_960_069)
    );
}

#[test]
fn test_zero_fee_is_plain_constant_product() {
    let env = Env::default();
    // 100 * 1000 / (1000 + 100) = 90.9
    assert_eq!(get_amount_out(&env, 100, 1000, 1000, 0), Some(90));
}

// ============================================================
// EDGE CASES
// ============================================================

#[test]
fn test_rejects_non_positive_inputs() {
    let env = Env::default();
    assert_eq!(get_amount_out(&env, 0, 1000, 1000, 30), None);
    assert_eq!(get_amount_out(&env, -5, 1000, 1000, 30), None);
    assert_eq!(get_amount_out(&env, 10, 0, 1000, 30), None);
    assert_eq!(get_amount_out(&env, 10, 1000, 0, 30), None);
}

#[test]
fn test_rejects_full_fee() {
    let env = Env::default();
    assert_eq!(get_amount_out(&env, 10, 1000, 1000, 10_000), None);
    assert_eq!(get_amount_out(&env, 10, 1000, 1000, 20_000), None);
}

#[test]
fn test_large_reserves_do_not_overflow() {
    let env = Env::default();
    let big: i128 = 1_000_000_000_000_000_000_000_000_000_000;
    let out = get_amount_out(&env, big, big, big, 30).unwrap();
    assert!(out > 0);
    assert!(out < big);
}

#[test]
fn test_output_never_drains_reserve() {
    let env = Env::default();
    let out = get_amount_out(&env, 1_000_000 * UNIT, 1_000 * UNIT, 1_000 * UNIT, 30).unwrap();
    assert!(out < 1_000 * UNIT);
}
