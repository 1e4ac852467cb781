use fund_me::errors::{ERR_ARITHMETIC_OVERFLOW, ERR_ORACLE_DATA};
use fund_me::price_converter::{
    align_price, convert_to_reference, ConversionError, MAX_SCALE_EXPONENT, NATIVE_DECIMALS,
};
use multiversx_sc_scenario::imports::*;

const ONE_EGLD: u64 = 1_000_000_000_000_000_000;

/// 2000 USD with the 8 decimals a typical USD feed reports
const FEED_ANSWER: i64 = 2_000_00000000;
const FEED_DECIMALS: u8 = 8;

fn usd(whole: u64) -> BigUint<StaticApi> {
    BigUint::from(whole) * BigUint::from(ONE_EGLD)
}

fn feed_answer() -> BigInt<StaticApi> {
    BigInt::from(FEED_ANSWER)
}

#[test]
fn test_one_egld_converts_at_feed_price() {
    let converted = convert_to_reference(
        &BigUint::from(ONE_EGLD),
        &feed_answer(),
        FEED_DECIMALS,
        NATIVE_DECIMALS,
    )
    .unwrap();
    assert_eq!(converted, usd(2_000));
}

#[test]
fn test_smallest_unit_keeps_precision() {
    // 1 * 2000e18 / 1e18: dividing first would round this down to zero
    let converted = convert_to_reference(
        &BigUint::from(1u64),
        &feed_answer(),
        FEED_DECIMALS,
        NATIVE_DECIMALS,
    )
    .unwrap();
    assert_eq!(converted, 2_000u64);
}

#[test]
fn test_zero_amount_converts_to_zero() {
    let converted = convert_to_reference(
        &BigUint::zero(),
        &feed_answer(),
        FEED_DECIMALS,
        NATIVE_DECIMALS,
    )
    .unwrap();
    assert_eq!(converted, 0u64);
}

#[test]
fn test_feed_with_more_decimals_than_native_is_truncated() {
    // 2000.5 USD with 20 decimals, aligned down to 18
    let price = BigInt::<StaticApi>::from(BigUint::from(20_005u64) * BigUint::from(10u64).pow(19));
    let aligned = align_price(&price, 20, NATIVE_DECIMALS).unwrap();
    assert_eq!(aligned, usd(2_000) + BigUint::from(ONE_EGLD / 2));
}

#[test]
fn test_price_is_aligned_to_native_decimals() {
    let aligned = align_price(&feed_answer(), FEED_DECIMALS, NATIVE_DECIMALS).unwrap();
    assert_eq!(aligned, usd(2_000));
}

#[test]
fn test_zero_price_is_rejected() {
    let err = convert_to_reference(
        &BigUint::from(ONE_EGLD),
        &BigInt::<StaticApi>::zero(),
        FEED_DECIMALS,
        NATIVE_DECIMALS,
    )
    .unwrap_err();
    assert_eq!(err, ConversionError::NonPositivePrice);
}

#[test]
fn test_negative_price_is_rejected() {
    let err = convert_to_reference(
        &BigUint::from(ONE_EGLD),
        &BigInt::<StaticApi>::from(-FEED_ANSWER),
        FEED_DECIMALS,
        NATIVE_DECIMALS,
    )
    .unwrap_err();
    assert_eq!(err, ConversionError::NonPositivePrice);
}

#[test]
fn test_price_truncated_to_zero_is_rejected() {
    let err = align_price(&BigInt::<StaticApi>::from(1i64), 20, NATIVE_DECIMALS).unwrap_err();
    assert_eq!(err, ConversionError::NonPositivePrice);
}

#[test]
fn test_largest_scale_gap_is_accepted() {
    // 2000 USD with 36 decimals, aligned down by 10^18
    let price = BigInt::<StaticApi>::from(BigUint::from(2_000u64) * BigUint::from(10u64).pow(36));
    let aligned = align_price(&price, NATIVE_DECIMALS + MAX_SCALE_EXPONENT, NATIVE_DECIMALS).unwrap();
    assert_eq!(aligned, usd(2_000));

    let aligned = align_price(&feed_answer(), 0, MAX_SCALE_EXPONENT).unwrap();
    assert_eq!(aligned, BigUint::from(FEED_ANSWER as u64) * BigUint::from(ONE_EGLD));
}

#[test]
fn test_scale_gap_past_the_limit_is_an_overflow() {
    let err = align_price(&feed_answer(), NATIVE_DECIMALS + MAX_SCALE_EXPONENT + 1, NATIVE_DECIMALS)
        .unwrap_err();
    assert_eq!(err, ConversionError::ScaleOverflow);

    let err = align_price(&feed_answer(), 0, MAX_SCALE_EXPONENT + 1).unwrap_err();
    assert_eq!(err, ConversionError::ScaleOverflow);

    // aligning 8 -> 19 is fine, the 10^19 native unit is not
    let err = convert_to_reference(
        &BigUint::<StaticApi>::from(ONE_EGLD),
        &feed_answer(),
        FEED_DECIMALS,
        MAX_SCALE_EXPONENT + 1,
    )
    .unwrap_err();
    assert_eq!(err, ConversionError::ScaleOverflow);
}

#[test]
fn test_error_messages() {
    assert_eq!(ConversionError::NonPositivePrice.message(), ERR_ORACLE_DATA);
    assert_eq!(ConversionError::ScaleOverflow.message(), ERR_ARITHMETIC_OVERFLOW);
}
