multiversx_sc::imports!();

use crate::errors::{ERR_ARITHMETIC_OVERFLOW, ERR_ORACLE_DATA};
use crate::price_feed_proxy::PriceFeedProxy;

/// EGLD is denominated in 18 decimals
pub const NATIVE_DECIMALS: u8 = 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionError {
    /// Zero or negative answer, or one that truncates to zero once aligned
    NonPositivePrice,
    /// A decimal scale factor does not fit into an i64
    ScaleOverflow,
}

impl ConversionError {
    pub fn message(&self) -> &'static str {
        match self {
            ConversionError::NonPositivePrice => ERR_ORACLE_DATA,
            ConversionError::ScaleOverflow => ERR_ARITHMETIC_OVERFLOW,
        }
    }
}

/// Largest exponent whose power of ten the managed number API can build
/// from a machine integer (10^18 <= i64::MAX < 10^19).
pub const MAX_SCALE_EXPONENT: u8 = 18;

fn scale_factor<M: ManagedTypeApi>(exponent: u8) -> Result<BigUint<M>, ConversionError> {
    if exponent > MAX_SCALE_EXPONENT {
        return Err(ConversionError::ScaleOverflow);
    }
    Ok(BigUint::from(10u64.pow(u32::from(exponent))))
}

/// Re-expresses an oracle answer with `target_decimals` decimals.
/// Extra oracle precision is truncated.
pub fn align_price<M: ManagedTypeApi>(
    price: &BigInt<M>,
    oracle_decimals: u8,
    target_decimals: u8,
) -> Result<BigUint<M>, ConversionError> {
    if price.sign() != Sign::Plus {
        return Err(ConversionError::NonPositivePrice);
    }

    let magnitude = price.magnitude();
    let aligned = if oracle_decimals <= target_decimals {
        magnitude * scale_factor::<M>(target_decimals - oracle_decimals)?
    } else {
        magnitude / scale_factor::<M>(oracle_decimals - target_decimals)?
    };

    if aligned == 0u64 {
        return Err(ConversionError::NonPositivePrice);
    }
    Ok(aligned)
}

/// Converts `amount` (smallest native unit) into the reference currency,
/// expressed with `native_decimals` decimals.
///
/// `reference = aligned_price * amount / 10^native_decimals`, multiplying
/// before dividing so sub-unit amounts keep their precision.
pub fn convert_to_reference<M: ManagedTypeApi>(
    amount: &BigUint<M>,
    price: &BigInt<M>,
    oracle_decimals: u8,
    native_decimals: u8,
) -> Result<BigUint<M>, ConversionError> {
    let aligned_price = align_price(price, oracle_decimals, native_decimals)?;
    let native_unit = scale_factor::<M>(native_decimals)?;
    Ok((&aligned_price * amount) / &native_unit)
}

#[multiversx_sc::module]
pub trait PriceConverterModule {
    /// Latest answer and its decimal precision, read from the bound feed.
    fn latest_price_reading(&self) -> (BigInt, u8) {
        let feed = self.price_feed().get();

        let round: MultiValue5<u64, BigInt, u64, u64, u64> = self
            .tx()
            .to(&feed)
            .typed(PriceFeedProxy)
            .latest_round_data()
            .returns(ReturnsResult)
            .sync_call();
        let (_round_id, answer, _started_at, _updated_at, _answered_in_round) = round.into_tuple();

        let decimals: u8 = self
            .tx()
            .to(&feed)
            .typed(PriceFeedProxy)
            .decimals()
            .returns(ReturnsResult)
            .sync_call();

        (answer, decimals)
    }

    fn aligned_price(&self) -> BigUint {
        let (price, decimals) = self.latest_price_reading();
        match align_price(&price, decimals, NATIVE_DECIMALS) {
            Ok(aligned) => aligned,
            Err(err) => sc_panic!(err.message()),
        }
    }

    fn conversion_rate(&self, amount: &BigUint) -> BigUint {
        let (price, decimals) = self.latest_price_reading();
        match convert_to_reference(amount, &price, decimals, NATIVE_DECIMALS) {
            Ok(reference_amount) => reference_amount,
            Err(err) => sc_panic!(err.message()),
        }
    }

    fn price_feed_version(&self) -> u64 {
        let feed = self.price_feed().get();
        self.tx()
            .to(&feed)
            .typed(PriceFeedProxy)
            .version()
            .returns(ReturnsResult)
            .sync_call()
    }

    #[storage_mapper("priceFeed")]
    fn price_feed(&self) -> SingleValueMapper<ManagedAddress>;
}
