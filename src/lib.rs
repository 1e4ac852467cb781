#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod fund_me_proxy;
pub mod price_converter;
pub mod price_feed_proxy;

use errors::{ERR_FUNDER_INDEX, ERR_INSUFFICIENT_CONTRIBUTION, ERR_INVALID_ADDRESS, ERR_NOT_OWNER};

// ============================================================
// Constants
// ============================================================

/// Minimum contribution, in whole USD
const MINIMUM_USD: u64 = 50;

/// One USD in the 18-decimal reference unit the converter reports
const REFERENCE_UNIT: u64 = 1_000_000_000_000_000_000;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait FundMe: price_converter::PriceConverterModule {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, price_feed: ManagedAddress) {
        require!(
            !price_feed.is_zero() && self.blockchain().is_smart_contract(&price_feed),
            ERR_INVALID_ADDRESS
        );

        let caller = self.blockchain().get_caller();
        self.owner().set(&caller);
        self.price_feed().set(&price_feed);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINTS: fund / receive / fallback
    // Three ways in, one accounting path.
    // ========================================================

    #[endpoint(fund)]
    #[payable("EGLD")]
    fn fund(&self) {
        self.fund_internal();
    }

    /// Plain EGLD transfer with no call data.
    #[endpoint(receive)]
    #[payable("EGLD")]
    fn receive(&self) {
        self.fund_internal();
    }

    /// EGLD transfer carrying any number of data arguments. The data is not
    /// interpreted.
    #[endpoint(fallback)]
    #[payable("EGLD")]
    fn fallback(&self, _data: MultiValueEncoded<ManagedBuffer>) {
        self.fund_internal();
    }

    // ========================================================
    // ENDPOINT: withdraw
    // Reads funder count and entries straight from storage.
    // ========================================================

    #[endpoint(withdraw)]
    fn withdraw(&self) {
        self.require_owner();

        let mut funder_index = 1usize;
        while funder_index <= self.funders().len() {
            let funder = self.funders().get(funder_index);
            self.address_to_amount_funded(&funder).clear();
            funder_index += 1;
        }

        let funders_cleared = self.funders().len();
        self.funders().clear();

        self.pay_out_to_owner(funders_cleared);
    }

    // ========================================================
    // ENDPOINT: cheaperWithdraw
    // Same outcome as withdraw, but loads the funder list once
    // and sweeps a local copy.
    // ========================================================

    #[endpoint(cheaperWithdraw)]
    fn cheaper_withdraw(&self) {
        self.require_owner();

        let mut funders_mapper = self.funders();
        let mut funders: ManagedVec<ManagedAddress> = ManagedVec::new();
        for funder in funders_mapper.iter() {
            funders.push(funder);
        }

        for funder in funders.iter() {
            self.address_to_amount_funded(&funder).clear();
        }
        funders_mapper.clear();

        self.pay_out_to_owner(funders.len());
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn fund_internal(&self) {
        let funder = self.blockchain().get_caller();
        let amount = self.call_value().egld_value().clone_value();

        let reference_amount = self.conversion_rate(&amount);
        require!(
            reference_amount >= self.minimum_usd(),
            ERR_INSUFFICIENT_CONTRIBUTION
        );

        self.address_to_amount_funded(&funder)
            .update(|funded| *funded += &amount);
        self.funders().push(&funder);

        self.fund_event(&funder, &amount, &reference_amount);
    }

    /// Accounting must already be cleared: the transfer is the last effect.
    fn pay_out_to_owner(&self, funders_cleared: usize) {
        let owner = self.owner().get();
        let amount = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);

        self.withdraw_event(&owner, funders_cleared as u64, &amount);
        self.send().direct_non_zero_egld(&owner, &amount);
    }

    fn require_owner(&self) {
        require!(
            self.blockchain().get_caller() == self.owner().get(),
            ERR_NOT_OWNER
        );
    }

    fn minimum_usd(&self) -> BigUint {
        BigUint::from(MINIMUM_USD) * BigUint::from(REFERENCE_UNIT)
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getAddressToAmountFunded)]
    fn get_address_to_amount_funded(&self, funder: &ManagedAddress) -> BigUint {
        self.address_to_amount_funded(funder).get()
    }

    /// Zero-based position in the funder list.
    #[view(getFunder)]
    fn get_funder(&self, index: usize) -> ManagedAddress {
        require!(index < self.funders().len(), ERR_FUNDER_INDEX);
        self.funders().get(index + 1)
    }

    #[view(getFunders)]
    fn get_funders(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for funder in self.funders().iter() {
            result.push(funder);
        }
        result
    }

    #[view(getFundersCount)]
    fn get_funders_count(&self) -> usize {
        self.funders().len()
    }

    #[view(getOwner)]
    fn get_owner(&self) -> ManagedAddress {
        self.owner().get()
    }

    #[view(getPriceFeed)]
    fn get_price_feed(&self) -> ManagedAddress {
        self.price_feed().get()
    }

    #[view(getMinimumUsd)]
    fn get_minimum_usd(&self) -> BigUint {
        self.minimum_usd()
    }

    #[view(getVersion)]
    fn get_version(&self) -> u64 {
        self.price_feed_version()
    }

    /// Latest feed answer with 18 decimals.
    #[view(getPrice)]
    fn get_price(&self) -> BigUint {
        self.aligned_price()
    }

    #[view(getConversionRate)]
    fn get_conversion_rate(&self, amount: BigUint) -> BigUint {
        self.conversion_rate(&amount)
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("fund")]
    fn fund_event(
        &self,
        #[indexed] funder: &ManagedAddress,
        #[indexed] amount: &BigUint,
        reference_amount: &BigUint,
    );

    #[event("withdraw")]
    fn withdraw_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] funders_cleared: u64,
        amount: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("addressToAmountFunded")]
    fn address_to_amount_funded(&self, funder: &ManagedAddress) -> SingleValueMapper<BigUint>;

    /// Append-only between withdrawals; repeat funders appear once per call.
    #[storage_mapper("funders")]
    fn funders(&self) -> VecMapper<ManagedAddress>;
}
