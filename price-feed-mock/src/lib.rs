#![no_std]

multiversx_sc::imports!();

pub mod price_feed_mock_proxy;

/// Aggregator interface version reported to consumers
const VERSION: u64 = 0;

/// AggregatorV3-style feed with a settable answer. Test deployments only:
/// every endpoint is open to any caller.
#[multiversx_sc::contract]
pub trait PriceFeedMock {
    #[init]
    fn init(&self, decimals: u8, initial_answer: BigInt) {
        self.decimals_value().set(decimals);
        self.update_answer(initial_answer);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Publishes `answer` as a new round stamped with the current block time.
    #[endpoint(updateAnswer)]
    fn update_answer(&self, answer: BigInt) {
        let round_id = self.latest_round().get() + 1;
        let now = self.blockchain().get_block_timestamp();
        self.store_round(round_id, &answer, now, now);
    }

    #[endpoint(updateRoundData)]
    fn update_round_data(&self, round_id: u64, answer: BigInt, timestamp: u64, started_at: u64) {
        self.store_round(round_id, &answer, timestamp, started_at);
    }

    fn store_round(&self, round_id: u64, answer: &BigInt, timestamp: u64, started_at: u64) {
        self.latest_round().set(round_id);
        self.answers(round_id).set(answer);
        self.timestamps(round_id).set(timestamp);
        self.started_at(round_id).set(started_at);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(decimals)]
    fn decimals(&self) -> u8 {
        self.decimals_value().get()
    }

    #[view(version)]
    fn version(&self) -> u64 {
        VERSION
    }

    #[view(description)]
    fn description(&self) -> ManagedBuffer {
        ManagedBuffer::from("EGLD / USD mock feed")
    }

    #[view(latestAnswer)]
    fn latest_answer(&self) -> BigInt {
        self.answers(self.latest_round().get()).get()
    }

    /// (round_id, answer, started_at, updated_at, answered_in_round)
    #[view(latestRoundData)]
    fn latest_round_data(&self) -> MultiValue5<u64, BigInt, u64, u64, u64> {
        self.get_round_data(self.latest_round().get())
    }

    #[view(getRoundData)]
    fn get_round_data(&self, round_id: u64) -> MultiValue5<u64, BigInt, u64, u64, u64> {
        (
            round_id,
            self.answers(round_id).get(),
            self.started_at(round_id).get(),
            self.timestamps(round_id).get(),
            round_id,
        )
            .into()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("decimals")]
    fn decimals_value(&self) -> SingleValueMapper<u8>;

    #[storage_mapper("latestRound")]
    fn latest_round(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("answers")]
    fn answers(&self, round_id: u64) -> SingleValueMapper<BigInt>;

    #[storage_mapper("timestamps")]
    fn timestamps(&self, round_id: u64) -> SingleValueMapper<u64>;

    #[storage_mapper("startedAt")]
    fn started_at(&self, round_id: u64) -> SingleValueMapper<u64>;
}
