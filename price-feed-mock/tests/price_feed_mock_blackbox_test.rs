use multiversx_sc_scenario::imports::*;
use price_feed_mock::price_feed_mock_proxy::PriceFeedMockProxy;

const CODE_PATH: MxscPath = MxscPath::new("output/price-feed-mock.mxsc.json");

const OWNER: TestAddress = TestAddress::new("owner");
const PRICE_FEED_ADDRESS: TestSCAddress = TestSCAddress::new("price-feed");

const FEED_DECIMALS: u8 = 8;
const FEED_ANSWER: i64 = 2_000_00000000;
const DEPLOY_TIMESTAMP: u64 = 1_000;

fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();
    blockchain.register_contract(CODE_PATH, price_feed_mock::ContractBuilder);
    blockchain
}

fn deployed() -> ScenarioWorld {
    let mut world = world();
    world.account(OWNER).nonce(1);
    world.current_block().block_timestamp(DEPLOY_TIMESTAMP);

    world
        .tx()
        .from(OWNER)
        .typed(PriceFeedMockProxy)
        .init(FEED_DECIMALS, BigInt::<StaticApi>::from(FEED_ANSWER))
        .code(CODE_PATH)
        .new_address(PRICE_FEED_ADDRESS)
        .run();
    world
}

fn round(world: &mut ScenarioWorld, round_id: u64) -> (u64, BigInt<StaticApi>, u64, u64, u64) {
    world
        .query()
        .to(PRICE_FEED_ADDRESS)
        .typed(PriceFeedMockProxy)
        .get_round_data(round_id)
        .returns(ReturnsResult)
        .run()
        .into_tuple()
}

fn latest_answer(world: &mut ScenarioWorld) -> BigInt<StaticApi> {
    world
        .query()
        .to(PRICE_FEED_ADDRESS)
        .typed(PriceFeedMockProxy)
        .latest_answer()
        .returns(ReturnsResult)
        .run()
}

#[test]
fn test_init_opens_first_round() {
    let mut world = deployed();

    world
        .query()
        .to(PRICE_FEED_ADDRESS)
        .typed(PriceFeedMockProxy)
        .decimals()
        .returns(ExpectValue(FEED_DECIMALS))
        .run();
    world
        .query()
        .to(PRICE_FEED_ADDRESS)
        .typed(PriceFeedMockProxy)
        .description()
        .returns(ExpectValue(ManagedBuffer::<StaticApi>::from("EGLD / USD mock feed")))
        .run();

    assert_eq!(latest_answer(&mut world), BigInt::from(FEED_ANSWER));

    let (round_id, answer, started_at, updated_at, answered_in_round) = round(&mut world, 1);
    assert_eq!(round_id, 1);
    assert_eq!(answer, BigInt::from(FEED_ANSWER));
    assert_eq!(started_at, DEPLOY_TIMESTAMP);
    assert_eq!(updated_at, DEPLOY_TIMESTAMP);
    assert_eq!(answered_in_round, 1);
}

#[test]
fn test_update_round_data_sets_latest_round() {
    let mut world = deployed();

    world
        .tx()
        .from(OWNER)
        .to(PRICE_FEED_ADDRESS)
        .typed(PriceFeedMockProxy)
        .update_round_data(7u64, BigInt::<StaticApi>::from(-5i64), 900u64, 800u64)
        .run();

    assert_eq!(latest_answer(&mut world), BigInt::from(-5i64));

    let (round_id, answer, started_at, updated_at, answered_in_round): (
        u64,
        BigInt<StaticApi>,
        u64,
        u64,
        u64,
    ) = world
        .query()
        .to(PRICE_FEED_ADDRESS)
        .typed(PriceFeedMockProxy)
        .latest_round_data()
        .returns(ReturnsResult)
        .run()
        .into_tuple();
    assert_eq!(round_id, 7);
    assert_eq!(answer, BigInt::from(-5i64));
    assert_eq!(started_at, 800);
    assert_eq!(updated_at, 900);
    assert_eq!(answered_in_round, 7);

    // earlier rounds stay readable
    let (_, answer, ..) = round(&mut world, 1);
    assert_eq!(answer, BigInt::from(FEED_ANSWER));
}

#[test]
fn test_update_answer_follows_latest_round() {
    let mut world = deployed();

    world
        .tx()
        .from(OWNER)
        .to(PRICE_FEED_ADDRESS)
        .typed(PriceFeedMockProxy)
        .update_round_data(7u64, BigInt::<StaticApi>::from(FEED_ANSWER), 900u64, 800u64)
        .run();

    world.current_block().block_timestamp(2_000);
    world
        .tx()
        .from(OWNER)
        .to(PRICE_FEED_ADDRESS)
        .typed(PriceFeedMockProxy)
        .update_answer(BigInt::<StaticApi>::from(3_000_00000000i64))
        .run();

    let (round_id, answer, started_at, updated_at, _) = round(&mut world, 8);
    assert_eq!(round_id, 8);
    assert_eq!(answer, BigInt::from(3_000_00000000i64));
    assert_eq!(started_at, 2_000);
    assert_eq!(updated_at, 2_000);
    assert_eq!(latest_answer(&mut world), BigInt::from(3_000_00000000i64));
}
