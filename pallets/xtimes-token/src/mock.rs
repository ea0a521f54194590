use crate as pallet_xtimes_token;
use frame_support::{
    derive_impl,
    traits::{ConstU32, ConstU64},
};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        XTimesToken: pallet_xtimes_token,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type DbWeight = ();
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = ConstU64<250>;
    type Version = ();
    type PalletInfo = PalletInfo;
    type AccountData = ();
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = ();
    type OnSetCode = ();
    type MaxConsumers = ConstU32<16>;
}

impl pallet_xtimes_token::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type WeightInfo = ();
}

/// One whole token at 18 decimals.
pub const UNIT: u128 = 1_000_000_000_000_000_000;
pub const MAX_SUPPLY: u128 = 1_000_000 * UNIT;

pub const OWNER: u64 = 1;
pub const TREASURER: u64 = 2;
pub const SECRETARY: u64 = 3;
pub const TREASURY: u64 = 10;
pub const HOLDER: u64 = 20;
pub const STRANGER: u64 = 99;

/// Genesis with only the owner and metadata set, as right after deployment.
pub fn fresh_genesis() -> pallet_xtimes_token::GenesisConfig<Test> {
    pallet_xtimes_token::GenesisConfig::<Test> {
        owner: Some(OWNER),
        token_name: b"XTimes".to_vec(),
        token_symbol: b"XTMS".to_vec(),
        decimals: 18,
        max_supply: MAX_SUPPLY,
        ..Default::default()
    }
}

/// Genesis with treasury established and both roles appointed, no supply.
pub fn operational_genesis() -> pallet_xtimes_token::GenesisConfig<Test> {
    pallet_xtimes_token::GenesisConfig::<Test> {
        treasury: Some(TREASURY),
        treasurer: Some(TREASURER),
        secretary: Some(SECRETARY),
        ..fresh_genesis()
    }
}

pub fn build_ext(config: pallet_xtimes_token::GenesisConfig<Test>) -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();
    config.assimilate_storage(&mut t).unwrap();

    let mut ext: sp_io::TestExternalities = t.into();
    ext.execute_with(|| System::set_block_number(1));
    ext
}

// Build genesis storage according to the mock runtime.
pub fn new_test_ext() -> sp_io::TestExternalities {
    build_ext(fresh_genesis())
}

pub fn operational_ext() -> sp_io::TestExternalities {
    build_ext(operational_genesis())
}
