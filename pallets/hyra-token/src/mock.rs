use crate as pallet_hyra_token;
use frame_support::{
    derive_impl, parameter_types,
    traits::{ConstU32, ConstU64},
};
use hyra_primitives::Balance;
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};

type Block = frame_system::mocking::MockBlock<Test>;

pub const INITIATOR: u64 = 1;
pub const MANAGER: u64 = 2;
pub const MINTER: u64 = 3;
pub const VERIFIER: u64 = 4;
pub const POOL: u64 = 20;
pub const OUTSIDER: u64 = 99;

pub const INITIAL_SUPPLY: Balance = 100_000;
pub const MAX_SUPPLY: Balance = 1_000_000;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        Roles: pallet_hyra_roles,
        HyraToken: pallet_hyra_token,
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

impl pallet_hyra_roles::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type WeightInfo = ();
}

parameter_types! {
    pub const MaxSupply: Balance = MAX_SUPPLY;
    pub const InitialSupply: Balance = INITIAL_SUPPLY;
}

impl pallet_hyra_token::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type Roles = Roles;
    type MaxSupply = MaxSupply;
    type InitialSupply = InitialSupply;
    type WeightInfo = ();
}

fn build(genesis: pallet_hyra_token::GenesisConfig<Test>) -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();
    genesis.assimilate_storage(&mut t).unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| System::set_block_number(1));
    ext
}

/// Ledger initialized at genesis with the four founders above.
pub fn new_test_ext() -> sp_io::TestExternalities {
    build(pallet_hyra_token::GenesisConfig::<Test> {
        initiator: Some(INITIATOR),
        manager: Some(MANAGER),
        minter: Some(MINTER),
        verifier: Some(VERIFIER),
    })
}

/// Ledger waiting for `initialize`.
pub fn new_uninitialized_ext() -> sp_io::TestExternalities {
    build(Default::default())
}

/// Registers and verifies `POOL` so it can receive mints.
pub fn setup_verified_pool() {
    frame_support::assert_ok!(HyraToken::add_pool(
        RuntimeOrigin::signed(INITIATOR),
        b"Ecosystem".to_vec(),
        POOL
    ));
    frame_support::assert_ok!(HyraToken::verify_pool(RuntimeOrigin::signed(VERIFIER), POOL));
}
