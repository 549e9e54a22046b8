use crate as pallet_upgrade_governor;
use frame_support::{
    derive_impl,
    traits::{ConstU32, ConstU64},
};
use hyra_primitives::{Role, REQUIRED_UPGRADE_APPROVALS, UPGRADE_DELAY};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};

type Block = frame_system::mocking::MockBlock<Test>;

pub const ADMIN: u64 = 1;
pub const CTO: u64 = 10;
pub const FINANCE: u64 = 11;
pub const CHAIRMAN: u64 = 12;
pub const OUTSIDER: u64 = 99;

pub const START_MS: u64 = 1_700_000_000_000;

frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        Timestamp: pallet_timestamp,
        Roles: pallet_hyra_roles,
        UpgradeGovernor: pallet_upgrade_governor,
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
    type OnSetCode = pallet_upgrade_governor::GovernedSetCode<Test>;
    type MaxConsumers = ConstU32<16>;
}

impl pallet_timestamp::Config for Test {
    type Moment = u64;
    type OnTimestampSet = ();
    type MinimumPeriod = ConstU64<1>;
    type WeightInfo = ();
}

impl pallet_hyra_roles::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type WeightInfo = ();
}

impl pallet_upgrade_governor::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type Roles = Roles;
    type UnixTime = Timestamp;
    type UpgradeDelay = ConstU64<UPGRADE_DELAY>;
    type RequiredApprovals = ConstU32<REQUIRED_UPGRADE_APPROVALS>;
    type WeightInfo = ();
}

fn build(genesis: pallet_upgrade_governor::GenesisConfig<Test>) -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_hyra_roles::GenesisConfig::<Test> { members: vec![(Role::Admin, ADMIN)] }
        .assimilate_storage(&mut t)
        .unwrap();
    genesis.assimilate_storage(&mut t).unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| {
        System::set_block_number(1);
        Timestamp::set_timestamp(START_MS);
    });
    ext
}

/// Governor with the three signers fixed at genesis.
pub fn new_test_ext() -> sp_io::TestExternalities {
    build(pallet_upgrade_governor::GenesisConfig::<Test> {
        cto: Some(CTO),
        finance: Some(FINANCE),
        chairman: Some(CHAIRMAN),
    })
}

pub fn new_uninitialized_ext() -> sp_io::TestExternalities {
    build(Default::default())
}

pub fn now_secs() -> u64 {
    pallet_timestamp::Now::<Test>::get() / 1_000
}

pub fn advance_secs(secs: u64) {
    Timestamp::set_timestamp(pallet_timestamp::Now::<Test>::get() + secs * 1_000);
}
