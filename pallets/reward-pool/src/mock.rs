use crate as pallet_reward_pool;
use codec::{Decode, DecodeWithMemTracking, Encode};
use frame_support::{
    derive_impl, parameter_types,
    traits::{ConstU128, ConstU32, ConstU64},
    PalletId,
};
use hyra_primitives::{bill_digest, Balance, BillNonce, RecoverSigner, Role, UNIT};
use scale_info::TypeInfo;
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage, RuntimeDebug,
};

type Block = frame_system::mocking::MockBlock<Test>;

pub const ADMIN: u64 = 1;
pub const MANAGER: u64 = 2;
pub const SIGNER: u64 = 3;
pub const VERIFIER: u64 = 4;
pub const DELIVERER: u64 = 5;
pub const DISTRIBUTOR: u64 = 6;
pub const RECIPIENT: u64 = 7;
pub const FUNDER: u64 = 8;
pub const OUTSIDER: u64 = 99;

/// One hour into a UTC day, in milliseconds.
pub const START_MS: u64 = 1_700_010_000_000;
pub const FUNDER_BALANCE: Balance = 1_000_000 * UNIT;

frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        Timestamp: pallet_timestamp,
        Balances: pallet_balances,
        Roles: pallet_hyra_roles,
        RewardPool: pallet_reward_pool,
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
    type AccountData = pallet_balances::AccountData<Balance>;
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = ();
    type OnSetCode = ();
    type MaxConsumers = ConstU32<16>;
}

impl pallet_timestamp::Config for Test {
    type Moment = u64;
    type OnTimestampSet = ();
    type MinimumPeriod = ConstU64<1>;
    type WeightInfo = ();
}

#[derive_impl(pallet_balances::config_preludes::TestDefaultConfig)]
impl pallet_balances::Config for Test {
    type Balance = Balance;
    type ExistentialDeposit = ConstU128<1>;
    type AccountStore = System;
}

impl pallet_hyra_roles::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type WeightInfo = ();
}

/// Deterministic stand-in for an ECDSA signature: names its signer and the digest it
/// covers.
#[derive(Encode, Decode, DecodeWithMemTracking, TypeInfo, Clone, PartialEq, Eq, RuntimeDebug)]
pub struct MockBillSignature {
    pub signer: u64,
    pub digest: [u8; 32],
}

pub struct MockRecovery;
impl RecoverSigner<u64> for MockRecovery {
    type Signature = MockBillSignature;

    fn recover(digest: &[u8; 32], signature: &MockBillSignature) -> Option<u64> {
        (signature.digest == *digest).then_some(signature.signer)
    }
}

parameter_types! {
    pub const RewardPoolPalletId: PalletId = PalletId(*b"hyra/rwd");
    pub const DistributionInterval: u64 = hyra_primitives::DISTRIBUTION_INTERVAL;
}

impl pallet_reward_pool::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type Roles = Roles;
    type NativeCurrency = Balances;
    type UnixTime = Timestamp;
    type BillSignature = MockBillSignature;
    type SignatureRecovery = MockRecovery;
    type PalletId = RewardPoolPalletId;
    type DistributionInterval = DistributionInterval;
    type WeightInfo = ();
    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper = MockBenchmarkHelper;
}

#[cfg(feature = "runtime-benchmarks")]
pub struct MockBenchmarkHelper;

#[cfg(feature = "runtime-benchmarks")]
impl pallet_reward_pool::BenchmarkHelper<u64, MockBillSignature> for MockBenchmarkHelper {
    fn sign_bill(digest: &[u8; 32]) -> (u64, MockBillSignature) {
        (SIGNER, MockBillSignature { signer: SIGNER, digest: *digest })
    }
}

fn build(genesis: pallet_reward_pool::GenesisConfig<Test>) -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_balances::GenesisConfig::<Test> {
        balances: vec![(FUNDER, FUNDER_BALANCE), (MANAGER, UNIT)],
        dev_accounts: None,
    }
    .assimilate_storage(&mut t)
    .unwrap();

    pallet_hyra_roles::GenesisConfig::<Test> {
        members: vec![(Role::Admin, ADMIN), (Role::Distributor, DISTRIBUTOR)],
    }
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

/// Pool initialized at genesis with the operators above and an empty pot.
pub fn new_test_ext() -> sp_io::TestExternalities {
    build(pallet_reward_pool::GenesisConfig::<Test> {
        manager: Some(MANAGER),
        signer: Some(SIGNER),
        verifier: Some(VERIFIER),
        deliverer: Some(DELIVERER),
    })
}

pub fn new_uninitialized_ext() -> sp_io::TestExternalities {
    build(Default::default())
}

pub fn advance_secs(secs: u64) {
    Timestamp::set_timestamp(pallet_timestamp::Now::<Test>::get() + secs * 1_000);
}

pub fn nonce(raw: &str) -> BillNonce {
    raw.as_bytes().to_vec().try_into().unwrap()
}

pub fn sign_bill(signer: u64, recipient: u64, amount: Balance, nonce: &BillNonce) -> MockBillSignature {
    MockBillSignature { signer, digest: bill_digest(&recipient, amount, nonce) }
}

pub fn verify(recipient: u64, raw_nonce: &str) {
    frame_support::assert_ok!(RewardPool::verify_user_bill(
        RuntimeOrigin::signed(VERIFIER),
        recipient,
        nonce(raw_nonce)
    ));
}

/// Submits a bill signed by the bill signer, without verifying it first.
pub fn submit(recipient: u64, amount: Balance, raw_nonce: &str) -> sp_runtime::DispatchResult {
    let nonce = nonce(raw_nonce);
    let signature = sign_bill(SIGNER, recipient, amount, &nonce);
    RewardPool::deliver_rewards(RuntimeOrigin::signed(DELIVERER), recipient, 1, amount, nonce, signature)
}

/// Verifies and delivers a bill signed by the bill signer.
pub fn deliver(recipient: u64, amount: Balance, raw_nonce: &str) -> sp_runtime::DispatchResult {
    verify(recipient, raw_nonce);
    submit(recipient, amount, raw_nonce)
}

pub fn fund_pot(amount: Balance) {
    frame_support::assert_ok!(RewardPool::fund(RuntimeOrigin::signed(FUNDER), amount));
}
