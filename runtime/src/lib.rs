#![cfg_attr(not(feature = "std"), no_std)]

//! Native composition of the Hyra pallets.
//!
//! Wires the role registry, the token ledger, the reward pool and the upgrade governor on
//! top of `frame_system`, `pallet-timestamp` (the clock) and `pallet-balances` (the native
//! currency held by the reward pool). Runtime code can only be replaced through the
//! governor: [`GovernedSetCode`] is the system `OnSetCode` hook.

extern crate alloc;

use alloc::borrow::Cow;
use frame_support::{
    construct_runtime, derive_impl, parameter_types,
    traits::{ConstU128, ConstU32, ConstU64, VariantCountOf},
    PalletId,
};
use hyra_primitives::{EcdsaRecovery, UNIT};
use pallet_upgrade_governor::GovernedSetCode;
use sp_runtime::{
    generic,
    traits::{BlakeTwo256, IdentifyAccount, Verify},
    MultiAddress, MultiSignature,
};
use sp_version::RuntimeVersion;

pub use hyra_primitives::Balance;


pub type Signature = MultiSignature;
pub type AccountId = <<Signature as Verify>::Signer as IdentifyAccount>::AccountId;
pub type Nonce = u32;
pub type BlockNumber = u32;
pub type Hash = sp_core::H256;

pub type Address = MultiAddress<AccountId, ()>;
pub type Header = generic::Header<BlockNumber, BlakeTwo256>;
pub type Block = generic::Block<Header, UncheckedExtrinsic>;

/// Checks applied to every signed extrinsic.
pub type TxExtension = (
    frame_system::CheckNonZeroSender<Runtime>,
    frame_system::CheckSpecVersion<Runtime>,
    frame_system::CheckTxVersion<Runtime>,
    frame_system::CheckGenesis<Runtime>,
    frame_system::CheckEra<Runtime>,
    frame_system::CheckNonce<Runtime>,
    frame_system::CheckWeight<Runtime>,
);

pub type UncheckedExtrinsic =
    generic::UncheckedExtrinsic<Address, RuntimeCall, Signature, TxExtension>;

pub const VERSION: RuntimeVersion = RuntimeVersion {
    spec_name: Cow::Borrowed("hyra"),
    impl_name: Cow::Borrowed("hyra"),
    authoring_version: 1,
    spec_version: 100,
    impl_version: 1,
    apis: Cow::Borrowed(&[]),
    transaction_version: 1,
    system_version: 1,
};

/// 0.001 HYRA
pub const EXISTENTIAL_DEPOSIT: Balance = UNIT / 1_000;

/// Block time in milliseconds.
pub const MILLISECS_PER_BLOCK: u64 = 6_000;

construct_runtime!(
    pub enum Runtime {
        System: frame_system,
        Timestamp: pallet_timestamp,
        Balances: pallet_balances,
        Roles: pallet_hyra_roles,
        HyraToken: pallet_hyra_token,
        RewardPool: pallet_reward_pool,
        UpgradeGovernor: pallet_upgrade_governor,
    }
);

parameter_types! {
    pub const Version: RuntimeVersion = VERSION;
    pub const BlockHashCount: BlockNumber = 2400;
    pub const SS58Prefix: u8 = 42;
}

#[derive_impl(frame_system::config_preludes::SolochainDefaultConfig)]
impl frame_system::Config for Runtime {
    type Block = Block;
    type AccountId = AccountId;
    type Nonce = Nonce;
    type Hash = Hash;
    type BlockHashCount = BlockHashCount;
    type Version = Version;
    type AccountData = pallet_balances::AccountData<Balance>;
    type SS58Prefix = SS58Prefix;
    type OnSetCode = GovernedSetCode<Runtime>;
    type MaxConsumers = ConstU32<16>;
}

impl pallet_timestamp::Config for Runtime {
    type Moment = u64;
    type OnTimestampSet = ();
    type MinimumPeriod = ConstU64<{ MILLISECS_PER_BLOCK / 2 }>;
    type WeightInfo = ();
}

impl pallet_balances::Config for Runtime {
    type MaxLocks = ConstU32<50>;
    type MaxReserves = ();
    type ReserveIdentifier = [u8; 8];
    type Balance = Balance;
    type RuntimeEvent = RuntimeEvent;
    type DustRemoval = ();
    type ExistentialDeposit = ConstU128<EXISTENTIAL_DEPOSIT>;
    type AccountStore = System;
    type WeightInfo = pallet_balances::weights::SubstrateWeight<Runtime>;
    type FreezeIdentifier = RuntimeFreezeReason;
    type MaxFreezes = VariantCountOf<RuntimeFreezeReason>;
    type RuntimeHoldReason = RuntimeHoldReason;
    type RuntimeFreezeReason = RuntimeFreezeReason;
    type DoneSlashHandler = ();
}

impl pallet_hyra_roles::Config for Runtime {
    type RuntimeEvent = RuntimeEvent;
    type WeightInfo = pallet_hyra_roles::weights::SubstrateWeight<Runtime>;
}

parameter_types! {
    pub const MaxSupply: Balance = hyra_primitives::MAX_SUPPLY;
    pub const InitialSupply: Balance = hyra_primitives::INITIAL_SUPPLY;
}

impl pallet_hyra_token::Config for Runtime {
    type RuntimeEvent = RuntimeEvent;
    type Roles = Roles;
    type MaxSupply = MaxSupply;
    type InitialSupply = InitialSupply;
    type WeightInfo = pallet_hyra_token::weights::SubstrateWeight<Runtime>;
}

parameter_types! {
    pub const RewardPoolPalletId: PalletId = PalletId(*b"hyra/rwd");
    pub const DistributionInterval: u64 = hyra_primitives::DISTRIBUTION_INTERVAL;
}

impl pallet_reward_pool::Config for Runtime {
    type RuntimeEvent = RuntimeEvent;
    type Roles = Roles;
    type NativeCurrency = Balances;
    type UnixTime = Timestamp;
    type BillSignature = sp_core::ecdsa::Signature;
    type SignatureRecovery = EcdsaRecovery;
    type PalletId = RewardPoolPalletId;
    type DistributionInterval = DistributionInterval;
    type WeightInfo = pallet_reward_pool::weights::SubstrateWeight<Runtime>;
    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper = BillBenchmarkHelper;
}

/// Signs benchmark bills with a fresh keystore key.
#[cfg(feature = "runtime-benchmarks")]
pub struct BillBenchmarkHelper;

#[cfg(feature = "runtime-benchmarks")]
impl pallet_reward_pool::BenchmarkHelper<AccountId, sp_core::ecdsa::Signature>
    for BillBenchmarkHelper
{
    fn sign_bill(digest: &[u8; 32]) -> (AccountId, sp_core::ecdsa::Signature) {
        const BILL_KEY: sp_core::crypto::KeyTypeId = sp_core::crypto::KeyTypeId(*b"bill");
        let public = sp_io::crypto::ecdsa_generate(BILL_KEY, None);
        let signature = sp_io::crypto::ecdsa_sign_prehashed(BILL_KEY, &public, digest)
            .expect("key was just generated in the keystore");
        (sp_runtime::MultiSigner::from(public).into_account(), signature)
    }
}

parameter_types! {
    pub const UpgradeDelay: u64 = hyra_primitives::UPGRADE_DELAY;
    pub const RequiredApprovals: u32 = hyra_primitives::REQUIRED_UPGRADE_APPROVALS;
}

impl pallet_upgrade_governor::Config for Runtime {
    type RuntimeEvent = RuntimeEvent;
    type Roles = Roles;
    type UnixTime = Timestamp;
    type UpgradeDelay = UpgradeDelay;
    type RequiredApprovals = RequiredApprovals;
    type WeightInfo = pallet_upgrade_governor::weights::SubstrateWeight<Runtime>;
}
