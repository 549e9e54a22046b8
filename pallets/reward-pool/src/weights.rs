//! Weights for pallet-reward-pool.
//!
//! Placeholder values, hand-estimated from the storage accesses of each call. They are
//! not benchmark output: regenerate this file from `benchmarking.rs` with the
//! frame-benchmarking CLI before production use.

#![allow(unused_parens)]
#![allow(unused_imports)]

use core::marker::PhantomData;
use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

pub trait WeightInfo {
    fn initialize() -> Weight;
    fn verify_user_bill() -> Weight;
    fn deliver_rewards() -> Weight;
    fn distribute_reward() -> Weight;
    fn approve_address() -> Weight;
    fn revoke_address_approval() -> Weight;
    fn withdraw_native() -> Weight;
    fn fund() -> Weight;
    fn set_range() -> Weight;
}

/// Weights derived from the runtime's database weights.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    /// Storage: `Roles::Members` (r:4 w:4)
    /// Storage: `RewardPool::PoolManager` (r:0 w:1)
    /// Storage: `RewardPool::BillSigner` (r:0 w:1)
    /// Storage: `RewardPool::BillVerifier` (r:0 w:1)
    /// Storage: `RewardPool::BillDeliverer` (r:0 w:1)
    /// Storage: `RewardPool::Initialized` (r:1 w:1)
    fn initialize() -> Weight {
        Weight::from_parts(50_000_000, 4_000)
            .saturating_add(T::DbWeight::get().reads(6_u64))
            .saturating_add(T::DbWeight::get().writes(10_u64))
    }
    /// Storage: `Roles::Members` (r:1 w:0)
    /// Storage: `RewardPool::UserBills` (r:1 w:1)
    fn verify_user_bill() -> Weight {
        Weight::from_parts(16_000_000, 3_800)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `Roles::Members` (r:1 w:0)
    /// Storage: `RewardPool::UserBills` (r:1 w:1)
    /// Storage: `RewardPool::BillSigner` (r:1 w:0)
    /// Storage: `RewardPool::PaymentRange` (r:1 w:0)
    /// Storage: `RewardPool::DailyPayouts` (r:1 w:1)
    /// Storage: `RewardPool::MaxDailyPayment` (r:1 w:0)
    /// Storage: `RewardPool::TotalRewardByAddress` (r:1 w:1)
    /// Storage: `RewardPool::CounterForReceivers` (r:1 w:1)
    /// Storage: `RewardPool::Receivers` (r:1 w:1)
    /// Storage: `RewardPool::TotalRewards` (r:1 w:1)
    fn deliver_rewards() -> Weight {
        Weight::from_parts(95_000_000, 8_000)
            .saturating_add(T::DbWeight::get().reads(10_u64))
            .saturating_add(T::DbWeight::get().writes(6_u64))
    }
    /// Storage: `Roles::Members` (r:1 w:0)
    /// Storage: `System::Account` (r:2 w:2)
    /// Storage: `RewardPool::DistributionRange` (r:1 w:0)
    /// Storage: `RewardPool::LastDistribution` (r:1 w:1)
    fn distribute_reward() -> Weight {
        Weight::from_parts(55_000_000, 6_200)
            .saturating_add(T::DbWeight::get().reads(5_u64))
            .saturating_add(T::DbWeight::get().writes(3_u64))
    }
    /// Storage: `Roles::Members` (r:1 w:0)
    /// Storage: `RewardPool::ApprovedAddresses` (r:0 w:1)
    fn approve_address() -> Weight {
        Weight::from_parts(14_000_000, 3_500)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `Roles::Members` (r:1 w:0)
    /// Storage: `RewardPool::ApprovedAddresses` (r:0 w:1)
    fn revoke_address_approval() -> Weight {
        Weight::from_parts(14_000_000, 3_500)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `Roles::Members` (r:1 w:0)
    /// Storage: `RewardPool::ApprovedAddresses` (r:1 w:0)
    /// Storage: `System::Account` (r:2 w:2)
    fn withdraw_native() -> Weight {
        Weight::from_parts(50_000_000, 6_200)
            .saturating_add(T::DbWeight::get().reads(4_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    /// Storage: `System::Account` (r:2 w:2)
    fn fund() -> Weight {
        Weight::from_parts(45_000_000, 6_200)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    /// Storage: `Roles::Members` (r:1 w:0)
    /// Storage: `RewardPool::PaymentRange`, `DistributionRange` or `MaxDailyPayment` (r:0 w:1)
    fn set_range() -> Weight {
        Weight::from_parts(12_000_000, 3_500)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
}

// For tests and the native composition runtime
impl WeightInfo for () {
    fn initialize() -> Weight {
        Weight::from_parts(50_000_000, 4_000)
            .saturating_add(RocksDbWeight::get().reads(6_u64))
            .saturating_add(RocksDbWeight::get().writes(10_u64))
    }
    fn verify_user_bill() -> Weight {
        Weight::from_parts(16_000_000, 3_800)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn deliver_rewards() -> Weight {
        Weight::from_parts(95_000_000, 8_000)
            .saturating_add(RocksDbWeight::get().reads(10_u64))
            .saturating_add(RocksDbWeight::get().writes(6_u64))
    }
    fn distribute_reward() -> Weight {
        Weight::from_parts(55_000_000, 6_200)
            .saturating_add(RocksDbWeight::get().reads(5_u64))
            .saturating_add(RocksDbWeight::get().writes(3_u64))
    }
    fn approve_address() -> Weight {
        Weight::from_parts(14_000_000, 3_500)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn revoke_address_approval() -> Weight {
        Weight::from_parts(14_000_000, 3_500)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn withdraw_native() -> Weight {
        Weight::from_parts(50_000_000, 6_200)
            .saturating_add(RocksDbWeight::get().reads(4_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn fund() -> Weight {
        Weight::from_parts(45_000_000, 6_200)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn set_range() -> Weight {
        Weight::from_parts(12_000_000, 3_500)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
}
