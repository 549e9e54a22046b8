//! Weights for pallet-upgrade-governor.
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
    fn propose_upgrade() -> Weight;
    fn approve_upgrade() -> Weight;
    fn execute_upgrade() -> Weight;
    fn cancel_upgrade() -> Weight;
}

/// Weights derived from the runtime's database weights.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    /// Storage: `Roles::Members` (r:3 w:3)
    /// Storage: `UpgradeGovernor::Initialized` (r:1 w:1)
    fn initialize() -> Weight {
        Weight::from_parts(32_000_000, 4_000)
            .saturating_add(T::DbWeight::get().reads(4_u64))
            .saturating_add(T::DbWeight::get().writes(4_u64))
    }
    /// Storage: `Roles::Members` (r:1 w:0)
    /// Storage: `UpgradeGovernor::Pending` (r:1 w:1)
    fn propose_upgrade() -> Weight {
        Weight::from_parts(18_000_000, 3_600)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `Roles::Members` (r:3 w:0)
    /// Storage: `UpgradeGovernor::Pending` (r:1 w:1)
    fn approve_upgrade() -> Weight {
        Weight::from_parts(24_000_000, 3_600)
            .saturating_add(T::DbWeight::get().reads(4_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `UpgradeGovernor::Pending` (r:1 w:1)
    /// Storage: `UpgradeGovernor::Version` (r:1 w:1)
    /// Storage: `UpgradeGovernor::CurrentImplementation` (r:0 w:1)
    /// Storage: `UpgradeGovernor::AuthorizedCode` (r:0 w:1)
    fn execute_upgrade() -> Weight {
        Weight::from_parts(22_000_000, 3_600)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(4_u64))
    }
    /// Storage: `Roles::Members` (r:1 w:0)
    /// Storage: `UpgradeGovernor::Pending` (r:1 w:1)
    fn cancel_upgrade() -> Weight {
        Weight::from_parts(17_000_000, 3_600)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
}

// For tests and the native composition runtime
impl WeightInfo for () {
    fn initialize() -> Weight {
        Weight::from_parts(32_000_000, 4_000)
            .saturating_add(RocksDbWeight::get().reads(4_u64))
            .saturating_add(RocksDbWeight::get().writes(4_u64))
    }
    fn propose_upgrade() -> Weight {
        Weight::from_parts(18_000_000, 3_600)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn approve_upgrade() -> Weight {
        Weight::from_parts(24_000_000, 3_600)
            .saturating_add(RocksDbWeight::get().reads(4_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn execute_upgrade() -> Weight {
        Weight::from_parts(22_000_000, 3_600)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(4_u64))
    }
    fn cancel_upgrade() -> Weight {
        Weight::from_parts(17_000_000, 3_600)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
}
