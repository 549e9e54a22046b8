//! Weights for pallet-hyra-token.
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
    fn add_pool() -> Weight;
    fn enable_pool() -> Weight;
    fn disable_pool() -> Weight;
    fn verify_pool() -> Weight;
    fn mint() -> Weight;
    fn burn() -> Weight;
    fn transfer() -> Weight;
}

/// Weights derived from the runtime's database weights.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    /// Storage: `HyraToken::Initialized` (r:1 w:1)
    /// Storage: `Roles::Members` (r:6 w:5)
    /// Storage: `HyraToken::Pools` (r:0 w:1)
    /// Storage: `HyraToken::Balances` (r:1 w:1)
    /// Storage: `HyraToken::TotalSupply` (r:0 w:1)
    fn initialize() -> Weight {
        Weight::from_parts(45_000_000, 8_000)
            .saturating_add(T::DbWeight::get().reads(8_u64))
            .saturating_add(T::DbWeight::get().writes(9_u64))
    }
    /// Storage: `Roles::Members` (r:1 w:0)
    /// Storage: `HyraToken::Pools` (r:1 w:1)
    fn add_pool() -> Weight {
        Weight::from_parts(16_000_000, 3_700)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `Roles::Members` (r:1 w:0)
    /// Storage: `HyraToken::Pools` (r:1 w:1)
    fn enable_pool() -> Weight {
        Weight::from_parts(14_000_000, 3_700)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `Roles::Members` (r:1 w:0)
    /// Storage: `HyraToken::Pools` (r:1 w:1)
    fn disable_pool() -> Weight {
        Weight::from_parts(14_000_000, 3_700)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `Roles::Members` (r:1 w:0)
    /// Storage: `HyraToken::Pools` (r:1 w:1)
    fn verify_pool() -> Weight {
        Weight::from_parts(14_000_000, 3_700)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `Roles::Members` (r:1 w:0)
    /// Storage: `HyraToken::Pools` (r:1 w:1)
    /// Storage: `HyraToken::TotalSupply` (r:1 w:1)
    /// Storage: `HyraToken::Balances` (r:1 w:1)
    fn mint() -> Weight {
        Weight::from_parts(22_000_000, 3_700)
            .saturating_add(T::DbWeight::get().reads(4_u64))
            .saturating_add(T::DbWeight::get().writes(3_u64))
    }
    /// Storage: `HyraToken::Balances` (r:1 w:1)
    /// Storage: `HyraToken::TotalSupply` (r:1 w:1)
    fn burn() -> Weight {
        Weight::from_parts(15_000_000, 3_500)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    /// Storage: `HyraToken::Balances` (r:2 w:2)
    fn transfer() -> Weight {
        Weight::from_parts(18_000_000, 6_000)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
}

// For tests and the native composition runtime
impl WeightInfo for () {
    fn initialize() -> Weight {
        Weight::from_parts(45_000_000, 8_000)
            .saturating_add(RocksDbWeight::get().reads(8_u64))
            .saturating_add(RocksDbWeight::get().writes(9_u64))
    }
    fn add_pool() -> Weight {
        Weight::from_parts(16_000_000, 3_700)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn enable_pool() -> Weight {
        Weight::from_parts(14_000_000, 3_700)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn disable_pool() -> Weight {
        Weight::from_parts(14_000_000, 3_700)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn verify_pool() -> Weight {
        Weight::from_parts(14_000_000, 3_700)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn mint() -> Weight {
        Weight::from_parts(22_000_000, 3_700)
            .saturating_add(RocksDbWeight::get().reads(4_u64))
            .saturating_add(RocksDbWeight::get().writes(3_u64))
    }
    fn burn() -> Weight {
        Weight::from_parts(15_000_000, 3_500)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn transfer() -> Weight {
        Weight::from_parts(18_000_000, 6_000)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
}
