//! Weights for pallet-xtimes-token.
//!
//! Hand-estimated from the storage accesses of each call until the
//! benchmarks in `benchmarking.rs` are run against reference hardware.

#![allow(unused_parens)]
#![allow(unused_imports)]

use core::marker::PhantomData;
use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

/// Weight functions needed for pallet-xtimes-token.
pub trait WeightInfo {
    fn establish_treasury() -> Weight;
    fn appoint_treasurer() -> Weight;
    fn appoint_secretary() -> Weight;
    fn issue_tokens_to_treasure() -> Weight;
    fn transfer_from_treasure() -> Weight;
    fn burn_from_treasure() -> Weight;
    fn transfer() -> Weight;
}

/// Weights for pallet-xtimes-token using the runtime's database weights.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    /// Storage: `XTimesToken::Owner` (r:1 w:0)
    /// Storage: `XTimesToken::Treasury` (r:1 w:1)
    fn establish_treasury() -> Weight {
        Weight::from_parts(9_000_000, 1_500).saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
    /// Storage: `XTimesToken::Owner` (r:1 w:0)
    /// Storage: `XTimesToken::Treasurer` (r:1 w:1)
    fn appoint_treasurer() -> Weight {
        Weight::from_parts(9_000_000, 1_500).saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
    /// Storage: `XTimesToken::Treasurer` (r:1 w:0)
    /// Storage: `XTimesToken::Secretary` (r:1 w:1)
    fn appoint_secretary() -> Weight {
        Weight::from_parts(9_000_000, 1_500).saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
    /// Storage: `XTimesToken::Treasurer` (r:1 w:0)
    /// Storage: `XTimesToken::Treasury` (r:1 w:0)
    /// Storage: `XTimesToken::TotalSupply` (r:1 w:1)
    /// Storage: `XTimesToken::MaxSupply` (r:1 w:0)
    /// Storage: `XTimesToken::Balances` (r:1 w:1)
    fn issue_tokens_to_treasure() -> Weight {
        Weight::from_parts(14_000_000, 3_600).saturating_add(T::DbWeight::get().reads_writes(5, 2))
    }
    /// Storage: `XTimesToken::Secretary` (r:1 w:0)
    /// Storage: `XTimesToken::Treasury` (r:1 w:0)
    /// Storage: `XTimesToken::Balances` (r:2 w:2)
    fn transfer_from_treasure() -> Weight {
        Weight::from_parts(15_000_000, 6_200).saturating_add(T::DbWeight::get().reads_writes(4, 2))
    }
    /// Storage: `XTimesToken::Treasurer` (r:1 w:0)
    /// Storage: `XTimesToken::Secretary` (r:1 w:0)
    /// Storage: `XTimesToken::Treasury` (r:1 w:0)
    /// Storage: `XTimesToken::Balances` (r:1 w:1)
    /// Storage: `XTimesToken::TotalSupply` (r:1 w:1)
    fn burn_from_treasure() -> Weight {
        Weight::from_parts(14_000_000, 3_600).saturating_add(T::DbWeight::get().reads_writes(5, 2))
    }
    /// Storage: `XTimesToken::Balances` (r:2 w:2)
    fn transfer() -> Weight {
        Weight::from_parts(13_000_000, 6_200).saturating_add(T::DbWeight::get().reads_writes(2, 2))
    }
}

// For backwards compatibility and tests.
impl WeightInfo for () {
    fn establish_treasury() -> Weight {
        Weight::from_parts(9_000_000, 1_500).saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn appoint_treasurer() -> Weight {
        Weight::from_parts(9_000_000, 1_500).saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn appoint_secretary() -> Weight {
        Weight::from_parts(9_000_000, 1_500).saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn issue_tokens_to_treasure() -> Weight {
        Weight::from_parts(14_000_000, 3_600).saturating_add(RocksDbWeight::get().reads_writes(5, 2))
    }
    fn transfer_from_treasure() -> Weight {
        Weight::from_parts(15_000_000, 6_200).saturating_add(RocksDbWeight::get().reads_writes(4, 2))
    }
    fn burn_from_treasure() -> Weight {
        Weight::from_parts(14_000_000, 3_600).saturating_add(RocksDbWeight::get().reads_writes(5, 2))
    }
    fn transfer() -> Weight {
        Weight::from_parts(13_000_000, 6_200).saturating_add(RocksDbWeight::get().reads_writes(2, 2))
    }
}
