//! Storage migrations for pallet-xtimes-token.
//!
//! Each migration is versioned, checks the on-chain storage version before
//! touching anything, and is safe to run more than once. Wire them into the
//! runtime's `Executive` migration tuple in order:
//!
//! ```ignore
//! pub type Executive = frame_executive::Executive<
//!     Runtime,
//!     Block,
//!     frame_system::ChainContext<Runtime>,
//!     Runtime,
//!     AllPalletsWithSystem,
//!     (pallet_xtimes_token::migrations::v1::MigrateToV1<Runtime>,),
//! >;
//! ```

use frame_support::{pallet_prelude::*, traits::OnRuntimeUpgrade};
use sp_std::marker::PhantomData;

use crate::{Balances, Config, Pallet, LOG_TARGET};

/// Version 0 ledgers could store explicit zero balances. Version 1 never does,
/// which keeps the balance table equal to the set of actual holders.
pub mod v1 {
    use super::*;

    /// Prunes zero-valued `Balances` entries and stamps storage version 1.
    pub struct MigrateToV1<T>(PhantomData<T>);

    impl<T: Config> OnRuntimeUpgrade for MigrateToV1<T> {
        fn on_runtime_upgrade() -> Weight {
            let on_chain_version = Pallet::<T>::on_chain_storage_version();

            if on_chain_version >= 1 {
                log::info!(
                    target: LOG_TARGET,
                    "Storage already at v{on_chain_version:?}, skipping v1 migration"
                );
                return T::DbWeight::get().reads(1);
            }

            let mut visited: u64 = 0;
            let mut pruned: u64 = 0;
            Balances::<T>::translate::<u128, _>(|_account, balance| {
                visited += 1;
                if balance == 0 {
                    pruned += 1;
                    None
                } else {
                    Some(balance)
                }
            });

            StorageVersion::new(1).put::<Pallet<T>>();
            log::info!(
                target: LOG_TARGET,
                "Migrated to v1: pruned {pruned} zero balances out of {visited} entries"
            );

            // Version read plus every balance, version write plus every removal
            T::DbWeight::get().reads_writes(visited + 1, pruned + 1)
        }

        #[cfg(feature = "try-runtime")]
        fn pre_upgrade() -> Result<sp_std::vec::Vec<u8>, sp_runtime::TryRuntimeError> {
            let total_supply = Pallet::<T>::total_supply();
            log::info!(
                target: LOG_TARGET,
                "Pre-upgrade: storage version {:?}, total supply {}",
                Pallet::<T>::on_chain_storage_version(),
                total_supply
            );
            Ok(total_supply.encode())
        }

        #[cfg(feature = "try-runtime")]
        fn post_upgrade(state: sp_std::vec::Vec<u8>) -> Result<(), sp_runtime::TryRuntimeError> {
            let pre_supply: u128 = Decode::decode(&mut &state[..])
                .map_err(|_| sp_runtime::TryRuntimeError::Other("Failed to decode pre-state"))?;

            frame_support::ensure!(
                Pallet::<T>::on_chain_storage_version() >= 1,
                sp_runtime::TryRuntimeError::Other("Migration to v1 did not complete")
            );
            frame_support::ensure!(
                Pallet::<T>::total_supply() == pre_supply,
                sp_runtime::TryRuntimeError::Other("Total supply changed during migration")
            );

            Pallet::<T>::do_try_state()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{operational_ext, Test, XTimesToken, HOLDER, TREASURY, UNIT};
    use frame_support::traits::StorageVersion;

    #[test]
    fn migration_v1_prunes_zero_balances() {
        operational_ext().execute_with(|| {
            StorageVersion::new(0).put::<Pallet<Test>>();
            Balances::<Test>::insert(TREASURY, 5 * UNIT);
            Balances::<Test>::insert(HOLDER, 0);
            Balances::<Test>::insert(77, 0);
            crate::TotalSupply::<Test>::put(5 * UNIT);

            v1::MigrateToV1::<Test>::on_runtime_upgrade();

            assert_eq!(Pallet::<Test>::on_chain_storage_version(), 1);
            assert!(!Balances::<Test>::contains_key(HOLDER));
            assert!(!Balances::<Test>::contains_key(77));
            assert_eq!(XTimesToken::balance_of(&TREASURY), 5 * UNIT);
            assert_eq!(XTimesToken::total_supply(), 5 * UNIT);
            assert_eq!(XTimesToken::do_try_state(), Ok(()));
        });
    }

    #[test]
    fn migration_v1_idempotent() {
        operational_ext().execute_with(|| {
            StorageVersion::new(0).put::<Pallet<Test>>();
            v1::MigrateToV1::<Test>::on_runtime_upgrade();
            assert_eq!(Pallet::<Test>::on_chain_storage_version(), 1);

            // A zero entry written after the upgrade is left alone by a re-run
            Balances::<Test>::insert(HOLDER, 0);
            v1::MigrateToV1::<Test>::on_runtime_upgrade();

            assert_eq!(Pallet::<Test>::on_chain_storage_version(), 1);
            assert!(Balances::<Test>::contains_key(HOLDER));
        });
    }

    #[test]
    fn migration_v1_skipped_on_higher_version() {
        operational_ext().execute_with(|| {
            StorageVersion::new(5).put::<Pallet<Test>>();

            v1::MigrateToV1::<Test>::on_runtime_upgrade();

            assert_eq!(Pallet::<Test>::on_chain_storage_version(), 5);
        });
    }
}
