//! # XTimes Token Pallet
//!
//! A fungible token with a hard supply cap and a treasury-centric role
//! hierarchy:
//!
//! - **Owner**: fixed at genesis. Establishes the treasury (once) and appoints
//!   the treasurer.
//! - **Treasurer**: issues new supply into the treasury, appoints the
//!   secretary and burns from the treasury.
//! - **Secretary**: pays out of the treasury and burns from it, but cannot
//!   issue.
//!
//! Role checks run against the holders in storage at dispatch time, and every
//! call validates all of its preconditions before the first write.

#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::let_unit_value)]

use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_runtime::DispatchError;
use sp_std::prelude::*;

pub use pallet::*;
pub use types::LedgerSnapshot;
pub use weights::WeightInfo;

pub mod migrations;
mod types;
pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

pub(crate) const LOG_TARGET: &str = "runtime::xtimes-token";

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;
        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Token name (e.g., "XTimes")
    #[pallet::storage]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Token symbol (e.g., "XTMS")
    #[pallet::storage]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    /// Token decimals. Presentation only, amounts are always in base units.
    #[pallet::storage]
    pub type Decimals<T> = StorageValue<_, u8, ValueQuery>;

    /// Upper bound on `TotalSupply`, fixed at genesis.
    #[pallet::storage]
    pub type MaxSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// Total token supply
    #[pallet::storage]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// Account balances. Zero balances are removed rather than stored.
    #[pallet::storage]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Contract owner, fixed at genesis.
    #[pallet::storage]
    pub type Owner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Treasury account. Written exactly once.
    #[pallet::storage]
    pub type Treasury<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    #[pallet::storage]
    pub type Treasurer<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    #[pallet::storage]
    pub type Secretary<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Treasury account established by the owner
        TreasuryEstablished { treasury: T::AccountId },
        /// Treasurer replaced (old_treasurer is None on first appointment)
        TreasurerAppointed { old_treasurer: Option<T::AccountId>, new_treasurer: T::AccountId },
        /// Secretary replaced (old_secretary is None on first appointment)
        SecretaryAppointed { old_secretary: Option<T::AccountId>, new_secretary: T::AccountId },
        /// New supply issued into the treasury
        IssuedToTreasury { treasury: T::AccountId, amount: u128 },
        /// Tokens paid out of the treasury
        TransferredFromTreasury { treasury: T::AccountId, to: T::AccountId, amount: u128 },
        /// Tokens burned from the treasury by the treasurer or secretary
        BurnedFromTreasury { treasury: T::AccountId, by: T::AccountId, amount: u128 },
        /// Tokens transferred from one holder to another
        Transferred { from: T::AccountId, to: T::AccountId, amount: u128 },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller does not hold the role the call requires.
        Unauthorized,
        /// The treasury has already been established.
        AlreadyEstablished,
        /// A prerequisite is not in place yet (treasury or treasurer unset).
        PreconditionFailed,
        /// Issuing would push total supply above max supply.
        SupplyCapExceeded,
        /// The treasury holds less than the requested amount.
        InsufficientTreasuryBalance,
        /// Amount is zero or overflows u128.
        InvalidAmount,
        /// Sender holds less than the requested amount.
        InsufficientBalance,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Designate the treasury account. Owner only, once.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::establish_treasury())]
        pub fn establish_treasury(origin: OriginFor<T>, treasury: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_owner(&who)?;
            ensure!(!Treasury::<T>::exists(), Error::<T>::AlreadyEstablished);

            Treasury::<T>::put(&treasury);
            Self::deposit_event(Event::TreasuryEstablished { treasury });
            Ok(())
        }

        /// Replace the treasurer. Owner only.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::appoint_treasurer())]
        pub fn appoint_treasurer(origin: OriginFor<T>, treasurer: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_owner(&who)?;

            let old_treasurer = Treasurer::<T>::get();
            Treasurer::<T>::put(&treasurer);
            Self::deposit_event(Event::TreasurerAppointed { old_treasurer, new_treasurer: treasurer });
            Ok(())
        }

        /// Replace the secretary. Current treasurer only.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::appoint_secretary())]
        pub fn appoint_secretary(origin: OriginFor<T>, secretary: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            let treasurer = Treasurer::<T>::get().ok_or(Error::<T>::PreconditionFailed)?;
            ensure!(treasurer == who, Error::<T>::Unauthorized);

            let old_secretary = Secretary::<T>::get();
            Secretary::<T>::put(&secretary);
            Self::deposit_event(Event::SecretaryAppointed { old_secretary, new_secretary: secretary });
            Ok(())
        }

        /// Issue `amount` new tokens into the treasury. Treasurer only.
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::issue_tokens_to_treasure())]
        pub fn issue_tokens_to_treasure(origin: OriginFor<T>, amount: u128) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(Self::is_treasurer(&who), Error::<T>::Unauthorized);
            let treasury = Self::established_treasury()?;
            ensure!(amount > 0, Error::<T>::InvalidAmount);

            let new_supply =
                TotalSupply::<T>::get().checked_add(amount).ok_or(Error::<T>::InvalidAmount)?;
            ensure!(new_supply <= MaxSupply::<T>::get(), Error::<T>::SupplyCapExceeded);
            let new_balance =
                Balances::<T>::get(&treasury).checked_add(amount).ok_or(Error::<T>::InvalidAmount)?;

            TotalSupply::<T>::put(new_supply);
            Self::write_balance(&treasury, new_balance);
            Self::deposit_event(Event::IssuedToTreasury { treasury, amount });
            Ok(())
        }

        /// Pay `amount` out of the treasury to `to`. Secretary only.
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::transfer_from_treasure())]
        pub fn transfer_from_treasure(
            origin: OriginFor<T>,
            to: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(Self::is_secretary(&who), Error::<T>::Unauthorized);
            let treasury = Self::established_treasury()?;
            ensure!(amount > 0, Error::<T>::InvalidAmount);

            let treasury_balance = Balances::<T>::get(&treasury);
            ensure!(treasury_balance >= amount, Error::<T>::InsufficientTreasuryBalance);

            if to != treasury {
                let to_balance =
                    Balances::<T>::get(&to).checked_add(amount).ok_or(Error::<T>::InvalidAmount)?;
                Self::write_balance(&treasury, treasury_balance - amount);
                Self::write_balance(&to, to_balance);
            }
            Self::deposit_event(Event::TransferredFromTreasury { treasury, to, amount });
            Ok(())
        }

        /// Burn `amount` from the treasury. Treasurer or secretary.
        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::burn_from_treasure())]
        pub fn burn_from_treasure(origin: OriginFor<T>, amount: u128) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(
                Self::is_treasurer(&who) || Self::is_secretary(&who),
                Error::<T>::Unauthorized
            );
            let treasury = Self::established_treasury()?;
            ensure!(amount > 0, Error::<T>::InvalidAmount);

            let treasury_balance = Balances::<T>::get(&treasury);
            ensure!(treasury_balance >= amount, Error::<T>::InsufficientTreasuryBalance);
            let new_supply = TotalSupply::<T>::get()
                .checked_sub(amount)
                .ok_or(Error::<T>::InsufficientTreasuryBalance)?;

            Self::write_balance(&treasury, treasury_balance - amount);
            TotalSupply::<T>::put(new_supply);
            Self::deposit_event(Event::BurnedFromTreasury { treasury, by: who, amount });
            Ok(())
        }

        /// Move `amount` of the caller's own tokens to `to`.
        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            let sender_balance = Balances::<T>::get(&sender);
            ensure!(sender_balance >= amount, Error::<T>::InsufficientBalance);

            if to != sender {
                let to_balance =
                    Balances::<T>::get(&to).checked_add(amount).ok_or(Error::<T>::InvalidAmount)?;
                Self::write_balance(&sender, sender_balance - amount);
                Self::write_balance(&to, to_balance);
            }
            Self::deposit_event(Event::Transferred { from: sender, to, amount });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Contract owner. Without one, owner-gated calls always fail.
        pub owner: Option<T::AccountId>,
        /// Token name
        pub token_name: Vec<u8>,
        /// Token symbol
        pub token_symbol: Vec<u8>,
        /// Token decimals
        pub decimals: u8,
        /// Hard cap on total supply, in base units
        pub max_supply: u128,
        /// Pre-established treasury (restoring an exported ledger)
        pub treasury: Option<T::AccountId>,
        /// Pre-appointed treasurer
        pub treasurer: Option<T::AccountId>,
        /// Pre-appointed secretary (requires a treasurer)
        pub secretary: Option<T::AccountId>,
        /// Initial balances (account, amount); total supply is their sum
        pub balances: Vec<(T::AccountId, u128)>,
    }

    impl<T: Config> From<LedgerSnapshot<T::AccountId>> for GenesisConfig<T> {
        fn from(snapshot: LedgerSnapshot<T::AccountId>) -> Self {
            Self {
                owner: snapshot.owner,
                token_name: snapshot.token_name,
                token_symbol: snapshot.token_symbol,
                decimals: snapshot.decimals,
                max_supply: snapshot.max_supply,
                treasury: snapshot.treasury,
                treasurer: snapshot.treasurer,
                secretary: snapshot.secretary,
                balances: snapshot.balances,
            }
        }
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let name: BoundedVec<u8, ConstU32<64>> =
                self.token_name.clone().try_into().expect("Token name too long (max 64 bytes)");
            let symbol: BoundedVec<u8, ConstU32<16>> =
                self.token_symbol.clone().try_into().expect("Token symbol too long (max 16 bytes)");

            let mut balances: Vec<(T::AccountId, u128)> =
                self.balances.iter().filter(|(_, amount)| *amount > 0).cloned().collect();
            balances.sort_by(|a, b| a.0.cmp(&b.0));

            let mut image = LedgerSnapshot {
                token_name: self.token_name.clone(),
                token_symbol: self.token_symbol.clone(),
                decimals: self.decimals,
                max_supply: self.max_supply,
                total_supply: 0,
                owner: self.owner.clone(),
                treasury: self.treasury.clone(),
                treasurer: self.treasurer.clone(),
                secretary: self.secretary.clone(),
                balances,
            };
            image.total_supply = image.sum_of_balances().expect("Genesis balances overflow u128");
            if let Err(reason) = image.verify() {
                panic!("Invalid xtimes-token genesis: {reason}");
            }

            TokenName::<T>::put(name);
            TokenSymbol::<T>::put(symbol);
            Decimals::<T>::put(image.decimals);
            MaxSupply::<T>::put(image.max_supply);
            TotalSupply::<T>::put(image.total_supply);

            if let Some(ref owner) = image.owner {
                Owner::<T>::put(owner);
            }
            if let Some(ref treasury) = image.treasury {
                Treasury::<T>::put(treasury);
            }
            if let Some(ref treasurer) = image.treasurer {
                Treasurer::<T>::put(treasurer);
            }
            if let Some(ref secretary) = image.secretary {
                Secretary::<T>::put(secretary);
            }
            for (account, amount) in &image.balances {
                Balances::<T>::insert(account, amount);
            }

            log::info!(
                target: LOG_TARGET,
                "Genesis ledger built: supply {} of max {} across {} accounts",
                image.total_supply,
                image.max_supply,
                image.balances.len()
            );
        }
    }
}

impl<T: Config> Pallet<T> {
    pub fn token_name() -> Vec<u8> {
        TokenName::<T>::get().into_inner()
    }

    pub fn token_symbol() -> Vec<u8> {
        TokenSymbol::<T>::get().into_inner()
    }

    pub fn decimals() -> u8 {
        Decimals::<T>::get()
    }

    pub fn total_supply() -> u128 {
        TotalSupply::<T>::get()
    }

    pub fn max_supply() -> u128 {
        MaxSupply::<T>::get()
    }

    /// Balance of `who`; zero for accounts the ledger has never seen.
    pub fn balance_of(who: &T::AccountId) -> u128 {
        Balances::<T>::get(who)
    }

    pub fn owner() -> Option<T::AccountId> {
        Owner::<T>::get()
    }

    pub fn treasury() -> Option<T::AccountId> {
        Treasury::<T>::get()
    }

    pub fn treasurer() -> Option<T::AccountId> {
        Treasurer::<T>::get()
    }

    pub fn secretary() -> Option<T::AccountId> {
        Secretary::<T>::get()
    }

    /// Export the whole ledger. Balances are sorted by account.
    pub fn snapshot() -> LedgerSnapshot<T::AccountId> {
        let mut balances: Vec<(T::AccountId, u128)> = Balances::<T>::iter().collect();
        balances.sort_by(|a, b| a.0.cmp(&b.0));

        LedgerSnapshot {
            token_name: Self::token_name(),
            token_symbol: Self::token_symbol(),
            decimals: Self::decimals(),
            max_supply: Self::max_supply(),
            total_supply: Self::total_supply(),
            owner: Self::owner(),
            treasury: Self::treasury(),
            treasurer: Self::treasurer(),
            secretary: Self::secretary(),
            balances,
        }
    }

    /// Verify the ledger invariants against current storage.
    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), DispatchError> {
        Self::snapshot().verify().map_err(|reason| {
            log::error!(target: LOG_TARGET, "Ledger invariant violated: {reason}");
            DispatchError::Other(reason)
        })
    }

    fn ensure_owner(who: &T::AccountId) -> DispatchResult {
        ensure!(Owner::<T>::get().as_ref() == Some(who), Error::<T>::Unauthorized);
        Ok(())
    }

    fn is_treasurer(who: &T::AccountId) -> bool {
        Treasurer::<T>::get().as_ref() == Some(who)
    }

    fn is_secretary(who: &T::AccountId) -> bool {
        Secretary::<T>::get().as_ref() == Some(who)
    }

    fn established_treasury() -> Result<T::AccountId, DispatchError> {
        Treasury::<T>::get().ok_or_else(|| Error::<T>::PreconditionFailed.into())
    }

    fn write_balance(who: &T::AccountId, amount: u128) {
        if amount == 0 {
            Balances::<T>::remove(who);
        } else {
            Balances::<T>::insert(who, amount);
        }
    }
}
