//! Benchmarking setup for pallet-xtimes-token

use super::*;

#[allow(unused)]
use crate::Pallet as XTimesToken;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

const SEED: u32 = 0;

/// Treasury with `balance` tokens and both roles appointed. Returns
/// (treasury, treasurer, secretary).
fn operational<T: Config>(balance: u128) -> (T::AccountId, T::AccountId, T::AccountId) {
    let treasury: T::AccountId = account("treasury", 0, SEED);
    let treasurer: T::AccountId = account("treasurer", 0, SEED);
    let secretary: T::AccountId = account("secretary", 0, SEED);

    Treasury::<T>::put(&treasury);
    Treasurer::<T>::put(&treasurer);
    Secretary::<T>::put(&secretary);
    MaxSupply::<T>::put(u128::MAX);
    TotalSupply::<T>::put(balance);
    Balances::<T>::insert(&treasury, balance);

    (treasury, treasurer, secretary)
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn establish_treasury() {
        let owner: T::AccountId = whitelisted_caller();
        let treasury: T::AccountId = account("treasury", 0, SEED);
        Owner::<T>::put(&owner);
        Treasury::<T>::kill();

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), treasury.clone());

        assert_eq!(Treasury::<T>::get(), Some(treasury));
    }

    #[benchmark]
    fn appoint_treasurer() {
        let owner: T::AccountId = whitelisted_caller();
        let treasurer: T::AccountId = account("treasurer", 1, SEED);
        Owner::<T>::put(&owner);
        // Worst case replaces an existing holder
        Treasurer::<T>::put(account::<T::AccountId>("treasurer", 0, SEED));

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), treasurer.clone());

        assert_eq!(Treasurer::<T>::get(), Some(treasurer));
    }

    #[benchmark]
    fn appoint_secretary() {
        let (_, treasurer, _) = operational::<T>(0);
        let secretary: T::AccountId = account("secretary", 1, SEED);

        #[extrinsic_call]
        _(RawOrigin::Signed(treasurer), secretary.clone());

        assert_eq!(Secretary::<T>::get(), Some(secretary));
    }

    #[benchmark]
    fn issue_tokens_to_treasure() {
        let (treasury, treasurer, _) = operational::<T>(1_000_000);
        let amount: u128 = 1_000_000;

        #[extrinsic_call]
        _(RawOrigin::Signed(treasurer), amount);

        assert_eq!(Balances::<T>::get(&treasury), 2_000_000);
    }

    #[benchmark]
    fn transfer_from_treasure() {
        let (treasury, _, secretary) = operational::<T>(10_000_000);
        let recipient: T::AccountId = account("recipient", 0, SEED);
        // Worst case writes an existing entry on both sides
        Balances::<T>::insert(&recipient, 1);
        TotalSupply::<T>::put(10_000_001);
        let amount: u128 = 1_000_000;

        #[extrinsic_call]
        _(RawOrigin::Signed(secretary), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), 1_000_001);
        assert_eq!(Balances::<T>::get(&treasury), 9_000_000);
    }

    #[benchmark]
    fn burn_from_treasure() {
        // Secretary is checked after the treasurer, so it is the slower caller
        let (treasury, _, secretary) = operational::<T>(10_000_000);
        let amount: u128 = 1_000_000;

        #[extrinsic_call]
        _(RawOrigin::Signed(secretary), amount);

        assert_eq!(Balances::<T>::get(&treasury), 9_000_000);
        assert_eq!(TotalSupply::<T>::get(), 9_000_000);
    }

    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, SEED);
        let amount: u128 = 1_000_000;

        Balances::<T>::insert(&caller, 10_000_000);
        Balances::<T>::insert(&recipient, 1);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), 1_000_001);
        assert_eq!(Balances::<T>::get(&caller), 9_000_000);
    }

    impl_benchmark_test_suite!(XTimesToken, crate::mock::new_test_ext(), crate::mock::Test);
}
