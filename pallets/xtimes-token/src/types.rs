//! Save/restore image of the token ledger.

use codec::{Decode, Encode};
use scale_info::TypeInfo;
use sp_runtime::RuntimeDebug;
use sp_std::prelude::*;

/// Full state of the ledger at one point in time.
///
/// Produced by [`crate::Pallet::snapshot`] and accepted by the genesis
/// config (`GenesisConfig::from`), so a ledger can be exported and rebuilt
/// on another chain without losing any invariant.
#[derive(Encode, Decode, Clone, PartialEq, Eq, RuntimeDebug, TypeInfo)]
pub struct LedgerSnapshot<AccountId> {
    pub token_name: Vec<u8>,
    pub token_symbol: Vec<u8>,
    pub decimals: u8,
    pub max_supply: u128,
    pub total_supply: u128,
    pub owner: Option<AccountId>,
    pub treasury: Option<AccountId>,
    pub treasurer: Option<AccountId>,
    pub secretary: Option<AccountId>,
    /// Non-zero balances, sorted by account.
    pub balances: Vec<(AccountId, u128)>,
}

impl<AccountId: Ord> LedgerSnapshot<AccountId> {
    /// Sum of every balance entry, `None` on overflow.
    pub fn sum_of_balances(&self) -> Option<u128> {
        self.balances.iter().try_fold(0u128, |acc, (_, amount)| acc.checked_add(*amount))
    }

    /// Checks the ledger invariants against this image.
    pub fn verify(&self) -> Result<(), &'static str> {
        let sum = self.sum_of_balances().ok_or("sum of balances overflows u128")?;
        if sum != self.total_supply {
            return Err("total supply does not equal the sum of balances");
        }
        if self.total_supply > self.max_supply {
            return Err("total supply exceeds max supply");
        }
        if self.balances.iter().any(|(_, amount)| *amount == 0) {
            return Err("zero balance entry");
        }
        if self.balances.windows(2).any(|pair| pair[0].0 >= pair[1].0) {
            return Err("balances are not sorted or contain duplicate accounts");
        }
        if self.secretary.is_some() && self.treasurer.is_none() {
            return Err("secretary appointed without a treasurer");
        }
        if !self.balances.is_empty() && self.treasury.is_none() {
            return Err("balances exist before the treasury is established");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> LedgerSnapshot<u64> {
        LedgerSnapshot {
            token_name: b"XTimes".to_vec(),
            token_symbol: b"XTMS".to_vec(),
            decimals: 18,
            max_supply: 1_000,
            total_supply: 300,
            owner: Some(1),
            treasury: Some(10),
            treasurer: Some(2),
            secretary: Some(3),
            balances: vec![(10, 200), (20, 100)],
        }
    }

    #[test]
    fn valid_snapshot_passes() {
        assert_eq!(valid().verify(), Ok(()));
    }

    #[test]
    fn supply_mismatch_is_rejected() {
        let mut snapshot = valid();
        snapshot.total_supply = 299;
        assert_eq!(snapshot.verify(), Err("total supply does not equal the sum of balances"));
    }

    #[test]
    fn supply_above_cap_is_rejected() {
        let mut snapshot = valid();
        snapshot.max_supply = 299;
        assert_eq!(snapshot.verify(), Err("total supply exceeds max supply"));
    }

    #[test]
    fn overflowing_balances_are_rejected() {
        let mut snapshot = valid();
        snapshot.balances = vec![(10, u128::MAX), (20, 1)];
        assert_eq!(snapshot.verify(), Err("sum of balances overflows u128"));
    }

    #[test]
    fn duplicate_and_unsorted_accounts_are_rejected() {
        let mut snapshot = valid();
        snapshot.balances = vec![(20, 100), (10, 200)];
        assert!(snapshot.verify().is_err());

        snapshot.balances = vec![(10, 100), (10, 200)];
        assert!(snapshot.verify().is_err());
    }

    #[test]
    fn zero_entries_are_rejected() {
        let mut snapshot = valid();
        snapshot.balances.push((30, 0));
        assert_eq!(snapshot.verify(), Err("zero balance entry"));
    }

    #[test]
    fn role_dependencies_are_checked() {
        let mut snapshot = valid();
        snapshot.treasurer = None;
        assert_eq!(snapshot.verify(), Err("secretary appointed without a treasurer"));

        let mut snapshot = valid();
        snapshot.treasury = None;
        assert_eq!(snapshot.verify(), Err("balances exist before the treasury is established"));
    }

    #[test]
    fn scale_encoding_round_trips() {
        let snapshot = valid();
        let decoded = LedgerSnapshot::<u64>::decode(&mut &snapshot.encode()[..]).unwrap();
        assert_eq!(decoded, snapshot);
    }
}
