use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::InvestorVesting;
use crate::utils::accrual::VestingTerms;
use crate::utils::audit::{self, AuditKind, AuditRecord};

/// Singleton vesting wallet PDA: configuration plus aggregate balances.
#[account]
#[derive(Default)]
pub struct WalletState {
    /// Only key allowed to register schedules.
    pub owner: Pubkey,
    /// Token mint.
    pub mint: Pubkey,
    /// Custody vault token account.
    pub vault: Pubkey,
    /// Total vesting span in seconds.
    pub vesting_duration: i64,
    /// Unlock period length in seconds.
    pub vesting_interval: i64,
    /// Custody total: units still locked across every schedule.
    pub locked_total: u64,
    /// Units paid out to all investors so far.
    pub released_total: u64,
    /// Units ever registered.
    pub deposited_total: u64,
    /// Schedules ever registered.
    pub schedule_count: u64,
    /// Sequence number of the last audit record.
    pub event_seq: u64,
    /// Running BLAKE3 digest over all audit records.
    pub audit_head: [u8; 32],
    pub bump: u8,
    pub vault_bump: u8,
}

impl WalletState {
    pub const SIZE: usize =
        32 + // owner
        32 + // mint
        32 + // vault
        8 +  // vesting_duration
        8 +  // vesting_interval
        8 +  // locked_total
        8 +  // released_total
        8 +  // deposited_total
        8 +  // schedule_count
        8 +  // event_seq
        32 + // audit_head
        1 +  // bump
        1;   // vault_bump

    pub fn terms(&self) -> core::result::Result<VestingTerms, VestingError> {
        VestingTerms::new(self.vesting_duration, self.vesting_interval)
    }

    pub fn is_owner(&self, key: &Pubkey) -> bool {
        self.owner == *key
    }

    pub fn ensure_owner(&self, signer: &Pubkey) -> core::result::Result<(), VestingError> {
        if !self.is_owner(signer) {
            return Err(VestingError::Unauthorized);
        }
        Ok(())
    }

    /// Hand ownership to `new_owner`; returns the previous owner.
    pub fn transfer_ownership(
        &mut self,
        signer: &Pubkey,
        new_owner: Pubkey,
    ) -> core::result::Result<Pubkey, VestingError> {
        if new_owner == Pubkey::default() {
            return Err(VestingError::InvalidOwner);
        }
        self.ensure_owner(signer)?;
        let previous = self.owner;
        self.owner = new_owner;
        Ok(previous)
    }

    /// Address-keyed aggregate: the wallet's own key maps to the custody
    /// total, any other key to that investor's released total.
    pub fn balance_of(
        &self,
        wallet_key: &Pubkey,
        address: &Pubkey,
        record: Option<&InvestorVesting>,
    ) -> u64 {
        if address == wallet_key {
            return self.locked_total;
        }
        record
            .filter(|r| r.investor == *address)
            .map(|r| r.released_total)
            .unwrap_or(0)
    }

    pub fn record_deposit(&mut self, amount: u64) -> core::result::Result<(), VestingError> {
        let locked = self
            .locked_total
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        let deposited = self
            .deposited_total
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        let count = self
            .schedule_count
            .checked_add(1)
            .ok_or(VestingError::MathOverflow)?;
        self.locked_total = locked;
        self.deposited_total = deposited;
        self.schedule_count = count;
        Ok(())
    }

    pub fn record_release(&mut self, amount: u64) -> core::result::Result<(), VestingError> {
        let locked = self
            .locked_total
            .checked_sub(amount)
            .ok_or(VestingError::MathOverflow)?;
        let released = self
            .released_total
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        self.locked_total = locked;
        self.released_total = released;
        Ok(())
    }

    /// Locked plus released must always equal everything ever deposited.
    pub fn is_conserved(&self) -> bool {
        (self.locked_total as u128) + (self.released_total as u128)
            == self.deposited_total as u128
    }

    /// Extend the audit chain; returns the new record's sequence number.
    pub fn append_audit(
        &mut self,
        kind: AuditKind,
        investor: &Pubkey,
        amount: u64,
        timestamp: i64,
    ) -> core::result::Result<u64, VestingError> {
        let seq = self
            .event_seq
            .checked_add(1)
            .ok_or(VestingError::MathOverflow)?;
        let record = AuditRecord::new(seq, kind, investor, amount, timestamp);
        self.audit_head = audit::chain(&self.audit_head, &record);
        self.event_seq = seq;
        Ok(seq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wallet() -> WalletState {
        WalletState {
            owner: Pubkey::new_from_array([1u8; 32]),
            vesting_duration: 180,
            vesting_interval: 45,
            ..WalletState::default()
        }
    }

    #[test]
    fn deposit_and_release_keep_totals_balanced() {
        let mut st = wallet();
        st.record_deposit(1_000).unwrap();
        st.record_deposit(2_000).unwrap();
        assert_eq!(st.locked_total, 3_000);
        assert_eq!(st.schedule_count, 2);

        st.record_release(750).unwrap();
        assert_eq!(st.locked_total, 2_250);
        assert_eq!(st.released_total, 750);
        assert!(st.is_conserved());
    }

    #[test]
    fn over_release_fails_without_mutation() {
        let mut st = wallet();
        st.record_deposit(10).unwrap();
        assert!(matches!(
            st.record_release(11),
            Err(VestingError::MathOverflow)
        ));
        assert_eq!(st.locked_total, 10);
        assert_eq!(st.released_total, 0);
    }

    #[test]
    fn deposit_overflow_fails_without_mutation() {
        let mut st = wallet();
        st.record_deposit(u64::MAX).unwrap();
        assert!(st.record_deposit(1).is_err());
        assert_eq!(st.locked_total, u64::MAX);
        assert_eq!(st.schedule_count, 1);
    }

    #[test]
    fn owner_predicate() {
        let st = wallet();
        assert!(st.is_owner(&Pubkey::new_from_array([1u8; 32])));
        assert!(!st.is_owner(&Pubkey::new_from_array([2u8; 32])));
    }

    #[test]
    fn only_owner_passes_the_gate() {
        let st = wallet();
        assert!(st.ensure_owner(&Pubkey::new_from_array([1u8; 32])).is_ok());
        assert!(matches!(
            st.ensure_owner(&Pubkey::new_from_array([2u8; 32])),
            Err(VestingError::Unauthorized)
        ));
    }

    #[test]
    fn ownership_moves_to_new_owner() {
        let mut st = wallet();
        let (old, new) = (Pubkey::new_from_array([1u8; 32]), Pubkey::new_from_array([3u8; 32]));

        assert_eq!(st.transfer_ownership(&old, new).unwrap(), old);
        assert!(st.is_owner(&new));
        assert!(matches!(
            st.ensure_owner(&old),
            Err(VestingError::Unauthorized)
        ));
    }

    #[test]
    fn ownership_transfer_rejects_stranger_and_zero_key() {
        let mut st = wallet();
        let owner = Pubkey::new_from_array([1u8; 32]);
        let stranger = Pubkey::new_from_array([2u8; 32]);

        assert!(matches!(
            st.transfer_ownership(&stranger, stranger),
            Err(VestingError::Unauthorized)
        ));
        assert!(matches!(
            st.transfer_ownership(&owner, Pubkey::default()),
            Err(VestingError::InvalidOwner)
        ));
        assert!(st.is_owner(&owner));
    }

    #[test]
    fn balance_of_is_keyed_by_address() {
        let mut st = wallet();
        let wallet_key = Pubkey::new_from_array([50u8; 32]);
        let investor = Pubkey::new_from_array([9u8; 32]);
        st.record_deposit(3_000).unwrap();
        st.record_release(750).unwrap();

        let mut record = InvestorVesting::new(wallet_key, investor, 255);
        record.released_total = 750;

        assert_eq!(st.balance_of(&wallet_key, &wallet_key, None), 2_250);
        assert_eq!(st.balance_of(&wallet_key, &wallet_key, Some(&record)), 2_250);
        assert_eq!(st.balance_of(&wallet_key, &investor, Some(&record)), 750);
        assert_eq!(st.balance_of(&wallet_key, &investor, None), 0);

        let stranger = Pubkey::new_from_array([10u8; 32]);
        assert_eq!(st.balance_of(&wallet_key, &stranger, Some(&record)), 0);
    }

    #[test]
    fn audit_sequence_advances_head() {
        let mut st = wallet();
        let investor = Pubkey::new_from_array([9u8; 32]);
        let genesis = st.audit_head;

        assert_eq!(st.append_audit(AuditKind::Added, &investor, 5, 1).unwrap(), 1);
        let first = st.audit_head;
        assert_ne!(first, genesis);

        assert_eq!(st.append_audit(AuditKind::Released, &investor, 5, 2).unwrap(), 2);
        assert_ne!(st.audit_head, first);
        assert_eq!(st.event_seq, 2);
    }

    #[test]
    fn stored_terms_are_validated() {
        let mut st = wallet();
        assert_eq!(st.terms().unwrap().duration_periods(), 4);
        st.vesting_interval = 0;
        assert!(matches!(st.terms(), Err(VestingError::InvalidConfig)));
    }
}
