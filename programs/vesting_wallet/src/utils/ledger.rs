//! Registration and release bookkeeping across the wallet and an investor record.
//! Both flows stage changes on copies and commit only once every step succeeded.

use anchor_lang::prelude::Pubkey;

use crate::error::VestingError;
use crate::state::{InvestorVesting, WalletState};
use crate::utils::audit::AuditKind;

/// Outcome of a successful release.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settlement {
    pub amount: u64,
    pub seq: u64,
}

pub fn validate_schedule(investor: &Pubkey, amount: u64) -> Result<(), VestingError> {
    if *investor == Pubkey::default() {
        return Err(VestingError::InvalidInvestor);
    }
    if amount == 0 {
        return Err(VestingError::InvalidAmount);
    }
    Ok(())
}

/// Append a schedule for `investor` and lock `amount` in custody.
/// Returns the audit sequence number of the registration.
pub fn register_schedule(
    wallet: &mut WalletState,
    record: &mut InvestorVesting,
    investor: Pubkey,
    amount: u64,
    now_ts: i64,
) -> Result<u64, VestingError> {
    validate_schedule(&investor, amount)?;
    if record.investor != investor {
        return Err(VestingError::InvalidInvestor);
    }

    let mut next_wallet = wallet.clone();
    let mut next_record = record.clone();
    next_record.push_schedule(amount, now_ts)?;
    next_wallet.record_deposit(amount)?;
    let seq = next_wallet.append_audit(AuditKind::Added, &investor, amount, now_ts)?;

    *wallet = next_wallet;
    *record = next_record;
    Ok(seq)
}

/// Pay out everything newly matured on `record` at `now_ts`.
pub fn settle_release(
    wallet: &mut WalletState,
    record: &mut InvestorVesting,
    now_ts: i64,
) -> Result<Settlement, VestingError> {
    let terms = wallet.terms()?;

    let mut next_wallet = wallet.clone();
    let mut next_record = record.clone();
    let amount = next_record.claim(&terms, now_ts)?;
    next_wallet.record_release(amount)?;
    let seq = next_wallet.append_audit(AuditKind::Released, &record.investor, amount, now_ts)?;

    *wallet = next_wallet;
    *record = next_record;
    Ok(Settlement { amount, seq })
}
