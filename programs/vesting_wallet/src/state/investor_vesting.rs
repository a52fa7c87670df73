use anchor_lang::prelude::*;

use crate::constants::MAX_SCHEDULES_PER_INVESTOR;
use crate::error::VestingError;
use crate::utils::accrual::{self, VestingTerms};

/// One vesting grant.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct VestingSchedule {
    pub total_amount: u64,
    pub start_ts: i64,
    /// Fully matured periods already paid out.
    pub periods_claimed: u64,
}

impl VestingSchedule {
    pub const SIZE: usize = 8 + 8 + 8;

    pub fn new(total_amount: u64, start_ts: i64) -> Self {
        Self {
            total_amount,
            start_ts,
            periods_claimed: 0,
        }
    }

    pub fn is_fully_vested(&self, terms: &VestingTerms) -> bool {
        self.periods_claimed >= terms.duration_periods()
    }

    /// Cumulative amount paid out of this schedule.
    pub fn released_amount(&self, terms: &VestingTerms) -> core::result::Result<u64, VestingError> {
        accrual::amount_between(
            self.total_amount,
            terms.duration_periods(),
            0,
            self.periods_claimed,
        )
    }

    pub fn locked_amount(&self, terms: &VestingTerms) -> core::result::Result<u64, VestingError> {
        self.total_amount
            .checked_sub(self.released_amount(terms)?)
            .ok_or(VestingError::MathOverflow)
    }

    /// Newly matured periods at `now_ts` and the units they unlock.
    /// Returns `(matured, due)`; `due == 0` when nothing new matured.
    pub fn pending(
        &self,
        terms: &VestingTerms,
        now_ts: i64,
    ) -> core::result::Result<(u64, u64), VestingError> {
        let matured = terms.matured_periods(self.start_ts, now_ts);
        if matured <= self.periods_claimed {
            return Ok((self.periods_claimed, 0));
        }
        let due = accrual::amount_between(
            self.total_amount,
            terms.duration_periods(),
            self.periods_claimed,
            matured,
        )?;
        Ok((matured, due))
    }
}

/// Point-in-time view of one investor's vesting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VestingPosition {
    pub schedule_count: u32,
    pub locked_amount: u64,
    pub released_amount: u64,
    pub releasable: u64,
}

/// Per-investor PDA holding every schedule granted to one wallet.
#[account]
#[derive(Default)]
pub struct InvestorVesting {
    /// Owning wallet state.
    pub wallet: Pubkey,
    pub investor: Pubkey,
    /// Cumulative units released to this investor.
    pub released_total: u64,
    /// Append-only, in registration order.
    pub schedules: Vec<VestingSchedule>,
    pub bump: u8,
}

impl InvestorVesting {
    /// Space for discriminator + fields with `max_schedules` entries.
    pub const fn space(max_schedules: usize) -> usize {
        8 +  // discriminator
        32 + // wallet
        32 + // investor
        8 +  // released_total
        4 + max_schedules * VestingSchedule::SIZE + // schedules
        1    // bump
    }

    pub fn new(wallet: Pubkey, investor: Pubkey, bump: u8) -> Self {
        Self {
            wallet,
            investor,
            released_total: 0,
            schedules: Vec::new(),
            bump,
        }
    }

    pub fn push_schedule(
        &mut self,
        amount: u64,
        now_ts: i64,
    ) -> core::result::Result<(), VestingError> {
        if self.schedules.len() >= MAX_SCHEDULES_PER_INVESTOR {
            return Err(VestingError::ScheduleListFull);
        }
        self.schedules.push(VestingSchedule::new(amount, now_ts));
        Ok(())
    }

    pub fn locked_amount(&self, terms: &VestingTerms) -> core::result::Result<u64, VestingError> {
        self.schedules.iter().try_fold(0u64, |acc, s| {
            acc.checked_add(s.locked_amount(terms)?)
                .ok_or(VestingError::MathOverflow)
        })
    }

    /// Units `claim` would pay at `now_ts`, without touching state.
    pub fn releasable(
        &self,
        terms: &VestingTerms,
        now_ts: i64,
    ) -> core::result::Result<u64, VestingError> {
        self.schedules.iter().try_fold(0u64, |acc, s| {
            let (_, due) = s.pending(terms, now_ts)?;
            acc.checked_add(due).ok_or(VestingError::MathOverflow)
        })
    }

    pub fn quote(
        &self,
        terms: &VestingTerms,
        now_ts: i64,
    ) -> core::result::Result<VestingPosition, VestingError> {
        Ok(VestingPosition {
            schedule_count: self.schedules.len() as u32,
            locked_amount: self.locked_amount(terms)?,
            released_amount: self.released_total,
            releasable: self.releasable(terms, now_ts)?,
        })
    }

    /// Advance every schedule to its matured period and return the total paid.
    /// Fails with `NothingVested` (leaving every schedule untouched) when no
    /// schedule matured a new period.
    pub fn claim(
        &mut self,
        terms: &VestingTerms,
        now_ts: i64,
    ) -> core::result::Result<u64, VestingError> {
        let mut plan = Vec::with_capacity(self.schedules.len());
        let mut total_due: u64 = 0;
        for s in self.schedules.iter() {
            let (matured, due) = s.pending(terms, now_ts)?;
            total_due = total_due
                .checked_add(due)
                .ok_or(VestingError::MathOverflow)?;
            plan.push(matured);
        }
        if total_due == 0 {
            return Err(VestingError::NothingVested);
        }
        let released_total = self
            .released_total
            .checked_add(total_due)
            .ok_or(VestingError::MathOverflow)?;

        for (s, matured) in self.schedules.iter_mut().zip(plan) {
            s.periods_claimed = matured;
        }
        self.released_total = released_total;
        Ok(total_due)
    }

    /// Read a record from a PDA that may not have been created yet.
    pub fn load(info: &AccountInfo) -> Result<Option<Self>> {
        if info.owner != &crate::ID || info.data_is_empty() {
            return Ok(None);
        }
        let data = info.try_borrow_data()?;
        let record = Self::try_deserialize(&mut &data[..])?;
        Ok(Some(record))
    }

    pub fn store(&self, info: &AccountInfo) -> Result<()> {
        let mut data = info.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data;
        self.try_serialize(&mut writer)
    }
}
