//! Periodic unlock arithmetic.
//! - duration_periods = vesting_duration / vesting_interval (must divide evenly)
//! - matured_periods = min(duration_periods, floor((now - start) / interval))
//! - periods 1..duration_periods-1 pay `total / duration_periods`
//! - the final period pays whatever truncation left over

use crate::constants::MAX_DURATION_PERIODS;
use crate::error::VestingError;

/// Validated vesting configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VestingTerms {
    pub duration: i64,
    pub interval: i64,
}

impl VestingTerms {
    pub fn new(duration: i64, interval: i64) -> Result<Self, VestingError> {
        if duration <= 0 || interval <= 0 {
            return Err(VestingError::InvalidConfig);
        }
        if duration % interval != 0 {
            return Err(VestingError::InvalidConfig);
        }
        let periods = (duration / interval) as u64;
        if periods > MAX_DURATION_PERIODS {
            return Err(VestingError::InvalidConfig);
        }
        Ok(Self { duration, interval })
    }

    pub fn duration_periods(&self) -> u64 {
        (self.duration / self.interval) as u64
    }

    /// Whole intervals elapsed since `start_ts`, capped at the duration.
    /// Inclusive at boundaries; zero before start.
    pub fn matured_periods(&self, start_ts: i64, now_ts: i64) -> u64 {
        let elapsed = now_ts.saturating_sub(start_ts);
        if elapsed <= 0 {
            return 0;
        }
        ((elapsed / self.interval) as u64).min(self.duration_periods())
    }
}

/// Regular per-period amount (truncated).
pub fn installment(total_amount: u64, periods: u64) -> u64 {
    total_amount / periods
}

/// Amount unlocked by the 1-based `period`.
pub fn period_amount(total_amount: u64, periods: u64, period: u64) -> Result<u64, VestingError> {
    let regular = installment(total_amount, periods);
    if period < periods {
        return Ok(regular);
    }
    regular
        .checked_mul(periods - 1)
        .and_then(|paid| total_amount.checked_sub(paid))
        .ok_or(VestingError::MathOverflow)
}

/// Sum of period amounts for periods `from + 1 ..= to`.
pub fn amount_between(
    total_amount: u64,
    periods: u64,
    from: u64,
    to: u64,
) -> Result<u64, VestingError> {
    ((from + 1)..=to).try_fold(0u64, |acc, p| {
        acc.checked_add(period_amount(total_amount, periods, p)?)
            .ok_or(VestingError::MathOverflow)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: i64 = 86_400;

    fn terms() -> VestingTerms {
        VestingTerms::new(180 * DAY, 45 * DAY).unwrap()
    }

    #[test]
    fn terms_reject_bad_config() {
        assert!(matches!(
            VestingTerms::new(180, 0),
            Err(VestingError::InvalidConfig)
        ));
        assert!(matches!(
            VestingTerms::new(0, 45),
            Err(VestingError::InvalidConfig)
        ));
        assert!(matches!(
            VestingTerms::new(100, 45),
            Err(VestingError::InvalidConfig)
        ));
        assert!(matches!(
            VestingTerms::new(-180, -45),
            Err(VestingError::InvalidConfig)
        ));
        let too_many = (MAX_DURATION_PERIODS as i64 + 1) * 10;
        assert!(matches!(
            VestingTerms::new(too_many, 10),
            Err(VestingError::InvalidConfig)
        ));
        assert_eq!(terms().duration_periods(), 4);
    }

    #[test]
    fn matured_periods_boundary_inclusive() {
        let t = terms();
        let start = 1_700_000_000;
        assert_eq!(t.matured_periods(start, start), 0);
        assert_eq!(t.matured_periods(start, start + 45 * DAY - 1), 0);
        assert_eq!(t.matured_periods(start, start + 45 * DAY), 1);
        assert_eq!(t.matured_periods(start, start + 90 * DAY - 1), 1);
        assert_eq!(t.matured_periods(start, start + 180 * DAY), 4);
    }

    #[test]
    fn matured_periods_saturates_and_ignores_past() {
        let t = terms();
        let start = 1_700_000_000;
        assert_eq!(t.matured_periods(start, start + 10_000 * DAY), 4);
        assert_eq!(t.matured_periods(start, start - 1), 0);
        assert_eq!(t.matured_periods(start, i64::MIN), 0);
    }

    #[test]
    fn remainder_is_swept_into_final_period() {
        assert_eq!(period_amount(1001, 4, 1).unwrap(), 250);
        assert_eq!(period_amount(1001, 4, 3).unwrap(), 250);
        assert_eq!(period_amount(1001, 4, 4).unwrap(), 251);
        assert_eq!(amount_between(1001, 4, 0, 4).unwrap(), 1001);

        // Fewer units than periods: everything lands in the last one.
        assert_eq!(amount_between(3, 4, 0, 3).unwrap(), 0);
        assert_eq!(period_amount(3, 4, 4).unwrap(), 3);
    }

    #[test]
    fn amount_between_skips_claimed_periods() {
        assert_eq!(amount_between(1000, 4, 0, 1).unwrap(), 250);
        assert_eq!(amount_between(1000, 4, 1, 1).unwrap(), 0);
        assert_eq!(amount_between(1000, 4, 1, 3).unwrap(), 500);
        assert_eq!(
            amount_between(1001, 4, 0, 2).unwrap() + amount_between(1001, 4, 2, 4).unwrap(),
            1001
        );
    }

    #[test]
    fn single_period_pays_everything() {
        let t = VestingTerms::new(30, 30).unwrap();
        assert_eq!(t.duration_periods(), 1);
        assert_eq!(amount_between(7, 1, 0, 1).unwrap(), 7);
        assert_eq!(
            amount_between(u64::MAX, 4, 0, 4).unwrap(),
            u64::MAX
        );
    }
}
