use anchor_lang::prelude::*;

use crate::constants::{INVESTOR_SEED, WALLET_STATE_SEED};
use crate::state::{InvestorVesting, VestingPosition, WalletState};

pub fn emit_vesting_quote(ctx: Context<EmitVestingQuote>, investor: Pubkey) -> Result<()> {
    let terms = ctx.accounts.wallet_state.terms()?;
    let now = Clock::get()?.unix_timestamp;

    let position = match InvestorVesting::load(&ctx.accounts.investor_vesting.to_account_info())? {
        Some(record) => record.quote(&terms, now)?,
        None => VestingPosition::default(),
    };

    emit!(VestingQuote {
        investor,
        schedule_count: position.schedule_count,
        locked_amount: position.locked_amount,
        released_amount: position.released_amount,
        releasable: position.releasable,
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(investor: Pubkey)]
pub struct EmitVestingQuote<'info> {
    #[account(seeds = [WALLET_STATE_SEED], bump = wallet_state.bump)]
    pub wallet_state: Account<'info, WalletState>,

    #[account(
        seeds = [INVESTOR_SEED, wallet_state.key().as_ref(), investor.as_ref()],
        bump
    )]
    /// CHECK: May be uninitialized; deserialized in-handler.
    pub investor_vesting: UncheckedAccount<'info>,
}

#[event]
pub struct VestingQuote {
    pub investor: Pubkey,
    pub schedule_count: u32,
    pub locked_amount: u64,
    pub released_amount: u64,
    pub releasable: u64,
}
