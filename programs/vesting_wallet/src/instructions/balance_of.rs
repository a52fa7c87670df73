use anchor_lang::prelude::*;

use crate::constants::{INVESTOR_SEED, WALLET_STATE_SEED};
use crate::state::{InvestorVesting, WalletState};

pub fn balance_of(ctx: Context<BalanceOf>, address: Pubkey) -> Result<u64> {
    let wallet_key = ctx.accounts.wallet_state.key();
    let record = InvestorVesting::load(&ctx.accounts.investor_vesting.to_account_info())?;
    Ok(ctx
        .accounts
        .wallet_state
        .balance_of(&wallet_key, &address, record.as_ref()))
}

#[derive(Accounts)]
#[instruction(address: Pubkey)]
pub struct BalanceOf<'info> {
    #[account(seeds = [WALLET_STATE_SEED], bump = wallet_state.bump)]
    pub wallet_state: Account<'info, WalletState>,

    #[account(
        seeds = [INVESTOR_SEED, wallet_state.key().as_ref(), address.as_ref()],
        bump
    )]
    /// CHECK: May be uninitialized; deserialized in-handler.
    pub investor_vesting: UncheckedAccount<'info>,
}
