use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{INVESTOR_SEED, VAULT_SEED, WALLET_STATE_SEED};
use crate::error::VestingError;
use crate::state::{InvestorVesting, WalletState};
use crate::utils::ledger;

pub fn release(ctx: Context<Release>) -> Result<()> {
    let wallet_state_ai = ctx.accounts.wallet_state.to_account_info();
    let wallet_state_bump = ctx.accounts.wallet_state.bump;
    let investor = ctx.accounts.investor.key();

    require_keys_eq!(
        ctx.accounts.investor_token_account.mint,
        ctx.accounts.wallet_state.mint,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.investor_token_account.owner,
        investor,
        VestingError::InvalidTokenAccount
    );

    // No record yet means no schedules, which is the same as nothing vested.
    let record_ai = ctx.accounts.investor_vesting.to_account_info();
    let mut record =
        InvestorVesting::load(&record_ai)?.ok_or(VestingError::NothingVested)?;

    let now = Clock::get()?.unix_timestamp;
    let settlement = ledger::settle_release(&mut ctx.accounts.wallet_state, &mut record, now)?;

    require!(
        ctx.accounts.vault.amount >= settlement.amount,
        VestingError::TransferFailed
    );

    let signer_seeds: &[&[&[u8]]] = &[&[WALLET_STATE_SEED, &[wallet_state_bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.investor_token_account.to_account_info(),
                authority: wallet_state_ai,
            },
            signer_seeds,
        ),
        settlement.amount,
    )
    .map_err(|_| VestingError::TransferFailed)?;

    record.store(&record_ai)?;

    msg!(
        "vesting released: {} units to {} (custody {})",
        settlement.amount,
        investor,
        ctx.accounts.wallet_state.locked_total
    );

    emit!(VestingReleased {
        investor,
        amount: settlement.amount,
        timestamp: now,
        seq: settlement.seq,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Release<'info> {
    #[account(mut, seeds = [WALLET_STATE_SEED], bump = wallet_state.bump)]
    pub wallet_state: Account<'info, WalletState>,

    #[account(
        mut,
        seeds = [INVESTOR_SEED, wallet_state.key().as_ref(), investor.key().as_ref()],
        bump
    )]
    /// CHECK: May be uninitialized; deserialized in-handler via `InvestorVesting::load`.
    pub investor_vesting: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, wallet_state.key().as_ref()],
        bump = wallet_state.vault_bump,
        constraint = vault.mint == wallet_state.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub investor_token_account: Account<'info, TokenAccount>,

    pub investor: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct VestingReleased {
    pub investor: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
    pub seq: u64,
}
