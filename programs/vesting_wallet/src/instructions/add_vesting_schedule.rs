use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{INVESTOR_SEED, MAX_SCHEDULES_PER_INVESTOR, VAULT_SEED, WALLET_STATE_SEED};
use crate::error::VestingError;
use crate::state::{InvestorVesting, WalletState};
use crate::utils::ledger;

pub fn add_vesting_schedule(
    ctx: Context<AddVestingSchedule>,
    investor: Pubkey,
    amount: u64,
) -> Result<()> {
    let wallet_key = ctx.accounts.wallet_state.key();
    let st = &ctx.accounts.wallet_state;
    st.ensure_owner(&ctx.accounts.owner.key())?;
    ledger::validate_schedule(&investor, amount)?;

    require_keys_eq!(
        ctx.accounts.owner_token_account.mint,
        st.mint,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.owner_token_account.owner,
        ctx.accounts.owner.key(),
        VestingError::InvalidTokenAccount
    );
    require!(
        ctx.accounts.owner_token_account.amount >= amount,
        VestingError::TransferFailed
    );

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.owner_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.owner.to_account_info(),
            },
        ),
        amount,
    )
    .map_err(|_| VestingError::TransferFailed)?;

    // Fresh PDA from init_if_needed.
    let record = &mut ctx.accounts.investor_vesting;
    if record.investor == Pubkey::default() {
        record.wallet = wallet_key;
        record.investor = investor;
        record.bump = ctx.bumps.investor_vesting;
    }

    let now = Clock::get()?.unix_timestamp;
    let seq = ledger::register_schedule(
        &mut ctx.accounts.wallet_state,
        &mut ctx.accounts.investor_vesting,
        investor,
        amount,
        now,
    )?;

    msg!(
        "vesting added: {} units for {} ({} schedules)",
        amount,
        investor,
        ctx.accounts.investor_vesting.schedules.len()
    );

    emit!(VestingAdded {
        investor,
        amount,
        timestamp: now,
        seq,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(investor: Pubkey)]
pub struct AddVestingSchedule<'info> {
    #[account(mut, seeds = [WALLET_STATE_SEED], bump = wallet_state.bump)]
    pub wallet_state: Account<'info, WalletState>,

    #[account(
        init_if_needed,
        payer = owner,
        space = InvestorVesting::space(MAX_SCHEDULES_PER_INVESTOR),
        seeds = [INVESTOR_SEED, wallet_state.key().as_ref(), investor.as_ref()],
        bump
    )]
    pub investor_vesting: Box<Account<'info, InvestorVesting>>,

    #[account(
        mut,
        seeds = [VAULT_SEED, wallet_state.key().as_ref()],
        bump = wallet_state.vault_bump,
        constraint = vault.mint == wallet_state.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub owner_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct VestingAdded {
    pub investor: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
    pub seq: u64,
}
