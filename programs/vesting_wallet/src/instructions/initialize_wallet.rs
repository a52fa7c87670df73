use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{VAULT_SEED, WALLET_STATE_SEED};
use crate::state::WalletState;
use crate::utils::accrual::VestingTerms;

pub fn initialize_wallet(
    ctx: Context<InitializeWallet>,
    vesting_duration: i64,
    vesting_interval: i64,
) -> Result<()> {
    let terms = VestingTerms::new(vesting_duration, vesting_interval)?;

    let st = &mut ctx.accounts.wallet_state;
    st.owner = ctx.accounts.owner.key();
    st.mint = ctx.accounts.mint.key();
    st.vault = ctx.accounts.vault.key();
    st.vesting_duration = terms.duration;
    st.vesting_interval = terms.interval;
    st.locked_total = 0;
    st.released_total = 0;
    st.deposited_total = 0;
    st.schedule_count = 0;
    st.event_seq = 0;
    st.audit_head = [0u8; 32];
    st.bump = ctx.bumps.wallet_state;
    st.vault_bump = ctx.bumps.vault;

    msg!(
        "vesting wallet initialized: {} periods of {}s",
        terms.duration_periods(),
        terms.interval
    );

    emit!(WalletInitialized {
        owner: st.owner,
        mint: st.mint,
        vault: st.vault,
        vesting_duration: st.vesting_duration,
        vesting_interval: st.vesting_interval,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeWallet<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + WalletState::SIZE,
        seeds = [WALLET_STATE_SEED],
        bump
    )]
    pub wallet_state: Account<'info, WalletState>,

    #[account(
        init,
        payer = owner,
        token::mint = mint,
        token::authority = wallet_state,
        seeds = [VAULT_SEED, wallet_state.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct WalletInitialized {
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub vault: Pubkey,
    pub vesting_duration: i64,
    pub vesting_interval: i64,
}
