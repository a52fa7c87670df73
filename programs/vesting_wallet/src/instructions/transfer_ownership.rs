use anchor_lang::prelude::*;

use crate::constants::WALLET_STATE_SEED;
use crate::state::WalletState;

pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
    let signer = ctx.accounts.owner.key();
    let previous_owner = ctx
        .accounts
        .wallet_state
        .transfer_ownership(&signer, new_owner)?;

    emit!(OwnershipTransferred {
        previous_owner,
        new_owner,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    #[account(mut, seeds = [WALLET_STATE_SEED], bump = wallet_state.bump)]
    pub wallet_state: Account<'info, WalletState>,

    pub owner: Signer<'info>,
}

#[event]
pub struct OwnershipTransferred {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
