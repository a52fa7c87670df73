use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

pub use instructions::*;

declare_id!("HFNWMWawaHq73EFsHE7UDJDqKyUBn99WwvmUXnrWEpLw");

#[program]
pub mod vesting_wallet {
    use super::*;

    pub fn initialize_wallet(
        ctx: Context<InitializeWallet>,
        vesting_duration: i64,
        vesting_interval: i64,
    ) -> Result<()> {
        instructions::initialize_wallet(ctx, vesting_duration, vesting_interval)
    }

    /// Owner locks `amount` for `investor`; each call appends a new schedule.
    pub fn add_vesting_schedule(
        ctx: Context<AddVestingSchedule>,
        investor: Pubkey,
        amount: u64,
    ) -> Result<()> {
        instructions::add_vesting_schedule(ctx, investor, amount)
    }

    /// Pays the signer everything matured across all of their schedules.
    pub fn release(ctx: Context<Release>) -> Result<()> {
        instructions::release(ctx)
    }

    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        instructions::transfer_ownership(ctx, new_owner)
    }

    pub fn emit_vesting_quote(ctx: Context<EmitVestingQuote>, investor: Pubkey) -> Result<()> {
        instructions::emit_vesting_quote(ctx, investor)
    }

    pub fn balance_of(ctx: Context<BalanceOf>, address: Pubkey) -> Result<u64> {
        instructions::balance_of(ctx, address)
    }
}
