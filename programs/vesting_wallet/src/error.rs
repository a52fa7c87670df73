use anchor_lang::prelude::*;

/// Custom error codes for the vesting wallet program.
#[error_code]
pub enum VestingError {
    #[msg("Unauthorized: owner signature required")]
    Unauthorized,

    #[msg("Invalid investor address")]
    InvalidInvestor,

    #[msg("Amount must be greater than 0")]
    InvalidAmount,

    #[msg("Invalid owner address")]
    InvalidOwner,

    #[msg("Invalid vesting configuration")]
    InvalidConfig,

    #[msg("Token transfer failed")]
    TransferFailed,

    #[msg("No tokens vested")]
    NothingVested,

    #[msg("Investor schedule list is full")]
    ScheduleListFull,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Math overflow")]
    MathOverflow,
}
