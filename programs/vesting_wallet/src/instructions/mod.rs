pub mod initialize_wallet;
pub mod add_vesting_schedule;
pub mod release;
pub mod transfer_ownership;
pub mod emit_vesting_quote;
pub mod balance_of;

pub use initialize_wallet::*;
pub use add_vesting_schedule::*;
pub use release::*;
pub use transfer_ownership::*;
pub use emit_vesting_quote::*;
pub use balance_of::*;
