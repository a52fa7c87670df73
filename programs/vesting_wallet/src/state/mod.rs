pub mod investor_vesting;
pub mod wallet_state;

pub use investor_vesting::*;
pub use wallet_state::*;
