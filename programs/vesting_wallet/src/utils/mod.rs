pub mod accrual;
pub mod audit;
pub mod ledger;
