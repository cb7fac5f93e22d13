pub mod contract;
mod error;
pub mod execute;
pub mod helpers;
pub mod msg;
pub mod query;
pub mod state;

pub use crate::error::ContractError;

#[cfg(test)]
mod tests;
