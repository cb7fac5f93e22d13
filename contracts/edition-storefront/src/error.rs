use cosmwasm_std::{OverflowError, StdError, Uint128};
use cw_access_control::{PauseError, RoleError};
use cw_editions::EditionId;
use cw_utils::PaymentError;
use hex::FromHexError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("{0}")]
    Role(#[from] RoleError),

    #[error("{0}")]
    Pause(#[from] PauseError),

    #[error("{0}")]
    Hex(#[from] FromHexError),

    #[error("{caller} is not the owner of source token {token_id}")]
    NotOwnerOfMldToken { caller: String, token_id: u64 },

    #[error("Source token {token_id} has already been claimed")]
    TokenClaimed { token_id: u64 },

    #[error("Invalid configuration: {reason}")]
    ConfigurationError { reason: String },

    #[error("Insufficient payment: required {required}, paid {paid}")]
    InsufficientPayment { required: Uint128, paid: Uint128 },

    #[error("Storefront is not approved to burn source token {token_id}")]
    NotApproved { token_id: u64 },

    #[error("Source token {token_id} appears more than once")]
    DuplicateTokenId { token_id: u64 },

    #[error("No source tokens given")]
    EmptyBatch {},

    #[error("Mint is not open")]
    MintClosed {},

    #[error("Mint price must be zero for a free claim")]
    MintNotFree {},

    #[error("No edition has been set up")]
    NoCurrentEdition {},

    #[error("Minting would exceed max supply {max_supply} of edition {edition_id}")]
    MaxSupplyExceeded {
        edition_id: EditionId,
        max_supply: Uint128,
    },

    #[error("Verification failed")]
    VerificationFailed {},

    #[error("Wrong length")]
    WrongLength {},

    #[error("Cannot migrate from different contract type: {previous_contract}")]
    CannotMigrate { previous_contract: String },

    #[error("Cannot migrate from newer version ({previous}) to older ({new})")]
    CannotMigrateVersion { previous: String, new: String },

    #[error("Semver parsing error: {0}")]
    SemVer(String),
}

impl From<semver::Error> for ContractError {
    fn from(err: semver::Error) -> Self {
        Self::SemVer(err.to_string())
    }
}
