use cosmwasm_std::{OverflowError, StdError, Uint128};
use cw_access_control::{PauseError, RoleError};
use cw_controllers::AdminError;
use cw_editions::EditionId;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    Role(#[from] RoleError),

    #[error("{0}")]
    Pause(#[from] PauseError),

    #[error("{0}")]
    Admin(#[from] AdminError),

    #[error("Caller is not token owner or approved")]
    Unauthorized {},

    #[error("Approval has expired")]
    Expired {},

    #[error("Edition {edition_id} has not been initialized")]
    EditionNotInitialized { edition_id: EditionId },

    #[error("Edition {edition_id} is not the current edition ({current})")]
    NotCurrentEdition {
        edition_id: EditionId,
        current: EditionId,
    },

    #[error("Minting would exceed max supply {max_supply} of edition {edition_id}")]
    MaxSupplyExceeded {
        edition_id: EditionId,
        max_supply: Uint128,
    },

    #[error("Max supply {max_supply} of edition {edition_id} is below its current supply {current_supply}")]
    InvalidMaxSupply {
        edition_id: EditionId,
        max_supply: Uint128,
        current_supply: Uint128,
    },

    #[error("Royalty of {basis_points} basis points exceeds the sale price")]
    InvalidRoyalty { basis_points: u16 },

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
