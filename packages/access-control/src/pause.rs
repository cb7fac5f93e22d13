use cosmwasm_schema::cw_serde;
use cosmwasm_std::{attr, MessageInfo, Response, StdError, StdResult, Storage};
use cw_storage_plus::Item;
use thiserror::Error;

#[cw_serde]
pub struct PausedResponse {
    pub paused: bool,
}

/// Pausable is a storage helper that tells whether the contract is halted.
/// An unset flag reads as "not paused".
/// WARNING: Pausable does not implement any authorisation method,
/// check the caller's role before running the execute helpers.
pub struct Pausable(Item<bool>);

impl Pausable {
    pub const fn new(namespace: &'static str) -> Self {
        Pausable(Item::new(namespace))
    }

    pub fn set(&self, storage: &mut dyn Storage, paused: bool) -> StdResult<()> {
        self.0.save(storage, &paused)
    }

    pub fn is_paused(&self, storage: &dyn Storage) -> StdResult<bool> {
        Ok(self.0.may_load(storage)?.unwrap_or_default())
    }

    pub fn assert_not_paused(&self, storage: &dyn Storage) -> Result<(), PauseError> {
        if self.is_paused(storage)? {
            return Err(PauseError::Paused {});
        }
        Ok(())
    }

    pub fn execute_pause(
        &self,
        storage: &mut dyn Storage,
        info: &MessageInfo,
    ) -> Result<Response, PauseError> {
        self.update(storage, info, true)
    }

    pub fn execute_unpause(
        &self,
        storage: &mut dyn Storage,
        info: &MessageInfo,
    ) -> Result<Response, PauseError> {
        self.update(storage, info, false)
    }

    fn update(
        &self,
        storage: &mut dyn Storage,
        info: &MessageInfo,
        paused: bool,
    ) -> Result<Response, PauseError> {
        if self.is_paused(storage)? == paused {
            return Err(if paused {
                PauseError::Paused {}
            } else {
                PauseError::NotPaused {}
            });
        }
        self.set(storage, paused)?;

        let action = if paused { "pause" } else { "unpause" };
        Ok(Response::new().add_attributes(vec![
            attr("action", action),
            attr("sender", info.sender.as_str()),
        ]))
    }

    pub fn query_paused(&self, storage: &dyn Storage) -> StdResult<PausedResponse> {
        let paused = self.is_paused(storage)?;
        Ok(PausedResponse { paused })
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum PauseError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Contract is paused")]
    Paused {},

    #[error("Contract is not paused")]
    NotPaused {},
}
