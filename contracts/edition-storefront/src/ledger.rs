//! Redemption bookkeeping for source tokens.
//!
//! A source token is claimed once it backed `mint_per_mld` redemptions in the
//! current epoch. Resetting the whole table bumps the epoch instead of
//! deleting records, older epochs are never read again.
//!
//! Batches are validated against storage without writing anything, so a
//! failing batch leaves every record untouched.

use std::collections::BTreeMap;

use cosmwasm_std::{Order, StdResult, Storage};
use cw_storage_plus::Bound;

use crate::state::{CLAIM_EPOCH, MINT_PER_MLD, REDEMPTIONS};
use crate::ContractError;

pub const DEFAULT_MINT_PER_MLD: u32 = 1;

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ledger {
    epoch: u64,
    quota: u32,
}

impl Ledger {
    pub fn load(storage: &dyn Storage) -> StdResult<Self> {
        Ok(Ledger {
            epoch: CLAIM_EPOCH.may_load(storage)?.unwrap_or_default(),
            quota: MINT_PER_MLD
                .may_load(storage)?
                .unwrap_or(DEFAULT_MINT_PER_MLD),
        })
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn quota(&self) -> u32 {
        self.quota
    }

    pub fn redemptions(&self, storage: &dyn Storage, token_id: u64) -> StdResult<u32> {
        Ok(REDEMPTIONS
            .may_load(storage, (self.epoch, token_id))?
            .unwrap_or_default())
    }

    pub fn is_claimed(&self, storage: &dyn Storage, token_id: u64) -> StdResult<bool> {
        Ok(self.redemptions(storage, token_id)? >= self.quota)
    }

    pub fn plan(&self) -> RedemptionPlan<'_> {
        RedemptionPlan {
            ledger: self,
            pending: BTreeMap::new(),
        }
    }

    /// Uses up the whole quota of `token_id`.
    pub fn set_claimed(&self, storage: &mut dyn Storage, token_id: u64) -> StdResult<()> {
        if self.redemptions(storage, token_id)? < self.quota {
            REDEMPTIONS.save(storage, (self.epoch, token_id), &self.quota)?;
        }
        Ok(())
    }

    pub fn reset_claimed(&self, storage: &mut dyn Storage, token_id: u64) {
        REDEMPTIONS.remove(storage, (self.epoch, token_id));
    }

    /// Starts a fresh epoch and returns it.
    pub fn reset_all(&mut self, storage: &mut dyn Storage) -> StdResult<u64> {
        self.epoch += 1;
        CLAIM_EPOCH.save(storage, &self.epoch)?;
        Ok(self.epoch)
    }

    pub fn claimed_tokens(
        &self,
        storage: &dyn Storage,
        start_after: Option<u64>,
        limit: Option<u32>,
    ) -> StdResult<Vec<u64>> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
        let start = start_after.map(Bound::exclusive);

        REDEMPTIONS
            .prefix(self.epoch)
            .range(storage, start, None, Order::Ascending)
            .filter(|r| match r {
                Ok((_, count)) => *count >= self.quota,
                Err(_) => true,
            })
            .take(limit)
            .map(|r| r.map(|(token_id, _)| token_id))
            .collect()
    }
}

/// Redemptions of one batch, validated but not yet written.
pub struct RedemptionPlan<'a> {
    ledger: &'a Ledger,
    pending: BTreeMap<u64, u32>,
}

impl<'a> RedemptionPlan<'a> {
    /// Books one redemption of `token_id`, counting earlier entries of the same batch.
    pub fn redeem(&mut self, storage: &dyn Storage, token_id: u64) -> Result<(), ContractError> {
        let count = match self.pending.get(&token_id) {
            Some(count) => *count,
            None => self.ledger.redemptions(storage, token_id)?,
        };
        if count >= self.ledger.quota {
            return Err(ContractError::TokenClaimed { token_id });
        }
        self.pending.insert(token_id, count + 1);
        Ok(())
    }

    pub fn commit(self, storage: &mut dyn Storage) -> StdResult<()> {
        for (token_id, count) in self.pending {
            REDEMPTIONS.save(storage, (self.ledger.epoch, token_id), &count)?;
        }
        Ok(())
    }
}
