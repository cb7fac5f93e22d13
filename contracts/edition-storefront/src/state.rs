use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, BlockInfo, Timestamp, Uint128};
use cw_access_control::{Pausable, Roles};
use cw_editions::{EditionId, EditionsContract};
use cw_source_collection::{DelegateRegistry, SourceCollection};
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    pub token_address: EditionsContract,
    pub source_collection: SourceCollection,
    pub payment_address: Addr,
    pub denom: String,
    pub default_mint_price: Uint128,
    /// Hex encoded, `None` lets everyone through.
    pub allowlist_root: Option<String>,
    pub delegate_registry: Option<DelegateRegistry>,
}

#[cw_serde]
pub struct Edition {
    pub max_supply: Uint128,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub uri: String,
}

impl Edition {
    /// Open in `[start_time, end_time)`.
    pub fn is_open(&self, block: &BlockInfo) -> bool {
        self.start_time <= block.time && block.time < self.end_time
    }
}

pub const CONFIG: Item<Config> = Item::new("config");
pub const ROLES: Roles = Roles::new("roles", "role_admins");
pub const PAUSE: Pausable = Pausable::new("paused");

pub const EDITIONS: Map<EditionId, Edition> = Map::new("editions");
pub const CURRENT_EDITION: Item<EditionId> = Item::new("current_edition");
pub const MINT_PRICE: Item<Uint128> = Item::new("mint_price");

pub const MINT_PER_MLD: Item<u32> = Item::new("mint_per_mld");
/// Generation of the redemption table, bumped to forget every redemption.
pub const CLAIM_EPOCH: Item<u64> = Item::new("claim_epoch");
/// `(epoch, source token id) -> redemptions`
pub const REDEMPTIONS: Map<(u64, u64), u32> = Map::new("redemptions");
