use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_access_control::{Pausable, Roles};
use cw_controllers::Admin;
use cw_editions::{EditionId, Expiration};
use cw_storage_plus::{Item, Map};

#[cw_serde]
#[derive(Default)]
pub struct EditionInfo {
    /// Zero until the edition is initialized.
    pub max_supply: Uint128,
    /// Total ever minted. Burns do not free up supply.
    pub current_supply: Uint128,
    pub uri: String,
}

impl EditionInfo {
    pub fn is_initialized(&self) -> bool {
        !self.max_supply.is_zero()
    }
}

#[cw_serde]
pub struct Royalty {
    pub receiver: Addr,
    pub basis_points: u16,
}

/// Single owner, independent of the role table. Only ownership transfer is gated on it.
pub const OWNER: Admin = Admin::new("owner");
pub const ROLES: Roles = Roles::new("roles", "role_admins");
pub const PAUSE: Pausable = Pausable::new("paused");

/// Store the balance map, `(owner, edition_id) -> balance`
pub const BALANCES: Map<(&Addr, EditionId), Uint128> = Map::new("balances");
/// Store the approval status, `(owner, spender) -> expiration`
pub const APPROVES: Map<(&Addr, &Addr), Expiration> = Map::new("approves");
pub const EDITIONS: Map<EditionId, EditionInfo> = Map::new("editions");
pub const CURRENT_EDITION: Item<EditionId> = Item::new("current_edition");
/// Edition ids in the order of their first mint.
pub const TOKEN_IDS_MINTED: Item<Vec<EditionId>> = Item::new("token_ids_minted");
pub const BASE_URI: Item<String> = Item::new("base_uri");
pub const ROYALTY: Item<Royalty> = Item::new("royalty");
