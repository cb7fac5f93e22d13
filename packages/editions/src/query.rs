use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;
use cw_access_control::{HasRoleResponse, PausedResponse};
use cw_utils::Expiration;

use crate::msg::EditionId;

#[cw_serde]
#[derive(QueryResponses)]
pub enum EditionsQueryMsg {
    /// Returns the current balance of the given address, 0 if unset.
    #[returns(BalanceResponse)]
    Balance { owner: String, edition_id: EditionId },
    /// Returns the current balance of the given address for a batch of editions, 0 if unset.
    #[returns(BatchBalanceResponse)]
    BatchBalance {
        owner: String,
        edition_ids: Vec<EditionId>,
    },
    /// List all operators that can access all of the owner's tokens.
    #[returns(ApprovedForAllResponse)]
    ApprovedForAll {
        owner: String,
        /// unset or false will filter out expired approvals, you must set to true to see them
        include_expired: Option<bool>,
        start_after: Option<String>,
        limit: Option<u32>,
    },
    /// Query approved status `owner` granted to `operator`.
    #[returns(IsApprovedForAllResponse)]
    IsApprovedForAll { owner: String, operator: String },

    /// 0 for editions that were never initialized.
    #[returns(MaxSupplyResponse)]
    MaxSupply { edition_id: EditionId },
    #[returns(CurrentSupplyResponse)]
    CurrentSupply { edition_id: EditionId },
    /// Every edition id that had at least one mint, in order of first mint.
    #[returns(TokenIdsMintedResponse)]
    TokenIdsMinted {},
    #[returns(CurrentEditionResponse)]
    CurrentEdition {},
    /// Edition uri, falling back to the base uri, "" if neither is set.
    #[returns(UriResponse)]
    Uri { edition_id: EditionId },
    #[returns(RoyaltyInfoResponse)]
    RoyaltyInfo {
        edition_id: EditionId,
        sale_price: Uint128,
    },

    #[returns(HasRoleResponse)]
    HasRole { role: String, account: String },
    #[returns(PausedResponse)]
    Paused {},
    #[returns(OwnerResponse)]
    Owner {},
}

#[cw_serde]
pub struct BalanceResponse {
    pub balance: Uint128,
}

#[cw_serde]
pub struct BatchBalanceResponse {
    pub balances: Vec<Uint128>,
}

#[cw_serde]
pub struct Approval {
    /// Account that can transfer/send the token
    pub spender: String,
    /// When the Approval expires (maybe Expiration::never)
    pub expires: Expiration,
}

#[cw_serde]
pub struct ApprovedForAllResponse {
    pub operators: Vec<Approval>,
}

#[cw_serde]
pub struct IsApprovedForAllResponse {
    pub approved: bool,
}

#[cw_serde]
pub struct MaxSupplyResponse {
    pub max_supply: Uint128,
}

#[cw_serde]
pub struct CurrentSupplyResponse {
    pub current_supply: Uint128,
}

#[cw_serde]
pub struct TokenIdsMintedResponse {
    pub edition_ids: Vec<EditionId>,
}

#[cw_serde]
pub struct CurrentEditionResponse {
    pub edition_id: EditionId,
}

#[cw_serde]
pub struct UriResponse {
    pub uri: String,
}

#[cw_serde]
pub struct RoyaltyInfoResponse {
    pub receiver: String,
    pub royalty_amount: Uint128,
}

#[cw_serde]
pub struct OwnerResponse {
    pub owner: Option<String>,
}
