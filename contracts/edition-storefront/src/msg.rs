use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Coin, Timestamp, Uint128};
use cw_access_control::{HasRoleResponse, PausedResponse};
use cw_editions::EditionId;

#[cw_serde]
pub struct InstantiateMsg {
    /// Edition token the storefront mints into. It needs the admin and minter roles there.
    pub token_address: String,
    /// cw721 collection whose tokens are redeemed.
    pub source_collection: String,
    /// Receives every claim payment.
    pub payment_address: String,
    pub denom: String,
    /// Price restored by every `SetupMint`.
    pub default_mint_price: Uint128,
    /// Defaults to 1.
    pub mint_per_mld: Option<u32>,
    /// Hex encoded merkle root, unset to disable the allowlist.
    pub allowlist_root: Option<String>,
    /// Registry whose delegates may claim for the vault owning a source token.
    pub delegate_registry: Option<String>,
    /// Granted the admin role next to the instantiating sender.
    pub admins: Vec<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Configures an edition, makes it current here and on the edition token,
    /// and resets the mint price. Excluded source tokens count as redeemed.
    SetupMint {
        edition_id: EditionId,
        max_supply: Uint128,
        start_time: Timestamp,
        end_time: Timestamp,
        uri: String,
        exclusions: Vec<u64>,
    },
    /// Paid redemption: one unit of the current edition per source token.
    Claim {
        recipient: String,
        token_ids: Vec<u64>,
        referrer: Option<String>,
        proof: Option<Vec<String>>,
    },
    /// Same as `Claim` while the mint price is zero. Rejects funds.
    FreeClaim {
        recipient: String,
        token_ids: Vec<u64>,
        referrer: Option<String>,
        proof: Option<Vec<String>>,
    },
    /// Burns the source tokens and mints one unit each to the sender.
    /// The storefront must be approved on the source collection.
    BurnAndClaim { token_ids: Vec<u64> },

    SetClaimed { token_id: u64 },
    ResetClaimed { token_id: u64 },
    /// Forgets every redemption at once.
    ResetClaimedList {},
    SetMintPrice { price: Uint128 },
    /// Redemptions one source token may back before it reads as claimed.
    SetMintPerMld { amount: u32 },
    SetCurrentEditionId { edition_id: EditionId },
    SetTokenAddress { address: String },
    UpdateAllowlistRoot { root: Option<String> },
    /// `None` turns delegated claims off.
    SetDelegateRegistry { address: Option<String> },

    Pause {},
    Unpause {},

    GrantRole { role: String, account: String },
    RevokeRole { role: String, account: String },
    RenounceRole { role: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    #[returns(EditionResponse)]
    Edition { edition_id: EditionId },
    #[returns(CurrentEditionResponse)]
    CurrentEdition {},
    #[returns(IsMintOpenResponse)]
    IsMintOpen {},
    #[returns(IsClaimedResponse)]
    IsClaimed { token_id: u64 },
    #[returns(RedemptionCountResponse)]
    RedemptionCount { token_id: u64 },
    /// Source tokens claimed since the last `ResetClaimedList`.
    #[returns(ClaimedTokensResponse)]
    ClaimedTokens {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    #[returns(MintPriceResponse)]
    MintPrice {},
    #[returns(HasRoleResponse)]
    HasRole { role: String, account: String },
    #[returns(PausedResponse)]
    Paused {},
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct ConfigResponse {
    pub token_address: String,
    pub source_collection: String,
    pub payment_address: String,
    pub denom: String,
    pub default_mint_price: Uint128,
    pub mint_per_mld: u32,
    pub allowlist_root: Option<String>,
    pub delegate_registry: Option<String>,
}

#[cw_serde]
pub struct EditionResponse {
    pub edition_id: EditionId,
    pub max_supply: Uint128,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub uri: String,
}

#[cw_serde]
pub struct CurrentEditionResponse {
    pub edition_id: Option<EditionId>,
}

#[cw_serde]
pub struct IsMintOpenResponse {
    pub is_open: bool,
}

#[cw_serde]
pub struct IsClaimedResponse {
    pub is_claimed: bool,
}

#[cw_serde]
pub struct RedemptionCountResponse {
    pub count: u32,
}

#[cw_serde]
pub struct ClaimedTokensResponse {
    pub token_ids: Vec<u64>,
}

#[cw_serde]
pub struct MintPriceResponse {
    pub price: Coin,
}
