use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;
use cw_utils::Expiration;

pub type EditionId = u64;

#[cw_serde]
pub enum EditionsExecuteMsg {
    /// Sets max supply and uri of an edition and makes it the current edition.
    /// Requires the admin role.
    InitializeEdition {
        edition_id: EditionId,
        max_supply: Uint128,
        uri: String,
    },
    /// Max supply can never drop below what was already minted.
    SetMaxSupply {
        edition_id: EditionId,
        max_supply: Uint128,
    },
    SetCurrentEdition { edition_id: EditionId },
    SetTokenUri { edition_id: EditionId, uri: String },
    /// Fallback uri for editions without their own.
    SetBaseUri { uri: String },

    /// Mint is only allowed for the current, initialized edition and
    /// only by holders of the minter role.
    Mint {
        to: String,
        edition_id: EditionId,
        amount: Uint128,
    },
    BatchMint {
        to: String,
        batch: Vec<(EditionId, Uint128)>,
    },
    /// SendFrom is a base message to move tokens,
    /// if `env.sender` is the owner or has sufficient pre-approval.
    SendFrom {
        from: String,
        to: String,
        edition_id: EditionId,
        amount: Uint128,
    },
    BatchSendFrom {
        from: String,
        to: String,
        batch: Vec<(EditionId, Uint128)>,
    },
    /// Burn is a base message to burn tokens,
    /// if `env.sender` is the owner or has sufficient pre-approval.
    Burn {
        from: String,
        edition_id: EditionId,
        amount: Uint128,
    },
    BatchBurn {
        from: String,
        batch: Vec<(EditionId, Uint128)>,
    },
    /// Allows operator to transfer / send any token from the owner's account.
    /// If expiration is set, then this allowance has a time/height limit
    ApproveAll {
        operator: String,
        expires: Option<Expiration>,
    },
    /// Remove previously granted ApproveAll permission
    RevokeAll { operator: String },

    Pause {},
    Unpause {},

    GrantRole { role: String, account: String },
    RevokeRole { role: String, account: String },
    RenounceRole { role: String },

    /// Royalty paid on secondary sales, in basis points of the sale price.
    SetRoyaltyInfo { receiver: String, basis_points: u16 },
    TransferOwnership { new_owner: String },
}
