use cosmwasm_schema::cw_serde;
use cw_utils::Expiration;

/// Execute messages shared with cw721. Token ids are strings on the wire,
/// the storefront renders its numeric ids with `to_string()`.
#[cw_serde]
pub enum SourceCollectionExecuteMsg {
    /// Transfer is a base message to move a token to another account without triggering actions
    TransferNft { recipient: String, token_id: String },
    /// Allows operator to transfer / send the token from the owner's account.
    /// If expiration is set, then this allowance has a time/height limit
    Approve {
        spender: String,
        token_id: String,
        expires: Option<Expiration>,
    },
    /// Remove previously granted Approval
    Revoke { spender: String, token_id: String },
    /// Allows operator to transfer / send any token from the owner's account.
    /// If expiration is set, then this allowance has a time/height limit
    ApproveAll {
        operator: String,
        expires: Option<Expiration>,
    },
    /// Remove previously granted ApproveAll permission
    RevokeAll { operator: String },
    /// Burn an NFT the sender has access to
    Burn { token_id: String },
}
