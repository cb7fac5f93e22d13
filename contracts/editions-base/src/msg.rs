use cosmwasm_schema::cw_serde;

#[cw_serde]
pub struct InstantiateMsg {
    /// Receives royalties on secondary sales.
    pub royalty_receiver: String,
    /// Defaults to 500 (5%).
    pub royalty_basis_points: Option<u16>,
    /// Granted the admin role. The instantiating sender becomes owner and default admin.
    pub admins: Vec<String>,
    /// Granted the minter role, typically the storefront contract and a few operators.
    pub minters: Vec<String>,
    pub base_uri: Option<String>,
}

#[cw_serde]
pub struct MigrateMsg {}
