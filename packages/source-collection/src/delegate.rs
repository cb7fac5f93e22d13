use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, QuerierWrapper, StdResult};

/// Lookups a delegation registry answers. Vaults register hot wallets that
/// may act for them without ever holding the tokens.
#[cw_serde]
#[derive(QueryResponses)]
pub enum DelegateRegistryQueryMsg {
    /// True if `delegate` acts for `vault` on this token, on the whole
    /// `contract`, or on everything the vault holds.
    #[returns(CheckDelegateResponse)]
    CheckDelegateForToken {
        delegate: String,
        vault: String,
        contract: String,
        token_id: String,
    },
}

#[cw_serde]
pub struct CheckDelegateResponse {
    pub is_delegate: bool,
}

/// DelegateRegistry is a wrapper around Addr for querying a delegation registry.
#[cw_serde]
pub struct DelegateRegistry(pub Addr);

impl DelegateRegistry {
    pub fn addr(&self) -> Addr {
        self.0.clone()
    }

    pub fn is_delegate_for_token(
        &self,
        querier: &QuerierWrapper,
        delegate: impl Into<String>,
        vault: impl Into<String>,
        contract: impl Into<String>,
        token_id: impl ToString,
    ) -> StdResult<bool> {
        let res: CheckDelegateResponse = querier.query_wasm_smart(
            self.addr(),
            &DelegateRegistryQueryMsg::CheckDelegateForToken {
                delegate: delegate.into(),
                vault: vault.into(),
                contract: contract.into(),
                token_id: token_id.to_string(),
            },
        )?;
        Ok(res.is_delegate)
    }
}
