use cosmwasm_schema::cw_serde;
use cosmwasm_std::{to_json_binary, Addr, CosmosMsg, QuerierWrapper, StdResult, WasmMsg};

use crate::msg::SourceCollectionExecuteMsg;
use crate::query::{OperatorResponse, OwnerOfResponse, SourceCollectionQueryMsg};

/// SourceCollection is a wrapper around Addr that provides helpers for the
/// ownership checks and burns a redemption storefront performs.
#[cw_serde]
pub struct SourceCollection(pub Addr);

impl SourceCollection {
    pub fn addr(&self) -> Addr {
        self.0.clone()
    }

    pub fn call(&self, msg: SourceCollectionExecuteMsg) -> StdResult<CosmosMsg> {
        Ok(WasmMsg::Execute {
            contract_addr: self.addr().into(),
            msg: to_json_binary(&msg)?,
            funds: vec![],
        }
        .into())
    }

    pub fn burn(&self, token_id: impl ToString) -> StdResult<CosmosMsg> {
        self.call(SourceCollectionExecuteMsg::Burn {
            token_id: token_id.to_string(),
        })
    }

    /// Owner and unexpired approvals of a token. Errors if the token does not exist.
    pub fn owner_of(
        &self,
        querier: &QuerierWrapper,
        token_id: impl ToString,
    ) -> StdResult<OwnerOfResponse> {
        querier.query_wasm_smart(
            self.addr(),
            &SourceCollectionQueryMsg::OwnerOf {
                token_id: token_id.to_string(),
                include_expired: Some(false),
            },
        )
    }

    /// cw721 answers the operator query with an error when no approval exists,
    /// so any error reads as "not an operator".
    pub fn is_operator(
        &self,
        querier: &QuerierWrapper,
        owner: impl Into<String>,
        operator: impl Into<String>,
    ) -> bool {
        querier
            .query_wasm_smart::<OperatorResponse>(
                self.addr(),
                &SourceCollectionQueryMsg::Operator {
                    owner: owner.into(),
                    operator: operator.into(),
                    include_expired: Some(false),
                },
            )
            .is_ok()
    }

    /// True if `spender` may move or burn the token, either through a token
    /// approval or as an operator of the owner.
    pub fn can_spend(
        &self,
        querier: &QuerierWrapper,
        token: &OwnerOfResponse,
        spender: &Addr,
    ) -> bool {
        token.approvals.iter().any(|a| a.spender == spender.as_str())
            || self.is_operator(querier, token.owner.as_str(), spender.as_str())
    }
}
