use cosmwasm_schema::cw_serde;
use cosmwasm_std::{to_json_binary, Addr, CosmosMsg, QuerierWrapper, StdResult, Uint128, WasmMsg};
use serde::de::DeserializeOwned;

use crate::msg::{EditionId, EditionsExecuteMsg};
use crate::query::{
    BalanceResponse, CurrentEditionResponse, CurrentSupplyResponse, EditionsQueryMsg,
    MaxSupplyResponse,
};

/// EditionsContract is a wrapper around Addr that provides a lot of helpers
/// for working with an edition token contract.
#[cw_serde]
pub struct EditionsContract(pub Addr);

impl EditionsContract {
    pub fn addr(&self) -> Addr {
        self.0.clone()
    }

    pub fn call(&self, msg: EditionsExecuteMsg) -> StdResult<CosmosMsg> {
        Ok(WasmMsg::Execute {
            contract_addr: self.addr().into(),
            msg: to_json_binary(&msg)?,
            funds: vec![],
        }
        .into())
    }

    pub fn query<T: DeserializeOwned>(
        &self,
        querier: &QuerierWrapper,
        req: EditionsQueryMsg,
    ) -> StdResult<T> {
        querier.query_wasm_smart(self.addr(), &req)
    }

    /*** messages ***/

    pub fn mint(
        &self,
        to: impl Into<String>,
        edition_id: EditionId,
        amount: Uint128,
    ) -> StdResult<CosmosMsg> {
        self.call(EditionsExecuteMsg::Mint {
            to: to.into(),
            edition_id,
            amount,
        })
    }

    pub fn initialize_edition(
        &self,
        edition_id: EditionId,
        max_supply: Uint128,
        uri: impl Into<String>,
    ) -> StdResult<CosmosMsg> {
        self.call(EditionsExecuteMsg::InitializeEdition {
            edition_id,
            max_supply,
            uri: uri.into(),
        })
    }

    pub fn set_current_edition(&self, edition_id: EditionId) -> StdResult<CosmosMsg> {
        self.call(EditionsExecuteMsg::SetCurrentEdition { edition_id })
    }

    /*** queries ***/

    pub fn balance(
        &self,
        querier: &QuerierWrapper,
        owner: impl Into<String>,
        edition_id: EditionId,
    ) -> StdResult<Uint128> {
        let res: BalanceResponse = self.query(
            querier,
            EditionsQueryMsg::Balance {
                owner: owner.into(),
                edition_id,
            },
        )?;
        Ok(res.balance)
    }

    pub fn max_supply(&self, querier: &QuerierWrapper, edition_id: EditionId) -> StdResult<Uint128> {
        let res: MaxSupplyResponse =
            self.query(querier, EditionsQueryMsg::MaxSupply { edition_id })?;
        Ok(res.max_supply)
    }

    pub fn current_supply(
        &self,
        querier: &QuerierWrapper,
        edition_id: EditionId,
    ) -> StdResult<Uint128> {
        let res: CurrentSupplyResponse =
            self.query(querier, EditionsQueryMsg::CurrentSupply { edition_id })?;
        Ok(res.current_supply)
    }

    pub fn current_edition(&self, querier: &QuerierWrapper) -> StdResult<EditionId> {
        let res: CurrentEditionResponse = self.query(querier, EditionsQueryMsg::CurrentEdition {})?;
        Ok(res.edition_id)
    }
}
