use cosmwasm_std::{Addr, Deps, Env, Order, StdResult, Uint128};
use cw_editions::{
    Approval, ApprovedForAllResponse, BalanceResponse, BatchBalanceResponse,
    CurrentEditionResponse, CurrentSupplyResponse, EditionId, Expiration,
    IsApprovedForAllResponse, MaxSupplyResponse, OwnerResponse, RoyaltyInfoResponse,
    TokenIdsMintedResponse, UriResponse,
};
use cw_storage_plus::Bound;
use cw_utils::maybe_addr;

use crate::{
    helpers::{check_can_approve, royalty_amount},
    state::{
        APPROVES, BALANCES, BASE_URI, CURRENT_EDITION, EDITIONS, OWNER, ROYALTY,
        TOKEN_IDS_MINTED,
    },
};

pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 30;

pub fn balance(deps: Deps, owner: String, edition_id: EditionId) -> StdResult<BalanceResponse> {
    let owner = deps.api.addr_validate(&owner)?;

    let balance = BALANCES
        .may_load(deps.storage, (&owner, edition_id))?
        .unwrap_or_default();

    Ok(BalanceResponse { balance })
}

pub fn batch_balance(
    deps: Deps,
    owner: String,
    edition_ids: Vec<EditionId>,
) -> StdResult<BatchBalanceResponse> {
    let owner = deps.api.addr_validate(&owner)?;

    let balances = edition_ids
        .into_iter()
        .map(|edition_id| -> StdResult<_> {
            Ok(BALANCES
                .may_load(deps.storage, (&owner, edition_id))?
                .unwrap_or_default())
        })
        .collect::<StdResult<_>>()?;

    Ok(BatchBalanceResponse { balances })
}

fn build_approval(item: StdResult<(Addr, Expiration)>) -> StdResult<Approval> {
    item.map(|(addr, expires)| Approval {
        spender: addr.into(),
        expires,
    })
}

pub fn approved_for_all(
    deps: Deps,
    env: Env,
    owner: String,
    include_expired: bool,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<ApprovedForAllResponse> {
    let owner = deps.api.addr_validate(&owner)?;
    let start_after = maybe_addr(deps.api, start_after)?;
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.as_ref().map(Bound::exclusive);

    let operators = APPROVES
        .prefix(&owner)
        .range(deps.storage, start, None, Order::Ascending)
        .filter(|r| match r {
            Ok((_, expires)) => include_expired || !expires.is_expired(&env.block),
            Err(_) => true,
        })
        .take(limit)
        .map(build_approval)
        .collect::<StdResult<_>>()?;

    Ok(ApprovedForAllResponse { operators })
}

pub fn is_approved_for_all(
    deps: Deps,
    env: Env,
    owner: String,
    operator: String,
) -> StdResult<IsApprovedForAllResponse> {
    let owner_addr = deps.api.addr_validate(&owner)?;
    let operator_addr = deps.api.addr_validate(&operator)?;

    let approved = check_can_approve(deps, &env, &owner_addr, &operator_addr)?;

    Ok(IsApprovedForAllResponse { approved })
}

pub fn max_supply(deps: Deps, edition_id: EditionId) -> StdResult<MaxSupplyResponse> {
    let max_supply = EDITIONS
        .may_load(deps.storage, edition_id)?
        .map(|e| e.max_supply)
        .unwrap_or_default();
    Ok(MaxSupplyResponse { max_supply })
}

pub fn current_supply(deps: Deps, edition_id: EditionId) -> StdResult<CurrentSupplyResponse> {
    let current_supply = EDITIONS
        .may_load(deps.storage, edition_id)?
        .map(|e| e.current_supply)
        .unwrap_or_default();
    Ok(CurrentSupplyResponse { current_supply })
}

pub fn token_ids_minted(deps: Deps) -> StdResult<TokenIdsMintedResponse> {
    let edition_ids = TOKEN_IDS_MINTED.may_load(deps.storage)?.unwrap_or_default();
    Ok(TokenIdsMintedResponse { edition_ids })
}

pub fn current_edition(deps: Deps) -> StdResult<CurrentEditionResponse> {
    let edition_id = CURRENT_EDITION.may_load(deps.storage)?.unwrap_or_default();
    Ok(CurrentEditionResponse { edition_id })
}

pub fn uri(deps: Deps, edition_id: EditionId) -> StdResult<UriResponse> {
    let uri = match EDITIONS.may_load(deps.storage, edition_id)? {
        Some(edition) if !edition.uri.is_empty() => edition.uri,
        _ => BASE_URI.may_load(deps.storage)?.unwrap_or_default(),
    };
    Ok(UriResponse { uri })
}

/// Same royalty for every edition.
pub fn royalty_info(
    deps: Deps,
    _edition_id: EditionId,
    sale_price: Uint128,
) -> StdResult<RoyaltyInfoResponse> {
    let royalty = ROYALTY.load(deps.storage)?;
    Ok(RoyaltyInfoResponse {
        receiver: royalty.receiver.into(),
        royalty_amount: royalty_amount(sale_price, royalty.basis_points),
    })
}

pub fn owner(deps: Deps) -> StdResult<OwnerResponse> {
    let owner = OWNER.get(deps)?.map(String::from);
    Ok(OwnerResponse { owner })
}
