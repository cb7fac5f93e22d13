use cosmwasm_std::{attr, Addr, DepsMut, Response, StdResult, Uint128};
use cw_access_control::{AuthorizationPolicy, ADMIN_ROLE, DEFAULT_ADMIN_ROLE, MINTER_ROLE};
use cw_editions::{
    ApproveAllEvent, EditionEvent, EditionId, Event, Expiration, MetadataEvent, TransferEvent,
};

use crate::{
    contract::ExecuteEnv,
    helpers::guard_can_approve,
    state::{
        Royalty, APPROVES, BALANCES, BASE_URI, CURRENT_EDITION, EDITIONS, OWNER, PAUSE, ROLES,
        ROYALTY, TOKEN_IDS_MINTED,
    },
    ContractError,
};

/// When from is None: mint new coins
/// When to is None: burn coins
/// When both are None: no token balance is changed, pointless but valid
///
/// Make sure permissions are checked before calling this.
fn transfer_inner<'a>(
    deps: &mut DepsMut,
    from: Option<&'a Addr>,
    to: Option<&'a Addr>,
    edition_id: EditionId,
    amount: Uint128,
) -> Result<TransferEvent<'a>, ContractError> {
    PAUSE.assert_not_paused(deps.storage)?;

    if let Some(from_addr) = from {
        BALANCES.update(
            deps.storage,
            (from_addr, edition_id),
            |balance: Option<Uint128>| -> StdResult<_> {
                Ok(balance.unwrap_or_default().checked_sub(amount)?)
            },
        )?;
    }

    if let Some(to_addr) = to {
        BALANCES.update(
            deps.storage,
            (to_addr, edition_id),
            |balance: Option<Uint128>| -> StdResult<_> {
                Ok(balance.unwrap_or_default().checked_add(amount)?)
            },
        )?;
    }

    Ok(TransferEvent {
        from: from.map(|x| x.as_ref()),
        to: to.map(|x| x.as_ref()),
        edition_id,
        amount,
    })
}

/// Checks the supply rules and books the new supply. Balances are left to `transfer_inner`.
fn record_mint(
    deps: &mut DepsMut,
    edition_id: EditionId,
    amount: Uint128,
) -> Result<(), ContractError> {
    let current = CURRENT_EDITION.load(deps.storage)?;
    if edition_id != current {
        return Err(ContractError::NotCurrentEdition {
            edition_id,
            current,
        });
    }

    let mut edition = EDITIONS
        .may_load(deps.storage, edition_id)?
        .filter(|e| e.is_initialized())
        .ok_or(ContractError::EditionNotInitialized { edition_id })?;
    let new_supply = edition.current_supply.checked_add(amount)?;
    if new_supply > edition.max_supply {
        return Err(ContractError::MaxSupplyExceeded {
            edition_id,
            max_supply: edition.max_supply,
        });
    }
    edition.current_supply = new_supply;
    EDITIONS.save(deps.storage, edition_id, &edition)?;

    TOKEN_IDS_MINTED.update(deps.storage, |mut ids| -> StdResult<_> {
        if !ids.contains(&edition_id) {
            ids.push(edition_id);
        }
        Ok(ids)
    })?;
    Ok(())
}

pub fn initialize_edition(
    env: ExecuteEnv,
    edition_id: EditionId,
    max_supply: Uint128,
    uri: String,
) -> Result<Response, ContractError> {
    let ExecuteEnv { deps, info, .. } = env;
    ROLES.require_role(deps.storage, &info.sender, ADMIN_ROLE)?;

    let mut edition = EDITIONS
        .may_load(deps.storage, edition_id)?
        .unwrap_or_default();
    if max_supply < edition.current_supply || max_supply.is_zero() {
        return Err(ContractError::InvalidMaxSupply {
            edition_id,
            max_supply,
            current_supply: edition.current_supply,
        });
    }
    edition.max_supply = max_supply;
    edition.uri = uri;
    EDITIONS.save(deps.storage, edition_id, &edition)?;
    CURRENT_EDITION.save(deps.storage, &edition_id)?;

    let mut rsp = Response::default();
    EditionEvent {
        edition_id,
        max_supply,
        uri: &edition.uri,
    }
    .add_attributes(&mut rsp);
    Ok(rsp)
}

pub fn set_max_supply(
    env: ExecuteEnv,
    edition_id: EditionId,
    max_supply: Uint128,
) -> Result<Response, ContractError> {
    let ExecuteEnv { deps, info, .. } = env;
    ROLES.require_role(deps.storage, &info.sender, ADMIN_ROLE)?;

    let mut edition = EDITIONS
        .may_load(deps.storage, edition_id)?
        .unwrap_or_default();
    if max_supply < edition.current_supply {
        return Err(ContractError::InvalidMaxSupply {
            edition_id,
            max_supply,
            current_supply: edition.current_supply,
        });
    }
    edition.max_supply = max_supply;
    EDITIONS.save(deps.storage, edition_id, &edition)?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "set_max_supply"),
        attr("edition_id", edition_id.to_string()),
        attr("max_supply", max_supply),
    ]))
}

pub fn set_current_edition(env: ExecuteEnv, edition_id: EditionId) -> Result<Response, ContractError> {
    let ExecuteEnv { deps, info, .. } = env;
    ROLES.require_role(deps.storage, &info.sender, ADMIN_ROLE)?;

    CURRENT_EDITION.save(deps.storage, &edition_id)?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "set_current_edition"),
        attr("edition_id", edition_id.to_string()),
    ]))
}

pub fn set_token_uri(
    env: ExecuteEnv,
    edition_id: EditionId,
    uri: String,
) -> Result<Response, ContractError> {
    let ExecuteEnv { deps, info, .. } = env;
    ROLES.require_role(deps.storage, &info.sender, ADMIN_ROLE)?;

    let mut edition = EDITIONS
        .may_load(deps.storage, edition_id)?
        .unwrap_or_default();
    edition.uri = uri;
    EDITIONS.save(deps.storage, edition_id, &edition)?;

    let mut rsp = Response::default();
    MetadataEvent {
        uri: &edition.uri,
        edition_id: Some(edition_id),
    }
    .add_attributes(&mut rsp);
    Ok(rsp)
}

pub fn set_base_uri(env: ExecuteEnv, uri: String) -> Result<Response, ContractError> {
    let ExecuteEnv { deps, info, .. } = env;
    ROLES.require_role(deps.storage, &info.sender, ADMIN_ROLE)?;

    BASE_URI.save(deps.storage, &uri)?;

    let mut rsp = Response::default();
    MetadataEvent {
        uri: &uri,
        edition_id: None,
    }
    .add_attributes(&mut rsp);
    Ok(rsp)
}

pub fn mint(
    env: ExecuteEnv,
    to: String,
    edition_id: EditionId,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let ExecuteEnv { mut deps, info, .. } = env;
    ROLES.require_role(deps.storage, &info.sender, MINTER_ROLE)?;
    PAUSE.assert_not_paused(deps.storage)?;

    let to_addr = deps.api.addr_validate(&to)?;

    record_mint(&mut deps, edition_id, amount)?;

    let mut rsp = Response::default();
    let event = transfer_inner(&mut deps, None, Some(&to_addr), edition_id, amount)?;
    event.add_attributes(&mut rsp);
    Ok(rsp)
}

pub fn batch_mint(
    env: ExecuteEnv,
    to: String,
    batch: Vec<(EditionId, Uint128)>,
) -> Result<Response, ContractError> {
    let ExecuteEnv { mut deps, info, .. } = env;
    ROLES.require_role(deps.storage, &info.sender, MINTER_ROLE)?;
    PAUSE.assert_not_paused(deps.storage)?;

    let to_addr = deps.api.addr_validate(&to)?;

    let mut rsp = Response::default();
    for (edition_id, amount) in batch.into_iter() {
        record_mint(&mut deps, edition_id, amount)?;
        let event = transfer_inner(&mut deps, None, Some(&to_addr), edition_id, amount)?;
        event.add_attributes(&mut rsp);
    }
    Ok(rsp)
}

pub fn send_from(
    env: ExecuteEnv,
    from: String,
    to: String,
    edition_id: EditionId,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let ExecuteEnv {
        mut deps,
        env,
        info,
    } = env;

    let from_addr = deps.api.addr_validate(&from)?;
    let to_addr = deps.api.addr_validate(&to)?;

    guard_can_approve(deps.as_ref(), &env, &from_addr, &info.sender)?;

    let mut rsp = Response::default();
    let event = transfer_inner(
        &mut deps,
        Some(&from_addr),
        Some(&to_addr),
        edition_id,
        amount,
    )?;
    event.add_attributes(&mut rsp);
    Ok(rsp)
}

pub fn batch_send_from(
    env: ExecuteEnv,
    from: String,
    to: String,
    batch: Vec<(EditionId, Uint128)>,
) -> Result<Response, ContractError> {
    let ExecuteEnv {
        mut deps,
        env,
        info,
    } = env;

    let from_addr = deps.api.addr_validate(&from)?;
    let to_addr = deps.api.addr_validate(&to)?;

    guard_can_approve(deps.as_ref(), &env, &from_addr, &info.sender)?;

    let mut rsp = Response::default();
    for (edition_id, amount) in batch.into_iter() {
        let event = transfer_inner(
            &mut deps,
            Some(&from_addr),
            Some(&to_addr),
            edition_id,
            amount,
        )?;
        event.add_attributes(&mut rsp);
    }
    Ok(rsp)
}

pub fn burn(
    env: ExecuteEnv,
    from: String,
    edition_id: EditionId,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let ExecuteEnv {
        mut deps,
        info,
        env,
    } = env;

    let from_addr = deps.api.addr_validate(&from)?;

    // whoever can transfer these tokens can burn
    guard_can_approve(deps.as_ref(), &env, &from_addr, &info.sender)?;

    let mut rsp = Response::default();
    let event = transfer_inner(&mut deps, Some(&from_addr), None, edition_id, amount)?;
    event.add_attributes(&mut rsp);
    Ok(rsp)
}

pub fn batch_burn(
    env: ExecuteEnv,
    from: String,
    batch: Vec<(EditionId, Uint128)>,
) -> Result<Response, ContractError> {
    let ExecuteEnv {
        mut deps,
        info,
        env,
    } = env;

    let from_addr = deps.api.addr_validate(&from)?;

    guard_can_approve(deps.as_ref(), &env, &from_addr, &info.sender)?;

    let mut rsp = Response::default();
    for (edition_id, amount) in batch.into_iter() {
        let event = transfer_inner(&mut deps, Some(&from_addr), None, edition_id, amount)?;
        event.add_attributes(&mut rsp);
    }
    Ok(rsp)
}

pub fn approve_all(
    env: ExecuteEnv,
    operator: String,
    expires: Option<Expiration>,
) -> Result<Response, ContractError> {
    let ExecuteEnv { deps, info, env } = env;

    // reject expired data as invalid
    let expires = expires.unwrap_or_default();
    if expires.is_expired(&env.block) {
        return Err(ContractError::Expired {});
    }

    // set the operator for us
    let operator_addr = deps.api.addr_validate(&operator)?;
    APPROVES.save(deps.storage, (&info.sender, &operator_addr), &expires)?;

    let mut rsp = Response::default();
    ApproveAllEvent {
        sender: info.sender.as_ref(),
        operator: &operator,
        approved: true,
    }
    .add_attributes(&mut rsp);
    Ok(rsp)
}

pub fn revoke_all(env: ExecuteEnv, operator: String) -> Result<Response, ContractError> {
    let ExecuteEnv { deps, info, .. } = env;
    let operator_addr = deps.api.addr_validate(&operator)?;
    APPROVES.remove(deps.storage, (&info.sender, &operator_addr));

    let mut rsp = Response::default();
    ApproveAllEvent {
        sender: info.sender.as_ref(),
        operator: &operator,
        approved: false,
    }
    .add_attributes(&mut rsp);
    Ok(rsp)
}

pub fn pause(env: ExecuteEnv) -> Result<Response, ContractError> {
    let ExecuteEnv { deps, info, .. } = env;
    ROLES.require_role(deps.storage, &info.sender, ADMIN_ROLE)?;
    Ok(PAUSE.execute_pause(deps.storage, &info)?)
}

pub fn unpause(env: ExecuteEnv) -> Result<Response, ContractError> {
    let ExecuteEnv { deps, info, .. } = env;
    ROLES.require_role(deps.storage, &info.sender, ADMIN_ROLE)?;
    Ok(PAUSE.execute_unpause(deps.storage, &info)?)
}

pub fn set_royalty_info(
    env: ExecuteEnv,
    receiver: String,
    basis_points: u16,
) -> Result<Response, ContractError> {
    let ExecuteEnv { deps, info, .. } = env;
    ROLES.require_role(deps.storage, &info.sender, DEFAULT_ADMIN_ROLE)?;

    if basis_points > 10_000 {
        return Err(ContractError::InvalidRoyalty { basis_points });
    }
    let receiver = deps.api.addr_validate(&receiver)?;
    ROYALTY.save(
        deps.storage,
        &Royalty {
            receiver: receiver.clone(),
            basis_points,
        },
    )?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "set_royalty_info"),
        attr("receiver", receiver),
        attr("basis_points", basis_points.to_string()),
    ]))
}

pub fn transfer_ownership(env: ExecuteEnv, new_owner: String) -> Result<Response, ContractError> {
    let ExecuteEnv { deps, info, .. } = env;
    let new_owner = deps.api.addr_validate(&new_owner)?;
    Ok(OWNER.execute_update_admin(deps, info, Some(new_owner))?)
}
