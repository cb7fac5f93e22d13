#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    attr, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::{get_contract_version, set_contract_version};
use cw_access_control::{ADMIN_ROLE, DEFAULT_ADMIN_ROLE, MINTER_ROLE};
use cw_editions::{EditionsExecuteMsg, EditionsQueryMsg};
use semver::Version;

use crate::{
    execute,
    msg::{InstantiateMsg, MigrateMsg},
    query,
    state::{
        Royalty, BASE_URI, CURRENT_EDITION, OWNER, PAUSE, ROLES, ROYALTY, TOKEN_IDS_MINTED,
    },
    ContractError,
};

// version info for migration info
pub const CONTRACT_NAME: &str = "crates.io:editions-base";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_ROYALTY_BASIS_POINTS: u16 = 500;

pub struct ExecuteEnv<'a> {
    pub deps: DepsMut<'a>,
    pub env: Env,
    pub info: MessageInfo,
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    mut deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let basis_points = msg
        .royalty_basis_points
        .unwrap_or(DEFAULT_ROYALTY_BASIS_POINTS);
    if basis_points > 10_000 {
        return Err(ContractError::InvalidRoyalty { basis_points });
    }
    let receiver = deps.api.addr_validate(&msg.royalty_receiver)?;
    ROYALTY.save(
        deps.storage,
        &Royalty {
            receiver,
            basis_points,
        },
    )?;

    ROLES.grant(deps.storage, DEFAULT_ADMIN_ROLE, &info.sender)?;
    ROLES.set_role_admin(deps.storage, ADMIN_ROLE, DEFAULT_ADMIN_ROLE)?;
    ROLES.set_role_admin(deps.storage, MINTER_ROLE, ADMIN_ROLE)?;
    for admin in msg.admins.iter() {
        let admin = deps.api.addr_validate(admin)?;
        ROLES.grant(deps.storage, ADMIN_ROLE, &admin)?;
    }
    for minter in msg.minters.iter() {
        let minter = deps.api.addr_validate(minter)?;
        ROLES.grant(deps.storage, MINTER_ROLE, &minter)?;
    }

    CURRENT_EDITION.save(deps.storage, &0)?;
    TOKEN_IDS_MINTED.save(deps.storage, &vec![])?;
    if let Some(base_uri) = msg.base_uri {
        BASE_URI.save(deps.storage, &base_uri)?;
    }
    PAUSE.set(deps.storage, false)?;
    OWNER.set(deps.branch(), Some(info.sender.clone()))?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "instantiate"),
        attr("owner", info.sender),
    ]))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: EditionsExecuteMsg,
) -> Result<Response, ContractError> {
    let env = ExecuteEnv { deps, env, info };
    match msg {
        EditionsExecuteMsg::InitializeEdition {
            edition_id,
            max_supply,
            uri,
        } => execute::initialize_edition(env, edition_id, max_supply, uri),
        EditionsExecuteMsg::SetMaxSupply {
            edition_id,
            max_supply,
        } => execute::set_max_supply(env, edition_id, max_supply),
        EditionsExecuteMsg::SetCurrentEdition { edition_id } => {
            execute::set_current_edition(env, edition_id)
        }
        EditionsExecuteMsg::SetTokenUri { edition_id, uri } => {
            execute::set_token_uri(env, edition_id, uri)
        }
        EditionsExecuteMsg::SetBaseUri { uri } => execute::set_base_uri(env, uri),
        EditionsExecuteMsg::Mint {
            to,
            edition_id,
            amount,
        } => execute::mint(env, to, edition_id, amount),
        EditionsExecuteMsg::BatchMint { to, batch } => execute::batch_mint(env, to, batch),
        EditionsExecuteMsg::SendFrom {
            from,
            to,
            edition_id,
            amount,
        } => execute::send_from(env, from, to, edition_id, amount),
        EditionsExecuteMsg::BatchSendFrom { from, to, batch } => {
            execute::batch_send_from(env, from, to, batch)
        }
        EditionsExecuteMsg::Burn {
            from,
            edition_id,
            amount,
        } => execute::burn(env, from, edition_id, amount),
        EditionsExecuteMsg::BatchBurn { from, batch } => execute::batch_burn(env, from, batch),
        EditionsExecuteMsg::ApproveAll { operator, expires } => {
            execute::approve_all(env, operator, expires)
        }
        EditionsExecuteMsg::RevokeAll { operator } => execute::revoke_all(env, operator),
        EditionsExecuteMsg::Pause {} => execute::pause(env),
        EditionsExecuteMsg::Unpause {} => execute::unpause(env),
        EditionsExecuteMsg::GrantRole { role, account } => {
            Ok(ROLES.execute_grant_role(env.deps, &env.info, role, account)?)
        }
        EditionsExecuteMsg::RevokeRole { role, account } => {
            Ok(ROLES.execute_revoke_role(env.deps, &env.info, role, account)?)
        }
        EditionsExecuteMsg::RenounceRole { role } => {
            Ok(ROLES.execute_renounce_role(env.deps, &env.info, role)?)
        }
        EditionsExecuteMsg::SetRoyaltyInfo {
            receiver,
            basis_points,
        } => execute::set_royalty_info(env, receiver, basis_points),
        EditionsExecuteMsg::TransferOwnership { new_owner } => {
            execute::transfer_ownership(env, new_owner)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: EditionsQueryMsg) -> StdResult<Binary> {
    match msg {
        EditionsQueryMsg::Balance { owner, edition_id } => {
            to_json_binary(&query::balance(deps, owner, edition_id)?)
        }
        EditionsQueryMsg::BatchBalance { owner, edition_ids } => {
            to_json_binary(&query::batch_balance(deps, owner, edition_ids)?)
        }
        EditionsQueryMsg::ApprovedForAll {
            owner,
            include_expired,
            start_after,
            limit,
        } => to_json_binary(&query::approved_for_all(
            deps,
            env,
            owner,
            include_expired.unwrap_or(false),
            start_after,
            limit,
        )?),
        EditionsQueryMsg::IsApprovedForAll { owner, operator } => {
            to_json_binary(&query::is_approved_for_all(deps, env, owner, operator)?)
        }
        EditionsQueryMsg::MaxSupply { edition_id } => {
            to_json_binary(&query::max_supply(deps, edition_id)?)
        }
        EditionsQueryMsg::CurrentSupply { edition_id } => {
            to_json_binary(&query::current_supply(deps, edition_id)?)
        }
        EditionsQueryMsg::TokenIdsMinted {} => to_json_binary(&query::token_ids_minted(deps)?),
        EditionsQueryMsg::CurrentEdition {} => to_json_binary(&query::current_edition(deps)?),
        EditionsQueryMsg::Uri { edition_id } => to_json_binary(&query::uri(deps, edition_id)?),
        EditionsQueryMsg::RoyaltyInfo {
            edition_id,
            sale_price,
        } => to_json_binary(&query::royalty_info(deps, edition_id, sale_price)?),
        EditionsQueryMsg::HasRole { role, account } => {
            to_json_binary(&ROLES.query_has_role(deps, role, account)?)
        }
        EditionsQueryMsg::Paused {} => to_json_binary(&PAUSE.query_paused(deps.storage)?),
        EditionsQueryMsg::Owner {} => to_json_binary(&query::owner(deps)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::CannotMigrate {
            previous_contract: stored.contract,
        });
    }

    let version: Version = CONTRACT_VERSION.parse()?;
    let stored_version: Version = stored.version.parse()?;
    if stored_version > version {
        return Err(ContractError::CannotMigrateVersion {
            previous: stored.version,
            new: CONTRACT_VERSION.to_string(),
        });
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attributes(vec![
        attr("action", "migrate"),
        attr("from_version", stored.version),
        attr("to_version", CONTRACT_VERSION),
    ]))
}
