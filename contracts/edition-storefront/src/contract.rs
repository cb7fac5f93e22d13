use std::collections::BTreeSet;

#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    attr, coins, to_json_binary, Addr, BankMsg, Binary, Coin, Deps, DepsMut, Env, MessageInfo,
    Response, StdResult, Timestamp, Uint128,
};
use cw2::{get_contract_version, set_contract_version};
use cw_access_control::{AuthorizationPolicy, ADMIN_ROLE, DEFAULT_ADMIN_ROLE};
use cw_editions::{EditionId, EditionsContract};
use cw_source_collection::{DelegateRegistry, OwnerOfResponse, SourceCollection};
use cw_utils::{may_pay, nonpayable};
use semver::Version;

use crate::error::ContractError;
use crate::ledger::{Ledger, DEFAULT_MINT_PER_MLD};
use crate::merkle;
use crate::msg::{
    ClaimedTokensResponse, ConfigResponse, CurrentEditionResponse, EditionResponse, ExecuteMsg,
    InstantiateMsg, IsClaimedResponse, IsMintOpenResponse, MigrateMsg, MintPriceResponse,
    QueryMsg, RedemptionCountResponse,
};
use crate::state::{
    Config, Edition, CONFIG, CURRENT_EDITION, EDITIONS, MINT_PER_MLD, MINT_PRICE, PAUSE, ROLES,
};

// Version info, for migration info
pub const CONTRACT_NAME: &str = "crates.io:edition-storefront";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if let Some(root) = msg.allowlist_root.as_deref() {
        merkle::validate_root(root)?;
    }
    let mint_per_mld = msg.mint_per_mld.unwrap_or(DEFAULT_MINT_PER_MLD);
    if mint_per_mld == 0 {
        return Err(ContractError::ConfigurationError {
            reason: "mint per source token must be at least 1".to_string(),
        });
    }

    let config = Config {
        token_address: EditionsContract(deps.api.addr_validate(&msg.token_address)?),
        source_collection: SourceCollection(deps.api.addr_validate(&msg.source_collection)?),
        payment_address: deps.api.addr_validate(&msg.payment_address)?,
        denom: msg.denom,
        default_mint_price: msg.default_mint_price,
        allowlist_root: msg.allowlist_root,
        delegate_registry: msg
            .delegate_registry
            .map(|addr| deps.api.addr_validate(&addr).map(DelegateRegistry))
            .transpose()?,
    };
    CONFIG.save(deps.storage, &config)?;
    MINT_PRICE.save(deps.storage, &msg.default_mint_price)?;
    MINT_PER_MLD.save(deps.storage, &mint_per_mld)?;
    PAUSE.set(deps.storage, false)?;

    ROLES.grant(deps.storage, DEFAULT_ADMIN_ROLE, &info.sender)?;
    ROLES.grant(deps.storage, ADMIN_ROLE, &info.sender)?;
    ROLES.set_role_admin(deps.storage, ADMIN_ROLE, DEFAULT_ADMIN_ROLE)?;
    for admin in msg.admins.iter() {
        let admin = deps.api.addr_validate(admin)?;
        ROLES.grant(deps.storage, ADMIN_ROLE, &admin)?;
    }

    Ok(Response::new().add_attributes(vec![
        attr("action", "instantiate"),
        attr("token_address", config.token_address.addr()),
        attr("source_collection", config.source_collection.addr()),
        attr("owner", info.sender),
    ]))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::SetupMint {
            edition_id,
            max_supply,
            start_time,
            end_time,
            uri,
            exclusions,
        } => execute_setup_mint(
            deps, info, edition_id, max_supply, start_time, end_time, uri, exclusions,
        ),
        ExecuteMsg::Claim {
            recipient,
            token_ids,
            referrer,
            proof,
        } => execute_claim(deps, env, info, recipient, token_ids, referrer, proof, false),
        ExecuteMsg::FreeClaim {
            recipient,
            token_ids,
            referrer,
            proof,
        } => execute_claim(deps, env, info, recipient, token_ids, referrer, proof, true),
        ExecuteMsg::BurnAndClaim { token_ids } => execute_burn_and_claim(deps, env, info, token_ids),
        ExecuteMsg::SetClaimed { token_id } => execute_set_claimed(deps, info, token_id),
        ExecuteMsg::ResetClaimed { token_id } => execute_reset_claimed(deps, info, token_id),
        ExecuteMsg::ResetClaimedList {} => execute_reset_claimed_list(deps, info),
        ExecuteMsg::SetMintPrice { price } => execute_set_mint_price(deps, info, price),
        ExecuteMsg::SetMintPerMld { amount } => execute_set_mint_per_mld(deps, info, amount),
        ExecuteMsg::SetCurrentEditionId { edition_id } => {
            execute_set_current_edition_id(deps, info, edition_id)
        }
        ExecuteMsg::SetTokenAddress { address } => execute_set_token_address(deps, info, address),
        ExecuteMsg::UpdateAllowlistRoot { root } => {
            execute_update_allowlist_root(deps, info, root)
        }
        ExecuteMsg::SetDelegateRegistry { address } => {
            execute_set_delegate_registry(deps, info, address)
        }
        ExecuteMsg::Pause {} => {
            ROLES.require_role(deps.storage, &info.sender, ADMIN_ROLE)?;
            Ok(PAUSE.execute_pause(deps.storage, &info)?)
        }
        ExecuteMsg::Unpause {} => {
            ROLES.require_role(deps.storage, &info.sender, ADMIN_ROLE)?;
            Ok(PAUSE.execute_unpause(deps.storage, &info)?)
        }
        ExecuteMsg::GrantRole { role, account } => {
            Ok(ROLES.execute_grant_role(deps, &info, role, account)?)
        }
        ExecuteMsg::RevokeRole { role, account } => {
            Ok(ROLES.execute_revoke_role(deps, &info, role, account)?)
        }
        ExecuteMsg::RenounceRole { role } => Ok(ROLES.execute_renounce_role(deps, &info, role)?),
    }
}

#[allow(clippy::too_many_arguments)]
pub fn execute_setup_mint(
    deps: DepsMut,
    info: MessageInfo,
    edition_id: EditionId,
    max_supply: Uint128,
    start_time: Timestamp,
    end_time: Timestamp,
    uri: String,
    exclusions: Vec<u64>,
) -> Result<Response, ContractError> {
    ROLES.require_role(deps.storage, &info.sender, ADMIN_ROLE)?;

    if max_supply.is_zero() {
        return Err(ContractError::ConfigurationError {
            reason: "max supply must be at least 1".to_string(),
        });
    }
    if start_time >= end_time {
        return Err(ContractError::ConfigurationError {
            reason: "start time must be before end time".to_string(),
        });
    }
    let config = CONFIG.load(deps.storage)?;
    let minted = config
        .token_address
        .current_supply(&deps.querier, edition_id)?;
    if max_supply < minted {
        return Err(ContractError::ConfigurationError {
            reason: format!(
                "max supply {} is below the {} already minted",
                max_supply, minted
            ),
        });
    }

    let edition = Edition {
        max_supply,
        start_time,
        end_time,
        uri,
    };
    EDITIONS.save(deps.storage, edition_id, &edition)?;
    CURRENT_EDITION.save(deps.storage, &edition_id)?;
    MINT_PRICE.save(deps.storage, &config.default_mint_price)?;

    let ledger = Ledger::load(deps.storage)?;
    for token_id in exclusions.iter() {
        ledger.set_claimed(deps.storage, *token_id)?;
    }

    let msg = config
        .token_address
        .initialize_edition(edition_id, max_supply, edition.uri.clone())?;

    Ok(Response::new().add_message(msg).add_attributes(vec![
        attr("action", "setup_mint"),
        attr("edition_id", edition_id.to_string()),
        attr("max_supply", max_supply),
        attr("start_time", start_time.seconds().to_string()),
        attr("end_time", end_time.seconds().to_string()),
        attr("uri", edition.uri),
        attr("exclusions", exclusions.len().to_string()),
    ]))
}

/// Checks shared by every redemption path and returns the edition to mint.
fn open_edition(
    deps: Deps,
    env: &Env,
    config: &Config,
    token_ids: &[u64],
) -> Result<EditionId, ContractError> {
    if token_ids.is_empty() {
        return Err(ContractError::EmptyBatch {});
    }
    PAUSE.assert_not_paused(deps.storage)?;

    let edition_id = CURRENT_EDITION
        .may_load(deps.storage)?
        .ok_or(ContractError::NoCurrentEdition {})?;
    let edition = EDITIONS
        .may_load(deps.storage, edition_id)?
        .ok_or(ContractError::NoCurrentEdition {})?;
    if !edition.is_open(&env.block) {
        return Err(ContractError::MintClosed {});
    }

    let minted = config
        .token_address
        .current_supply(&deps.querier, edition_id)?;
    if minted.checked_add(Uint128::from(token_ids.len() as u128))? > edition.max_supply {
        return Err(ContractError::MaxSupplyExceeded {
            edition_id,
            max_supply: edition.max_supply,
        });
    }
    Ok(edition_id)
}

fn check_allowlist(
    config: &Config,
    sender: &Addr,
    proof: Option<Vec<String>>,
) -> Result<(), ContractError> {
    if let Some(root) = config.allowlist_root.as_deref() {
        let proof = proof.unwrap_or_default();
        if !merkle::verify(&proof, sender.as_str(), root)? {
            return Err(ContractError::VerificationFailed {});
        }
    }
    Ok(())
}

/// Loads the source token, failing unless `caller` owns it. With `delegated`
/// set, a delegate of the owner registered in the configured registry passes too.
fn owned_token(
    deps: Deps,
    config: &Config,
    caller: &Addr,
    token_id: u64,
    delegated: bool,
) -> Result<OwnerOfResponse, ContractError> {
    let not_owner = || ContractError::NotOwnerOfMldToken {
        caller: caller.to_string(),
        token_id,
    };
    let token = config
        .source_collection
        .owner_of(&deps.querier, token_id)
        .map_err(|_| not_owner())?;
    if token.owner == caller.as_str() {
        return Ok(token);
    }

    if let Some(registry) = config.delegate_registry.as_ref().filter(|_| delegated) {
        if registry.is_delegate_for_token(
            &deps.querier,
            caller,
            token.owner.as_str(),
            config.source_collection.addr(),
            token_id,
        )? {
            return Ok(token);
        }
    }
    Err(not_owner())
}

#[allow(clippy::too_many_arguments)]
pub fn execute_claim(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
    token_ids: Vec<u64>,
    referrer: Option<String>,
    proof: Option<Vec<String>>,
    free: bool,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let edition_id = open_edition(deps.as_ref(), &env, &config, &token_ids)?;
    check_allowlist(&config, &info.sender, proof)?;

    let price = MINT_PRICE.load(deps.storage)?;
    if free {
        nonpayable(&info)?;
        if !price.is_zero() {
            return Err(ContractError::MintNotFree {});
        }
    }

    let recipient = deps.api.addr_validate(&recipient)?;
    let referrer = referrer
        .map(|r| deps.api.addr_validate(&r))
        .transpose()?;

    let ledger = Ledger::load(deps.storage)?;
    let mut plan = ledger.plan();
    for token_id in token_ids.iter() {
        owned_token(deps.as_ref(), &config, &info.sender, *token_id, true)?;
        plan.redeem(deps.storage, *token_id)?;
    }

    let count = Uint128::from(token_ids.len() as u128);
    let mut rsp = Response::new();
    if !free {
        let required = price.checked_mul(count)?;
        let paid = may_pay(&info, &config.denom)?;
        if paid < required {
            return Err(ContractError::InsufficientPayment { required, paid });
        }
        if !paid.is_zero() {
            rsp = rsp.add_message(BankMsg::Send {
                to_address: config.payment_address.to_string(),
                amount: coins(paid.u128(), &config.denom),
            });
        }
        rsp = rsp.add_attribute("paid", paid);
    }

    plan.commit(deps.storage)?;

    let mint = config.token_address.mint(&recipient, edition_id, count)?;
    rsp = rsp.add_message(mint).add_attributes(vec![
        attr("action", if free { "free_claim" } else { "claim" }),
        attr("sender", info.sender.as_str()),
        attr("recipient", recipient.as_str()),
        attr("edition_id", edition_id.to_string()),
        attr("amount", count),
        attr("token_ids", join_ids(&token_ids)),
    ]);
    if let Some(referrer) = referrer {
        rsp = rsp.add_attribute("referrer", referrer);
    }
    Ok(rsp)
}

pub fn execute_burn_and_claim(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token_ids: Vec<u64>,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let config = CONFIG.load(deps.storage)?;
    let edition_id = open_edition(deps.as_ref(), &env, &config, &token_ids)?;

    let mut seen = BTreeSet::new();
    let mut burns = Vec::with_capacity(token_ids.len());
    for token_id in token_ids.iter() {
        if !seen.insert(*token_id) {
            return Err(ContractError::DuplicateTokenId {
                token_id: *token_id,
            });
        }
        let token = owned_token(deps.as_ref(), &config, &info.sender, *token_id, false)?;
        if !config
            .source_collection
            .can_spend(&deps.querier, &token, &env.contract.address)
        {
            return Err(ContractError::NotApproved {
                token_id: *token_id,
            });
        }
        burns.push(config.source_collection.burn(token_id)?);
    }

    let count = Uint128::from(token_ids.len() as u128);
    let mint = config.token_address.mint(&info.sender, edition_id, count)?;

    Ok(Response::new()
        .add_messages(burns)
        .add_message(mint)
        .add_attributes(vec![
            attr("action", "burn_and_claim"),
            attr("sender", info.sender.as_str()),
            attr("edition_id", edition_id.to_string()),
            attr("amount", count),
            attr("token_ids", join_ids(&token_ids)),
        ]))
}

fn join_ids(token_ids: &[u64]) -> String {
    token_ids
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

pub fn execute_set_claimed(
    deps: DepsMut,
    info: MessageInfo,
    token_id: u64,
) -> Result<Response, ContractError> {
    ROLES.require_role(deps.storage, &info.sender, ADMIN_ROLE)?;

    Ledger::load(deps.storage)?.set_claimed(deps.storage, token_id)?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "set_claimed"),
        attr("token_id", token_id.to_string()),
    ]))
}

pub fn execute_reset_claimed(
    deps: DepsMut,
    info: MessageInfo,
    token_id: u64,
) -> Result<Response, ContractError> {
    ROLES.require_role(deps.storage, &info.sender, ADMIN_ROLE)?;

    Ledger::load(deps.storage)?.reset_claimed(deps.storage, token_id);

    Ok(Response::new().add_attributes(vec![
        attr("action", "reset_claimed"),
        attr("token_id", token_id.to_string()),
    ]))
}

pub fn execute_reset_claimed_list(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    ROLES.require_role(deps.storage, &info.sender, ADMIN_ROLE)?;

    let epoch = Ledger::load(deps.storage)?.reset_all(deps.storage)?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "reset_claimed_list"),
        attr("epoch", epoch.to_string()),
    ]))
}

pub fn execute_set_mint_price(
    deps: DepsMut,
    info: MessageInfo,
    price: Uint128,
) -> Result<Response, ContractError> {
    ROLES.require_role(deps.storage, &info.sender, ADMIN_ROLE)?;

    MINT_PRICE.save(deps.storage, &price)?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "set_mint_price"),
        attr("price", price),
    ]))
}

pub fn execute_set_mint_per_mld(
    deps: DepsMut,
    info: MessageInfo,
    amount: u32,
) -> Result<Response, ContractError> {
    ROLES.require_role(deps.storage, &info.sender, ADMIN_ROLE)?;

    if amount == 0 {
        return Err(ContractError::ConfigurationError {
            reason: "mint per source token must be at least 1".to_string(),
        });
    }
    MINT_PER_MLD.save(deps.storage, &amount)?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "set_mint_per_mld"),
        attr("amount", amount.to_string()),
    ]))
}

pub fn execute_set_current_edition_id(
    deps: DepsMut,
    info: MessageInfo,
    edition_id: EditionId,
) -> Result<Response, ContractError> {
    ROLES.require_role(deps.storage, &info.sender, ADMIN_ROLE)?;

    if !EDITIONS.has(deps.storage, edition_id) {
        return Err(ContractError::ConfigurationError {
            reason: format!("edition {} has not been set up", edition_id),
        });
    }
    CURRENT_EDITION.save(deps.storage, &edition_id)?;

    let config = CONFIG.load(deps.storage)?;
    let msg = config.token_address.set_current_edition(edition_id)?;

    Ok(Response::new().add_message(msg).add_attributes(vec![
        attr("action", "set_current_edition_id"),
        attr("edition_id", edition_id.to_string()),
    ]))
}

pub fn execute_set_token_address(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    ROLES.require_role(deps.storage, &info.sender, ADMIN_ROLE)?;

    let token_address = deps.api.addr_validate(&address)?;
    CONFIG.update(deps.storage, |mut config| -> StdResult<_> {
        config.token_address = EditionsContract(token_address);
        Ok(config)
    })?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "set_token_address"),
        attr("token_address", address),
    ]))
}

pub fn execute_update_allowlist_root(
    deps: DepsMut,
    info: MessageInfo,
    root: Option<String>,
) -> Result<Response, ContractError> {
    ROLES.require_role(deps.storage, &info.sender, ADMIN_ROLE)?;

    if let Some(root) = root.as_deref() {
        merkle::validate_root(root)?;
    }
    CONFIG.update(deps.storage, |mut config| -> StdResult<_> {
        config.allowlist_root = root.clone();
        Ok(config)
    })?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "update_allowlist_root"),
        attr("root", root.unwrap_or_default()),
    ]))
}

pub fn execute_set_delegate_registry(
    deps: DepsMut,
    info: MessageInfo,
    address: Option<String>,
) -> Result<Response, ContractError> {
    ROLES.require_role(deps.storage, &info.sender, ADMIN_ROLE)?;

    let registry = address
        .as_deref()
        .map(|addr| deps.api.addr_validate(addr).map(DelegateRegistry))
        .transpose()?;
    CONFIG.update(deps.storage, |mut config| -> StdResult<_> {
        config.delegate_registry = registry;
        Ok(config)
    })?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "set_delegate_registry"),
        attr("delegate_registry", address.unwrap_or_default()),
    ]))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Edition { edition_id } => to_json_binary(&query_edition(deps, edition_id)?),
        QueryMsg::CurrentEdition {} => to_json_binary(&query_current_edition(deps)?),
        QueryMsg::IsMintOpen {} => to_json_binary(&query_is_mint_open(deps, env)?),
        QueryMsg::IsClaimed { token_id } => to_json_binary(&query_is_claimed(deps, token_id)?),
        QueryMsg::RedemptionCount { token_id } => {
            to_json_binary(&query_redemption_count(deps, token_id)?)
        }
        QueryMsg::ClaimedTokens { start_after, limit } => {
            to_json_binary(&query_claimed_tokens(deps, start_after, limit)?)
        }
        QueryMsg::MintPrice {} => to_json_binary(&query_mint_price(deps)?),
        QueryMsg::HasRole { role, account } => {
            to_json_binary(&ROLES.query_has_role(deps, role, account)?)
        }
        QueryMsg::Paused {} => to_json_binary(&PAUSE.query_paused(deps.storage)?),
    }
}

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let cfg = CONFIG.load(deps.storage)?;
    let ledger = Ledger::load(deps.storage)?;
    Ok(ConfigResponse {
        token_address: cfg.token_address.addr().into(),
        source_collection: cfg.source_collection.addr().into(),
        payment_address: cfg.payment_address.into(),
        denom: cfg.denom,
        default_mint_price: cfg.default_mint_price,
        mint_per_mld: ledger.quota(),
        allowlist_root: cfg.allowlist_root,
        delegate_registry: cfg.delegate_registry.map(|r| r.addr().into()),
    })
}

pub fn query_edition(deps: Deps, edition_id: EditionId) -> StdResult<EditionResponse> {
    let edition = EDITIONS.load(deps.storage, edition_id)?;
    Ok(EditionResponse {
        edition_id,
        max_supply: edition.max_supply,
        start_time: edition.start_time,
        end_time: edition.end_time,
        uri: edition.uri,
    })
}

pub fn query_current_edition(deps: Deps) -> StdResult<CurrentEditionResponse> {
    let edition_id = CURRENT_EDITION.may_load(deps.storage)?;
    Ok(CurrentEditionResponse { edition_id })
}

pub fn query_is_mint_open(deps: Deps, env: Env) -> StdResult<IsMintOpenResponse> {
    let is_open = match CURRENT_EDITION.may_load(deps.storage)? {
        Some(edition_id) => EDITIONS
            .may_load(deps.storage, edition_id)?
            .map_or(false, |edition| edition.is_open(&env.block)),
        None => false,
    };
    Ok(IsMintOpenResponse { is_open })
}

pub fn query_is_claimed(deps: Deps, token_id: u64) -> StdResult<IsClaimedResponse> {
    let is_claimed = Ledger::load(deps.storage)?.is_claimed(deps.storage, token_id)?;
    Ok(IsClaimedResponse { is_claimed })
}

pub fn query_redemption_count(deps: Deps, token_id: u64) -> StdResult<RedemptionCountResponse> {
    let count = Ledger::load(deps.storage)?.redemptions(deps.storage, token_id)?;
    Ok(RedemptionCountResponse { count })
}

pub fn query_claimed_tokens(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<ClaimedTokensResponse> {
    let token_ids =
        Ledger::load(deps.storage)?.claimed_tokens(deps.storage, start_after, limit)?;
    Ok(ClaimedTokensResponse { token_ids })
}

pub fn query_mint_price(deps: Deps) -> StdResult<MintPriceResponse> {
    let cfg = CONFIG.load(deps.storage)?;
    let amount = MINT_PRICE.load(deps.storage)?;
    Ok(MintPriceResponse {
        price: Coin {
            denom: cfg.denom,
            amount,
        },
    })
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
