use cosmwasm_schema::cw_serde;
use cosmwasm_std::{attr, Addr, Deps, DepsMut, Empty, MessageInfo, Response, StdError, StdResult, Storage};
use cw_storage_plus::Map;
use thiserror::Error;

/// Administers every role that has no explicit admin role, including itself.
pub const DEFAULT_ADMIN_ROLE: &str = "default_admin";
/// Day to day operators: edition setup, prices, pausing, claim overrides.
pub const ADMIN_ROLE: &str = "admin";
/// Allowed to mint edition tokens.
pub const MINTER_ROLE: &str = "minter";

/// Capability check used by the contracts before any state mutation.
/// `Roles` is the storage backed implementation, but anything that can answer
/// "does this caller hold this role" can stand in for it.
pub trait AuthorizationPolicy {
    fn require_role(
        &self,
        storage: &dyn Storage,
        caller: &Addr,
        role: &str,
    ) -> Result<(), RoleError>;
}

// state/logic
pub struct Roles<'a> {
    members: Map<(&'a str, &'a Addr), Empty>,
    admins: Map<&'a str, String>,
}

impl<'a> Roles<'a> {
    pub const fn new(members_namespace: &'static str, admins_namespace: &'static str) -> Self {
        Roles {
            members: Map::new(members_namespace),
            admins: Map::new(admins_namespace),
        }
    }

    pub fn has_role(&self, storage: &dyn Storage, role: &str, account: &Addr) -> StdResult<bool> {
        Ok(self.members.has(storage, (role, account)))
    }

    /// Returns true if the account did not hold the role before.
    pub fn grant(&self, storage: &mut dyn Storage, role: &str, account: &Addr) -> StdResult<bool> {
        if self.has_role(storage, role, account)? {
            return Ok(false);
        }
        self.members.save(storage, (role, account), &Empty {})?;
        Ok(true)
    }

    /// Returns true if the account held the role before.
    pub fn revoke(&self, storage: &mut dyn Storage, role: &str, account: &Addr) -> StdResult<bool> {
        if !self.has_role(storage, role, account)? {
            return Ok(false);
        }
        self.members.remove(storage, (role, account));
        Ok(true)
    }

    pub fn set_role_admin(
        &self,
        storage: &mut dyn Storage,
        role: &str,
        admin_role: &str,
    ) -> StdResult<()> {
        self.admins.save(storage, role, &admin_role.to_string())
    }

    /// The role whose holders may grant and revoke `role`.
    pub fn role_admin(&self, storage: &dyn Storage, role: &str) -> StdResult<String> {
        Ok(self
            .admins
            .may_load(storage, role)?
            .unwrap_or_else(|| DEFAULT_ADMIN_ROLE.to_string()))
    }

    pub fn execute_grant_role(
        &self,
        deps: DepsMut,
        info: &MessageInfo,
        role: String,
        account: String,
    ) -> Result<Response, RoleError> {
        let admin_role = self.role_admin(deps.storage, &role)?;
        self.require_role(deps.storage, &info.sender, &admin_role)?;

        let account = deps.api.addr_validate(&account)?;
        self.grant(deps.storage, &role, &account)?;

        Ok(Response::new().add_attributes(vec![
            attr("action", "grant_role"),
            attr("role", role),
            attr("account", account),
            attr("sender", info.sender.as_str()),
        ]))
    }

    pub fn execute_revoke_role(
        &self,
        deps: DepsMut,
        info: &MessageInfo,
        role: String,
        account: String,
    ) -> Result<Response, RoleError> {
        let admin_role = self.role_admin(deps.storage, &role)?;
        self.require_role(deps.storage, &info.sender, &admin_role)?;

        let account = deps.api.addr_validate(&account)?;
        self.revoke(deps.storage, &role, &account)?;

        Ok(Response::new().add_attributes(vec![
            attr("action", "revoke_role"),
            attr("role", role),
            attr("account", account),
            attr("sender", info.sender.as_str()),
        ]))
    }

    /// Drops a role from the sender. Nobody else's roles can be renounced.
    pub fn execute_renounce_role(
        &self,
        deps: DepsMut,
        info: &MessageInfo,
        role: String,
    ) -> Result<Response, RoleError> {
        self.revoke(deps.storage, &role, &info.sender)?;

        Ok(Response::new().add_attributes(vec![
            attr("action", "renounce_role"),
            attr("role", role),
            attr("account", info.sender.as_str()),
        ]))
    }

    pub fn query_has_role(&self, deps: Deps, role: String, account: String) -> StdResult<HasRoleResponse> {
        let account = deps.api.addr_validate(&account)?;
        let has_role = self.has_role(deps.storage, &role, &account)?;
        Ok(HasRoleResponse { has_role })
    }
}

impl<'a> AuthorizationPolicy for Roles<'a> {
    fn require_role(
        &self,
        storage: &dyn Storage,
        caller: &Addr,
        role: &str,
    ) -> Result<(), RoleError> {
        if !self.has_role(storage, role, caller)? {
            return Err(RoleError::MissingRole {
                account: caller.to_string(),
                role: role.to_string(),
            });
        }
        Ok(())
    }
}

/// Returned from a `HasRole { role, account }` query
#[cw_serde]
pub struct HasRoleResponse {
    pub has_role: bool,
}

// errors

#[derive(Error, Debug, PartialEq)]
pub enum RoleError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Account {account} is missing role {role}")]
    MissingRole { account: String, role: String },
}
