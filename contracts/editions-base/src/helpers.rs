use cosmwasm_std::{Addr, Deps, Env, StdResult, Uint128};

use crate::{state::APPROVES, ContractError};

/// returns true if the sender can move or burn the owner's tokens
pub fn check_can_approve(deps: Deps, env: &Env, owner: &Addr, operator: &Addr) -> StdResult<bool> {
    // owner can approve
    if owner == operator {
        return Ok(true);
    }
    // operator can approve
    let op = APPROVES.may_load(deps.storage, (owner, operator))?;
    Ok(match op {
        Some(ex) => !ex.is_expired(&env.block),
        None => false,
    })
}

pub fn guard_can_approve(
    deps: Deps,
    env: &Env,
    owner: &Addr,
    operator: &Addr,
) -> Result<(), ContractError> {
    if !check_can_approve(deps, env, owner, operator)? {
        Err(ContractError::Unauthorized {})
    } else {
        Ok(())
    }
}

/// Royalty owed on a sale, rounded down.
pub fn royalty_amount(sale_price: Uint128, basis_points: u16) -> Uint128 {
    sale_price.multiply_ratio(basis_points, 10_000u128)
}
