use crate::{
    contract::{execute, instantiate, migrate, query, CONTRACT_NAME},
    msg::{InstantiateMsg, MigrateMsg},
    ContractError,
};
use cosmwasm_std::{
    from_json,
    testing::{mock_dependencies, mock_env, MockApi, MockQuerier, MockStorage},
    Addr, Binary, Empty, MessageInfo, OwnedDeps, Response, StdError, Uint128,
};
use cw_access_control::{HasRoleResponse, PauseError, RoleError, ADMIN_ROLE, MINTER_ROLE};
use cw_editions::{
    BalanceResponse, BatchBalanceResponse, CurrentEditionResponse, CurrentSupplyResponse,
    EditionsExecuteMsg, EditionsQueryMsg, IsApprovedForAllResponse, MaxSupplyResponse,
    OwnerResponse, RoyaltyInfoResponse, TokenIdsMintedResponse, UriResponse,
};

type Deps = OwnedDeps<MockStorage, MockApi, MockQuerier, Empty>;

struct Accounts {
    deployer: Addr,
    admin: Addr,
    minter: Addr,
    user1: Addr,
    user2: Addr,
    royalties: Addr,
}

fn info(sender: &Addr) -> MessageInfo {
    MessageInfo {
        sender: sender.clone(),
        funds: vec![],
    }
}

fn setup() -> (Deps, Accounts) {
    let mut deps = mock_dependencies();
    let accounts = Accounts {
        deployer: deps.api.addr_make("deployer"),
        admin: deps.api.addr_make("admin"),
        minter: deps.api.addr_make("minter"),
        user1: deps.api.addr_make("user1"),
        user2: deps.api.addr_make("user2"),
        royalties: deps.api.addr_make("royalties"),
    };

    let msg = InstantiateMsg {
        royalty_receiver: accounts.royalties.to_string(),
        royalty_basis_points: None,
        admins: vec![accounts.admin.to_string()],
        minters: vec![accounts.minter.to_string()],
        base_uri: Some("ipfs://base/".to_string()),
    };
    let res = instantiate(deps.as_mut(), mock_env(), info(&accounts.deployer), msg).unwrap();
    assert_eq!(0, res.messages.len());

    (deps, accounts)
}

fn exec(
    deps: &mut Deps,
    sender: &Addr,
    msg: EditionsExecuteMsg,
) -> Result<Response, ContractError> {
    execute(deps.as_mut(), mock_env(), info(sender), msg)
}

fn query_as<T: serde::de::DeserializeOwned>(deps: &Deps, msg: EditionsQueryMsg) -> T {
    let bin: Binary = query(deps.as_ref(), mock_env(), msg).unwrap();
    from_json(bin).unwrap()
}

fn initialize(deps: &mut Deps, admin: &Addr, edition_id: u64, max_supply: u128) {
    exec(
        deps,
        admin,
        EditionsExecuteMsg::InitializeEdition {
            edition_id,
            max_supply: Uint128::new(max_supply),
            uri: format!("ipfs://edition/{}", edition_id),
        },
    )
    .unwrap();
}

fn mint(
    deps: &mut Deps,
    minter: &Addr,
    to: &Addr,
    edition_id: u64,
    amount: u128,
) -> Result<Response, ContractError> {
    exec(
        deps,
        minter,
        EditionsExecuteMsg::Mint {
            to: to.to_string(),
            edition_id,
            amount: Uint128::new(amount),
        },
    )
}

fn balance(deps: &Deps, owner: &Addr, edition_id: u64) -> Uint128 {
    let res: BalanceResponse = query_as(
        deps,
        EditionsQueryMsg::Balance {
            owner: owner.to_string(),
            edition_id,
        },
    );
    res.balance
}

fn has_role(deps: &Deps, role: &str, account: &Addr) -> bool {
    let res: HasRoleResponse = query_as(
        deps,
        EditionsQueryMsg::HasRole {
            role: role.to_string(),
            account: account.to_string(),
        },
    );
    res.has_role
}

#[test]
fn instantiate_assigns_roles() {
    let (deps, accounts) = setup();

    assert!(has_role(&deps, "default_admin", &accounts.deployer));
    assert!(has_role(&deps, ADMIN_ROLE, &accounts.admin));
    assert!(has_role(&deps, MINTER_ROLE, &accounts.minter));
    assert!(!has_role(&deps, ADMIN_ROLE, &accounts.user1));
    assert!(!has_role(&deps, MINTER_ROLE, &accounts.admin));

    let owner: OwnerResponse = query_as(&deps, EditionsQueryMsg::Owner {});
    assert_eq!(owner.owner, Some(accounts.deployer.to_string()));

    let current: CurrentEditionResponse = query_as(&deps, EditionsQueryMsg::CurrentEdition {});
    assert_eq!(current.edition_id, 0);
}

#[test]
fn admin_manages_minters() {
    let (mut deps, accounts) = setup();

    // minters are administered by admins, not by other minters
    let err = exec(
        &mut deps,
        &accounts.minter,
        EditionsExecuteMsg::GrantRole {
            role: MINTER_ROLE.to_string(),
            account: accounts.user1.to_string(),
        },
    )
    .unwrap_err();
    assert_eq!(
        err,
        ContractError::Role(RoleError::MissingRole {
            account: accounts.minter.to_string(),
            role: ADMIN_ROLE.to_string(),
        })
    );

    exec(
        &mut deps,
        &accounts.admin,
        EditionsExecuteMsg::GrantRole {
            role: MINTER_ROLE.to_string(),
            account: accounts.user1.to_string(),
        },
    )
    .unwrap();
    assert!(has_role(&deps, MINTER_ROLE, &accounts.user1));

    exec(
        &mut deps,
        &accounts.admin,
        EditionsExecuteMsg::RevokeRole {
            role: MINTER_ROLE.to_string(),
            account: accounts.user1.to_string(),
        },
    )
    .unwrap();
    assert!(!has_role(&deps, MINTER_ROLE, &accounts.user1));

    // admins are administered by the default admin
    exec(
        &mut deps,
        &accounts.deployer,
        EditionsExecuteMsg::GrantRole {
            role: ADMIN_ROLE.to_string(),
            account: accounts.user2.to_string(),
        },
    )
    .unwrap();
    assert!(has_role(&deps, ADMIN_ROLE, &accounts.user2));

    exec(
        &mut deps,
        &accounts.user2,
        EditionsExecuteMsg::RenounceRole {
            role: ADMIN_ROLE.to_string(),
        },
    )
    .unwrap();
    assert!(!has_role(&deps, ADMIN_ROLE, &accounts.user2));
}

#[test]
fn royalty_info() {
    let (mut deps, accounts) = setup();

    // 5% by default
    let res: RoyaltyInfoResponse = query_as(
        &deps,
        EditionsQueryMsg::RoyaltyInfo {
            edition_id: 0,
            sale_price: Uint128::new(100),
        },
    );
    assert_eq!(res.receiver, accounts.royalties.to_string());
    assert_eq!(res.royalty_amount, Uint128::new(5));

    // only the default admin may change it
    let err = exec(
        &mut deps,
        &accounts.admin,
        EditionsExecuteMsg::SetRoyaltyInfo {
            receiver: accounts.user1.to_string(),
            basis_points: 690,
        },
    )
    .unwrap_err();
    assert!(matches!(err, ContractError::Role(_)));

    let err = exec(
        &mut deps,
        &accounts.deployer,
        EditionsExecuteMsg::SetRoyaltyInfo {
            receiver: accounts.user1.to_string(),
            basis_points: 10_001,
        },
    )
    .unwrap_err();
    assert_eq!(
        err,
        ContractError::InvalidRoyalty {
            basis_points: 10_001
        }
    );

    exec(
        &mut deps,
        &accounts.deployer,
        EditionsExecuteMsg::SetRoyaltyInfo {
            receiver: accounts.user1.to_string(),
            basis_points: 690,
        },
    )
    .unwrap();
    let res: RoyaltyInfoResponse = query_as(
        &deps,
        EditionsQueryMsg::RoyaltyInfo {
            edition_id: 0,
            sale_price: Uint128::new(1000),
        },
    );
    assert_eq!(res.receiver, accounts.user1.to_string());
    assert_eq!(res.royalty_amount, Uint128::new(69));
}

#[test]
fn initialize_edition_sets_supply_and_current() {
    let (mut deps, accounts) = setup();

    let err = exec(
        &mut deps,
        &accounts.user1,
        EditionsExecuteMsg::InitializeEdition {
            edition_id: 1,
            max_supply: Uint128::new(10),
            uri: "ipfs://one".to_string(),
        },
    )
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("Account {} is missing role admin", accounts.user1)
    );

    initialize(&mut deps, &accounts.admin, 1, 10);

    let max: MaxSupplyResponse = query_as(&deps, EditionsQueryMsg::MaxSupply { edition_id: 1 });
    assert_eq!(max.max_supply, Uint128::new(10));
    let current: CurrentEditionResponse = query_as(&deps, EditionsQueryMsg::CurrentEdition {});
    assert_eq!(current.edition_id, 1);
    let uri: UriResponse = query_as(&deps, EditionsQueryMsg::Uri { edition_id: 1 });
    assert_eq!(uri.uri, "ipfs://edition/1");

    // editions without their own uri fall back to the base uri
    let uri: UriResponse = query_as(&deps, EditionsQueryMsg::Uri { edition_id: 7 });
    assert_eq!(uri.uri, "ipfs://base/");

    // never initialized
    let max: MaxSupplyResponse = query_as(&deps, EditionsQueryMsg::MaxSupply { edition_id: 2 });
    assert_eq!(max.max_supply, Uint128::zero());
}

#[test]
fn mint_rules() {
    let (mut deps, accounts) = setup();

    // edition 0 is current but not initialized
    let err = mint(&mut deps, &accounts.minter, &accounts.user1, 0, 1).unwrap_err();
    assert_eq!(err, ContractError::EditionNotInitialized { edition_id: 0 });

    initialize(&mut deps, &accounts.admin, 0, 3);

    // only minters
    let err = mint(&mut deps, &accounts.admin, &accounts.user1, 0, 1).unwrap_err();
    assert_eq!(
        err,
        ContractError::Role(RoleError::MissingRole {
            account: accounts.admin.to_string(),
            role: MINTER_ROLE.to_string(),
        })
    );

    mint(&mut deps, &accounts.minter, &accounts.user1, 0, 2).unwrap();
    assert_eq!(balance(&deps, &accounts.user1, 0), Uint128::new(2));

    let err = mint(&mut deps, &accounts.minter, &accounts.user1, 0, 2).unwrap_err();
    assert_eq!(
        err,
        ContractError::MaxSupplyExceeded {
            edition_id: 0,
            max_supply: Uint128::new(3),
        }
    );

    initialize(&mut deps, &accounts.admin, 1, 5);
    initialize(&mut deps, &accounts.admin, 69, 5);

    // only the current edition can be minted
    let err = mint(&mut deps, &accounts.minter, &accounts.user1, 1, 1).unwrap_err();
    assert_eq!(
        err,
        ContractError::NotCurrentEdition {
            edition_id: 1,
            current: 69,
        }
    );

    mint(&mut deps, &accounts.minter, &accounts.user2, 69, 1).unwrap();
    exec(
        &mut deps,
        &accounts.admin,
        EditionsExecuteMsg::SetCurrentEdition { edition_id: 1 },
    )
    .unwrap();
    mint(&mut deps, &accounts.minter, &accounts.user2, 1, 4).unwrap();

    let minted: TokenIdsMintedResponse = query_as(&deps, EditionsQueryMsg::TokenIdsMinted {});
    assert_eq!(minted.edition_ids, vec![0, 69, 1]);

    let supply: CurrentSupplyResponse =
        query_as(&deps, EditionsQueryMsg::CurrentSupply { edition_id: 1 });
    assert_eq!(supply.current_supply, Uint128::new(4));
}

#[test]
fn batch_mint_checks_every_entry() {
    let (mut deps, accounts) = setup();
    initialize(&mut deps, &accounts.admin, 4, 3);

    exec(
        &mut deps,
        &accounts.minter,
        EditionsExecuteMsg::BatchMint {
            to: accounts.user1.to_string(),
            batch: vec![(4, Uint128::new(1)), (4, Uint128::new(2))],
        },
    )
    .unwrap();
    assert_eq!(balance(&deps, &accounts.user1, 4), Uint128::new(3));

    let err = exec(
        &mut deps,
        &accounts.minter,
        EditionsExecuteMsg::BatchMint {
            to: accounts.user1.to_string(),
            batch: vec![(4, Uint128::new(1))],
        },
    )
    .unwrap_err();
    assert!(matches!(err, ContractError::MaxSupplyExceeded { .. }));
}

#[test]
fn max_supply_never_below_minted() {
    let (mut deps, accounts) = setup();
    initialize(&mut deps, &accounts.admin, 0, 10);
    mint(&mut deps, &accounts.minter, &accounts.user1, 0, 6).unwrap();

    let err = exec(
        &mut deps,
        &accounts.admin,
        EditionsExecuteMsg::SetMaxSupply {
            edition_id: 0,
            max_supply: Uint128::new(5),
        },
    )
    .unwrap_err();
    assert_eq!(
        err,
        ContractError::InvalidMaxSupply {
            edition_id: 0,
            max_supply: Uint128::new(5),
            current_supply: Uint128::new(6),
        }
    );

    exec(
        &mut deps,
        &accounts.admin,
        EditionsExecuteMsg::SetMaxSupply {
            edition_id: 0,
            max_supply: Uint128::new(6),
        },
    )
    .unwrap();
    let max: MaxSupplyResponse = query_as(&deps, EditionsQueryMsg::MaxSupply { edition_id: 0 });
    assert_eq!(max.max_supply, Uint128::new(6));
}

#[test]
fn check_transfers() {
    // - transfer without approval fails
    // - approve, transfer, batch transfer
    // - revoke, transfer fails again
    // - burn and batch burn by owner
    let (mut deps, accounts) = setup();
    initialize(&mut deps, &accounts.admin, 0, 100);
    mint(&mut deps, &accounts.minter, &accounts.user1, 0, 10).unwrap();

    let transfer_msg = EditionsExecuteMsg::SendFrom {
        from: accounts.user1.to_string(),
        to: accounts.user2.to_string(),
        edition_id: 0,
        amount: Uint128::new(1),
    };

    // not approved yet
    let err = exec(&mut deps, &accounts.minter, transfer_msg.clone()).unwrap_err();
    assert_eq!(err, ContractError::Unauthorized {});

    exec(
        &mut deps,
        &accounts.user1,
        EditionsExecuteMsg::ApproveAll {
            operator: accounts.minter.to_string(),
            expires: None,
        },
    )
    .unwrap();
    let approved: IsApprovedForAllResponse = query_as(
        &deps,
        EditionsQueryMsg::IsApprovedForAll {
            owner: accounts.user1.to_string(),
            operator: accounts.minter.to_string(),
        },
    );
    assert!(approved.approved);

    exec(&mut deps, &accounts.minter, transfer_msg.clone()).unwrap();
    exec(
        &mut deps,
        &accounts.minter,
        EditionsExecuteMsg::BatchSendFrom {
            from: accounts.user1.to_string(),
            to: accounts.user2.to_string(),
            batch: vec![(0, Uint128::new(2)), (0, Uint128::new(3))],
        },
    )
    .unwrap();

    let balances: BatchBalanceResponse = query_as(
        &deps,
        EditionsQueryMsg::BatchBalance {
            owner: accounts.user2.to_string(),
            edition_ids: vec![0, 1],
        },
    );
    assert_eq!(balances.balances, vec![Uint128::new(6), Uint128::zero()]);
    assert_eq!(balance(&deps, &accounts.user1, 0), Uint128::new(4));

    exec(
        &mut deps,
        &accounts.user1,
        EditionsExecuteMsg::RevokeAll {
            operator: accounts.minter.to_string(),
        },
    )
    .unwrap();
    let err = exec(&mut deps, &accounts.minter, transfer_msg).unwrap_err();
    assert_eq!(err, ContractError::Unauthorized {});

    // cannot move more than owned
    let err = exec(
        &mut deps,
        &accounts.user1,
        EditionsExecuteMsg::SendFrom {
            from: accounts.user1.to_string(),
            to: accounts.user2.to_string(),
            edition_id: 0,
            amount: Uint128::new(5),
        },
    )
    .unwrap_err();
    assert!(matches!(err, ContractError::Std(StdError::Overflow { .. })));

    exec(
        &mut deps,
        &accounts.user1,
        EditionsExecuteMsg::Burn {
            from: accounts.user1.to_string(),
            edition_id: 0,
            amount: Uint128::new(1),
        },
    )
    .unwrap();
    exec(
        &mut deps,
        &accounts.user2,
        EditionsExecuteMsg::BatchBurn {
            from: accounts.user2.to_string(),
            batch: vec![(0, Uint128::new(6))],
        },
    )
    .unwrap();
    assert_eq!(balance(&deps, &accounts.user1, 0), Uint128::new(3));
    assert_eq!(balance(&deps, &accounts.user2, 0), Uint128::zero());

    // burns do not free supply
    let supply: CurrentSupplyResponse =
        query_as(&deps, EditionsQueryMsg::CurrentSupply { edition_id: 0 });
    assert_eq!(supply.current_supply, Uint128::new(10));
}

#[test]
fn burn_requires_approval() {
    let (mut deps, accounts) = setup();
    initialize(&mut deps, &accounts.admin, 0, 100);
    mint(&mut deps, &accounts.minter, &accounts.user1, 0, 2).unwrap();

    let burn_msg = EditionsExecuteMsg::Burn {
        from: accounts.user1.to_string(),
        edition_id: 0,
        amount: Uint128::new(1),
    };
    let err = exec(&mut deps, &accounts.user2, burn_msg.clone()).unwrap_err();
    assert_eq!(err, ContractError::Unauthorized {});

    exec(
        &mut deps,
        &accounts.user1,
        EditionsExecuteMsg::ApproveAll {
            operator: accounts.user2.to_string(),
            expires: None,
        },
    )
    .unwrap();
    let res = exec(&mut deps, &accounts.user2, burn_msg).unwrap();
    assert_eq!(res.attributes[0].value, "burn");
    assert_eq!(balance(&deps, &accounts.user1, 0), Uint128::new(1));
}

#[test]
fn pause_blocks_token_movement() {
    let (mut deps, accounts) = setup();
    initialize(&mut deps, &accounts.admin, 0, 100);
    mint(&mut deps, &accounts.minter, &accounts.user1, 0, 2).unwrap();

    let err = exec(&mut deps, &accounts.user1, EditionsExecuteMsg::Pause {}).unwrap_err();
    assert!(matches!(err, ContractError::Role(_)));

    exec(&mut deps, &accounts.admin, EditionsExecuteMsg::Pause {}).unwrap();
    let err = exec(&mut deps, &accounts.admin, EditionsExecuteMsg::Pause {}).unwrap_err();
    assert_eq!(err, ContractError::Pause(PauseError::Paused {}));

    let err = mint(&mut deps, &accounts.minter, &accounts.user1, 0, 1).unwrap_err();
    assert_eq!(err, ContractError::Pause(PauseError::Paused {}));
    let err = exec(
        &mut deps,
        &accounts.user1,
        EditionsExecuteMsg::SendFrom {
            from: accounts.user1.to_string(),
            to: accounts.user2.to_string(),
            edition_id: 0,
            amount: Uint128::new(1),
        },
    )
    .unwrap_err();
    assert_eq!(err, ContractError::Pause(PauseError::Paused {}));

    exec(&mut deps, &accounts.admin, EditionsExecuteMsg::Unpause {}).unwrap();
    mint(&mut deps, &accounts.minter, &accounts.user1, 0, 1).unwrap();
    assert_eq!(balance(&deps, &accounts.user1, 0), Uint128::new(3));
}

#[test]
fn transfer_ownership() {
    let (mut deps, accounts) = setup();

    let err = exec(
        &mut deps,
        &accounts.admin,
        EditionsExecuteMsg::TransferOwnership {
            new_owner: accounts.admin.to_string(),
        },
    )
    .unwrap_err();
    assert!(matches!(err, ContractError::Admin(_)));

    exec(
        &mut deps,
        &accounts.deployer,
        EditionsExecuteMsg::TransferOwnership {
            new_owner: accounts.admin.to_string(),
        },
    )
    .unwrap();
    let owner: OwnerResponse = query_as(&deps, EditionsQueryMsg::Owner {});
    assert_eq!(owner.owner, Some(accounts.admin.to_string()));
}

#[test]
fn migrate_refuses_downgrade() {
    let (mut deps, _) = setup();

    cw2::set_contract_version(deps.as_mut().storage, CONTRACT_NAME, "99.0.0").unwrap();
    let err = migrate(deps.as_mut(), mock_env(), MigrateMsg {}).unwrap_err();
    assert!(matches!(err, ContractError::CannotMigrateVersion { .. }));

    cw2::set_contract_version(deps.as_mut().storage, "crates.io:other", "0.1.0").unwrap();
    let err = migrate(deps.as_mut(), mock_env(), MigrateMsg {}).unwrap_err();
    assert_eq!(
        err,
        ContractError::CannotMigrate {
            previous_contract: "crates.io:other".to_string()
        }
    );

    cw2::set_contract_version(deps.as_mut().storage, CONTRACT_NAME, "0.0.1").unwrap();
    migrate(deps.as_mut(), mock_env(), MigrateMsg {}).unwrap();
}
