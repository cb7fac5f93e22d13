use cosmwasm_schema::write_api;

use cw_editions::{EditionsExecuteMsg, EditionsQueryMsg};
use editions_base::msg::{InstantiateMsg, MigrateMsg};

fn main() {
    write_api! {
        instantiate: InstantiateMsg,
        execute: EditionsExecuteMsg,
        query: EditionsQueryMsg,
        migrate: MigrateMsg,
    }
}
