mod delegate;
mod helpers;
mod msg;
mod query;

pub use cw_utils::Expiration;

pub use crate::delegate::{CheckDelegateResponse, DelegateRegistry, DelegateRegistryQueryMsg};
pub use crate::helpers::SourceCollection;
pub use crate::msg::SourceCollectionExecuteMsg;
pub use crate::query::{Approval, OperatorResponse, OwnerOfResponse, SourceCollectionQueryMsg};
