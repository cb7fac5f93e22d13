pub use cw_utils::Expiration;

pub use crate::event::{ApproveAllEvent, EditionEvent, Event, MetadataEvent, TransferEvent};
pub use crate::helpers::EditionsContract;
pub use crate::msg::{EditionId, EditionsExecuteMsg};
pub use crate::query::{
    Approval, ApprovedForAllResponse, BalanceResponse, BatchBalanceResponse,
    CurrentEditionResponse, CurrentSupplyResponse, EditionsQueryMsg, IsApprovedForAllResponse,
    MaxSupplyResponse, OwnerResponse, RoyaltyInfoResponse, TokenIdsMintedResponse, UriResponse,
};

mod event;
mod helpers;
mod msg;
mod query;
