use cosmwasm_std::{attr, Response, Uint128};

use crate::msg::EditionId;

/// Anything that reports itself as response attributes.
pub trait Event {
    fn add_attributes(&self, rsp: &mut Response);
}

/// Tracks token transfer/mint/burn actions
pub struct TransferEvent<'a> {
    pub from: Option<&'a str>,
    pub to: Option<&'a str>,
    pub edition_id: EditionId,
    pub amount: Uint128,
}

impl<'a> Event for TransferEvent<'a> {
    fn add_attributes(&self, rsp: &mut Response) {
        let action = match (self.from, self.to) {
            (None, Some(_)) => "mint",
            (Some(_), None) => "burn",
            _ => "transfer",
        };
        rsp.attributes.push(attr("action", action));
        rsp.attributes.push(attr("edition_id", self.edition_id.to_string()));
        rsp.attributes.push(attr("amount", self.amount));
        if let Some(from) = self.from {
            rsp.attributes.push(attr("from", from));
        }
        if let Some(to) = self.to {
            rsp.attributes.push(attr("to", to));
        }
    }
}

/// Tracks edition (re)initialization
pub struct EditionEvent<'a> {
    pub edition_id: EditionId,
    pub max_supply: Uint128,
    pub uri: &'a str,
}

impl<'a> Event for EditionEvent<'a> {
    fn add_attributes(&self, rsp: &mut Response) {
        rsp.attributes.push(attr("action", "initialize_edition"));
        rsp.attributes.push(attr("edition_id", self.edition_id.to_string()));
        rsp.attributes.push(attr("max_supply", self.max_supply));
        rsp.attributes.push(attr("uri", self.uri));
    }
}

/// Tracks token metadata changes
pub struct MetadataEvent<'a> {
    pub uri: &'a str,
    pub edition_id: Option<EditionId>,
}

impl<'a> Event for MetadataEvent<'a> {
    fn add_attributes(&self, rsp: &mut Response) {
        rsp.attributes.push(attr("action", "set_metadata"));
        rsp.attributes.push(attr("uri", self.uri));
        if let Some(edition_id) = self.edition_id {
            rsp.attributes.push(attr("edition_id", edition_id.to_string()));
        }
    }
}

/// Tracks approve_all status changes
pub struct ApproveAllEvent<'a> {
    pub sender: &'a str,
    pub operator: &'a str,
    pub approved: bool,
}

impl<'a> Event for ApproveAllEvent<'a> {
    fn add_attributes(&self, rsp: &mut Response) {
        rsp.attributes.push(attr("action", "approve_all"));
        rsp.attributes.push(attr("sender", self.sender));
        rsp.attributes.push(attr("operator", self.operator));
        rsp.attributes
            .push(attr("approved", (self.approved as u32).to_string()));
    }
}
