//! Negotiation API: seller-initiated offers to interested buyers.
//!
//! Both endpoints are scoped by the marketplace header rather than a query value.

use super::ApiRequest;
use crate::constants::ebay::MARKETPLACE_HEADER;
use serde_json::Value;

const BASE: &str = "/sell/negotiation/v1";

pub fn find_eligible_items(
    marketplace_id: Option<&str>,
    limit: Option<u64>,
    offset: Option<u64>,
) -> ApiRequest {
    ApiRequest::get(BASE)
        .segment("find_eligible_items")
        .header_opt(MARKETPLACE_HEADER, marketplace_id)
        .query_opt("limit", limit)
        .query_opt("offset", offset)
}

pub fn send_offer_to_interested_buyers(marketplace_id: Option<&str>, offer: Value) -> ApiRequest {
    ApiRequest::post(BASE)
        .segment("send_offer_to_interested_buyers")
        .header_opt(MARKETPLACE_HEADER, marketplace_id)
        .body(offer)
}
