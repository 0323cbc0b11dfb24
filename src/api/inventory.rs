//! Inventory API: inventory items and offers.

use super::ApiRequest;
use serde_json::Value;

const BASE: &str = "/sell/inventory/v1";

pub fn get_inventory_items(limit: Option<u64>, offset: Option<u64>) -> ApiRequest {
    ApiRequest::get(BASE)
        .segment("inventory_item")
        .query_opt("limit", limit)
        .query_opt("offset", offset)
}

pub fn get_inventory_item(sku: &str) -> ApiRequest {
    ApiRequest::get(BASE).segment("inventory_item").segment(sku)
}

/// PUT is create-or-replace keyed by SKU.
pub fn create_or_replace_inventory_item(sku: &str, item: Value) -> ApiRequest {
    ApiRequest::put(BASE)
        .segment("inventory_item")
        .segment(sku)
        .body(item)
}

pub fn delete_inventory_item(sku: &str) -> ApiRequest {
    ApiRequest::delete(BASE).segment("inventory_item").segment(sku)
}

pub fn get_offers(
    sku: Option<&str>,
    marketplace_id: Option<&str>,
    limit: Option<u64>,
    offset: Option<u64>,
) -> ApiRequest {
    ApiRequest::get(BASE)
        .segment("offer")
        .query_opt("sku", sku)
        .query_opt("marketplace_id", marketplace_id)
        .query_opt("limit", limit)
        .query_opt("offset", offset)
}

pub fn get_offer(offer_id: &str) -> ApiRequest {
    ApiRequest::get(BASE).segment("offer").segment(offer_id)
}

pub fn create_offer(offer: Value) -> ApiRequest {
    ApiRequest::post(BASE).segment("offer").body(offer)
}

pub fn publish_offer(offer_id: &str) -> ApiRequest {
    ApiRequest::post(BASE)
        .segment("offer")
        .segment(offer_id)
        .segment("publish")
}

pub fn withdraw_offer(offer_id: &str) -> ApiRequest {
    ApiRequest::post(BASE)
        .segment("offer")
        .segment(offer_id)
        .segment("withdraw")
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;
    use serde_json::json;

    #[test]
    fn item_listing_omits_absent_paging() {
        let req = get_inventory_items(None, None);
        assert_eq!(req.path(), "/sell/inventory/v1/inventory_item");
        assert!(req.query.is_empty());

        let req = get_inventory_items(Some(25), Some(0));
        assert_eq!(req.query_value("limit"), Some("25"));
        assert_eq!(req.query_value("offset"), Some("0"));
    }

    #[test]
    fn create_item_is_a_put_with_body() {
        let req = create_or_replace_inventory_item("SKU-1", json!({"condition": "NEW"}));
        assert_eq!(req.method, Method::PUT);
        assert_eq!(req.path(), "/sell/inventory/v1/inventory_item/SKU-1");
        assert_eq!(req.body, Some(json!({"condition": "NEW"})));
    }

    #[test]
    fn offer_actions_append_verbs() {
        assert_eq!(publish_offer("55").path(), "/sell/inventory/v1/offer/55/publish");
        assert_eq!(withdraw_offer("55").method, Method::POST);
        let req = get_offers(Some("SKU-1"), None, Some(10), None);
        assert_eq!(req.query_value("sku"), Some("SKU-1"));
        assert_eq!(req.query_value("marketplace_id"), None);
    }
}
