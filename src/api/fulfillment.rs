//! Fulfillment API: orders and shipping fulfillments.

use super::ApiRequest;
use serde_json::Value;

const BASE: &str = "/sell/fulfillment/v1";

pub fn get_orders(filter: Option<&str>, limit: Option<u64>, offset: Option<u64>) -> ApiRequest {
    ApiRequest::get(BASE)
        .segment("order")
        .query_opt("filter", filter)
        .query_opt("limit", limit)
        .query_opt("offset", offset)
}

pub fn get_order(order_id: &str) -> ApiRequest {
    ApiRequest::get(BASE).segment("order").segment(order_id)
}

pub fn get_shipping_fulfillments(order_id: &str) -> ApiRequest {
    ApiRequest::get(BASE)
        .segment("order")
        .segment(order_id)
        .segment("shipping_fulfillment")
}

pub fn create_shipping_fulfillment(order_id: &str, fulfillment: Value) -> ApiRequest {
    ApiRequest::post(BASE)
        .segment("order")
        .segment(order_id)
        .segment("shipping_fulfillment")
        .body(fulfillment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;

    #[test]
    fn orders_query_carries_only_given_values() {
        let req = get_orders(None, Some(5), None);
        assert_eq!(req.method, Method::GET);
        assert_eq!(req.path(), "/sell/fulfillment/v1/order");
        assert_eq!(req.query, vec![("limit".to_string(), "5".to_string())]);
    }

    #[test]
    fn filter_is_passed_through_verbatim() {
        let req = get_orders(Some("orderfulfillmentstatus:{NOT_STARTED}"), None, None);
        assert_eq!(
            req.query_value("filter"),
            Some("orderfulfillmentstatus:{NOT_STARTED}")
        );
    }

    #[test]
    fn shipping_fulfillment_nests_under_order() {
        let req = create_shipping_fulfillment("12-34", serde_json::json!({"trackingNumber": "1Z"}));
        assert_eq!(req.method, Method::POST);
        assert_eq!(
            req.path(),
            "/sell/fulfillment/v1/order/12-34/shipping_fulfillment"
        );
    }
}
