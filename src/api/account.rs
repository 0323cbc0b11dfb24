//! Account API: business policies and seller privileges.

use super::ApiRequest;

const BASE: &str = "/sell/account/v1";

pub fn get_custom_policies(policy_types: Option<&str>) -> ApiRequest {
    ApiRequest::get(BASE)
        .segment("custom_policy")
        .query_opt("policy_types", policy_types)
}

pub fn get_custom_policy(custom_policy_id: &str) -> ApiRequest {
    ApiRequest::get(BASE)
        .segment("custom_policy")
        .segment(custom_policy_id)
}

pub fn get_fulfillment_policies(marketplace_id: Option<&str>) -> ApiRequest {
    ApiRequest::get(BASE)
        .segment("fulfillment_policy")
        .query_opt("marketplace_id", marketplace_id)
}

pub fn get_payment_policies(marketplace_id: Option<&str>) -> ApiRequest {
    ApiRequest::get(BASE)
        .segment("payment_policy")
        .query_opt("marketplace_id", marketplace_id)
}

pub fn get_return_policies(marketplace_id: Option<&str>) -> ApiRequest {
    ApiRequest::get(BASE)
        .segment("return_policy")
        .query_opt("marketplace_id", marketplace_id)
}

pub fn get_privileges() -> ApiRequest {
    ApiRequest::get(BASE).segment("privilege")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_lists_scope_by_marketplace_only_when_given() {
        let req = get_fulfillment_policies(Some("EBAY_US"));
        assert_eq!(req.path(), "/sell/account/v1/fulfillment_policy");
        assert_eq!(req.query_value("marketplace_id"), Some("EBAY_US"));

        let req = get_payment_policies(None);
        assert!(req.query.is_empty());
    }

    #[test]
    fn custom_policy_id_is_a_path_segment() {
        let req = get_custom_policy("1234");
        assert_eq!(req.path(), "/sell/account/v1/custom_policy/1234");
        assert_eq!(get_privileges().path(), "/sell/account/v1/privilege");
    }
}
