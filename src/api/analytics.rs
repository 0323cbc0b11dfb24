//! Analytics API: traffic report and seller performance.

use super::ApiRequest;

const BASE: &str = "/sell/analytics/v1";

pub fn get_traffic_report(
    dimension: &str,
    filter: &str,
    metric: &str,
    sort: Option<&str>,
) -> ApiRequest {
    ApiRequest::get(BASE)
        .segment("traffic_report")
        .query("dimension", dimension)
        .query("filter", filter)
        .query("metric", metric)
        .query_opt("sort", sort)
}

pub fn find_seller_standards_profiles() -> ApiRequest {
    ApiRequest::get(BASE).segment("seller_standards_profile")
}

pub fn get_seller_standards_profile(program: &str, cycle: &str) -> ApiRequest {
    ApiRequest::get(BASE)
        .segment("seller_standards_profile")
        .segment(program)
        .segment(cycle)
}

pub fn get_customer_service_metric(
    metric_type: &str,
    evaluation_type: &str,
    evaluation_marketplace_id: &str,
) -> ApiRequest {
    ApiRequest::get(BASE)
        .segment("customer_service_metric")
        .segment(metric_type)
        .segment(evaluation_type)
        .query("evaluation_marketplace_id", evaluation_marketplace_id)
}
