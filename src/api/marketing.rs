//! Marketing API: Promoted Listings campaigns, ads, ad groups, promotions and reports.

use super::ApiRequest;
use serde_json::{json, Value};

const BASE: &str = "/sell/marketing/v1";

fn campaign(method: fn(&str) -> ApiRequest, campaign_id: &str) -> ApiRequest {
    method(BASE).segment("ad_campaign").segment(campaign_id)
}

pub fn get_campaigns(
    campaign_status: Option<&str>,
    marketplace_id: Option<&str>,
    limit: Option<u64>,
) -> ApiRequest {
    ApiRequest::get(BASE)
        .segment("ad_campaign")
        .query_opt("campaign_status", campaign_status)
        .query_opt("marketplace_id", marketplace_id)
        .query_opt("limit", limit)
}

pub fn get_campaign(campaign_id: &str) -> ApiRequest {
    campaign(ApiRequest::get, campaign_id)
}

pub fn get_campaign_by_name(campaign_name: &str) -> ApiRequest {
    ApiRequest::get(BASE)
        .segment("ad_campaign")
        .segment("get_campaign_by_name")
        .query("campaign_name", campaign_name)
}

pub fn create_campaign(body: Value) -> ApiRequest {
    ApiRequest::post(BASE).segment("ad_campaign").body(body)
}

/// Lifecycle transitions take an empty JSON body.
pub fn pause_campaign(campaign_id: &str) -> ApiRequest {
    campaign(ApiRequest::post, campaign_id)
        .segment("pause")
        .body(json!({}))
}

pub fn resume_campaign(campaign_id: &str) -> ApiRequest {
    campaign(ApiRequest::post, campaign_id)
        .segment("resume")
        .body(json!({}))
}

pub fn end_campaign(campaign_id: &str) -> ApiRequest {
    campaign(ApiRequest::post, campaign_id)
        .segment("end")
        .body(json!({}))
}

pub fn get_ads(
    campaign_id: &str,
    ad_group_ids: Option<&str>,
    ad_status: Option<&str>,
    listing_ids: Option<&str>,
    limit: Option<u64>,
    offset: Option<u64>,
) -> ApiRequest {
    campaign(ApiRequest::get, campaign_id)
        .segment("ad")
        .query_opt("ad_group_ids", ad_group_ids)
        .query_opt("ad_status", ad_status)
        .query_opt("limit", limit)
        .query_opt("listing_ids", listing_ids)
        .query_opt("offset", offset)
}

pub fn get_ad(campaign_id: &str, ad_id: &str) -> ApiRequest {
    campaign(ApiRequest::get, campaign_id)
        .segment("ad")
        .segment(ad_id)
}

pub fn delete_ad(campaign_id: &str, ad_id: &str) -> ApiRequest {
    campaign(ApiRequest::delete, campaign_id)
        .segment("ad")
        .segment(ad_id)
}

pub fn get_ad_groups(
    campaign_id: &str,
    ad_group_status: Option<&str>,
    limit: Option<u64>,
    offset: Option<u64>,
) -> ApiRequest {
    campaign(ApiRequest::get, campaign_id)
        .segment("ad_group")
        .query_opt("ad_group_status", ad_group_status)
        .query_opt("limit", limit)
        .query_opt("offset", offset)
}

pub fn get_ad_group(campaign_id: &str, ad_group_id: &str) -> ApiRequest {
    campaign(ApiRequest::get, campaign_id)
        .segment("ad_group")
        .segment(ad_group_id)
}

pub fn get_promotions(marketplace_id: Option<&str>, limit: Option<u64>) -> ApiRequest {
    ApiRequest::get(BASE)
        .segment("promotion")
        .query_opt("marketplace_id", marketplace_id)
        .query_opt("limit", limit)
}

pub fn get_item_promotion(promotion_id: &str) -> ApiRequest {
    ApiRequest::get(BASE)
        .segment("item_promotion")
        .segment(promotion_id)
}

pub fn create_item_promotion(body: Value) -> ApiRequest {
    ApiRequest::post(BASE).segment("item_promotion").body(body)
}

pub fn get_ad_report_metadata() -> ApiRequest {
    ApiRequest::get(BASE).segment("ad_report_metadata")
}

pub fn get_ad_report_metadata_for_report_type(report_type: &str) -> ApiRequest {
    ApiRequest::get(BASE)
        .segment("ad_report_metadata")
        .segment(report_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;

    #[test]
    fn campaign_transitions_post_empty_bodies() {
        for (req, verb) in [
            (pause_campaign("c1"), "pause"),
            (resume_campaign("c1"), "resume"),
            (end_campaign("c1"), "end"),
        ] {
            assert_eq!(req.method, Method::POST);
            assert_eq!(req.path(), format!("/sell/marketing/v1/ad_campaign/c1/{}", verb));
            assert_eq!(req.body, Some(json!({})));
        }
    }

    #[test]
    fn campaign_by_name_uses_a_query_parameter() {
        let req = get_campaign_by_name("Spring Sale");
        assert_eq!(
            req.path(),
            "/sell/marketing/v1/ad_campaign/get_campaign_by_name"
        );
        assert_eq!(req.query_value("campaign_name"), Some("Spring Sale"));
    }

    #[test]
    fn ads_listing_keeps_only_present_filters() {
        let req = get_ads("c1", None, Some("ACTIVE"), None, None, Some(20));
        assert_eq!(req.path(), "/sell/marketing/v1/ad_campaign/c1/ad");
        assert_eq!(
            req.query,
            vec![
                ("ad_status".to_string(), "ACTIVE".to_string()),
                ("offset".to_string(), "20".to_string()),
            ]
        );
        assert_eq!(delete_ad("c1", "a9").method, Method::DELETE);
    }
}
