//! Metadata API: per-marketplace listing policies.

use super::ApiRequest;

const BASE: &str = "/sell/metadata/v1";

/// Marketplace policy families that share the `get_<kind>_policies` shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketplacePolicy {
    AutomotivePartsCompatibility,
    Category,
    ExtendedProducerResponsibility,
    ItemCondition,
    ListingStructure,
    NegotiatedPrice,
    Regulatory,
    Return,
    ShippingCostType,
}

impl MarketplacePolicy {
    pub fn endpoint(self) -> &'static str {
        match self {
            MarketplacePolicy::AutomotivePartsCompatibility => {
                "get_automotive_parts_compatibility_policies"
            }
            MarketplacePolicy::Category => "get_category_policies",
            MarketplacePolicy::ExtendedProducerResponsibility => {
                "get_extended_producer_responsibility_policies"
            }
            MarketplacePolicy::ItemCondition => "get_item_condition_policies",
            MarketplacePolicy::ListingStructure => "get_listing_structure_policies",
            MarketplacePolicy::NegotiatedPrice => "get_negotiated_price_policies",
            MarketplacePolicy::Regulatory => "get_regulatory_policies",
            MarketplacePolicy::Return => "get_return_policies",
            MarketplacePolicy::ShippingCostType => "get_shipping_cost_type_policies",
        }
    }
}

fn marketplace(marketplace_id: &str) -> ApiRequest {
    ApiRequest::get(BASE)
        .segment("marketplace")
        .segment(marketplace_id)
}

pub fn get_policies(
    kind: MarketplacePolicy,
    marketplace_id: &str,
    filter: Option<&str>,
) -> ApiRequest {
    marketplace(marketplace_id)
        .segment(kind.endpoint())
        .query_opt("filter", filter)
}

pub fn get_hazardous_materials_labels(marketplace_id: &str) -> ApiRequest {
    marketplace(marketplace_id).segment("get_hazardous_materials_labels")
}

pub fn get_product_safety_labels(marketplace_id: &str) -> ApiRequest {
    marketplace(marketplace_id).segment("get_product_safety_labels")
}
