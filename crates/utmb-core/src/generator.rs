//! UTM generation: brands × materials → tagged URLs.
//!
//! Pure over its input. No clock, no storage, no I/O; calling it twice with the
//! same request yields identical output.

use crate::ident;
use crate::mode::Placement;
use crate::request::{BrandUtm, GenerationRequest, GenerationResult, MaterialTag};
use crate::url_model::{self, UtmParams};

/// Generates identifiers and tagged URLs for every brand in `request`.
///
/// Brands are processed independently in request order. A brand listed twice
/// overwrites its earlier entry.
pub fn generate(request: &GenerationRequest) -> GenerationResult {
    let mut result = GenerationResult::new();
    for brand in &request.brands {
        let utm = generate_brand(request, brand);
        tracing::debug!(
            brand = %brand,
            campaign = %utm.campaign,
            urls = utm.url.len(),
            "generated brand utm"
        );
        result.insert(brand.clone(), utm);
    }
    result
}

/// Generates the campaign, material ids and URLs for a single brand.
pub fn generate_brand(request: &GenerationRequest, brand: &str) -> BrandUtm {
    let builder = request.builder_type;
    let campaign = ident::campaign(
        &request.date,
        brand,
        &request.objective,
        &request.issue,
        &request.season,
        &request.promotion,
    );
    let param = builder.material_param(request.utm_param_type);

    let placements = builder.placements(request, brand);
    let mut content = Vec::with_capacity(placements.len());
    let mut url = Vec::with_capacity(placements.len());

    for Placement {
        label, landing_url, ..
    } in placements
    {
        let material = ident::material_id(
            &request.date,
            brand,
            &request.season,
            &request.promotion,
            &label,
        );
        let utm = UtmParams {
            source: request.medium.clone(),
            medium: request.product.clone(),
            campaign: campaign.clone(),
            material: Some(MaterialTag::new(param, material.clone())),
        };
        url.push(url_model::compose(&landing_url, &utm));
        content.push(material);
    }

    BrandUtm {
        campaign,
        content,
        url,
    }
}
