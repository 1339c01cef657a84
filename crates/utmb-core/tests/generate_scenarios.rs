//! End-to-end generation scenarios: request → validate → generate → export.

use utmb_core::export::{export_rows, render_csv};
use utmb_core::url_model::{landing_url, parse_url};
use utmb_core::validate::validate_request;
use utmb_core::{generate, BuilderType, GenerationRequest, UrlMode, UtmParamType};

fn scenario_request() -> GenerationRequest {
    serde_json::from_str(
        r#"{
            "date": "260119", "medium": "meta", "product": "traffic",
            "brands": ["MFG"], "objective": "CV-RT", "issue": "RL",
            "season": "25WI", "promotion": "sale", "materialCount": 2,
            "builderType": "DA", "urlMode": "auto"
        }"#,
    )
    .unwrap()
}

fn utm_keys(url: &str) -> Vec<String> {
    parse_url(url)
        .params
        .into_iter()
        .map(|(k, _)| k)
        .filter(|k| k.starts_with("utm_"))
        .collect()
}

#[test]
fn display_scenario_matches_operator_sheet() {
    let req = scenario_request();
    assert!(validate_request(&req).is_valid());

    let result = generate(&req);
    let mfg = result.get("MFG").unwrap();
    assert_eq!(mfg.campaign, "260119_MFG_CV-RT_RL_25WI_sale");
    assert_eq!(
        mfg.content,
        vec!["260119_MFG_25WI_sale_img_01", "260119_MFG_25WI_sale_img_02"]
    );
    for (content, url) in mfg.content.iter().zip(&mfg.url) {
        assert_eq!(
            landing_url(url),
            "https://marithe-official.com/collection/detail/"
        );
        assert!(url.ends_with(&format!(
            "?utm_source=meta&utm_medium=traffic&utm_campaign=260119_MFG_CV-RT_RL_25WI_sale&utm_content={content}"
        )));
    }
}

#[test]
fn cardinality_per_mode() {
    for count in [1u32, 7, 99] {
        for builder in [BuilderType::Display, BuilderType::Search] {
            let mut req = GenerationRequest::defaults_for(builder, "260119");
            req.material_count = count;
            req.brands = vec!["MFG".into(), "KID".into(), "UND".into()];
            let result = generate(&req);
            for (_, utm) in result.iter() {
                assert_eq!(utm.content.len(), count as usize);
                assert_eq!(utm.url.len(), count as usize);
            }
        }

        let mut req = GenerationRequest::defaults_for(BuilderType::BrandShop, "260119");
        req.material_count = count;
        let result = generate(&req);
        let mfg = result.get("MFG").unwrap();
        assert_eq!(mfg.content.len(), 8);
        assert_eq!(mfg.url.len(), 8);
    }
}

#[test]
fn manual_url_retagging_is_idempotent() {
    let mut req = scenario_request();
    req.url_mode = UrlMode::Manual;
    req.manual_url = Some(
        "https://event.example.com/winter?ref=ig&utm_source=old&utm_medium=old&utm_content=old"
            .into(),
    );
    req.material_count = 4;

    let result = generate(&req);
    let urls = &result.get("MFG").unwrap().url;
    for url in urls {
        assert_eq!(landing_url(url), "https://event.example.com/winter");
        assert_eq!(
            utm_keys(url),
            vec!["utm_source", "utm_medium", "utm_campaign", "utm_content"]
        );
        assert!(parse_url(url)
            .params
            .contains(&("ref".to_string(), "ig".to_string())));
        assert!(!url.contains("old"));
    }

    // Feeding a generated URL back in as the manual URL yields the same URLs.
    let mut again = req.clone();
    again.manual_url = Some(urls[0].clone());
    assert_eq!(generate(&again).get("MFG").unwrap().url, *urls);
}

#[test]
fn manual_url_padding_and_fragment_stay_out_of_tags() {
    let mut req = scenario_request();
    req.url_mode = UrlMode::Manual;
    req.manual_url = Some("  https://x.example.com/p#top  ".into());
    assert!(validate_request(&req).is_valid());

    for url in &generate(&req).get("MFG").unwrap().url {
        assert!(!url.contains(' '));
        assert!(url.starts_with("https://x.example.com/p?utm_source=meta&"));
        assert!(url.ends_with("#top"));
        assert_eq!(landing_url(url), "https://x.example.com/p");
        assert_eq!(utm_keys(url).len(), 4);
    }
}

#[test]
fn term_and_content_exclusive() {
    let mut req = scenario_request();
    req.utm_param_type = UtmParamType::Term;
    for url in &generate(&req).get("MFG").unwrap().url {
        let keys = utm_keys(url);
        assert!(keys.contains(&"utm_term".to_string()));
        assert!(!keys.contains(&"utm_content".to_string()));
    }

    req.utm_param_type = UtmParamType::Content;
    for url in &generate(&req).get("MFG").unwrap().url {
        let keys = utm_keys(url);
        assert!(keys.contains(&"utm_content".to_string()));
        assert!(!keys.contains(&"utm_term".to_string()));
    }
}

#[test]
fn generation_is_deterministic() {
    let req = scenario_request();
    let a = serde_json::to_string(&generate(&req)).unwrap();
    let b = serde_json::to_string(&generate(&req)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn export_covers_every_url() {
    let mut req = GenerationRequest::defaults_for(BuilderType::BrandShop, "260119");
    req.brands = vec!["MFG".into(), "KID".into()];
    let result = generate(&req);
    let rows = export_rows(&req, &result);
    assert_eq!(rows.len(), 16);
    assert_eq!(rows[8].brand, "KID");
    assert_eq!(rows[8].material_name, "homelink");
    assert_eq!(rows[15].material_name, "sub1");

    let csv = render_csv(&req, &result);
    assert_eq!(csv.lines().count(), 17);
}
