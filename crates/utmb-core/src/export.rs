//! Flat row export of a generation result (CSV download, tab-separated clipboard).

use crate::request::{GenerationRequest, GenerationResult};
use crate::url_model::landing_url;

/// Column headers of the operator sheet, in row order.
pub const HEADER: [&str; 15] = [
    "구분",
    "Date",
    "Source",
    "Medium",
    "캠페인",
    "브랜드",
    "목표",
    "이슈",
    "시즌",
    "프로모션명",
    "UTM캠페인",
    "소재",
    "UTM소재",
    "랜딩URL",
    "최종URL",
];

const BOM: &str = "\u{feff}";

/// One (brand, material) line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub builder: String,
    pub date: String,
    pub source: String,
    pub medium: String,
    pub friendly_campaign: String,
    pub brand: String,
    pub objective: String,
    pub issue: String,
    pub season: String,
    pub promotion: String,
    pub campaign: String,
    pub material_name: String,
    pub content_id: String,
    pub landing_url: String,
    pub final_url: String,
}

impl ExportRow {
    pub fn fields(&self) -> [&str; 15] {
        [
            &self.builder,
            &self.date,
            &self.source,
            &self.medium,
            &self.friendly_campaign,
            &self.brand,
            &self.objective,
            &self.issue,
            &self.season,
            &self.promotion,
            &self.campaign,
            &self.material_name,
            &self.content_id,
            &self.landing_url,
            &self.final_url,
        ]
    }
}

/// Flattens `result` into rows: brands in result order, materials in index order.
pub fn export_rows(request: &GenerationRequest, result: &GenerationResult) -> Vec<ExportRow> {
    let builder = request.builder_type;
    let mut rows = Vec::with_capacity(result.url_count());
    for (brand, utm) in result.iter() {
        for (idx, url) in utm.url.iter().enumerate() {
            rows.push(ExportRow {
                builder: builder.code().to_string(),
                date: request.date.clone(),
                source: request.medium.clone(),
                medium: request.product.clone(),
                friendly_campaign: request.promotion.clone(),
                brand: brand.to_string(),
                objective: request.objective.clone(),
                issue: request.issue.clone(),
                season: request.season.clone(),
                promotion: request.promotion.clone(),
                campaign: utm.campaign.clone(),
                material_name: builder.material_name(idx),
                content_id: utm.content.get(idx).cloned().unwrap_or_default(),
                landing_url: landing_url(url).to_string(),
                final_url: url.clone(),
            });
        }
    }
    rows
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// CSV with BOM, every field quoted, `\n` line breaks.
pub fn render_csv(request: &GenerationRequest, result: &GenerationResult) -> String {
    let mut lines = vec![HEADER.join(",")];
    for row in export_rows(request, result) {
        let fields: Vec<String> = row.fields().iter().map(|f| quote(f)).collect();
        lines.push(fields.join(","));
    }
    format!("{BOM}{}", lines.join("\n"))
}

/// Tab-separated text for pasting into a spreadsheet. No quoting.
pub fn render_tsv(request: &GenerationRequest, result: &GenerationResult) -> String {
    let mut lines = vec![HEADER.join("\t")];
    for row in export_rows(request, result) {
        lines.push(row.fields().join("\t"));
    }
    lines.join("\n")
}

/// `marithe_utm_<date>.csv`.
pub fn default_export_filename(date: &str) -> String {
    format!("marithe_utm_{date}.csv")
}
