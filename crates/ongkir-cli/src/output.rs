//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use ongkir_domain::{
    AreaInfo, Confidence, ResolutionResult, StoreInfo, Suggestion, TierId, ValidationReport,
};
use ongkir_resolver::table::format_rupiah;
use ongkir_resolver::{DeliveryQuote, SettledFee};
use serde_json;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a fee quote.
    pub fn format_quote(&self, quote: &DeliveryQuote) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(quote)?),
            OutputFormat::Quiet => Ok(quote.resolution.fee.to_string()),
            OutputFormat::Table => {
                let mut rows = self.resolution_rows(&quote.resolution);
                rows.push(("Distance estimate", quote.distance_estimate.clone()));
                Ok(self.key_value_table(rows))
            }
        }
    }

    /// Format a single resolution.
    pub fn format_resolution(&self, result: &ResolutionResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
            OutputFormat::Quiet => Ok(result.fee.to_string()),
            OutputFormat::Table => Ok(self.key_value_table(self.resolution_rows(result))),
        }
    }

    /// Format autocomplete suggestions.
    pub fn format_suggestions(&self, suggestions: &[Suggestion]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "suggestions": suggestions,
                "total": suggestions.len(),
            }))?),
            OutputFormat::Quiet => Ok(suggestions
                .iter()
                .map(|s| s.keyword.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if suggestions.is_empty() {
                    return Ok(self.colorize("No matching areas found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Area", "Tier", "Fee", "Area Name"]);
                for s in suggestions {
                    builder.push_record([
                        s.keyword.clone(),
                        s.tier.to_string(),
                        format_rupiah(s.fee),
                        s.area_name.clone(),
                    ]);
                }
                Ok(self.finish_table(builder))
            }
        }
    }

    /// Format an address validation report.
    pub fn format_report(&self, report: &ValidationReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Quiet => Ok(report.is_valid.to_string()),
            OutputFormat::Table => {
                let message = if report.is_valid {
                    self.success(&report.feedback_message)
                } else {
                    self.warning(&report.feedback_message)
                };

                let rows = vec![
                    ("Valid", report.is_valid.to_string()),
                    ("Confidence", self.confidence(report.confidence_level)),
                    ("Detected area", report.detected_area.clone()),
                    ("Delivery fee", format_rupiah(report.delivery_fee)),
                    ("Store", report.store_info.location.clone()),
                ];

                let mut output = format!("{}\n{}", message, self.key_value_table(rows));
                if !report.suggestions.is_empty() {
                    output.push('\n');
                    output.push_str(&self.info("Did you mean:"));
                    output.push('\n');
                    output.push_str(&self.format_suggestions(&report.suggestions)?);
                }
                Ok(output)
            }
        }
    }

    /// Format the delivery area listing.
    pub fn format_areas(&self, store: &StoreInfo, areas: &[AreaInfo]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "store_location": store,
                "areas": areas,
            }))?),
            OutputFormat::Quiet => Ok(areas
                .iter()
                .map(|a| format!("{}\t{}", a.tier, a.fee))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Tier", "Fee", "Area", "Distance", "Examples", "Areas"]);
                for area in areas {
                    builder.push_record([
                        area.tier.to_string(),
                        format_rupiah(area.fee),
                        area.area_name.clone(),
                        area.distance_estimate.clone(),
                        area.example_areas.join(", "),
                        area.total_areas.to_string(),
                    ]);
                }

                let header = self.info(&format!(
                    "Store: {}, {}, {} ({})",
                    store.location, store.regency, store.province, store.note
                ));
                Ok(format!("{}\n{}", header, self.finish_table(builder)))
            }
        }
    }

    /// Format a checkout settlement.
    pub fn format_settled(&self, settled: &SettledFee) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(settled)?),
            OutputFormat::Quiet => Ok(settled.fee.to_string()),
            OutputFormat::Table => {
                let mut rows = vec![
                    ("Settled fee", format_rupiah(settled.fee)),
                    ("Source", format!("{:?}", settled.source).to_lowercase()),
                ];
                rows.extend(self.resolution_rows(&settled.resolution));
                let mut output = self.key_value_table(rows);
                if settled.requires_confirmation() {
                    output.push('\n');
                    output.push_str(&self.warning("Delivery area must be confirmed by admin"));
                }
                Ok(output)
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn resolution_rows(&self, result: &ResolutionResult) -> Vec<(&'static str, String)> {
        let mut rows = vec![
            ("Tier", self.tier(result.tier)),
            ("Fee", format_rupiah(result.fee)),
            ("Area", result.area_name.clone()),
            ("Description", result.description.clone()),
            ("Confidence", self.confidence(result.confidence)),
            ("Method", result.detection_method.to_string()),
        ];
        if let Some(keyword) = &result.matched_keyword {
            rows.push(("Matched keyword", keyword.clone()));
        }
        if let Some(distance) = result.distance {
            rows.push(("Distance", format!("{} km", distance)));
        }
        if result.requires_confirmation {
            rows.push(("Confirmation", self.colorize("required", "red")));
        }
        if let Some(note) = &result.note {
            rows.push(("Note", note.clone()));
        }
        rows
    }

    fn key_value_table(&self, rows: Vec<(&str, String)>) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, value) in rows {
            builder.push_record([key.to_string(), value]);
        }
        self.finish_table(builder)
    }

    fn finish_table(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    fn tier(&self, tier: TierId) -> String {
        if tier.is_sentinel() {
            self.colorize(tier.as_str(), "red")
        } else {
            tier.to_string()
        }
    }

    fn confidence(&self, confidence: Confidence) -> String {
        let color = match confidence {
            Confidence::High => "green",
            Confidence::Medium => "yellow",
            Confidence::Low => "cyan",
            Confidence::None => "red",
        };
        self.colorize(confidence.as_str(), color)
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ongkir_resolver::{DeliveryFeeResolver, DeliveryRequest};

    fn resolver() -> DeliveryFeeResolver {
        DeliveryFeeResolver::default_config()
    }

    fn quote(address: &str) -> DeliveryQuote {
        let request = DeliveryRequest {
            address: Some(address.to_string()),
            manual_distance: None,
        };
        resolver().quote(&request).unwrap()
    }

    #[test]
    fn test_json_quote() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_quote(&quote("sigaluh")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["tier"], "tier2");
        assert_eq!(value["fee"], 5000);
        assert_eq!(value["distance_estimate"], "8-15 km");
    }

    #[test]
    fn test_quiet_quote_is_fee_only() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        assert_eq!(formatter.format_quote(&quote("purwokerto")).unwrap(), "25000");
    }

    #[test]
    fn test_table_quote() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_quote(&quote("jakarta")).unwrap();
        assert!(output.contains("out_of_range"));
        assert!(output.contains("Rp 35.000"));
        assert!(output.contains("required"));
    }

    #[test]
    fn test_empty_suggestions() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_suggestions(&[]).unwrap();
        assert!(output.contains("No matching areas found"));
    }

    #[test]
    fn test_quiet_suggestions() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_suggestions(&resolver().suggestions("dieng")).unwrap();
        assert_eq!(output, "dieng");
    }

    #[test]
    fn test_report_lists_suggestions() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let report = resolver().validate_address("ur");
        let output = formatter.format_report(&report).unwrap();
        assert!(output.contains("Did you mean"));
        assert!(output.contains(report.suggestions[0].keyword.as_str()));
    }

    #[test]
    fn test_areas_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let r = resolver();
        let output = formatter.format_areas(&r.store_info(), &r.list_areas()).unwrap();
        assert!(output.contains("Susukan (Area Toko)"));
        assert!(output.contains("Di Luar Jangkauan"));
        assert!(output.contains("80+ km"));
    }

    #[test]
    fn test_settled_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let settled = resolver().settle_checkout_fee("Jl. Mawar No. 5", None).unwrap();
        let output = formatter.format_settled(&settled).unwrap();
        assert!(output.contains("computed"));
        assert!(output.contains("confirmed by admin"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.error("test"), "✗ test");
    }
}
