use serde_json::{json, Value};

use crate::cli::OutputFormat;

/// Output a success message in the appropriate format
pub fn output_success(
    output_format: &OutputFormat,
    message: &str,
    data: Option<Value>,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": true,
                "message": message
            });

            if let Some(data_value) = data {
                response["data"] = data_value;
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
    }
    Ok(())
}

/// Output an empty collection in the appropriate format
pub fn output_empty_collection(
    output_format: &OutputFormat,
    collection_name: &str,
    message: &str,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&json!({
                collection_name: []
            }))?);
        }
        OutputFormat::Text => {
            println!("{}", message);
        }
    }
    Ok(())
}

/// One-line summary of a vendor record for text output
pub fn vendor_line(vendor: &Value) -> String {
    let text = |key: &str| vendor[key].as_str().unwrap_or("-").to_string();
    let id = vendor["id"]
        .as_i64()
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string());
    let requested_by = vendor["deactivationRequestedBy"]
        .as_i64()
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string());

    format!(
        "{:<6} {:<24} {:<24} {:<22} {:<8} {}",
        id,
        text("name"),
        text("companyName"),
        text("deactivationStatus"),
        if vendor["isActive"] == true { "yes" } else { "no" },
        requested_by
    )
}

pub fn vendor_header() -> String {
    format!(
        "{:<6} {:<24} {:<24} {:<22} {:<8} {}",
        "ID", "NAME", "COMPANY", "STATUS", "ACTIVE", "REQUESTED BY"
    )
}
