use clap::Subcommand;
use reqwest::Method;
use serde_json::Value;

use crate::cli::client::ApiClient;
use crate::cli::utils::*;
use crate::cli::OutputFormat;

#[derive(Subcommand)]
pub enum VendorCommands {
    #[command(about = "List open deactivation and reactivation requests")]
    Pending,

    #[command(about = "Show a vendor")]
    Show {
        #[arg(help = "Vendor ID")]
        id: i64,
    },

    #[command(about = "File a deactivation request")]
    RequestDeactivation {
        #[arg(help = "Vendor ID")]
        id: i64,
    },

    #[command(about = "File a reactivation request for a deactivated vendor")]
    RequestReactivation {
        #[arg(help = "Vendor ID")]
        id: i64,
    },

    #[command(about = "Approve a deactivation request")]
    ApproveDeactivation {
        #[arg(help = "Vendor ID")]
        id: i64,
    },

    #[command(about = "Reject a deactivation request")]
    RejectDeactivation {
        #[arg(help = "Vendor ID")]
        id: i64,
    },

    #[command(about = "Approve a pending reactivation request")]
    ApproveReactivation {
        #[arg(help = "Vendor ID")]
        id: i64,
    },

    #[command(about = "Reject a pending reactivation request")]
    RejectReactivation {
        #[arg(help = "Vendor ID")]
        id: i64,
    },

    #[command(about = "Reset a vendor's deactivation status to active")]
    Reset {
        #[arg(help = "Vendor ID")]
        id: i64,
    },
}

impl VendorCommands {
    /// HTTP method, path and past-tense verb for single-vendor commands
    fn endpoint(&self) -> Option<(Method, String, &'static str)> {
        let (method, id, suffix, verb) = match self {
            VendorCommands::Pending | VendorCommands::Show { .. } => return None,
            VendorCommands::RequestDeactivation { id } => {
                (Method::POST, id, "deactivation/request", "Deactivation requested")
            }
            VendorCommands::RequestReactivation { id } => {
                (Method::POST, id, "reactivation/request", "Reactivation requested")
            }
            VendorCommands::ApproveDeactivation { id } => {
                (Method::PUT, id, "deactivation/approve", "Deactivation approved")
            }
            VendorCommands::RejectDeactivation { id } => {
                (Method::PUT, id, "deactivation/reject", "Deactivation rejected")
            }
            VendorCommands::ApproveReactivation { id } => {
                (Method::POST, id, "reactivation/approve", "Reactivation approved")
            }
            VendorCommands::RejectReactivation { id } => {
                (Method::POST, id, "reactivation/reject", "Reactivation rejected")
            }
            VendorCommands::Reset { id } => (Method::PUT, id, "reset", "Status reset"),
        };
        Some((method, format!("/api/vendors/{}/{}", id, suffix), verb))
    }
}

pub async fn handle(
    cmd: VendorCommands,
    client: &ApiClient,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    match cmd {
        VendorCommands::Pending => {
            let data = client.call(Method::GET, "/api/vendors/requests").await?;
            output_pending(&output_format, &data)
        }
        VendorCommands::Show { id } => {
            let vendor = client.call(Method::GET, &format!("/api/vendors/{}", id)).await?;
            match output_format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&vendor)?),
                OutputFormat::Text => {
                    println!("{}", vendor_header());
                    println!("{}", vendor_line(&vendor));
                }
            }
            Ok(())
        }
        other => {
            let Some((method, path, verb)) = other.endpoint() else {
                return Ok(());
            };
            let vendor = client.call(method, &path).await?;
            let status = vendor["deactivationStatus"].as_str().unwrap_or("unknown");
            output_success(
                &output_format,
                &format!("{} for vendor {} (now {})", verb, vendor["id"], status),
                Some(vendor.clone()),
            )
        }
    }
}

fn output_pending(output_format: &OutputFormat, data: &Value) -> anyhow::Result<()> {
    let empty = Vec::new();
    let deactivations = data["deactivationRequests"].as_array().unwrap_or(&empty);
    let reactivations = data["reactivationRequests"].as_array().unwrap_or(&empty);

    if deactivations.is_empty() && reactivations.is_empty() {
        return output_empty_collection(output_format, "requests", "No open requests");
    }

    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(data)?);
        }
        OutputFormat::Text => {
            for (title, vendors) in [("Deactivation requests", deactivations), ("Reactivation requests", reactivations)] {
                println!("{} ({})", title, vendors.len());
                println!("{}", vendor_header());
                println!("{}", "-".repeat(100));
                for vendor in vendors {
                    println!("{}", vendor_line(vendor));
                }
                println!();
            }
        }
    }
    Ok(())
}
