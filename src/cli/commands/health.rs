use crate::cli::client::ApiClient;
use crate::cli::OutputFormat;

pub async fn handle(client: &ApiClient, output_format: OutputFormat) -> anyhow::Result<()> {
    let (status, body) = client.health().await?;

    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        OutputFormat::Text => {
            let state = body["data"]["status"].as_str().unwrap_or("unknown");
            println!("{} {} (HTTP {})", client.url("/health"), state, status.as_u16());
        }
    }

    if !status.is_success() {
        anyhow::bail!("server is unhealthy (HTTP {})", status.as_u16());
    }
    Ok(())
}
