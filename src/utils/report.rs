use crate::core::DeployReport;
use crate::utils::error::Result;
use std::path::Path;

pub async fn write_report<P: AsRef<Path>>(report: &DeployReport, path: P) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    tokio::fs::write(path.as_ref(), json).await?;
    tracing::debug!("Run report written to {:?}", path.as_ref());
    Ok(())
}
