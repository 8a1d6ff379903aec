use anyhow::Result;
use clap::ValueEnum;
use coingecko_api::types::Envelope;

/// How command results are printed.
#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON (default).
    Pretty,
    /// Single-line JSON, for piping.
    Compact,
}

/// Prints the envelope payload, failing the command when the API reported a
/// non-success status.
pub fn print_data(envelope: &Envelope, format: &OutputFormat) -> Result<()> {
    if !envelope.success {
        anyhow::bail!("API returned {} {}", envelope.code, envelope.message);
    }
    match format {
        OutputFormat::Pretty => println!("{}", serde_json::to_string_pretty(&envelope.data)?),
        OutputFormat::Compact => println!("{}", serde_json::to_string(&envelope.data)?),
    }
    Ok(())
}
