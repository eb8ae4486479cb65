use crate::error::CliError;
use engine_runtime::summary::SyncSummary;

/// Renders the final run summary: one sentence for humans, or the full
/// summary as JSON when requested.
pub fn print_summary(summary: &SyncSummary, as_json: bool) -> Result<(), CliError> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(summary)?);
        return Ok(());
    }

    match (&summary.version, summary.changed) {
        (Some(version), _) => {
            println!(
                "Changes written ({} records), version bumped to {version}",
                summary.records
            );
        }
        (None, true) => {
            println!(
                "Dry run: content changed ({} records), nothing written",
                summary.records
            );
        }
        (None, false) => {
            println!("No changes, nothing written ({} records)", summary.records);
        }
    }
    Ok(())
}
