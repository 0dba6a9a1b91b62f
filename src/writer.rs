use log::{debug, trace};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use crate::sample_data::{FIELD_COUNT, HEADER, SAMPLE_TRANSACTIONS};

/// Where the import and analysis scripts look for the export by default.
pub const DEFAULT_DESTINATION: &str = "data/helcim-transactions.csv";

/// Writes the sample transactions to `destination` and reports it on standard output.
///
/// The file is created or truncated. Its parent directory must already exist.
pub fn save(destination: &Path) -> std::io::Result<()> {
    write_sample(destination)?;
    println!("Sample Helcim transactions written to {}", destination.display());
    Ok(())
}

// The handle is closed on drop, whichever way this returns.
fn write_sample(destination: &Path) -> std::io::Result<()> {
    debug!(
        "Writing {} rows of {} fields to {}",
        SAMPLE_TRANSACTIONS.lines().count().saturating_sub(1),
        FIELD_COUNT,
        destination.display()
    );
    trace!("Header: {}", HEADER);
    let mut file = File::create(destination)?;
    file.write_all(SAMPLE_TRANSACTIONS.as_bytes())?;
    file.flush()?;
    debug!("Wrote {} bytes to {}", SAMPLE_TRANSACTIONS.len(), destination.display());
    Ok(())
}
