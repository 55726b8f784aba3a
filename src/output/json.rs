//! JSON output

use std::io;

use crate::tree::ScanResult;

/// Print a scan result as pretty-printed JSON to stdout.
pub fn print_json(scan: &ScanResult) -> io::Result<()> {
    let json = serde_json::to_string_pretty(scan).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}
