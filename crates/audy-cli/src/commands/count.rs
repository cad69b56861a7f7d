//! Count command implementation.

use crate::cli::InputArgs;
use crate::commands::extract::load_bundle;
use crate::error::Result;
use crate::output::Formatter;
use audy_extractor::SourceExtractor;

/// Execute the count command.
///
/// An empty result is not an error; the exit status is 0 either way.
pub fn execute_count(args: InputArgs, extractor: &SourceExtractor, formatter: &Formatter) -> Result<()> {
    let bundle = load_bundle(&args, extractor)?;
    println!("{}", formatter.format_counts(&bundle)?);
    Ok(())
}
