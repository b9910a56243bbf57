//! Symmetry check of a record file

use std::path::PathBuf;

use clap::Args;
use graph_codec::{Codec, SymmetryValidator};

use crate::error::{CliError, CliResult};
use crate::output::{print_error, print_success, OutputFormat};

/// Validate arguments
#[derive(Args)]
pub struct ValidateArgs {
    /// Record file (`-` for stdin)
    pub file: PathBuf,

    /// Input is a snapshot document
    #[arg(long)]
    pub snapshot: bool,
}

/// Execute validate
pub fn execute(args: ValidateArgs, codec: &Codec, format: OutputFormat) -> CliResult<()> {
    let decoded = super::load(&args.file, args.snapshot, codec)?;
    let result = SymmetryValidator::validate(&decoded.graph);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => {
            if result.valid {
                print_success(&format!(
                    "{} persons, {} relations, all symmetric",
                    decoded.graph.len(),
                    result.checks_performed
                ));
            } else {
                for error in &result.errors {
                    print_error(error);
                }
            }
        }
    }

    if result.valid {
        Ok(())
    } else {
        Err(CliError::ValidationFailed(result.errors.len()))
    }
}
