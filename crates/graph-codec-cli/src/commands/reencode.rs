//! Decode then encode again, normalizing order and layout

use std::path::PathBuf;

use clap::Args;
use graph_codec::Codec;

use crate::error::CliResult;
use crate::output::print_success;

/// Reencode arguments
#[derive(Args)]
pub struct ReencodeArgs {
    /// Record file (`-` for stdin)
    pub file: PathBuf,

    /// Input and output are snapshot documents
    #[arg(long)]
    pub snapshot: bool,

    /// Write to this file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Execute reencode
pub fn execute(args: ReencodeArgs, codec: &Codec) -> CliResult<()> {
    let decoded = super::load(&args.file, args.snapshot, codec)?;
    let bytes = if args.snapshot {
        codec.snapshot_to_bytes(&decoded.graph, &decoded.root)?
    } else {
        codec.encode_to_bytes(&decoded.graph, &decoded.root)?
    };

    match args.out {
        Some(path) => {
            std::fs::write(&path, &bytes)?;
            print_success(&format!("Wrote {} bytes to {}", bytes.len(), path.display()));
        }
        None => println!("{}", String::from_utf8_lossy(&bytes)),
    }
    Ok(())
}
