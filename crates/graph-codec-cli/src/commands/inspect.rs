//! Print the persons of a record file

use std::path::PathBuf;

use clap::Args;
use graph_codec::{format_timestamp, Codec, Graph, Person};
use serde::Serialize;
use tabled::Tabled;

use crate::error::CliResult;
use crate::output::{print_output, OutputFormat};

/// Inspect arguments
#[derive(Args)]
pub struct InspectArgs {
    /// Record file (`-` for stdin)
    pub file: PathBuf,

    /// Input is a snapshot document (`root_id` + `persons`)
    #[arg(long)]
    pub snapshot: bool,
}

/// One row per decoded person
#[derive(Serialize, Tabled)]
pub struct PersonRow {
    #[tabled(rename = "Root")]
    pub root: bool,
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Born")]
    pub born_in: String,
    #[tabled(rename = "Relations")]
    pub relations: String,
}

fn row(graph: &Graph, person: &Person, root: bool) -> PersonRow {
    let names: Vec<&str> = person
        .relations()
        .iter()
        .map(|id| graph.get(id).map(Person::name).unwrap_or("?"))
        .collect();
    PersonRow {
        root,
        id: person.id().to_string(),
        name: person.name().to_string(),
        born_in: format_timestamp(&person.born_in()),
        relations: names.join(", "),
    }
}

/// Execute inspect
pub fn execute(args: InspectArgs, codec: &Codec, format: OutputFormat) -> CliResult<()> {
    let decoded = super::load(&args.file, args.snapshot, codec)?;
    let rows: Vec<PersonRow> = decoded
        .graph
        .iter()
        .map(|p| row(&decoded.graph, p, *p.id() == decoded.root))
        .collect();
    print_output(rows, format)
}
