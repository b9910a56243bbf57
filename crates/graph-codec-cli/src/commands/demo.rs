//! Built-in demonstration graph

use chrono::{NaiveDate, NaiveDateTime};
use clap::Args;
use graph_codec::{Codec, Graph, PersonId};

use crate::error::{CliError, CliResult};
use crate::output::{print_info, OutputFormat};

/// Demo arguments
#[derive(Args)]
pub struct DemoArgs {
    /// Print only the encoded records of the cyclic graph
    #[arg(long)]
    pub records_only: bool,
}

fn date(y: i32, m: u32, d: u32) -> CliResult<NaiveDateTime> {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .ok_or_else(|| CliError::InvalidInput(format!("bad date {}-{}-{}", y, m, d)))
}

fn friend_count(graph: &Graph, id: &PersonId) -> usize {
    graph.relations_of(id).map(|r| r.len()).unwrap_or(0)
}

/// Execute the demo: Ivan and Petr, then Anna with a cycle back to Ivan.
pub fn execute(args: DemoArgs, codec: &Codec, format: OutputFormat) -> CliResult<()> {
    let mut graph = Graph::new();
    let ivan = graph.add("Ivan", date(2020, 4, 12)?);
    let petr = graph.add("Petr", date(2021, 9, 27)?);
    graph.relate(&ivan, &petr)?;

    if !args.records_only {
        let encoded = codec.encode_to_bytes(&graph, &ivan)?;
        let recreated = codec.decode_from_bytes(&encoded)?;
        let root = recreated
            .root_person()
            .ok_or_else(|| CliError::InvalidInput("decoded graph has no root".into()))?;

        print_info("Two persons");
        println!("  Original:  Ivan, friends: {}", friend_count(&graph, &ivan));
        println!(
            "  Recreated: {}, friends: {}",
            root.name(),
            friend_count(&recreated.graph, &recreated.root)
        );
        if let Some(friend) = recreated.graph.find_by_name("Petr") {
            println!(
                "  Friend:    {}, knows Ivan: {}",
                friend.name(),
                friend.knows(root.id())
            );
        }
    }

    let anna = graph.add("Anna", date(2019, 3, 15)?);
    graph.relate(&ivan, &anna)?;
    graph.relate(&anna, &ivan)?;

    let encoded = codec.encode_to_bytes(&graph, &ivan)?;
    if args.records_only || matches!(format, OutputFormat::Json) {
        println!("{}", String::from_utf8_lossy(&encoded));
        return Ok(());
    }

    let recreated = codec.decode_from_bytes(&encoded)?;
    print_info("With a cycle (Anna <-> Ivan)");
    println!("{}", String::from_utf8_lossy(&encoded));
    for person in recreated.graph.iter() {
        println!(
            "  {} has {} friend(s)",
            person.name(),
            friend_count(&recreated.graph, person.id())
        );
    }
    Ok(())
}
