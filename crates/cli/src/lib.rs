mod list;
mod schema;
mod show;
mod view;

use clap::{Parser, Subcommand};
use kindscope_core::KindFilter;

#[derive(Parser)]
#[command(
    name = "kindscope",
    version,
    about = "Inspect the node kind taxonomy of the code graph",
    long_about = "Kindscope prints the closed set of node kinds and subkinds used to label \
                  nodes in the code graph, in the exact string form graph facts carry them."
)]
pub struct Cli {
    /// Mirror log output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List node kinds
    List {
        /// Only kinds whose primary kind equals KIND (e.g. "variable")
        #[arg(long, value_name = "KIND")]
        kind: Option<String>,
        /// Only kinds that carry a subkind
        #[arg(long)]
        sub_only: bool,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show a single node kind by identifier
    Show {
        /// Variant identifier, e.g. VARIABLE_PARAMETER
        #[arg(value_name = "IDENTIFIER")]
        identifier: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List distinct primary kinds with their display strings
    Kinds,
    /// Print the JSON Schema of `list --json` output
    Schema {
        /// Print the schema of a single serialized node kind instead
        #[arg(long)]
        kind_enum: bool,
    },
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let _guard = kindscope_core::logging::init_logging("cli", cli.verbose);

    let output = match cli.command {
        Commands::List {
            kind,
            sub_only,
            json,
        } => list::render(&KindFilter { kind, sub_only }, json)?,
        Commands::Show { identifier, json } => show::render(&identifier, json)?,
        Commands::Kinds => list::render_grouped(),
        Commands::Schema { kind_enum } => schema::render(kind_enum)?,
    };

    println!("{}", output.trim_end());
    Ok(())
}
