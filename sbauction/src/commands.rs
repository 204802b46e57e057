use super::IOArgs;
use clap::Subcommand;

mod resolve;
mod schema;

pub use resolve::resolve_auction;
pub use schema::SchemaKind;

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve an auction and report the allocation and payment
    Resolve {
        #[command(flatten)]
        io: IOArgs,
    },

    /// Print the JSON schema of an input or output document
    Schema {
        /// Which document to describe
        #[arg(value_enum, default_value = "input")]
        kind: SchemaKind,

        /// The output file ("-" implies stdout)
        #[arg(short, long, default_value = "-", value_parser = clap::value_parser!(super::Endpoint))]
        output: super::Endpoint,
    },
}
