use clap::{Parser, Subcommand};
use heapling::{
    demo::{heap_demo, list_demo, sort_keys},
    options::{CommonOptions, HeapOptions, ListOptions},
};

/// Classic data structure walkthroughs
#[derive(Debug, Parser)]
#[command(name = "heapling")]
#[command(about = "Demonstrate a binary max-heap and a singly linked list.", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Insert keys into a max-heap, then extract the maximum repeatedly
    Heap {
        #[command(flatten)]
        options: HeapOptions,

        #[command(flatten)]
        common: CommonOptions,
    },

    /// Sort keys into non-increasing order using the max-heap
    #[command(arg_required_else_help = true)]
    Sort {
        /// Keys to sort
        #[arg(num_args(1..), allow_negative_numbers = true)]
        keys: Vec<i64>,

        #[command(flatten)]
        common: CommonOptions,
    },

    /// Walk through the linked list operations
    List {
        #[command(flatten)]
        options: ListOptions,

        #[command(flatten)]
        common: CommonOptions,
    },
}

impl Commands {
    fn common(&self) -> &CommonOptions {
        match self {
            Commands::Heap { common, .. } => common,
            Commands::Sort { common, .. } => common,
            Commands::List { common, .. } => common,
        }
    }
}

fn main() -> std::io::Result<()> {
    let cli = Cli::parse();

    env_logger::builder()
        .filter_level(cli.command.common().log_level())
        .init();

    match cli.command {
        Commands::Heap { options, .. } => {
            let extracted = heap_demo(&options)?;
            let missing = extracted.iter().filter(|x| x.is_none()).count();
            if missing > 0 {
                log::info!("{} extractions found the heap empty", missing);
            }
        }
        Commands::Sort { keys, .. } => {
            let stdout = std::io::stdout();
            sort_keys(&keys, &mut stdout.lock())?;
        }
        Commands::List { options, .. } => {
            let stdout = std::io::stdout();
            list_demo(&options, &mut stdout.lock())?;
        }
    }
    Ok(())
}
