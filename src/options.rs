use clap::Args;

pub const DEFAULT_HEAP_KEYS: [i64; 10] = [10, 20, 30, 5, 7, 9, 11, 13, 15, 17];
pub const DEFAULT_LIST_VALUES: [i64; 9] = [9, 32, 52, 62, 3, 235, 351, 52, 11];

/// Options shared by every subcommand
#[derive(Debug, Args)]
pub struct CommonOptions {
    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonOptions {
    pub fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }
}

/// Options controlling the max-heap walkthrough
#[derive(Debug, Args)]
pub struct HeapOptions {
    /// Keys to insert, in order
    #[arg(short, long, value_delimiter = ',', allow_negative_numbers = true,
        default_values_t = DEFAULT_HEAP_KEYS)]
    pub keys: Vec<i64>,

    /// Number of times to extract the maximum once all keys are inserted
    #[arg(short, long, required = false, default_value = "5")]
    pub extractions: usize,

    /// Treat extracting from an empty heap as an error
    #[arg(long)]
    pub strict: bool,
}

/// Options controlling the linked list walkthrough
#[derive(Debug, Args)]
pub struct ListOptions {
    /// Values to prepend, in order
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true,
        default_values_t = DEFAULT_LIST_VALUES)]
    pub values: Vec<i64>,

    /// Values to delete every occurrence of
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true,
        default_values_t = [52, 500])]
    pub delete: Vec<i64>,

    /// Values to search for
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true,
        default_values_t = [235, 666])]
    pub search: Vec<i64>,
}

impl Default for HeapOptions {
    fn default() -> Self {
        HeapOptions {
            keys: DEFAULT_HEAP_KEYS.to_vec(),
            extractions: 5,
            strict: false,
        }
    }
}

impl Default for ListOptions {
    fn default() -> Self {
        ListOptions {
            values: DEFAULT_LIST_VALUES.to_vec(),
            delete: vec![52, 500],
            search: vec![235, 666],
        }
    }
}
