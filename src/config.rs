use clap::{ArgAction, Args};

/// Switches shared by every counting operation.
#[derive(Args, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyOptions {
    /// Skip returning (and printing) the frequency table
    #[arg(long = "no-table", action = ArgAction::SetFalse)]
    pub table: bool,
    /// Skip the bar chart
    #[arg(long = "no-plot", action = ArgAction::SetFalse)]
    pub plot: bool,
}

impl Default for FrequencyOptions {
    fn default() -> Self {
        Self {
            table: true,
            plot: true,
        }
    }
}

impl FrequencyOptions {
    pub fn table_only() -> Self {
        Self {
            table: true,
            plot: false,
        }
    }
}

#[derive(Args, Debug, Clone, Copy, PartialEq, Eq)]
pub struct KgramOptions {
    /// Number of consecutive words per k-gram
    #[arg(short, long, default_value_t = 2)]
    pub k: usize,
    #[command(flatten)]
    pub output: FrequencyOptions,
}

impl Default for KgramOptions {
    fn default() -> Self {
        Self {
            k: 2,
            output: FrequencyOptions::default(),
        }
    }
}

impl KgramOptions {
    pub fn with_k(k: usize) -> Self {
        Self {
            k,
            ..Self::default()
        }
    }
}
