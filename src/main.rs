use clap::{Parser, Subcommand, ValueEnum};
use lexiforge::chart::{ChartRenderer, JsonChartWriter, NoChart, TerminalChart};
use lexiforge::error::LxResult;
use lexiforge::TextCorpus;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// UTF-8 text file to analyse
    #[arg(global = true, short, long, default_value = "corpus.txt")]
    file: PathBuf,

    #[arg(global = true, long, value_enum, default_value_t = ChartTarget::Terminal)]
    chart: ChartTarget,

    /// Write charts here instead of stdout
    #[arg(global = true, long)]
    chart_out: Option<PathBuf>,

    /// Also export the frequency table as CSV
    #[arg(global = true, long)]
    csv: Option<PathBuf>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Lowercase letter frequencies
    Letters(cmd::letters::LettersArgs),
    /// Top 40 space-separated words
    Words(cmd::words::WordsArgs),
    /// Top 20 k-word sequences
    Kgrams(cmd::kgrams::KgramArgs),
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum ChartTarget {
    Terminal,
    Json,
    None,
}

fn chart_renderer(target: ChartTarget, out: Option<&PathBuf>) -> LxResult<Box<dyn ChartRenderer>> {
    let sink: Box<dyn io::Write> = match out {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout()),
    };
    Ok(match target {
        ChartTarget::Terminal => Box::new(TerminalChart::new(sink)),
        ChartTarget::Json => Box::new(JsonChartWriter::new(sink)),
        ChartTarget::None => Box::new(NoChart),
    })
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let corpus = TextCorpus::from_file(&cli.file).unwrap_or_else(|e| {
        error!("❌ {}", e);
        process::exit(1);
    });
    info!("{}", corpus.summary());

    let renderer = chart_renderer(cli.chart, cli.chart_out.as_ref()).unwrap_or_else(|e| {
        error!("❌ Cannot open chart output: {}", e);
        process::exit(1);
    });

    let output = cmd::Output { csv: cli.csv };
    let result = match cli.command {
        Commands::Letters(args) => cmd::letters::run(args, &corpus, renderer, &output),
        Commands::Words(args) => cmd::words::run(args, &corpus, renderer, &output),
        Commands::Kgrams(args) => cmd::kgrams::run(args, &corpus, renderer, &output),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
