use super::Output;
use clap::Args;
use lexiforge::chart::ChartRenderer;
use lexiforge::config::KgramOptions;
use lexiforge::error::LxResult;
use lexiforge::TextCorpus;
use tracing::warn;

#[derive(Args, Debug, Clone)]
pub struct KgramArgs {
    #[command(flatten)]
    pub options: KgramOptions,
}

pub fn run<R: ChartRenderer>(
    args: KgramArgs,
    corpus: &TextCorpus,
    renderer: R,
    output: &Output,
) -> LxResult<()> {
    if !args.options.output.plot {
        warn!("⚠️  --no-plot has no effect on kgrams; pass --chart none to skip the chart.");
    }
    println!("\n🔗 === {}-GRAM FREQUENCY === 🔗", args.options.k);
    let table = corpus.kgram_frequency(args.options, renderer)?;
    output.emit(table)
}
