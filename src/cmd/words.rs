use super::Output;
use clap::Args;
use lexiforge::chart::ChartRenderer;
use lexiforge::config::FrequencyOptions;
use lexiforge::error::LxResult;
use lexiforge::TextCorpus;

#[derive(Args, Debug, Clone)]
pub struct WordsArgs {
    #[command(flatten)]
    pub options: FrequencyOptions,
}

pub fn run<R: ChartRenderer>(
    args: WordsArgs,
    corpus: &TextCorpus,
    renderer: R,
    output: &Output,
) -> LxResult<()> {
    println!("\n📖 === WORD FREQUENCY === 📖");
    let table = corpus.word_frequency(args.options, renderer)?;
    output.emit(table)
}
