use super::Output;
use clap::Args;
use lexiforge::chart::ChartRenderer;
use lexiforge::config::FrequencyOptions;
use lexiforge::error::LxResult;
use lexiforge::TextCorpus;

#[derive(Args, Debug, Clone)]
pub struct LettersArgs {
    #[command(flatten)]
    pub options: FrequencyOptions,
}

pub fn run<R: ChartRenderer>(
    args: LettersArgs,
    corpus: &TextCorpus,
    renderer: R,
    output: &Output,
) -> LxResult<()> {
    println!("\n🔤 === LETTER FREQUENCY === 🔤");
    let table = corpus.letter_frequency(args.options, renderer)?;
    output.emit(table)
}
