use crate::chart::{ChartRenderer, ChartRequest};
use crate::config::{FrequencyOptions, KgramOptions};
use crate::error::{LexiError, LxResult};
use crate::frequency::{Analysis, FrequencyCounter, FrequencyTable};
use fnv::FnvHashSet;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

pub const TOP_WORDS: usize = 40;
pub const TOP_KGRAMS: usize = 20;

/// Text loaded once and analysed read-only.
#[derive(Debug, Clone)]
pub struct TextCorpus {
    text: String,
}

impl TextCorpus {
    /// Reads the whole file as UTF-8. The text is kept verbatim.
    pub fn from_file<P: AsRef<Path>>(path: P) -> LxResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LexiError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        info!("📂 Loaded corpus {} ({} bytes)", path.display(), text.len());
        Ok(Self { text })
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn summary(&self) -> CorpusSummary {
        let words: Vec<&str> = self.text.split_whitespace().collect();
        let distinct: FnvHashSet<&str> = words.iter().copied().collect();
        CorpusSummary {
            chars: self.text.chars().count(),
            lowercase_letters: self.text.chars().filter(char::is_ascii_lowercase).count(),
            words: words.len(),
            distinct_words: distinct.len(),
        }
    }

    /// Counts `a`..=`z`; every other character is ignored, uppercase included.
    pub fn letter_frequency<R: ChartRenderer>(
        &self,
        options: FrequencyOptions,
        mut renderer: R,
    ) -> LxResult<Option<FrequencyTable>> {
        let mut counter = FrequencyCounter::new();
        for c in self.text.chars().filter(char::is_ascii_lowercase) {
            counter.add_char(c);
        }
        let table = counter.most_common(Analysis::Letters, None);
        debug!("letter_frequency: {} distinct letters", table.len());

        if options.plot {
            renderer.render(&ChartRequest {
                title: "Letter Frequency".to_string(),
                x_label: "Letter".to_string(),
                y_label: "Count".to_string(),
                labels: table.keys().map(str::to_string).collect(),
                values: table.counts().collect(),
                rotate_labels: false,
                figure_size: (10.0, 6.0),
            })?;
        }

        Ok(options.table.then_some(table))
    }

    /// Splits on the single space character only, so runs of spaces produce
    /// empty tokens and punctuation or case stay part of the word.
    pub fn word_frequency<R: ChartRenderer>(
        &self,
        options: FrequencyOptions,
        mut renderer: R,
    ) -> LxResult<Option<FrequencyTable>> {
        let mut counter = FrequencyCounter::new();
        let mut tokens = 0usize;
        if !self.text.is_empty() {
            for word in self.text.split(' ') {
                counter.add(word);
                tokens += 1;
            }
        }
        debug!(
            "word_frequency: {} tokens, {} distinct",
            tokens,
            counter.len()
        );
        let table = counter.most_common(Analysis::Words, Some(TOP_WORDS));

        if options.plot {
            renderer.render(&ChartRequest {
                title: format!("Top {} Words and their Frequencies", TOP_WORDS),
                x_label: "Word".to_string(),
                y_label: "Count".to_string(),
                labels: table.keys().map(str::to_string).collect(),
                values: table.counts().collect(),
                rotate_labels: true,
                figure_size: (12.0, 4.0),
            })?;
        }

        Ok(options.table.then_some(table))
    }

    /// Counts every window of `k` whitespace-separated words. Windows starting
    /// near the end are shorter than `k` and are counted as keys of their own.
    ///
    /// The chart is always rendered; `options.output.plot` is not consulted.
    pub fn kgram_frequency<R: ChartRenderer>(
        &self,
        options: KgramOptions,
        mut renderer: R,
    ) -> LxResult<Option<FrequencyTable>> {
        let k = options.k;
        if k == 0 {
            return Err(LexiError::Validation(
                "k must be a positive integer".to_string(),
            ));
        }

        let words: Vec<&str> = self.text.split_whitespace().collect();
        let mut counter = FrequencyCounter::new();
        for i in 0..words.len() {
            let end = i.saturating_add(k).min(words.len());
            counter.add(&words[i..end].join(" "));
        }
        debug!(
            "kgram_frequency: k={}, {} windows, {} distinct",
            k,
            words.len(),
            counter.len()
        );
        let table = counter.most_common(Analysis::Kgrams, Some(TOP_KGRAMS));

        if !options.output.plot {
            debug!("kgram_frequency renders its chart even with plot disabled");
        }
        renderer.render(&ChartRequest {
            title: format!("Top {} {}-grams and their Frequencies", TOP_KGRAMS, k),
            x_label: "k-grams".to_string(),
            y_label: "Count".to_string(),
            labels: table.keys().map(str::to_string).collect(),
            values: table.counts().collect(),
            rotate_labels: true,
            figure_size: (12.0, 4.0),
        })?;

        Ok(options.output.table.then_some(table))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorpusSummary {
    pub chars: usize,
    pub lowercase_letters: usize,
    pub words: usize,
    pub distinct_words: usize,
}

impl fmt::Display for CorpusSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Corpus: {} chars, {} lowercase letters, {} words ({} distinct)",
            self.chars, self.lowercase_letters, self.words, self.distinct_words
        )
    }
}
