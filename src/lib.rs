pub mod chart;
pub mod config;
pub mod corpus;
pub mod error;
pub mod frequency;

pub use corpus::TextCorpus;
pub use error::{LexiError, LxResult};
pub use frequency::{Analysis, FrequencyTable};
