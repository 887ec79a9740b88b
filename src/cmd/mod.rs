pub mod kgrams;
pub mod letters;
pub mod words;

use crate::reports;
use lexiforge::error::LxResult;
use lexiforge::FrequencyTable;
use std::fs::File;
use std::path::PathBuf;
use tracing::info;

/// Where a returned table goes besides stdout.
#[derive(Debug, Default)]
pub struct Output {
    pub csv: Option<PathBuf>,
}

impl Output {
    pub fn emit(&self, table: Option<FrequencyTable>) -> LxResult<()> {
        let Some(table) = table else {
            return Ok(());
        };

        reports::print_frequency_table(&table);

        if let Some(path) = &self.csv {
            table.write_csv(File::create(path)?)?;
            info!("💾 Wrote {} rows to {}", table.len(), path.display());
        }
        Ok(())
    }
}
