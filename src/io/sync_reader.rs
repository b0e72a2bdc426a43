//! Synchronous CSV reader with iterator interface
//!
//! Provides a streaming iterator over account or operation rows from a CSV
//! file. Delegates CSV format concerns to the csv_format module.
//!
//! # Iterator Interface
//!
//! SyncReader implements the Iterator trait, yielding `Result<T, String>`
//! for each CSV row:
//!
//! ```no_run
//! use moneybox_engine::io::sync_reader::OperationReader;
//! use std::path::Path;
//!
//! let reader = OperationReader::new(Path::new("operations.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(record) => println!("Processing operation: {:?}", record),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Individual row errors are yielded as Err variants in the iterator
//! - Line numbers are included in error messages for debugging

use crate::io::csv_format::{AccountCsvRecord, CsvRow, OperationCsvRecord};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::marker::PhantomData;
use std::path::Path;

/// Synchronous CSV reader over rows of type `R`
#[derive(Debug)]
pub struct SyncReader<R> {
    reader: csv::Reader<File>,
    line_num: usize,
    row: PhantomData<R>,
}

/// Reader over the accounts file
pub type AccountReader = SyncReader<AccountCsvRecord>;

/// Reader over the operations file
pub type OperationReader = SyncReader<OperationCsvRecord>;

impl<R: CsvRow> SyncReader<R> {
    /// Create a new SyncReader from a file path
    ///
    /// The CSV reader is configured to:
    /// - Trim whitespace from all fields
    /// - Allow flexible field counts (for optional trailing columns)
    /// - Use an 8KB buffer for efficient I/O
    ///
    /// # Errors
    ///
    /// Returns an error if the file could not be opened.
    pub fn new(path: &Path) -> Result<Self, String> {
        let file = File::open(path)
            .map_err(|e| format!("Failed to open file '{}': {}", path.display(), e))?;

        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(file);

        Ok(Self {
            reader,
            line_num: 0,
            row: PhantomData,
        })
    }
}

impl<R: CsvRow> Iterator for SyncReader<R> {
    type Item = Result<R::Output, String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<R>();

        let result = deserializer.next()?;
        self.line_num += 1;

        // Line numbers are offset by one for the header row
        match result {
            Ok(row) => Some(
                row.convert()
                    .map_err(|e| format!("Line {}: {}", self.line_num + 1, e)),
            ),
            Err(e) => Some(Err(format!(
                "Line {}: CSV parse error: {}",
                self.line_num + 1,
                e
            ))),
        }
    }
}
