//! Batch operation processor
//!
//! Drives the engine from CSV files: seeds an in-memory repository from the
//! accounts file, streams the operations file through the engine one record
//! at a time, and writes the final account states.
//!
//! # Error Handling
//!
//! Fatal errors (a file cannot be opened, output cannot be written) abort
//! the run. Malformed rows and unsuccessful operations are logged and
//! skipped, and processing continues with the next row. An operation that
//! breaks a business rule is counted as rejected; anything else (unknown
//! account, storage, notification) is counted as failed.

use crate::config::LimitsConfig;
use crate::core::{InMemoryAccountRepository, MoneyEngine, NotificationService};
use crate::io::csv_format::write_accounts_csv;
use crate::io::sync_reader::{AccountReader, OperationReader};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

/// Counts of what happened during one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessingSummary {
    /// Distinct accounts in the repository; a repeated id replaces the earlier row
    pub accounts_loaded: usize,
    pub operations_applied: usize,
    /// Operations refused by a business rule before any write
    pub operations_rejected: usize,
    pub operations_failed: usize,
    pub rows_skipped: usize,
}

/// CSV-driven operation processor
#[derive(Debug, Clone)]
pub struct OperationProcessor<S> {
    limits: LimitsConfig,
    sink: S,
}

impl<S: NotificationService + Clone> OperationProcessor<S> {
    pub fn new(limits: LimitsConfig, sink: S) -> Self {
        Self { limits, sink }
    }

    /// Process operations against the given accounts and write the results
    ///
    /// 1. Loads every account row into a fresh in-memory repository
    /// 2. Streams operation rows through a MoneyEngine
    /// 3. Writes final account states to `output`
    ///
    /// # Errors
    ///
    /// Returns an error if either file cannot be opened or the output cannot
    /// be written.
    pub fn process(
        &self,
        accounts_path: &Path,
        operations_path: &Path,
        output: &mut dyn Write,
    ) -> Result<ProcessingSummary, String> {
        let mut summary = ProcessingSummary::default();
        let repository = Arc::new(InMemoryAccountRepository::new());

        for result in AccountReader::new(accounts_path)? {
            match result {
                Ok(account) => repository.insert(account),
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping account row");
                    summary.rows_skipped += 1;
                }
            }
        }

        summary.accounts_loaded = repository.len();
        if repository.is_empty() {
            tracing::warn!(path = %accounts_path.display(), "No accounts loaded");
        }

        let engine = MoneyEngine::with_repository(
            Arc::clone(&repository),
            self.sink.clone(),
            self.limits.clone(),
        );

        for result in OperationReader::new(operations_path)? {
            match result {
                Ok(record) => match engine.process(record.clone()) {
                    Ok(()) => summary.operations_applied += 1,
                    Err(e) if e.is_domain_error() => {
                        tracing::warn!(
                            kind = ?record.kind,
                            from = %record.from,
                            amount = %record.amount,
                            error = %e,
                            "Operation rejected"
                        );
                        summary.operations_rejected += 1;
                    }
                    Err(e) => {
                        tracing::error!(
                            kind = ?record.kind,
                            from = %record.from,
                            amount = %record.amount,
                            error = %e,
                            "Operation failed"
                        );
                        summary.operations_failed += 1;
                    }
                },
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping operation row");
                    summary.rows_skipped += 1;
                }
            }
        }

        write_accounts_csv(&repository.accounts(), output)?;

        tracing::info!(
            accounts = summary.accounts_loaded,
            applied = summary.operations_applied,
            rejected = summary.operations_rejected,
            failed = summary.operations_failed,
            skipped = summary.rows_skipped,
            "Processing finished"
        );

        Ok(summary)
    }
}
