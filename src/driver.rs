//! Batch reconciliation.
//!
//! Every entity is reconciled exactly once, by exactly one rayon task holding
//! the only `&mut` to it. Diagnostics are collected per entity and returned
//! in job order, so a parallel run reports the same list as a sequential one.

use quill_common::{AnalyzerOptions, Diagnostic, SourceSpan};
use quill_docblock::Comment;
use quill_signature::{DiagnosticCollector, FunctionLike, reconcile};
use rayon::prelude::*;
use tracing::{debug, info};

/// One entity waiting for reconciliation, with its declaration site and
/// parsed doc comment.
#[derive(Clone, Debug)]
pub struct ReconcileJob<E> {
    pub entity: E,
    pub site: SourceSpan,
    pub comment: Comment,
}

impl<E> ReconcileJob<E> {
    pub fn new(entity: E, site: SourceSpan, comment: Comment) -> Self {
        ReconcileJob {
            entity,
            site,
            comment,
        }
    }
}

/// Reconcile a single entity and return the diagnostics the options allow.
pub fn reconcile_entity<E>(
    entity: &mut E,
    site: &SourceSpan,
    comment: &Comment,
    options: &AnalyzerOptions,
) -> Vec<Diagnostic>
where
    E: FunctionLike + ?Sized,
{
    let mut collector = DiagnosticCollector::new(options);
    reconcile(entity, site, comment, &mut collector);
    let diagnostics = collector.take_diagnostics();
    if !diagnostics.is_empty() {
        debug!(
            entity = %entity.display_name(),
            count = diagnostics.len(),
            "reconciliation reported diagnostics"
        );
    }
    diagnostics
}

/// Reconcile every job across rayon's pool.
///
/// Diagnostics are ordered by job index, then by emission order within a job.
pub fn reconcile_all<E>(jobs: &mut [ReconcileJob<E>], options: &AnalyzerOptions) -> Vec<Diagnostic>
where
    E: FunctionLike + Send,
{
    let per_job: Vec<Vec<Diagnostic>> = jobs
        .par_iter_mut()
        .map(|job| reconcile_entity(&mut job.entity, &job.site, &job.comment, options))
        .collect();

    let diagnostics: Vec<Diagnostic> = per_job.into_iter().flatten().collect();
    info!(
        entities = jobs.len(),
        diagnostics = diagnostics.len(),
        "reconciliation finished"
    );
    diagnostics
}

#[cfg(test)]
#[path = "tests/driver_tests.rs"]
mod tests;
