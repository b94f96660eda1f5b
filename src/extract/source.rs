use std::path::Path;

use crate::core::{BelegError, Invoice};

use super::extract_invoice;

/// External collaborator that turns a document path into plain text.
///
/// Implementations return the newline-joined text of every page; file
/// formats, page handling, and OCR are entirely their concern. The
/// extraction core only ever sees the resulting string, possibly empty.
pub trait TextSource {
    /// Newline-joined text of every page of the document at `path`.
    fn document_text(&self, path: &Path) -> Result<String, BelegError>;
}

/// Extract a batch of documents, one record per readable document.
///
/// Every document is an independent call: when the source fails for a
/// path, that document is logged and skipped and the batch continues.
/// Skipped documents do not appear in the output, so the result can be
/// shorter than the input.
pub fn extract_all<S, I, P>(source: &S, paths: I) -> Vec<Invoice>
where
    S: TextSource + ?Sized,
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut invoices = Vec::new();
    for path in paths {
        let path = path.as_ref();
        match source.document_text(path) {
            Ok(text) => invoices.push(extract_invoice(&text)),
            Err(error) => {
                tracing::warn!("skipping document {}: {error}", path.display());
            }
        }
    }
    invoices
}
