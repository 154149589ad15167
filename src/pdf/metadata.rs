//! Page counting

use std::path::Path;

use lopdf::{Document, Object};

use crate::error::{Error, Result};

/// Read the Count field from the root Pages dictionary
fn count_from_catalog(doc: &Document) -> Option<usize> {
    let catalog = doc.catalog().ok()?;
    let pages_id = match catalog.get(b"Pages").ok()? {
        Object::Reference(id) => *id,
        _ => return None,
    };
    let count = doc.get_dictionary(pages_id).ok()?.get(b"Count").ok()?;
    count.as_i64().ok().and_then(|n| usize::try_from(n).ok())
}

/// Count the number of pages in a PDF file
///
/// Trusts the root Count field when present and falls back to walking the
/// page tree otherwise.
pub fn count_pages(path: &Path) -> Result<usize> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let doc = Document::load(path)?;
    let page_count = count_from_catalog(&doc).unwrap_or_else(|| doc.get_pages().len());

    if page_count == 0 {
        return Err(Error::EmptyPdf(path.to_path_buf()));
    }

    Ok(page_count)
}
