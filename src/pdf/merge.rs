//! PDF merging functionality using lopdf

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use lopdf::{Dictionary, Document, Object, ObjectId};
use log::{debug, info};
use tempfile::Builder;

use crate::error::{Error, Result};

/// Page attributes a page may inherit from its ancestors in the page tree
const INHERITABLE_KEYS: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Options for merging PDFs
#[derive(Debug, Clone)]
pub struct MergeOptions {
    /// Input PDF file paths in the order they should be merged
    pub input_paths: Vec<PathBuf>,
    /// Output PDF file path
    pub output_path: PathBuf,
    /// Compress streams in the written document
    pub compress: bool,
}

impl MergeOptions {
    pub fn new(input_paths: Vec<PathBuf>, output_path: PathBuf) -> Self {
        Self {
            input_paths,
            output_path,
            compress: true,
        }
    }
}

/// Merge multiple PDF files into a single PDF, returning the page count.
///
/// Pages are appended in input order. The output is staged in a temporary
/// file next to `output_path` and renamed into place only once it has been
/// fully written, so a failure never leaves a partial file behind.
///
/// # Example
///
/// ```no_run
/// use pdf_merger::pdf::{MergeOptions, merge_pdfs};
/// use std::path::PathBuf;
///
/// let options = MergeOptions::new(
///     vec![PathBuf::from("first.pdf"), PathBuf::from("second.pdf")],
///     PathBuf::from("merged.pdf"),
/// );
///
/// let pages = merge_pdfs(&options).expect("Failed to merge");
/// println!("wrote {pages} pages");
/// ```
pub fn merge_pdfs(options: &MergeOptions) -> Result<usize> {
    if options.input_paths.is_empty() {
        return Err(Error::InsufficientFiles(0));
    }

    // Validate all input files exist
    for path in &options.input_paths {
        if !path.exists() {
            return Err(Error::FileNotFound(path.clone()));
        }
    }

    // Load all documents
    let mut documents: Vec<Document> = Vec::with_capacity(options.input_paths.len());
    for path in &options.input_paths {
        let doc = Document::load(path)?;

        if doc.get_pages().is_empty() {
            return Err(Error::EmptyPdf(path.clone()));
        }

        debug!("Loaded {} ({} pages)", path.display(), doc.get_pages().len());
        documents.push(doc);
    }

    let mut merged_doc = assemble(documents)?;
    let page_count = merged_doc.get_pages().len();

    if options.compress {
        merged_doc.compress();
    }
    save_atomically(&mut merged_doc, &options.output_path)?;

    info!(
        "Merged {} files ({} pages) into {}",
        options.input_paths.len(),
        page_count,
        options.output_path.display()
    );
    Ok(page_count)
}

/// Build one document holding every page of `documents`, in order.
fn assemble(documents: Vec<Document>) -> Result<Document> {
    let mut max_id = 1;
    let mut page_ids: Vec<ObjectId> = Vec::new();
    let mut objects: BTreeMap<ObjectId, Object> = BTreeMap::new();

    for mut doc in documents {
        // Pages are about to lose their parents, so pull inherited
        // attributes down first
        let pages: Vec<ObjectId> = doc.get_pages().into_values().collect();
        for &page_id in &pages {
            inherit_page_attributes(&mut doc, page_id)?;
        }

        // Renumber objects in this document to avoid conflicts
        doc.renumber_objects_with(max_id);
        max_id = doc.max_id + 1;

        // get_pages() is keyed by page number, so values come out in order
        page_ids.extend(doc.get_pages().into_values());

        // Old catalogs and page tree nodes are replaced below
        objects.extend(
            doc.objects
                .into_iter()
                .filter(|(_, object)| !is_tree_node(object)),
        );
    }

    let mut merged_doc = Document::with_version("1.5");
    merged_doc.objects.extend(objects);

    // new_object_id() must hand out IDs above everything just inserted
    merged_doc.max_id = max_id - 1;

    let pages_id = merged_doc.new_object_id();
    let kids: Vec<Object> = page_ids.iter().map(|&id| Object::Reference(id)).collect();

    let mut pages_object = Dictionary::new();
    pages_object.set("Type", Object::Name(b"Pages".to_vec()));
    pages_object.set("Count", Object::Integer(page_ids.len() as i64));
    pages_object.set("Kids", Object::Array(kids));

    let catalog_id = merged_doc.new_object_id();
    let mut catalog = Dictionary::new();
    catalog.set("Type", Object::Name(b"Catalog".to_vec()));
    catalog.set("Pages", Object::Reference(pages_id));

    merged_doc.objects.insert(catalog_id, Object::Dictionary(catalog));
    merged_doc.objects.insert(pages_id, Object::Dictionary(pages_object));
    merged_doc.trailer.set("Root", Object::Reference(catalog_id));

    for &page_id in &page_ids {
        if let Ok(Object::Dictionary(dict)) = merged_doc.get_object_mut(page_id) {
            dict.set("Parent", Object::Reference(pages_id));
        }
    }

    Ok(merged_doc)
}

/// Copy inheritable attributes from the page's ancestors onto the page
/// itself, nearest ancestor first.
fn inherit_page_attributes(doc: &mut Document, page_id: ObjectId) -> Result<()> {
    let mut inherited: Vec<(&[u8], Object)> = Vec::new();
    {
        let page = doc.get_dictionary(page_id)?;
        let mut missing: Vec<&[u8]> = INHERITABLE_KEYS
            .iter()
            .copied()
            .filter(|key| !page.has(key))
            .collect();

        let mut parent = parent_of(page);
        // Bounded walk in case of a cyclic Parent chain
        let mut depth = 0;
        while let Some(parent_id) = parent {
            if missing.is_empty() || depth > 64 {
                break;
            }
            let Ok(node) = doc.get_dictionary(parent_id) else {
                break;
            };
            missing.retain(|key| match node.get(key) {
                Ok(value) => {
                    inherited.push((*key, value.clone()));
                    false
                }
                Err(_) => true,
            });
            parent = parent_of(node);
            depth += 1;
        }
    }

    if inherited.is_empty() {
        return Ok(());
    }

    let page = doc.get_dictionary_mut(page_id)?;
    for (key, value) in inherited {
        page.set(key.to_vec(), value);
    }
    Ok(())
}

fn parent_of(node: &Dictionary) -> Option<ObjectId> {
    match node.get(b"Parent") {
        Ok(Object::Reference(id)) => Some(*id),
        _ => None,
    }
}

/// True for `/Catalog` and `/Pages` dictionaries
fn is_tree_node(object: &Object) -> bool {
    match object {
        Object::Dictionary(dict) => matches!(
            dict.get(b"Type"),
            Ok(Object::Name(name)) if name == b"Catalog" || name == b"Pages"
        ),
        _ => false,
    }
}

/// Write `doc` to a temporary file in the destination directory, then
/// rename it over `output`.
///
/// The result gets the permissions of the file it replaces, or the ones a
/// plain create would give (0666 less the umask) when there was none.
fn save_atomically(doc: &mut Document, output: &Path) -> Result<()> {
    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let replaced = std::fs::metadata(output).ok().map(|m| m.permissions());

    let mut builder = Builder::new();
    builder.prefix(".pdf-merger-");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // The mode is applied at open(2), so the umask still masks it
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }

    let mut staged = builder.tempfile_in(dir)?;
    doc.save_to(staged.as_file_mut())?;
    if let Some(permissions) = replaced {
        staged.as_file().set_permissions(permissions)?;
    }
    staged.as_file().sync_all()?;
    staged.persist(output).map_err(|e| Error::Io(e.error))?;

    Ok(())
}
