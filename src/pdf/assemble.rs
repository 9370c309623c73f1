use lopdf::{Document, Object, ObjectId};

use crate::pdf::error::AssemblyError;

/// Concatenate the pages of several PDF buffers, in input order, into one
/// output buffer.
///
/// Every input must load; the first unreadable input aborts the whole
/// merge and no partial output is produced. A single input is returned
/// unchanged once it has been validated as loadable.
pub fn merge_documents(inputs: &[Vec<u8>]) -> Result<Vec<u8>, AssemblyError> {
    if inputs.is_empty() {
        return Err(AssemblyError::NoInputs);
    }

    let mut sources = Vec::with_capacity(inputs.len());
    for (index, bytes) in inputs.iter().enumerate() {
        let doc = Document::load_mem(bytes)
            .map_err(|source| AssemblyError::MergeLoad { index, source })?;
        sources.push(doc);
    }

    if sources.len() == 1 {
        return Ok(inputs[0].clone());
    }

    let mut merged = sources.remove(0);
    let mut page_refs = ordered_page_refs(&merged);

    for source in sources {
        let offset = merged.max_id;
        let source_pages = ordered_page_refs(&source);
        let source_max_id = source.max_id;

        // Import every object under a shifted id so nothing collides with
        // what the output already holds.
        for (id, object) in source.objects {
            merged
                .objects
                .insert((id.0 + offset, id.1), shift_refs(object, offset));
        }

        for (num, id) in source_pages {
            page_refs.push((num, (id.0 + offset, id.1)));
        }

        merged.max_id += source_max_id;
    }

    rebuild_page_tree(&mut merged, &page_refs)?;
    merged.compress();

    serialize(merged, "merge")
}

/// Extract the pages named by `selection` (1-based, ascending) from a PDF
/// buffer into a new buffer containing exactly those pages.
///
/// An empty selection is refused before any PDF parsing happens: the
/// range parser drops bad tokens quietly, but asking for nothing at all
/// is a user error that must surface.
pub fn split_document(bytes: &[u8], selection: &[u32]) -> Result<Vec<u8>, AssemblyError> {
    if selection.is_empty() {
        return Err(AssemblyError::EmptySelection);
    }

    let doc = Document::load_mem(bytes).map_err(AssemblyError::SplitLoad)?;
    let total = doc.get_pages().len() as u32;

    for &page in selection {
        if page == 0 || page > total {
            return Err(AssemblyError::PageOutOfRange { page, total });
        }
    }

    let mut output = doc.clone();
    let discard: Vec<u32> = (1..=total).filter(|p| !selection.contains(p)).collect();
    if !discard.is_empty() {
        output.delete_pages(&discard);
    }

    output.prune_objects();
    output.compress();

    serialize(output, "split")
}

/// Page object references keyed by 1-based page number, in page order.
fn ordered_page_refs(doc: &Document) -> Vec<(u32, ObjectId)> {
    let mut pages: Vec<_> = doc.get_pages().into_iter().collect();
    pages.sort_by_key(|(num, _)| *num);
    pages
}

/// Recursively renumber every object reference by `offset`.
fn shift_refs(object: Object, offset: u32) -> Object {
    match object {
        Object::Reference((num, gen)) => Object::Reference((num + offset, gen)),
        Object::Array(items) => {
            Object::Array(items.into_iter().map(|o| shift_refs(o, offset)).collect())
        }
        Object::Dictionary(mut dict) => {
            for (_, value) in dict.iter_mut() {
                *value = shift_refs(value.clone(), offset);
            }
            Object::Dictionary(dict)
        }
        Object::Stream(mut stream) => {
            for (_, value) in stream.dict.iter_mut() {
                *value = shift_refs(value.clone(), offset);
            }
            Object::Stream(stream)
        }
        other => other,
    }
}

/// Point the document's root Pages node at the merged page list and fix
/// each page's Parent reference.
fn rebuild_page_tree(
    doc: &mut Document,
    page_refs: &[(u32, ObjectId)],
) -> Result<(), AssemblyError> {
    let pages_id = doc
        .catalog()
        .and_then(|catalog| catalog.get(b"Pages"))
        .and_then(Object::as_reference)
        .map_err(|err| AssemblyError::PageTree(err.to_string()))?;

    let kids: Vec<Object> = page_refs
        .iter()
        .map(|&(_, id)| Object::Reference(id))
        .collect();

    match doc.objects.get_mut(&pages_id) {
        Some(Object::Dictionary(pages_dict)) => {
            pages_dict.set("Kids", Object::Array(kids));
            pages_dict.set("Count", Object::Integer(page_refs.len() as i64));
        }
        _ => {
            return Err(AssemblyError::PageTree(
                "root Pages node is not a dictionary".into(),
            ))
        }
    }

    // Imported pages still point at their old parent node.
    for &(_, page_id) in page_refs {
        if let Some(Object::Dictionary(page_dict)) = doc.objects.get_mut(&page_id) {
            page_dict.set("Parent", Object::Reference(pages_id));
        }
    }

    Ok(())
}

fn serialize(mut doc: Document, operation: &'static str) -> Result<Vec<u8>, AssemblyError> {
    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)
        .map_err(|source| AssemblyError::Serialize { operation, source })?;
    Ok(buffer)
}
