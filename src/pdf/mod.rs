pub mod assemble;
pub mod document;
pub mod error;

pub use assemble::{merge_documents, split_document};
pub use document::{inspect_page_count, SourceDocument};
pub use error::AssemblyError;

#[cfg(test)]
pub mod test_pdf {
    use lopdf::content::{Content, Operation};
    use lopdf::{Dictionary, Document, Object, Stream, StringFormat};

    /// Build a flat in-memory PDF with `num_pages` pages, each carrying a
    /// single text operation "{prefix}-{page}" so tests can identify which
    /// source page ended up where.
    pub fn build_pdf(num_pages: u32, prefix: &str) -> Vec<u8> {
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();

        let mut kids = Vec::new();
        for page in 1..=num_pages {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new(
                        "Tf",
                        vec![Object::Name(b"F1".to_vec()), Object::Integer(12)],
                    ),
                    Operation::new("Td", vec![Object::Integer(72), Object::Integer(720)]),
                    Operation::new(
                        "Tj",
                        vec![Object::String(
                            format!("{prefix}-{page}").into_bytes(),
                            StringFormat::Literal,
                        )],
                    ),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id =
                doc.add_object(Stream::new(Dictionary::new(), content.encode().unwrap()));

            let page_id = doc.add_object(Dictionary::from_iter(vec![
                ("Type", Object::Name(b"Page".to_vec())),
                ("Parent", Object::Reference(pages_id)),
                (
                    "MediaBox",
                    Object::Array(vec![
                        Object::Integer(0),
                        Object::Integer(0),
                        Object::Integer(612),
                        Object::Integer(792),
                    ]),
                ),
                ("Contents", Object::Reference(content_id)),
            ]));
            kids.push(Object::Reference(page_id));
        }

        doc.objects.insert(
            pages_id,
            Object::Dictionary(Dictionary::from_iter(vec![
                ("Type", Object::Name(b"Pages".to_vec())),
                ("Count", Object::Integer(num_pages as i64)),
                ("Kids", Object::Array(kids)),
            ])),
        );

        let catalog_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(pages_id)),
        ]));
        doc.trailer.set("Root", Object::Reference(catalog_id));

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer).unwrap();
        buffer
    }

    /// The "Tj" text of each page, in page order.
    pub fn page_texts(bytes: &[u8]) -> Vec<String> {
        let doc = Document::load_mem(bytes).unwrap();
        let mut pages: Vec<_> = doc.get_pages().into_iter().collect();
        pages.sort_by_key(|(num, _)| *num);

        pages
            .into_iter()
            .map(|(_, page_id)| {
                let data = doc.get_page_content(page_id).unwrap();
                let content = Content::decode(&data).unwrap();
                content
                    .operations
                    .iter()
                    .find(|op| op.operator == "Tj")
                    .and_then(|op| op.operands.first())
                    .and_then(|obj| match obj {
                        Object::String(text, _) => {
                            Some(String::from_utf8_lossy(text).into_owned())
                        }
                        _ => None,
                    })
                    .unwrap_or_default()
            })
            .collect()
    }
}
