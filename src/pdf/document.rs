use crate::error::{Error, Result};
use lopdf::{Dictionary, Document, Object, ObjectId};
use std::path::{Path, PathBuf};

/// Attributes a page may inherit from its ancestors in the page tree.
/// Reparenting a page into a new tree severs that chain, so these get
/// pinned onto the page dictionary itself before the move.
const INHERITABLE_PAGE_KEYS: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

pub struct PdfDocument {
    pub doc: Document,
    pub path: PathBuf,
}

impl PdfDocument {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let doc = Document::load(&path).map_err(|source| Error::OpenSource {
            path: path.clone(),
            source,
        })?;
        Ok(PdfDocument { doc, path })
    }

    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Copy the given 1-indexed pages, in the given order, into a new
    /// document.
    ///
    /// The new document gets a fresh catalog and page tree whose Kids
    /// array lists the pages in selection order. Everything the pages
    /// reference comes along unchanged; everything else is pruned.
    pub fn copy_pages(&self, pages: &[u32]) -> Result<Document> {
        let page_ids = self.doc.get_pages();
        let total = page_ids.len() as u32;

        let mut new_doc = Document::with_version(self.doc.version.clone());
        new_doc.objects = self.doc.objects.clone();
        new_doc.max_id = self.doc.max_id;

        let mut kids = Vec::with_capacity(pages.len());
        for &number in pages {
            match page_ids.get(&number) {
                Some(&id) => kids.push(id),
                None => return Err(Error::PageOutOfRange { page: number, total }),
            }
        }

        for &page_id in &kids {
            self.pin_inherited_attributes(&mut new_doc, page_id)?;
        }

        let pages_id = new_doc.new_object_id();
        for &page_id in &kids {
            new_doc
                .get_dictionary_mut(page_id)?
                .set("Parent", Object::Reference(pages_id));
        }

        let mut pages_dict = Dictionary::new();
        pages_dict.set("Type", Object::Name(b"Pages".to_vec()));
        pages_dict.set("Count", Object::Integer(kids.len() as i64));
        pages_dict.set(
            "Kids",
            Object::Array(kids.iter().map(|&id| Object::Reference(id)).collect()),
        );
        new_doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

        let catalog_id = new_doc.new_object_id();
        let mut catalog = Dictionary::new();
        catalog.set("Type", Object::Name(b"Catalog".to_vec()));
        catalog.set("Pages", Object::Reference(pages_id));
        new_doc.objects.insert(catalog_id, Object::Dictionary(catalog));
        new_doc.trailer.set("Root", Object::Reference(catalog_id));

        new_doc.prune_objects();
        new_doc.compress();
        Ok(new_doc)
    }

    /// Save to a file
    pub fn save<P: AsRef<Path>>(doc: &mut Document, path: P) -> Result<()> {
        let path = path.as_ref();
        doc.save(path).map_err(|source| Error::SaveOutput {
            path: path.to_path_buf(),
            source: lopdf::Error::IO(source),
        })?;
        Ok(())
    }

    /// Resolve attributes the page inherits through its parent chain in
    /// the source and write them onto the page's copy in `new_doc`.
    fn pin_inherited_attributes(&self, new_doc: &mut Document, page_id: ObjectId) -> Result<()> {
        for key in INHERITABLE_PAGE_KEYS {
            if new_doc.get_dictionary(page_id)?.has(key) {
                continue;
            }
            if let Some(value) = self.inherited_attribute(page_id, key) {
                new_doc.get_dictionary_mut(page_id)?.set(key, value);
            }
        }
        Ok(())
    }

    /// Look up `key` on the page itself or the nearest ancestor that
    /// defines it.
    fn inherited_attribute(&self, page_id: ObjectId, key: &[u8]) -> Option<Object> {
        let mut current = page_id;
        loop {
            let dict = match self.doc.get_object(current) {
                Ok(Object::Dictionary(dict)) => dict,
                _ => return None,
            };
            if let Ok(value) = dict.get(key) {
                return Some(value.clone());
            }
            match dict.get(b"Parent") {
                Ok(Object::Reference(parent)) => current = *parent,
                _ => return None,
            }
        }
    }
}
