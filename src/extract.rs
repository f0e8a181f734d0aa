use crate::error::{Error, Result};
use crate::page_range::expand_page_ranges;
use crate::pdf::PdfDocument;
use std::path::Path;

/// Extract the selected pages of `input` into a new PDF at `output`.
///
/// The output file is not touched until every page has been copied, so
/// a failed run leaves nothing behind.
pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q, pages: &str) -> Result<()> {
    let doc = PdfDocument::open(&input)?;

    let total_pages = doc.page_count();
    if total_pages == 0 {
        return Err(Error::EmptyPdf(doc.path));
    }

    let page_list = expand_page_ranges(pages, total_pages)?;
    if page_list.is_empty() {
        return Err(Error::NoPagesSelected);
    }

    let mut new_doc = doc.copy_pages(&page_list)?;
    PdfDocument::save(&mut new_doc, &output)?;

    println!(
        "Extracted {} page(s) to {}",
        page_list.len(),
        output.as_ref().display()
    );

    Ok(())
}
