//! Extract selected pages from a PDF into a new file.
//!
//! The selection syntax is a comma-separated list of page numbers and
//! inclusive ranges, e.g. "1,3-5,10". Pages land in the output in the
//! order the selection first names them; repeated pages and pages the
//! document does not have are dropped.

pub mod error;
pub mod extract;
pub mod page_range;
pub mod pdf;

pub use error::{Error, Result};
