//! Pipeline stages for PDF text cleaning.
//!
//! Each submodule implements one transformation step and can be tested on
//! its own.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ extract ──▶ normalize ──▶ segment ──▶ compare ──▶ write
//! (path)    (pdfium)    (spelling,     (UAX #29)   (ratio)     (.txt)
//!                        stopwords)
//! ```
//!
//! 1. [`input`]: check the path exists and starts with `%PDF`
//! 2. [`extract`]: pull the text layer of every page, in page order
//! 3. [`normalize`]: collapse whitespace, correct spelling via [`spelling`],
//!    drop stopwords
//! 4. [`segment`]: split into sentences and regroup three per paragraph
//! 5. [`compare`]: score the cleaned text against the raw extraction
//! 6. [`write`]: write the paragraph text to the output file

pub mod compare;
pub mod extract;
pub mod input;
pub mod normalize;
pub mod segment;
pub mod spelling;
pub mod write;
