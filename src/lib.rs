//! # Balance Reclassifier
//!
//! A library for converting unstructured balance-sheet text into the EU
//! Article 2424 (CEE) layout and rendering the result as a paginated PDF
//! report.
//!
//! ## Pipeline
//!
//! 1. **Extract** — isolate the JSON object embedded in the raw response of
//!    a text-generation service ([`extract::extract_json`])
//! 2. **Normalize** — coerce it into the validated two-section document
//!    model, defaulting malformed leaves instead of failing
//!    ([`normalize::normalize`])
//! 3. **Aggregate** — category subtotals and section totals are derived on
//!    read, never trusted from the input ([`aggregate`])
//! 4. **Render** — lay the document out as an A4 PDF with per-category
//!    tables, subtotal rows and section total banners ([`report::render`])
//!
//! The generation service is injected as a [`TextGenerator`], so the whole
//! pipeline runs against a fake in tests. A reqwest-backed Groq client is
//! available behind the `groq` feature.
//!
//! ## Example
//!
//! ```rust,ignore
//! use balance_reclassifier::{reclassify_to_pdf, llm::GroqClient};
//!
//! let generator = GroqClient::from_env()?;
//! reclassify_to_pdf(&generator, &document_text, "reclassified_output.pdf")?;
//! ```

pub mod aggregate;
pub mod error;
pub mod export;
pub mod extract;
pub mod normalize;
pub mod report;
pub mod schema;

#[cfg(feature = "groq")]
pub mod llm;

pub use aggregate::BalanceTotals;
pub use error::{ReclassifyError, Result};
pub use export::{write_csv, write_csv_file};
pub use extract::extract_json;
pub use normalize::normalize;
pub use report::{format_amount, render, render_to_file, render_to_writer};
pub use schema::{BalanceSheet, Category, LineItem, Section, SectionKind};

use log::{debug, info};
use std::path::Path;

/// Port for the external text-generation service. Implementations receive
/// the source balance-sheet text (non-empty lines, newline-joined) and
/// return one raw response believed to contain the reclassified JSON.
///
/// The response is treated as untrusted: all leniency and validation happens
/// in the extract/normalize stages, never in the generator.
pub trait TextGenerator {
    fn classify(&self, balance_sheet_text: &str) -> Result<String>;
}

/// Runs one conversion up to the validated document: generation, extraction,
/// normalization. Errors from any stage propagate unchanged; there is no
/// internal retry.
pub fn reclassify(generator: &dyn TextGenerator, source_text: &str) -> Result<BalanceSheet> {
    info!(
        "reclassifying balance sheet ({} chars of source text)",
        source_text.len()
    );

    let response = generator.classify(source_text)?;
    debug!("generation service returned {} chars", response.len());

    let raw = extract::extract_json(&response)?;
    let doc = normalize::normalize(&raw)?;

    let totals = doc.totals();
    debug!(
        "normalized document: assets total {:.2}, liabilities & equity total {:.2}",
        totals.assets, totals.liabilities_equity
    );
    Ok(doc)
}

/// Full conversion: source text in, PDF report at `path` out.
pub fn reclassify_to_pdf(
    generator: &dyn TextGenerator,
    source_text: &str,
    path: impl AsRef<Path>,
) -> Result<()> {
    let doc = reclassify(generator, source_text)?;
    report::render_to_file(&doc, path)
}
