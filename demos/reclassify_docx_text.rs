//! End-to-end reclassification of a balance sheet through the Groq API.
//!
//! Expects the source document to already be plain text (one line per
//! non-empty paragraph) and `GROQ_API_KEY` to be set:
//!
//! ```sh
//! GROQ_API_KEY=... cargo run --example reclassify_docx_text --features groq -- input.txt
//! ```

use balance_reclassifier::llm::GroqClient;
use balance_reclassifier::reclassify_to_pdf;

fn main() -> anyhow::Result<()> {
    let input = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: reclassify_docx_text <input.txt>"))?;
    let text = std::fs::read_to_string(&input)?;

    let generator = GroqClient::from_env()?;
    reclassify_to_pdf(&generator, &text, "reclassified_output.pdf")?;
    println!("Wrote reclassified_output.pdf");
    Ok(())
}
