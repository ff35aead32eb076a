//! Renders a sample reclassified balance sheet from a canned model response,
//! without calling any generation service.
//!
//! ```sh
//! cargo run --example render_sample
//! ```

use balance_reclassifier::{extract_json, normalize, render_to_file, write_csv_file};

fn main() -> anyhow::Result<()> {
    let response = r#"Here is the reclassified balance sheet:
{
  "ATTIVO": {
    "B) Immobilizzazioni immateriali": [
      {"label": "Software", "amount": 3041.40},
      {"label": "Marchi e brevetti", "amount": 1850.00}
    ],
    "C) Attivo circolante": [
      {"label": "Crediti verso clienti", "amount": 12400.75},
      {"label": "Disponibilita liquide", "amount": 5320.10}
    ]
  },
  "PASSIVO": {
    "A) Patrimonio netto": [
      {"label": "Capitale sociale", "amount": 15000.00}
    ],
    "D) Debiti": [
      {"label": "Debiti verso fornitori", "amount": 7612.25}
    ]
  }
}"#;

    let doc = normalize(&extract_json(response)?)?;

    let totals = doc.totals();
    println!("ATTIVO total:  {:.2}", totals.assets);
    println!("PASSIVO total: {:.2}", totals.liabilities_equity);

    render_to_file(&doc, "reclassified_output.pdf")?;
    write_csv_file(&doc, "reclassified_output.csv")?;
    println!("Wrote reclassified_output.pdf and reclassified_output.csv");
    Ok(())
}
