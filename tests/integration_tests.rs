use balance_reclassifier::*;

struct CannedGenerator(String);

impl TextGenerator for CannedGenerator {
    fn classify(&self, _balance_sheet_text: &str) -> Result<String> {
        Ok(self.0.clone())
    }
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

#[test]
fn test_full_pipeline_from_wrapped_response_to_pdf() -> anyhow::Result<()> {
    let response = r#"Here is the reclassified balance sheet you asked for:
{
  "ATTIVO": {
    "B) Immobilizzazioni immateriali": [
      {"label": "Software", "amount": 3041.40},
      {"label": "Brevetti", "amount": 1200.00}
    ],
    "C) Attivo circolante": [
      {"label": "Crediti verso clienti", "amount": 8500.25}
    ]
  },
  "PASSIVO": {
    "A) Patrimonio netto": [
      {"label": "Capitale sociale", "amount": 10000.00}
    ],
    "D) Debiti": [
      {"label": "Debiti verso banche", "amount": 2741.65}
    ]
  }
}
Let me know if you need anything else."#;

    let generator = CannedGenerator(response.to_string());
    let doc = reclassify(&generator, "raw balance sheet text")?;

    let totals = doc.totals();
    assert!((totals.assets - 12741.65).abs() < 1e-9);
    assert!((totals.liabilities_equity - 12741.65).abs() < 1e-9);

    let bytes = render(&doc)?;
    assert!(bytes.starts_with(b"%PDF"));
    assert!(contains(&bytes, b"/Count 2"));
    assert!(contains(&bytes, b"3,041.40"));
    assert!(contains(&bytes, b"12,741.65"));
    assert!(contains(&bytes, b"TOTAL ATTIVO"));
    assert!(contains(&bytes, b"TOTAL PASSIVO"));
    Ok(())
}

#[test]
fn test_section_totals_match_subtotal_sums() -> anyhow::Result<()> {
    let response = r#"{
      "ATTIVO": {
        "A": [{"label": "a1", "amount": 0.1}, {"label": "a2", "amount": 0.2}],
        "B": [{"label": "b1", "amount": 100.0}, {"label": "b2", "amount": -40.0}]
      }
    }"#;
    let generator = CannedGenerator(response.to_string());
    let doc = reclassify(&generator, "text")?;

    let assets = doc.assets.as_ref().unwrap();
    let by_subtotals: f64 = assets.categories.iter().map(|c| c.subtotal()).sum();
    assert_eq!(assets.total(), by_subtotals);
    Ok(())
}

#[test]
fn test_empty_passivo_scenario() -> anyhow::Result<()> {
    let generator =
        CannedGenerator("Here is the result: {\"PASSIVO\": {}}\nThanks".to_string());
    let doc = reclassify(&generator, "text")?;

    assert!(doc.assets.is_none());
    let section = doc.liabilities_equity.as_ref().unwrap();
    assert!(section.categories.is_empty());
    assert_eq!(section.total(), 0.0);

    let bytes = render(&doc)?;
    assert!(contains(&bytes, b"PASSIVO"));
    assert!(contains(&bytes, b"0.00"));
    Ok(())
}

#[test]
fn test_unbalanced_braces_abort_before_any_document() {
    let generator = CannedGenerator("{\"ATTIVO\": { \"B)\": [".to_string());
    let err = reclassify(&generator, "text").unwrap_err();
    assert!(matches!(err, ReclassifyError::Extraction(_)));
}

#[test]
fn test_rendering_twice_is_byte_identical() -> anyhow::Result<()> {
    let generator = CannedGenerator(
        r#"{"ATTIVO": {"B) Software": [{"label": "License", "amount": 3041.40}]}}"#.to_string(),
    );
    let doc = reclassify(&generator, "text")?;
    assert_eq!(render(&doc)?, render(&doc)?);
    Ok(())
}

#[test]
fn test_pdf_written_to_disk_and_csv_export() -> anyhow::Result<()> {
    let generator = CannedGenerator(
        r#"{"ATTIVO": {"B) Software": [{"label": "License", "amount": 3041.40}]}}"#.to_string(),
    );
    let doc = reclassify(&generator, "text")?;

    let dir = std::env::temp_dir();
    let pdf_path = dir.join("balance_reclassifier_it_test.pdf");
    let csv_path = dir.join("balance_reclassifier_it_test.csv");

    reclassify_to_pdf(&generator, "text", &pdf_path)?;
    let written = std::fs::read(&pdf_path)?;
    assert!(written.starts_with(b"%PDF"));

    write_csv_file(&doc, &csv_path)?;
    let csv_text = std::fs::read_to_string(&csv_path)?;
    assert!(csv_text.contains("ATTIVO,B) Software,License,3041.40"));

    std::fs::remove_file(&pdf_path).ok();
    std::fs::remove_file(&csv_path).ok();
    Ok(())
}
