//! Flat tabular export of a reclassified document.
//!
//! One row per line item, in document order: section, category, label,
//! amount. Handy for loading the reclassification into a spreadsheet next
//! to the PDF report.

use crate::error::Result;
use crate::schema::{BalanceSheet, SectionKind};
use std::io::Write;
use std::path::Path;

fn section_name(kind: SectionKind) -> &'static str {
    match kind {
        SectionKind::Assets => "ATTIVO",
        SectionKind::LiabilitiesEquity => "PASSIVO",
    }
}

pub fn write_csv<W: Write>(doc: &BalanceSheet, destination: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(destination);
    writer.write_record(["section", "subcategory", "label", "amount"])?;

    for section in doc.sections() {
        for category in &section.categories {
            for item in &category.items {
                let amount = format!("{:.2}", item.amount);
                writer.write_record([
                    section_name(section.kind),
                    category.name.as_str(),
                    item.label.as_str(),
                    amount.as_str(),
                ])?;
            }
        }
    }

    writer.flush()?;
    Ok(())
}

pub fn write_csv_file(doc: &BalanceSheet, path: impl AsRef<Path>) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv(doc, file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Category, LineItem, Section};

    #[test]
    fn test_csv_rows_follow_document_order() {
        let doc = BalanceSheet {
            assets: Some(Section {
                kind: SectionKind::Assets,
                categories: vec![Category {
                    name: "B) Software".to_string(),
                    items: vec![LineItem {
                        label: "License".to_string(),
                        amount: 3041.4,
                    }],
                }],
            }),
            liabilities_equity: Some(Section {
                kind: SectionKind::LiabilitiesEquity,
                categories: vec![Category {
                    name: "D) Debiti".to_string(),
                    items: vec![LineItem {
                        label: "Bank loan".to_string(),
                        amount: 1500.0,
                    }],
                }],
            }),
        };

        let mut out = Vec::new();
        write_csv(&doc, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "section,subcategory,label,amount");
        assert_eq!(lines[1], "ATTIVO,B) Software,License,3041.40");
        assert_eq!(lines[2], "PASSIVO,D) Debiti,Bank loan,1500.00");
    }
}
