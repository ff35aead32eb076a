/// Builds the reclassification prompt for one balance sheet. The response
/// contract is the two-section JSON shape the extract/normalize stages
/// expect; everything else about the response is treated as untrusted.
pub fn classification_prompt(balance_sheet_text: &str) -> String {
    format!(
        r#"You are a financial assistant.
Input: an unstructured analytical balance sheet.
Task: Reclassify all items into the EU Article 2424 balance sheet schema (CEE).
Return the result as JSON with two main keys: ATTIVO and PASSIVO.
Each section should have subcategories (A, B, C, D, E) with items and amounts.
Example:
{{
  "ATTIVO": {{
    "B) Immobilizzazioni immateriali": [
      {{"label": "Software", "amount": 3041.40}}
    ],
    "B) Immobilizzazioni materiali": []
  }},
  "PASSIVO": {{
    "A) Patrimonio netto": [],
    "D) Debiti": []
  }}
}}
Balance sheet text:
{balance_sheet_text}
"#
    )
}
