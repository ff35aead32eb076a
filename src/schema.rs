use serde::{Deserialize, Serialize};

/// One reclassified balance-sheet line. Created during normalization and
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub label: String,
    pub amount: f64,
}

/// A named group of line items, e.g. "B) Immobilizzazioni immateriali".
/// Its subtotal is derived on read, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub items: Vec<LineItem>,
}

/// The two top-level sections of the Article 2424 layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionKind {
    Assets,
    LiabilitiesEquity,
}

impl SectionKind {
    /// Matches a top-level key from the model response, tolerating case and
    /// the common Italian/English/French/Spanish labels the upstream source
    /// may localize to. Unrecognized keys return `None` and are ignored.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_uppercase().as_str() {
            "ATTIVO" | "ATTIVITA" | "ATTIVITÀ" | "ASSETS" | "ACTIF" | "ACTIVO" => {
                Some(SectionKind::Assets)
            }
            "PASSIVO" | "PASSIVITA" | "PASSIVITÀ" | "LIABILITIES" | "LIABILITIES_EQUITY"
            | "LIABILITIES AND EQUITY" | "LIABILITIES & EQUITY" | "PASSIF" | "PASIVO" => {
                Some(SectionKind::LiabilitiesEquity)
            }
            _ => None,
        }
    }
}

/// One section of the document: an ordered list of categories. Ordering is
/// the display order and is preserved verbatim from the normalized input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub kind: SectionKind,
    pub categories: Vec<Category>,
}

/// The validated two-section balance-sheet document. Each section is present
/// only if its key appeared in the input; a present section may be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheet {
    pub assets: Option<Section>,
    pub liabilities_equity: Option<Section>,
}

impl BalanceSheet {
    /// The present sections in display order: assets first, then
    /// liabilities & equity.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.assets.iter().chain(self.liabilities_equity.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_none() && self.liabilities_equity.is_none()
    }
}
