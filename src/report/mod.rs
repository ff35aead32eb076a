//! Lays out a validated [`BalanceSheet`] as a paginated A4 PDF report.
//!
//! The layout is strictly sequential: document title, the assets section,
//! an unconditional page break, the liabilities & equity section. Each
//! section renders its categories in document order as two-column tables
//! with a subtotal row, followed by one total banner for the section.
//!
//! Rendering is deterministic: the same document always produces the same
//! bytes (no timestamps, no compression).

mod metrics;

use crate::aggregate::BalanceTotals;
use crate::error::{ReclassifyError, Result};
use crate::schema::{BalanceSheet, Section, SectionKind};
use log::{debug, info};
use metrics::{text_width, to_winansi};
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::io::Write;
use std::path::Path;

// A4 geometry in points, 2 cm margins all around.
const PAGE_W: f32 = 595.276;
const PAGE_H: f32 = 841.89;
const MARGIN: f32 = 56.693;

// Two-column table: 12 cm for labels, 4 cm for amounts.
const LABEL_COL_W: f32 = 340.157;
const AMOUNT_COL_W: f32 = 113.386;
const TABLE_W: f32 = LABEL_COL_W + AMOUNT_COL_W;
const CELL_PAD: f32 = 6.0;

const TITLE_SIZE: f32 = 16.0;
const SECTION_SIZE: f32 = 14.0;
const CATEGORY_SIZE: f32 = 11.0;
const HEADER_SIZE: f32 = 10.0;
const ITEM_SIZE: f32 = 9.0;
const BANNER_SIZE: f32 = 12.0;

const TITLE_BLOCK_H: f32 = 40.0;
const SECTION_HEADER_H: f32 = 26.0;
const CATEGORY_HEADER_H: f32 = 20.0;
const HEADER_ROW_H: f32 = 22.0;
const ITEM_ROW_H: f32 = 16.0;
const SUBTOTAL_ROW_H: f32 = 18.0;
const BANNER_H: f32 = 34.0;
const TABLE_GAP: f32 = 10.0;

type Rgb = (f32, f32, f32);

const NAVY: Rgb = (0.122, 0.278, 0.533); // #1f4788
const STEEL_BLUE: Rgb = (0.173, 0.373, 0.620); // #2c5f9e
const PALE_BLUE: Rgb = (0.851, 0.910, 0.961); // #d9e8f5
const BEIGE: Rgb = (0.961, 0.961, 0.863);
const WHITE_SMOKE: Rgb = (0.961, 0.961, 0.961);
const DARK_GREY: Rgb = (0.267, 0.267, 0.267); // #444444
const GRID_GREY: Rgb = (0.5, 0.5, 0.5);
const BLACK: Rgb = (0.0, 0.0, 0.0);

const FONT_REGULAR: Name = Name(b"F1");
const FONT_BOLD: Name = Name(b"F2");

/// Formats a currency amount with thousands separators and exactly two
/// decimals; negatives get a leading minus sign.
pub fn format_amount(amount: f64) -> String {
    let rounded = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((&rounded, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 4);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // Values that round to zero never show a sign.
    let negative = amount < 0.0 && rounded != "0.00";
    if negative {
        format!("-{}.{}", grouped, frac_part)
    } else {
        format!("{}.{}", grouped, frac_part)
    }
}

/// Renders the document into PDF bytes.
pub fn render(doc: &BalanceSheet) -> Result<Vec<u8>> {
    let BalanceTotals {
        assets,
        liabilities_equity,
    } = doc.totals();
    info!(
        "rendering balance-sheet report (assets total {}, liabilities & equity total {})",
        format_amount(assets),
        format_amount(liabilities_equity)
    );

    let mut composer = Composer::new();
    draw_title(&mut composer);

    if let Some(section) = &doc.assets {
        draw_section(&mut composer, section);
    }
    // The page break between the two sections is unconditional.
    composer.break_page();
    if let Some(section) = &doc.liabilities_equity {
        draw_section(&mut composer, section);
    }

    let pages = composer.finish();
    debug!("report spans {} pages", pages.len());
    Ok(assemble(pages))
}

/// Renders the document and writes it to `destination`.
pub fn render_to_writer<W: Write>(doc: &BalanceSheet, mut destination: W) -> Result<()> {
    let bytes = render(doc)?;
    destination
        .write_all(&bytes)
        .map_err(|e| ReclassifyError::Render(format!("cannot write report: {}", e)))
}

/// Renders the document to a file at `path`.
pub fn render_to_file(doc: &BalanceSheet, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let bytes = render(doc)?;
    std::fs::write(path, bytes).map_err(|e| {
        ReclassifyError::Render(format!("cannot write report to {}: {}", path.display(), e))
    })?;
    info!("report written to {}", path.display());
    Ok(())
}

fn section_heading(kind: SectionKind) -> &'static str {
    match kind {
        SectionKind::Assets => "ATTIVO (Assets)",
        SectionKind::LiabilitiesEquity => "PASSIVO (Liabilities & Equity)",
    }
}

fn banner_label(kind: SectionKind) -> &'static str {
    match kind {
        SectionKind::Assets => "TOTAL ATTIVO",
        SectionKind::LiabilitiesEquity => "TOTAL PASSIVO",
    }
}

fn draw_title(c: &mut Composer) {
    let baseline = c.y - TITLE_SIZE;
    c.text_center(
        MARGIN + TABLE_W / 2.0,
        baseline,
        "Reclassified Balance Sheet - Article 2424 CEE",
        TITLE_SIZE,
        true,
        NAVY,
    );
    c.advance(TITLE_BLOCK_H);
}

fn draw_section(c: &mut Composer, section: &Section) {
    c.ensure_room(SECTION_HEADER_H + BANNER_H);
    let baseline = c.y - SECTION_SIZE;
    c.text(
        MARGIN,
        baseline,
        section_heading(section.kind),
        SECTION_SIZE,
        true,
        STEEL_BLUE,
    );
    c.advance(SECTION_HEADER_H);

    // Categories with no items are suppressed in rendering. Categories whose
    // items merely sum to zero still render with a 0.00 subtotal row.
    for category in section.categories.iter().filter(|cat| !cat.items.is_empty()) {
        c.ensure_room(CATEGORY_HEADER_H + HEADER_ROW_H + ITEM_ROW_H);
        let baseline = c.y - CATEGORY_SIZE;
        c.text(MARGIN, baseline, &category.name, CATEGORY_SIZE, true, DARK_GREY);
        c.advance(CATEGORY_HEADER_H);

        draw_header_row(c);
        for item in &category.items {
            c.ensure_room(ITEM_ROW_H);
            draw_item_row(c, &item.label, item.amount);
        }
        c.ensure_room(SUBTOTAL_ROW_H);
        draw_subtotal_row(c, category.subtotal());
        c.advance(TABLE_GAP);
    }

    c.ensure_room(BANNER_H);
    draw_total_banner(c, banner_label(section.kind), section.total());
}

fn draw_header_row(c: &mut Composer) {
    let top = c.y;
    c.fill_rect(MARGIN, top - HEADER_ROW_H, TABLE_W, HEADER_ROW_H, STEEL_BLUE);
    c.stroke_rect(MARGIN, top - HEADER_ROW_H, LABEL_COL_W, HEADER_ROW_H, 0.5, GRID_GREY);
    c.stroke_rect(
        MARGIN + LABEL_COL_W,
        top - HEADER_ROW_H,
        AMOUNT_COL_W,
        HEADER_ROW_H,
        0.5,
        GRID_GREY,
    );

    let baseline = row_baseline(top, HEADER_ROW_H, HEADER_SIZE);
    c.text_center(
        MARGIN + LABEL_COL_W / 2.0,
        baseline,
        "Description",
        HEADER_SIZE,
        true,
        WHITE_SMOKE,
    );
    c.text_center(
        MARGIN + LABEL_COL_W + AMOUNT_COL_W / 2.0,
        baseline,
        "Amount (EUR)",
        HEADER_SIZE,
        true,
        WHITE_SMOKE,
    );
    c.advance(HEADER_ROW_H);
}

fn draw_item_row(c: &mut Composer, label: &str, amount: f64) {
    let top = c.y;
    c.fill_rect(MARGIN, top - ITEM_ROW_H, TABLE_W, ITEM_ROW_H, BEIGE);
    c.stroke_rect(MARGIN, top - ITEM_ROW_H, LABEL_COL_W, ITEM_ROW_H, 0.5, GRID_GREY);
    c.stroke_rect(
        MARGIN + LABEL_COL_W,
        top - ITEM_ROW_H,
        AMOUNT_COL_W,
        ITEM_ROW_H,
        0.5,
        GRID_GREY,
    );

    let baseline = row_baseline(top, ITEM_ROW_H, ITEM_SIZE);
    c.text(MARGIN + CELL_PAD, baseline, label, ITEM_SIZE, false, BLACK);
    c.text_right(
        MARGIN + TABLE_W - CELL_PAD,
        baseline,
        &format_amount(amount),
        ITEM_SIZE,
        false,
        BLACK,
    );
    c.advance(ITEM_ROW_H);
}

fn draw_subtotal_row(c: &mut Composer, subtotal: f64) {
    let top = c.y;
    c.fill_rect(MARGIN, top - SUBTOTAL_ROW_H, TABLE_W, SUBTOTAL_ROW_H, PALE_BLUE);
    c.hline(MARGIN, MARGIN + TABLE_W, top, 1.5, BLACK);

    let baseline = row_baseline(top, SUBTOTAL_ROW_H, HEADER_SIZE);
    c.text(MARGIN + CELL_PAD, baseline, "Subtotal", HEADER_SIZE, true, BLACK);
    c.text_right(
        MARGIN + TABLE_W - CELL_PAD,
        baseline,
        &format_amount(subtotal),
        HEADER_SIZE,
        true,
        BLACK,
    );
    c.advance(SUBTOTAL_ROW_H);
}

fn draw_total_banner(c: &mut Composer, label: &str, total: f64) {
    let top = c.y;
    c.fill_rect(MARGIN, top - BANNER_H, TABLE_W, BANNER_H, NAVY);

    let baseline = row_baseline(top, BANNER_H, BANNER_SIZE);
    c.text(MARGIN + CELL_PAD, baseline, label, BANNER_SIZE, true, WHITE_SMOKE);
    c.text_right(
        MARGIN + TABLE_W - CELL_PAD,
        baseline,
        &format_amount(total),
        BANNER_SIZE,
        true,
        WHITE_SMOKE,
    );
    c.advance(BANNER_H);
}

fn row_baseline(top: f32, row_h: f32, size: f32) -> f32 {
    top - row_h + (row_h - size) / 2.0
}

/// Accumulates page content streams top-down, breaking to a fresh page when
/// the cursor would cross the bottom margin.
struct Composer {
    finished: Vec<Content>,
    content: Content,
    y: f32,
}

impl Composer {
    fn new() -> Self {
        Self {
            finished: Vec::new(),
            content: Content::new(),
            y: PAGE_H - MARGIN,
        }
    }

    fn break_page(&mut self) {
        self.finished
            .push(std::mem::replace(&mut self.content, Content::new()));
        self.y = PAGE_H - MARGIN;
    }

    fn ensure_room(&mut self, height: f32) {
        if self.y - height < MARGIN {
            self.break_page();
        }
    }

    fn advance(&mut self, dy: f32) {
        self.y -= dy;
    }

    fn text(&mut self, x: f32, baseline: f32, text: &str, size: f32, bold: bool, color: Rgb) {
        let font = if bold { FONT_BOLD } else { FONT_REGULAR };
        let bytes = to_winansi(text);
        self.content
            .set_fill_rgb(color.0, color.1, color.2)
            .begin_text()
            .set_font(font, size)
            .next_line(x, baseline)
            .show(Str(&bytes))
            .end_text();
    }

    fn text_right(&mut self, right: f32, baseline: f32, text: &str, size: f32, bold: bool, color: Rgb) {
        let x = right - text_width(text, size, bold);
        self.text(x, baseline, text, size, bold, color);
    }

    fn text_center(&mut self, center: f32, baseline: f32, text: &str, size: f32, bold: bool, color: Rgb) {
        let x = center - text_width(text, size, bold) / 2.0;
        self.text(x, baseline, text, size, bold, color);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb) {
        self.content
            .save_state()
            .set_fill_rgb(color.0, color.1, color.2)
            .rect(x, y, w, h)
            .fill_nonzero()
            .restore_state();
    }

    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, line_w: f32, color: Rgb) {
        self.content
            .save_state()
            .set_line_width(line_w)
            .set_stroke_rgb(color.0, color.1, color.2)
            .rect(x, y, w, h)
            .stroke()
            .restore_state();
    }

    fn hline(&mut self, x0: f32, x1: f32, y: f32, line_w: f32, color: Rgb) {
        self.content
            .save_state()
            .set_line_width(line_w)
            .set_stroke_rgb(color.0, color.1, color.2)
            .move_to(x0, y)
            .line_to(x1, y)
            .stroke()
            .restore_state();
    }

    fn finish(mut self) -> Vec<Content> {
        self.finished.push(self.content);
        self.finished
    }
}

/// Assembles finished page content streams into the final PDF: catalog,
/// page tree, the two base-14 font objects, and one page per stream.
fn assemble(pages: Vec<Content>) -> Vec<u8> {
    let mut pdf = Pdf::new();

    let mut next_id = 1;
    let mut alloc = || {
        let r = Ref::new(next_id);
        next_id += 1;
        r
    };

    let catalog_id = alloc();
    let pages_id = alloc();
    let regular_id = alloc();
    let bold_id = alloc();
    let page_ids: Vec<Ref> = (0..pages.len()).map(|_| alloc()).collect();
    let content_ids: Vec<Ref> = (0..pages.len()).map(|_| alloc()).collect();

    pdf.catalog(catalog_id).pages(pages_id);
    pdf.pages(pages_id)
        .kids(page_ids.iter().copied())
        .count(pages.len() as i32);
    pdf.type1_font(regular_id).base_font(Name(b"Helvetica"));
    pdf.type1_font(bold_id).base_font(Name(b"Helvetica-Bold"));

    for (i, content) in pages.into_iter().enumerate() {
        let data = content.finish();
        pdf.stream(content_ids[i], &data);

        let mut page = pdf.page(page_ids[i]);
        page.media_box(Rect::new(0.0, 0.0, PAGE_W, PAGE_H))
            .parent(pages_id)
            .contents(content_ids[i]);
        let mut resources = page.resources();
        let mut fonts = resources.fonts();
        fonts.pair(FONT_REGULAR, regular_id);
        fonts.pair(FONT_BOLD, bold_id);
    }

    pdf.finish()
}
