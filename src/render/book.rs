//! Attendance book ("livro de ponto") PDF generation via `printpdf`.
//!
//! One row per extracted calendar date, with blank entrada/saída/assinatura
//! lines for hand signing. The vertical walk is driven by the cursor state
//! machine in [`super::layout`]; when a row no longer fits, a fresh page is
//! opened and the column header re-emitted before the sequence continues.

use std::io::BufWriter;

use chrono::NaiveDate;
use printpdf::{
    BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
    Point,
};

use super::layout::{self, Cursor};
use super::RenderError;
use crate::models::Professional;

const TITLE_SIZE: f32 = 16.0;
const HEADER_SIZE: f32 = 10.0;
const ROW_SIZE: f32 = 9.0;

const EMPTY_CALENDAR_MESSAGE: &str = "Nenhuma data encontrada no calendário PDF.";
const FIELD_FALLBACK: &str = "Não informado";

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

/// Renders the complete, finalized attendance book for `professional` over
/// the ascending `dates` and returns the document bytes. An empty date list
/// produces a single page carrying an explanatory row instead of the table.
pub fn render_attendance_book(
    professional: &Professional,
    dates: &[NaiveDate],
) -> Result<Vec<u8>, RenderError> {
    let title = format!("Livro de Ponto - {}", professional.name);
    let (doc, page, layer) = PdfDocument::new(
        &title,
        Mm(layout::PAGE_WIDTH as f32),
        Mm(layout::PAGE_HEIGHT as f32),
        "Layer 1",
    );
    let fonts = Fonts {
        regular: builtin(&doc, BuiltinFont::Helvetica)?,
        bold: builtin(&doc, BuiltinFont::HelveticaBold)?,
    };

    let mut layer = doc.get_page(page).get_layer(layer);
    let mut cursor = draw_identity_header(&layer, &fonts, professional);

    if dates.is_empty() {
        let y = cursor.next_row();
        layer.use_text(EMPTY_CALENDAR_MESSAGE, ROW_SIZE, Mm(layout::COL_DATE as f32), Mm(y as f32), &fonts.regular);
    } else {
        for date in dates {
            if !cursor.row_fits() {
                let (page, sublayer) =
                    doc.add_page(Mm(layout::PAGE_WIDTH as f32), Mm(layout::PAGE_HEIGHT as f32), "Layer 1");
                layer = doc.get_page(page).get_layer(sublayer);
                cursor = draw_continuation_header(&layer, &fonts);
            }
            let y = cursor.next_row();
            draw_row(&layer, &fonts, *date, y);
        }
    }

    let mut buf = BufWriter::new(Vec::new());
    doc.save(&mut buf)
        .map_err(|e| RenderError::Backend(format!("save: {e}")))?;
    buf.into_inner()
        .map_err(|e| RenderError::Backend(format!("buffer: {e}")))
}

fn builtin(doc: &PdfDocumentReference, font: BuiltinFont) -> Result<IndirectFontRef, RenderError> {
    doc.add_builtin_font(font)
        .map_err(|e| RenderError::Backend(format!("font: {e}")))
}

/// Title plus identity block, then the column header. Returns the cursor at
/// the first row baseline.
fn draw_identity_header(
    layer: &PdfLayerReference,
    fonts: &Fonts,
    professional: &Professional,
) -> Cursor {
    let mut cursor = Cursor::top_of_page();
    layer.use_text("Livro de Ponto", TITLE_SIZE, Mm(layout::MARGIN as f32), Mm(cursor.y() as f32), &fonts.bold);

    let mut y = cursor.descend(layout::TITLE_DROP);
    layer.use_text(
        format!("Profissional: {}", professional.name),
        HEADER_SIZE,
        Mm(layout::MARGIN as f32),
        Mm(y as f32),
        &fonts.regular,
    );
    y = cursor.descend(layout::HEADER_LINE_DROP);
    layer.use_text(
        format!("Cargo: {}", professional.role),
        HEADER_SIZE,
        Mm(layout::MARGIN as f32),
        Mm(y as f32),
        &fonts.regular,
    );

    if professional.is_professor() {
        y = cursor.descend(layout::HEADER_LINE_DROP);
        layer.use_text(
            format!(
                "Aulas: {}",
                professional.classes_info.as_deref().unwrap_or(FIELD_FALLBACK)
            ),
            HEADER_SIZE,
            Mm(layout::MARGIN as f32),
            Mm(y as f32),
            &fonts.regular,
        );
        y = cursor.descend(layout::HEADER_LINE_DROP);
        layer.use_text(
            format!(
                "PL: {}",
                professional.pl_info.as_deref().unwrap_or(FIELD_FALLBACK)
            ),
            HEADER_SIZE,
            Mm(layout::MARGIN as f32),
            Mm(y as f32),
            &fonts.regular,
        );
    }

    y = cursor.descend(layout::TABLE_DROP);
    draw_column_header(layer, fonts, y);
    cursor.descend(layout::FIRST_ROW_DROP);
    cursor
}

/// Column header alone at the top of a continuation page. Returns the
/// cursor at the first row baseline.
fn draw_continuation_header(layer: &PdfLayerReference, fonts: &Fonts) -> Cursor {
    let mut cursor = Cursor::top_of_page();
    draw_column_header(layer, fonts, cursor.y());
    cursor.descend(layout::FIRST_ROW_DROP);
    cursor
}

fn draw_column_header(layer: &PdfLayerReference, fonts: &Fonts, y: f64) {
    layer.use_text("Data", HEADER_SIZE, Mm(layout::COL_DATE as f32), Mm(y as f32), &fonts.bold);
    layer.use_text("Entrada", HEADER_SIZE, Mm(layout::COL_ENTRADA as f32), Mm(y as f32), &fonts.bold);
    layer.use_text("Saída", HEADER_SIZE, Mm(layout::COL_SAIDA as f32), Mm(y as f32), &fonts.bold);
    layer.use_text("Assinatura", HEADER_SIZE, Mm(layout::COL_ASSINATURA as f32), Mm(y as f32), &fonts.bold);
    hline(
        layer,
        layout::MARGIN,
        layout::PAGE_WIDTH - layout::MARGIN,
        y - layout::RULE_DROP,
    );
}

fn draw_row(layer: &PdfLayerReference, fonts: &Fonts, date: NaiveDate, y: f64) {
    layer.use_text(
        date.format("%d/%m/%Y").to_string(),
        ROW_SIZE,
        Mm(layout::COL_DATE as f32),
        Mm(y as f32),
        &fonts.regular,
    );

    let line_y = y - layout::SIGNATURE_LINE_DROP;
    hline(layer, layout::LINE_ENTRADA.0, layout::LINE_ENTRADA.1, line_y);
    hline(layer, layout::LINE_SAIDA.0, layout::LINE_SAIDA.1, line_y);
    hline(layer, layout::LINE_ASSINATURA.0, layout::LINE_ASSINATURA.1, line_y);
}

fn hline(layer: &PdfLayerReference, x_start: f64, x_end: f64, y: f64) {
    let line = Line {
        points: vec![
            (Point::new(Mm(x_start as f32), Mm(y as f32)), false),
            (Point::new(Mm(x_end as f32), Mm(y as f32)), false),
        ],
        is_closed: false,
    };
    layer.add_line(line);
}
