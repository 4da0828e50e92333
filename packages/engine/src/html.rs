//! Deterministic HTML assembly
//!
//! Builds the final document with a push-order string writer: same resolved
//! regions, identical bytes. Element identifiers and classes are part of the
//! published contract; consumers select by id/class, never by position.
//!
//! Regions a recipe does not define are simply never pushed; there are no
//! empty placeholder elements.

use crate::table::RenderedTable;
use crate::types::Language;

/// Escape text for HTML element and attribute content.
pub fn esc(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Minimal writer with deterministic push order.
struct Html {
    buf: String,
}

impl Html {
    fn new() -> Self {
        Self {
            buf: String::with_capacity(16 * 1024),
        }
    }

    fn push(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    fn push_esc(&mut self, s: &str) {
        self.buf.push_str(&esc(s));
    }

    fn finish(self) -> String {
        self.buf
    }
}

/// Resolved venue block lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueBlock {
    pub name: String,
    pub address_lines: Vec<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// A resolved text region carrying bundle-sourced content.
///
/// Bundle text is recipe-controlled and may carry inline markup (mailto
/// links in contact panels), so it is emitted verbatim; everything derived
/// from the payload is escaped before it reaches this struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub id: String,
    pub html: String,
}

/// Every resolved region of one document, in assembly order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub language: Language,
    pub provenance: String,
    pub heading: String,
    pub venue: Option<VenueBlock>,
    pub date_line: Option<String>,
    pub last_updated: Option<String>,
    pub paragraphs: Vec<Region>,
    pub panels: Vec<Region>,
    pub tables: Vec<RenderedTable>,
}

/// Assemble the final HTML document.
pub fn assemble(doc: &Document) -> String {
    let mut w = Html::new();

    w.push("<!DOCTYPE html>\n<html lang=\"");
    w.push(doc.language.html_lang());
    w.push("\">\n<head>\n<meta charset=\"utf-8\">\n<title>");
    w.push_esc(&doc.heading);
    w.push("</title>\n</head>\n<body data-provenance=\"");
    w.push_esc(&doc.provenance);
    w.push("\">\n");

    w.push("<h1 id=\"page-heading\">");
    w.push_esc(&doc.heading);
    w.push("</h1>\n");

    if let Some(venue) = &doc.venue {
        write_venue(&mut w, venue);
    }

    if let Some(line) = &doc.date_line {
        w.push("<p id=\"list-date\">");
        w.push_esc(line);
        w.push("</p>\n");
    }

    if let Some(line) = &doc.last_updated {
        w.push("<p id=\"last-updated-date\">");
        w.push_esc(line);
        w.push("</p>\n");
    }

    for paragraph in &doc.paragraphs {
        w.push("<p id=\"");
        w.push_esc(&paragraph.id);
        w.push("\" class=\"list-paragraph\">");
        w.push(&paragraph.html);
        w.push("</p>\n");
    }

    for panel in &doc.panels {
        w.push("<div id=\"");
        w.push_esc(&panel.id);
        w.push("\" class=\"important-information\">");
        w.push(&panel.html);
        w.push("</div>\n");
    }

    for table in &doc.tables {
        write_table(&mut w, table);
    }

    w.push("</body>\n</html>\n");
    w.finish()
}

fn write_venue(w: &mut Html, venue: &VenueBlock) {
    w.push("<div id=\"venue\">\n<p id=\"venue-name\">");
    w.push_esc(&venue.name);
    w.push("</p>\n");
    for line in &venue.address_lines {
        w.push("<p class=\"venue-address-line\">");
        w.push_esc(line);
        w.push("</p>\n");
    }
    if let Some(email) = &venue.email {
        w.push("<p id=\"venue-email\">");
        w.push_esc(email);
        w.push("</p>\n");
    }
    if let Some(phone) = &venue.phone {
        w.push("<p id=\"venue-phone\">");
        w.push_esc(phone);
        w.push("</p>\n");
    }
    w.push("</div>\n");
}

fn write_table(w: &mut Html, table: &RenderedTable) {
    if let Some(title) = &table.title {
        w.push("<h2 class=\"venue-heading\">");
        w.push_esc(title);
        w.push("</h2>\n");
    }
    w.push("<table id=\"");
    w.push_esc(&table.id);
    w.push("\" class=\"hearing-table\">\n<thead>\n<tr>");
    for header in &table.header {
        w.push("<th scope=\"col\">");
        w.push_esc(header);
        w.push("</th>");
    }
    w.push("</tr>\n</thead>\n<tbody>\n");
    for row in &table.rows {
        w.push("<tr class=\"hearing-row\">");
        for cell in row {
            w.push("<td>");
            w.push_esc(cell);
            w.push("</td>");
        }
        w.push("</tr>\n");
    }
    w.push("</tbody>\n</table>\n");
}
