//! Rendering collaborator: turns a `ReportDocument` into console previews
//! and downloadable text artifacts. The document model stays
//! renderer-agnostic; this module owns all formatting side effects.

use crate::report::{HeaderVariant, ReportDocument, Section, TableSection};
use serde::Serialize;
use std::error::Error;
use std::path::{Path, PathBuf};
use tabled::builder::Builder;
use tabled::settings::Style;
use tabled::{Table, Tabled};

const BANNER_WIDTH: usize = 62;

/// Render the full document to text: a banner for the header region, then
/// each section in order. Tables use markdown style.
pub fn render_text(doc: &ReportDocument) -> String {
    let mut out = String::new();
    let rule = "=".repeat(BANNER_WIDTH);
    out.push_str(&rule);
    out.push('\n');
    match doc.header.variant {
        HeaderVariant::WithLogo => {
            out.push_str(&format!("[logo] {}\n", doc.header.organization));
        }
        HeaderVariant::WithoutLogo => {
            out.push_str(&format!("{}\n", doc.header.organization));
        }
    }
    if let Some(subtitle) = &doc.header.subtitle {
        out.push_str(&format!("{}\n", subtitle));
    }
    out.push_str(&format!("DATE: {}\n", doc.generated));
    out.push_str(&rule);
    out.push('\n');
    for section in &doc.sections {
        out.push('\n');
        match section {
            Section::Text(line) => {
                out.push_str(line);
                out.push('\n');
            }
            Section::Table(table) => {
                out.push_str(&render_table(table));
                out.push('\n');
            }
        }
    }
    out
}

fn render_table(table: &TableSection) -> String {
    let mut builder = Builder::default();
    builder.push_record(table.header_row.clone());
    for row in &table.body_rows {
        builder.push_record(row.clone());
    }
    let mut rendered = builder.build();
    rendered.with(Style::markdown());
    rendered.to_string()
}

pub fn preview(doc: &ReportDocument) {
    println!("{}", render_text(doc));
}

/// Write the document to `<dir>/<file_stem>.md` and return the path.
pub fn save(doc: &ReportDocument, dir: &Path) -> Result<PathBuf, Box<dyn Error>> {
    let path = dir.join(format!("{}.md", doc.file_stem));
    std::fs::write(&path, render_text(doc))?;
    Ok(path)
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), Box<dyn Error>> {
    let s = serde_json::to_string_pretty(value)?;
    std::fs::write(path, s)?;
    Ok(())
}

/// Probe the branding asset. A missing or unreadable logo is not an error;
/// the caller degrades to the no-logo header layout.
pub fn logo_available(path: &Path) -> bool {
    std::fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

/// Print the first `max_rows` of derive-`Tabled` rows as a markdown table,
/// used for the dashboard inventory preview.
pub fn preview_table_rows<T>(rows: &[T], max_rows: usize)
where
    T: Tabled + Clone,
{
    let slice: Vec<T> = rows.iter().cloned().take(max_rows).collect();
    if slice.is_empty() {
        println!("(no rows)\n");
        return;
    }
    let table_str = Table::new(slice).with(Style::markdown()).to_string();
    println!("{}\n", table_str);
}
