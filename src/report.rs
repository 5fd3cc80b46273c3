//! Report document construction.
//!
//! Builders turn normalized project records into a renderer-agnostic
//! `ReportDocument` (ordered sections of text and tables). Turning the
//! document into bytes on disk is `render`'s job; nothing here touches the
//! filesystem or the clock, which is why `as_of` is a parameter.

use crate::kpi;
use crate::types::Project;
use crate::util::{file_slug, format_number, format_number_plain};
use chrono::NaiveDate;

pub const ORGANIZATION: &str = "WM CONSTRUCTORA";
const DETAIL_SUBTITLE: &str = "Executive Project Report";
const FOOTER_NOTE: &str = "Generated automatically by Cerebro WM v1.0";

/// Reporting period for the executive summary. Controls only the label in
/// the title and file stem, never the computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Weekly,
    Monthly,
}

impl Period {
    pub fn label(&self) -> &'static str {
        match self {
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
        }
    }
}

/// Header layout of a document. `WithLogo` reserves a branding-image region;
/// when the renderer cannot load the asset, the caller builds the document
/// with `WithoutLogo` and gets identical body content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderVariant {
    WithLogo,
    WithoutLogo,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportHeader {
    pub organization: String,
    pub subtitle: Option<String>,
    pub variant: HeaderVariant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableSection {
    pub header_row: Vec<String>,
    pub body_rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    Text(String),
    Table(TableSection),
}

/// Intermediate document model handed to the rendering collaborator.
/// Created fresh per invocation and discarded after rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDocument {
    pub title: String,
    pub generated: NaiveDate,
    pub header: ReportHeader,
    pub sections: Vec<Section>,
    /// Output filename stem, derived from title parts and the date.
    pub file_stem: String,
}

fn money_plain(n: f64) -> String {
    format!("${}", format_number_plain(n))
}

fn money_grouped(n: f64) -> String {
    format!("${}", format_number(n, 0))
}

/// Single-project financial report: org banner, project line, one financial
/// table, activity note and footer.
pub fn build_project_detail(project: &Project, as_of: NaiveDate) -> ReportDocument {
    let efficiency = kpi::efficiency_percent(project);
    let table = TableSection {
        header_row: vec![
            "Concept".to_string(),
            "Budgeted".to_string(),
            "Actual Spend".to_string(),
            "Efficiency".to_string(),
        ],
        body_rows: vec![vec![
            "Financial".to_string(),
            money_plain(project.budget_total),
            money_plain(project.actual_spend),
            format!("{:.1}%", efficiency),
        ]],
    };
    ReportDocument {
        title: format!("{} {}", ORGANIZATION, DETAIL_SUBTITLE),
        generated: as_of,
        header: ReportHeader {
            organization: ORGANIZATION.to_string(),
            subtitle: Some(DETAIL_SUBTITLE.to_string()),
            variant: HeaderVariant::WithoutLogo,
        },
        sections: vec![
            Section::Text(format!("Project: {}", project.name)),
            Section::Table(table),
            Section::Text("Activity and Stock Summary".to_string()),
            Section::Text(FOOTER_NOTE.to_string()),
        ],
        file_stem: format!("WM_Report_{}_{}", file_slug(&project.name), as_of),
    }
}

/// Multi-project comparison report. Rows keep the input order; the header
/// variant changes nothing below the banner.
pub fn build_executive_summary(
    projects: &[Project],
    period: Period,
    variant: HeaderVariant,
    as_of: NaiveDate,
) -> ReportDocument {
    let body_rows = projects
        .iter()
        .map(|p| {
            vec![
                p.name.clone(),
                format!("{}%", format_number_plain(p.progress_percent)),
                money_grouped(p.actual_spend),
                p.status.clone(),
            ]
        })
        .collect();
    let table = TableSection {
        header_row: vec![
            "Project".to_string(),
            "Progress".to_string(),
            "Spent".to_string(),
            "Status".to_string(),
        ],
        body_rows,
    };
    ReportDocument {
        title: format!("{} Executive Summary ({})", ORGANIZATION, period.label()),
        generated: as_of,
        header: ReportHeader {
            organization: ORGANIZATION.to_string(),
            subtitle: None,
            variant,
        },
        sections: vec![Section::Table(table)],
        file_stem: format!("WM_Report_{}_{}", period.label(), as_of),
    }
}
