//! Data-source collaborator: JSON-backed stand-in for the hosted database.
//!
//! Fetch functions read whole tables into memory; `normalize_*` fill every
//! optional upstream field with its documented default so the aggregation
//! and report code never sees a half-populated record.

use crate::types::{
    Alert, InventoryItem, Project, RawAlert, RawInventoryItem, RawProject,
};
use std::error::Error;
use std::fs;
use std::path::Path;

pub const DEFAULT_PROJECT_NAME: &str = "Unnamed";
pub const DEFAULT_STATUS: &str = "Active";

/// Fill defaults for a raw project row: monetary and progress fields become
/// 0, the name becomes a placeholder, the status becomes `Active`.
pub fn normalize_project(raw: RawProject) -> Project {
    Project {
        id: raw.id.unwrap_or_default(),
        name: non_blank(raw.name, DEFAULT_PROJECT_NAME),
        budget_total: raw.budget_total.unwrap_or(0.0),
        actual_spend: raw.actual_spend.unwrap_or(0.0),
        progress_percent: raw.progress_percent.unwrap_or(0.0),
        status: non_blank(raw.status, DEFAULT_STATUS),
    }
}

/// Inventory rows without a material name fall back to the SKU, matching
/// the dashboard stock view.
pub fn normalize_inventory_item(raw: RawInventoryItem) -> InventoryItem {
    let sku = non_blank(raw.sku, "UNKNOWN-SKU");
    let material = match raw.material {
        Some(m) if !m.trim().is_empty() => m.trim().to_string(),
        _ => sku.clone(),
    };
    InventoryItem {
        project: non_blank(raw.project, DEFAULT_PROJECT_NAME),
        sku,
        material,
        quantity: raw.quantity.unwrap_or(0.0),
        unit: non_blank(raw.unit, "u"),
    }
}

pub fn normalize_alert(raw: RawAlert) -> Alert {
    Alert {
        message: non_blank(raw.message, "(no message)"),
        resolved: raw.resolved.unwrap_or(false),
    }
}

fn non_blank(value: Option<String>, default: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => default.to_string(),
    }
}

/// Fetch all projects from a JSON array file and normalize them.
pub fn fetch_projects(path: &Path) -> Result<Vec<Project>, Box<dyn Error>> {
    let raw: Vec<RawProject> = read_table(path)?;
    Ok(raw.into_iter().map(normalize_project).collect())
}

pub fn fetch_inventory(path: &Path) -> Result<Vec<InventoryItem>, Box<dyn Error>> {
    let raw: Vec<RawInventoryItem> = read_table(path)?;
    Ok(raw.into_iter().map(normalize_inventory_item).collect())
}

pub fn fetch_alerts(path: &Path) -> Result<Vec<Alert>, Box<dyn Error>> {
    let raw: Vec<RawAlert> = read_table(path)?;
    Ok(raw.into_iter().map(normalize_alert).collect())
}

fn read_table<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>, Box<dyn Error>> {
    let body = fs::read_to_string(path)?;
    let rows = serde_json::from_str(&body)?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RawProject;
    use std::fs;

    #[test]
    fn normalize_fills_every_default() {
        let p = normalize_project(RawProject::default());
        assert_eq!(p.id, "");
        assert_eq!(p.name, "Unnamed");
        assert_eq!(p.budget_total, 0.0);
        assert_eq!(p.actual_spend, 0.0);
        assert_eq!(p.progress_percent, 0.0);
        assert_eq!(p.status, "Active");
    }

    #[test]
    fn normalize_keeps_present_values() {
        let p = normalize_project(RawProject {
            id: Some("42".to_string()),
            name: Some("  Tower A ".to_string()),
            budget_total: Some(1000.0),
            actual_spend: Some(250.0),
            progress_percent: Some(40.0),
            status: Some("Paused".to_string()),
        });
        assert_eq!(p.name, "Tower A");
        assert_eq!(p.status, "Paused");
        assert_eq!(p.budget_total, 1000.0);
    }

    #[test]
    fn blank_strings_count_as_missing() {
        let p = normalize_project(RawProject {
            name: Some("   ".to_string()),
            status: Some("".to_string()),
            ..RawProject::default()
        });
        assert_eq!(p.name, "Unnamed");
        assert_eq!(p.status, "Active");
    }

    #[test]
    fn inventory_material_falls_back_to_sku() {
        let item = normalize_inventory_item(RawInventoryItem {
            sku: Some("CEM-42".to_string()),
            material: None,
            ..RawInventoryItem::default()
        });
        assert_eq!(item.material, "CEM-42");
    }

    #[test]
    fn fetch_projects_reads_upstream_column_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("proyectos.json");
        fs::write(
            &path,
            r#"[
                {"id": "1", "nombre": "Tower A", "presupuesto_total": 1000,
                 "gasto_real_acumulado": 250, "porcentaje_avance_fisico": 40,
                 "estado": "Active"},
                {"id": "2"}
            ]"#,
        )
        .unwrap();
        let projects = fetch_projects(&path).unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].name, "Tower A");
        assert_eq!(projects[0].budget_total, 1000.0);
        assert_eq!(projects[1].name, "Unnamed");
        assert_eq!(projects[1].status, "Active");
    }

    #[test]
    fn fetch_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(fetch_projects(&dir.path().join("nope.json")).is_err());
    }

    #[test]
    fn fetch_alerts_defaults_unresolved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notificaciones.json");
        fs::write(
            &path,
            r#"[{"mensaje": "Stock low"}, {"mensaje": "Done", "resuelta": true}]"#,
        )
        .unwrap();
        let alerts = fetch_alerts(&path).unwrap();
        assert!(!alerts[0].resolved);
        assert!(alerts[1].resolved);
    }
}
