use serde::Deserialize;
use tabled::Tabled;

/// Project row as stored upstream. Every column is optional; the hosted
/// database makes no promises about which fields a row carries.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawProject {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "nombre", default)]
    pub name: Option<String>,
    #[serde(rename = "presupuesto_total", default)]
    pub budget_total: Option<f64>,
    #[serde(rename = "gasto_real_acumulado", default)]
    pub actual_spend: Option<f64>,
    #[serde(rename = "porcentaje_avance_fisico", default)]
    pub progress_percent: Option<f64>,
    #[serde(rename = "estado", default)]
    pub status: Option<String>,
}

/// Fully-populated project record. Produced by `loader::normalize_project`;
/// all downstream code assumes every field is present.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub budget_total: f64,
    pub actual_spend: f64,
    pub progress_percent: f64,
    pub status: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawInventoryItem {
    #[serde(rename = "proyecto", default)]
    pub project: Option<String>,
    #[serde(rename = "codigo_sku", default)]
    pub sku: Option<String>,
    #[serde(rename = "nombre_material", default)]
    pub material: Option<String>,
    #[serde(rename = "cantidad_actual", default)]
    pub quantity: Option<f64>,
    #[serde(rename = "unidad_medida", default)]
    pub unit: Option<String>,
}

#[derive(Debug, Clone)]
pub struct InventoryItem {
    pub project: String,
    pub sku: String,
    pub material: String,
    pub quantity: f64,
    pub unit: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAlert {
    #[serde(rename = "mensaje", default)]
    pub message: Option<String>,
    #[serde(rename = "resuelta", default)]
    pub resolved: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct Alert {
    pub message: String,
    pub resolved: bool,
}

/// Inventory line for the dashboard stock table.
#[derive(Debug, Clone, Tabled)]
pub struct InventoryRow {
    #[tabled(rename = "Project")]
    pub project: String,
    #[tabled(rename = "Material")]
    pub material: String,
    #[tabled(rename = "Stock")]
    pub stock: String,
}

impl From<&InventoryItem> for InventoryRow {
    fn from(item: &InventoryItem) -> Self {
        InventoryRow {
            project: item.project.clone(),
            material: item.material.clone(),
            stock: format!(
                "{} {}",
                crate::util::format_number_plain(item.quantity),
                item.unit
            ),
        }
    }
}
