// Entry point and high-level CLI flow.
//
// The binary drives the dashboard core from a small menu:
// - Option [1] loads projects, inventory and alerts from the JSON tables
//   and publishes a live-update event.
// - Option [2] prints the admin dashboard (KPI cards, project list, stock).
// - Option [3] builds and saves a per-project detail report.
// - Option [4] builds and saves a weekly/monthly executive summary.
// - Option [5] runs the budget CSV import.
mod importer;
mod kpi;
mod live;
mod loader;
mod render;
mod report;
mod types;
mod util;

use chrono::Local;
use live::{ChangeEvent, ChangeFeed};
use once_cell::sync::Lazy;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use types::{Alert, InventoryItem, InventoryRow, Project};

const PROJECTS_FILE: &str = "proyectos.json";
const INVENTORY_FILE: &str = "inventario_materiales.json";
const ALERTS_FILE: &str = "notificaciones.json";
const LOGO_FILE: &str = "logo.png";

// Simple in-memory app state so we only fetch the upstream tables once but
// can generate reports multiple times in a single run.
static APP_STATE: Lazy<Mutex<AppState>> = Lazy::new(|| {
    Mutex::new(AppState {
        projects: Vec::new(),
        inventory: Vec::new(),
        alerts: Vec::new(),
        loaded: false,
    })
});

struct AppState {
    projects: Vec<Project>,
    inventory: Vec<InventoryItem>,
    alerts: Vec<Alert>,
    loaded: bool,
}

/// Read a single line of input after printing the common "Enter choice:" prompt.
fn read_choice() -> String {
    print!("Enter choice: ");
    let _ = io::stdout().flush();
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).ok();
    buf.trim().to_string()
}

/// Ask the user whether to go back to the menu after generating a report.
///
/// Returns `true` if the user chose `Y`, `false` if they chose `N`.
fn prompt_back_to_menu() -> bool {
    loop {
        print!("Back to Menu (Y/N): ");
        let _ = io::stdout().flush();
        let mut buf = String::new();
        io::stdin().read_line(&mut buf).ok();
        let resp = buf.trim().to_uppercase();
        match resp.as_str() {
            "Y" => return true,
            "N" => return false,
            _ => println!("Invalid choice. Please enter Y or N."),
        }
    }
}

/// Handle option [1]: fetch all three upstream tables.
///
/// A fetch failure degrades to an empty table with a console warning; the
/// dashboard and builders tolerate empty input.
fn handle_load(feed: &ChangeFeed) {
    let projects = loader::fetch_projects(Path::new(PROJECTS_FILE)).unwrap_or_else(|e| {
        eprintln!("Warning: could not fetch projects: {}", e);
        Vec::new()
    });
    let inventory = loader::fetch_inventory(Path::new(INVENTORY_FILE)).unwrap_or_else(|e| {
        eprintln!("Warning: could not fetch inventory: {}", e);
        Vec::new()
    });
    let alerts = loader::fetch_alerts(Path::new(ALERTS_FILE)).unwrap_or_else(|e| {
        eprintln!("Warning: could not fetch alerts: {}", e);
        Vec::new()
    });
    println!(
        "Loaded {} projects, {} inventory items, {} alerts.\n",
        util::format_int(projects.len() as i64),
        util::format_int(inventory.len() as i64),
        util::format_int(alerts.len() as i64)
    );
    {
        let mut state = APP_STATE.lock().unwrap();
        state.projects = projects;
        state.inventory = inventory;
        state.alerts = alerts;
        state.loaded = true;
    }
    feed.publish(ChangeEvent::Projects);
}

fn require_loaded() -> bool {
    let loaded = APP_STATE.lock().unwrap().loaded;
    if !loaded {
        println!("Error: No data loaded. Please load the tables first (option 1).\n");
    }
    loaded
}

/// Handle option [2]: KPI cards, project list and stock table.
fn handle_dashboard() {
    if !require_loaded() {
        return;
    }
    let (projects, inventory, alerts) = {
        let state = APP_STATE.lock().unwrap();
        (
            state.projects.clone(),
            state.inventory.clone(),
            state.alerts.clone(),
        )
    };
    let kpis = kpi::aggregate(&projects, &alerts);
    println!("Cash Flow: ${}", util::format_number(kpis.cash_flow_gap, 0));
    println!("Alerts: {} Active\n", kpis.active_alerts);

    println!("Projects:");
    for p in &projects {
        println!(
            "  {} (ID: {}) — {}% complete, {}",
            p.name,
            p.id,
            util::format_number_plain(p.progress_percent),
            p.status
        );
    }
    println!("\nWarehouse Stock:");
    let rows: Vec<InventoryRow> = inventory.iter().map(InventoryRow::from).collect();
    render::preview_table_rows(&rows, 10);
}

/// Handle option [3]: build the detail report for one project.
fn handle_project_report() {
    if !require_loaded() {
        return;
    }
    let projects = APP_STATE.lock().unwrap().projects.clone();
    if projects.is_empty() {
        println!("No projects available.\n");
        return;
    }
    println!("Select a project:");
    for (i, p) in projects.iter().enumerate() {
        println!("[{}] {}", i + 1, p.name);
    }
    let choice = read_choice();
    let Some(project) = choice
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| projects.get(i))
    else {
        println!("Invalid project selection.\n");
        return;
    };
    let doc = report::build_project_detail(project, Local::now().date_naive());
    render::preview(&doc);
    match render::save(&doc, Path::new(".")) {
        Ok(path) => println!("Report saved to {}\n", path.display()),
        Err(e) => eprintln!("Write error: {}", e),
    }
}

/// Handle option [4]: build the executive summary for a period.
fn handle_executive_summary() {
    if !require_loaded() {
        return;
    }
    let projects = APP_STATE.lock().unwrap().projects.clone();
    println!("Select period:");
    println!("[1] Weekly");
    println!("[2] Monthly");
    let period = match read_choice().as_str() {
        "1" => report::Period::Weekly,
        "2" => report::Period::Monthly,
        _ => {
            println!("Invalid period selection.\n");
            return;
        }
    };
    // Branding asset failure degrades to the no-logo header layout.
    let variant = if render::logo_available(Path::new(LOGO_FILE)) {
        report::HeaderVariant::WithLogo
    } else {
        println!("Note: logo asset not found; using plain header.");
        report::HeaderVariant::WithoutLogo
    };
    let doc =
        report::build_executive_summary(&projects, period, variant, Local::now().date_naive());
    render::preview(&doc);
    match render::save(&doc, Path::new(".")) {
        Ok(path) => println!("Report saved to {}\n", path.display()),
        Err(e) => eprintln!("Write error: {}", e),
    }
    let kpis = kpi::aggregate(&projects, &APP_STATE.lock().unwrap().alerts);
    if let Err(e) = render::write_json(Path::new("kpi_summary.json"), &kpis) {
        eprintln!("Write error: {}", e);
    }
}

/// Handle option [5]: budget CSV import (upload endpoint not configured yet).
fn handle_csv_import(feed: &ChangeFeed) {
    print!("CSV file path: ");
    let _ = io::stdout().flush();
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).ok();
    let path = buf.trim().to_string();
    if path.is_empty() {
        println!("No file given.\n");
        return;
    }
    match importer::import_budget_csv(Path::new(&path), std::env::var("IMPORT_API").ok().as_deref())
    {
        Ok(importer::ImportOutcome::Uploaded { valid_rows }) => {
            println!("Uploaded {} budget rows.\n", util::format_int(valid_rows as i64));
            feed.publish(ChangeEvent::Projects);
        }
        Ok(importer::ImportOutcome::EndpointMissing {
            valid_rows,
            skipped_rows,
        }) => {
            println!(
                "CSV import: backend endpoint not configured. \
                 Validated {} rows locally ({} skipped).\n",
                util::format_int(valid_rows as i64),
                util::format_int(skipped_rows as i64)
            );
        }
        Err(e) => eprintln!("Error importing CSV: {}\n", e),
    }
}

fn main() {
    let feed = ChangeFeed::new();
    let _live_log = feed.subscribe(|event| {
        let table = match event {
            ChangeEvent::Projects => "projects",
            ChangeEvent::Notifications => "notifications",
        };
        println!("Live update: {} changed upstream.", table);
    });

    loop {
        println!("WM CONSTRUCTORA — Control Center");
        println!("[1] Load data");
        println!("[2] Dashboard");
        println!("[3] Project report (PDF)");
        println!("[4] Executive summary (PDF)");
        println!("[5] Import budget CSV");
        println!("[6] Exit\n");
        match read_choice().as_str() {
            "1" => handle_load(&feed),
            "2" => handle_dashboard(),
            "3" => {
                handle_project_report();
                if !prompt_back_to_menu() {
                    println!("Exiting the program.");
                    break;
                }
            }
            "4" => {
                handle_executive_summary();
                if !prompt_back_to_menu() {
                    println!("Exiting the program.");
                    break;
                }
            }
            "5" => handle_csv_import(&feed),
            "6" => {
                println!("Exiting the program.");
                break;
            }
            _ => {
                println!("Invalid choice. Please enter 1-6.\n");
            }
        }
    }
}
