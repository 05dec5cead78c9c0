//! `today` command: a plain-text version of the diary page.

use anyhow::{Context, Result};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Table};
use macrolog_core::api::ApiClient;
use macrolog_core::config::Config;
use macrolog_core::models::{DailyLogBundle, UserProfile};
use macrolog_tui::features::dashboard::{Meter, project_dashboard};
use macrolog_tui::features::log_list::{LogListView, project_log_list};
use macrolog_tui::features::plan::project_plan;

pub async fn run(config: &Config) -> Result<()> {
    let api = ApiClient::from_config(config).context("create API client")?;

    let profile = api
        .get_profile()
        .await
        .with_context(|| format!("fetch profile from {}", api.base_url()))?;
    let Some(profile) = profile else {
        anyhow::bail!("No profile yet. Run `macrolog` to set one up.");
    };
    let bundle = api
        .today_log()
        .await
        .with_context(|| format!("fetch today's log from {}", api.base_url()))?;

    tracing::info!(entries = bundle.logs.len(), "printing today report");
    print!("{}", format_report(&profile, &bundle));
    Ok(())
}

/// Builds the report from the same projections the diary page uses.
fn format_report(profile: &UserProfile, bundle: &DailyLogBundle) -> String {
    let mut out = String::new();

    let goal = project_plan(Some(profile), Some(bundle)).map(|plan| plan.goal);
    out.push_str(&format!(
        "{} · {}\n",
        profile.name,
        goal.unwrap_or_else(|| profile.goal.label())
    ));

    if let Some(dashboard) = project_dashboard(Some(profile), Some(bundle)) {
        let mut totals = Table::new();
        totals
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("").fg(Color::White),
                Cell::new("TRACKED").fg(Color::White),
                Cell::new("TARGET").fg(Color::White),
                Cell::new("PROGRESS").fg(Color::White),
            ]);
        totals.add_row(meter_row("Calories", "kcal", &dashboard.calories));
        totals.add_row(meter_row("Protein", "g", &dashboard.protein));
        out.push_str(&format!("{totals}\n"));
    }

    match project_log_list(Some(bundle.logs.as_slice())) {
        LogListView::Empty(message) => {
            out.push_str(message);
            out.push('\n');
        }
        LogListView::Rows(rows) => {
            let mut entries = Table::new();
            entries
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec![
                    Cell::new("FOOD").fg(Color::White),
                    Cell::new("AMOUNT").fg(Color::White),
                    Cell::new("CALORIES").fg(Color::White),
                    Cell::new("PROTEIN").fg(Color::White),
                ]);
            for row in rows {
                entries.add_row(vec![
                    Cell::new(&row.name).fg(Color::Cyan),
                    Cell::new(&row.grams).set_alignment(CellAlignment::Right),
                    Cell::new(&row.calories).set_alignment(CellAlignment::Right),
                    Cell::new(&row.protein).set_alignment(CellAlignment::Right),
                ]);
            }
            out.push_str(&format!("{entries}\n"));
        }
    }

    out
}

fn meter_row(label: &str, unit: &str, meter: &Meter) -> Vec<Cell> {
    let color = if meter.percent >= 100.0 {
        Color::Green
    } else {
        Color::Yellow
    };
    vec![
        Cell::new(label),
        Cell::new(format!("{} {unit}", meter.tracked)).set_alignment(CellAlignment::Right),
        Cell::new(format!("{} {unit}", meter.target)).set_alignment(CellAlignment::Right),
        Cell::new(format!("{:.0}%", meter.percent))
            .fg(color)
            .set_alignment(CellAlignment::Right),
    ]
}
