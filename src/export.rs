use crate::{
    planner::{GeneratedPlan, PlanSection},
    profile::UserProfile,
    report::{export_html_report, render_text},
};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// File formats offered by "Export Plan".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    Html,
    Json,
    Csv,
}

impl ExportFormat {
    /// Pick the format from a path's extension, defaulting to plain text.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_lowercase())
            .as_deref()
        {
            Some("html") | Some("htm") => ExportFormat::Html,
            Some("json") => ExportFormat::Json,
            Some("csv") => ExportFormat::Csv,
            _ => ExportFormat::Text,
        }
    }
}

pub fn write_json<T: Serialize + ?Sized, P: AsRef<Path>>(
    value: &T,
    path: P,
) -> std::io::Result<()> {
    let file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(file, value).map_err(std::io::Error::other)
}

#[derive(Serialize)]
pub struct PlanExport<'a> {
    pub profile: &'a UserProfile,
    pub plan: &'a GeneratedPlan,
}

pub fn save_plan_json<P: AsRef<Path>>(
    path: P,
    profile: &UserProfile,
    plan: &GeneratedPlan,
) -> std::io::Result<()> {
    write_json(&PlanExport { profile, plan }, path)
}

pub fn save_plan_text<P: AsRef<Path>>(
    path: P,
    profile: &UserProfile,
    plan: &GeneratedPlan,
) -> std::io::Result<()> {
    std::fs::write(path, render_text(profile, plan))
}

#[derive(Serialize)]
struct Row<'a> {
    section: &'a str,
    group: &'a str,
    item: &'a str,
}

fn section_rows<'a>(section: &'a str, groups: &'a [PlanSection]) -> impl Iterator<Item = Row<'a>> {
    groups.iter().flat_map(move |g| {
        g.items.iter().map(move |item| Row {
            section,
            group: &g.name,
            item,
        })
    })
}

/// Write one CSV row per plan line: workout items, meal items, diet extras
/// and tips.
pub fn write_plan_csv(writer: impl Write, plan: &GeneratedPlan) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    let extras = plan.diet.extras.iter().map(|e| Row {
        section: "diet",
        group: "Extra rules",
        item: e,
    });
    let tips = plan.tips.iter().map(|t| Row {
        section: "tips",
        group: "",
        item: t,
    });
    for row in section_rows("workout", &plan.workout.days)
        .chain(section_rows("diet", &plan.diet.meals))
        .chain(extras)
        .chain(tips)
    {
        wtr.serialize(row)?;
    }
    wtr.flush().map_err(Into::into)
}

pub fn save_plan_csv<P: AsRef<Path>>(path: P, plan: &GeneratedPlan) -> csv::Result<()> {
    write_plan_csv(std::fs::File::create(path)?, plan)
}

/// Export `plan` to `path` in the format implied by its extension.
pub fn save_plan<P: AsRef<Path>>(
    path: P,
    profile: &UserProfile,
    plan: &GeneratedPlan,
) -> Result<ExportFormat, Box<dyn std::error::Error>> {
    let path = path.as_ref();
    let format = ExportFormat::from_path(path);
    match format {
        ExportFormat::Text => save_plan_text(path, profile, plan)?,
        ExportFormat::Html => export_html_report(path, profile, plan)?,
        ExportFormat::Json => save_plan_json(path, profile, plan)?,
        ExportFormat::Csv => save_plan_csv(path, plan)?,
    }
    Ok(format)
}
