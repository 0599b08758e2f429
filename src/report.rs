use crate::{
    planner::{GeneratedPlan, PlanSection},
    profile::UserProfile,
};
use maud::{DOCTYPE, Markup, html};
use std::path::Path;

pub const REPORT_HEADER: &str = "=== SMART GYM PLANNER ===";
pub const CLOSING_NOTE: &str =
    "This is a starting point. As your body responds, adjust food quantity and workout intensity.";
pub const PLACEHOLDER_TEXT: &str =
    "Fill your details on the left and click 'Generate Plan' to see your plan here.";

trait FormatMeasure {
    fn fmt_measure(self) -> String;
}

impl FormatMeasure for f64 {
    /// Whole numbers keep a trailing `.0` (`175.0`), others print as-is.
    fn fmt_measure(self) -> String {
        if self.is_finite() && self.fract() == 0.0 && self.abs() < 1e16 {
            format!("{:.1}", self)
        } else {
            format!("{}", self)
        }
    }
}

fn bmi_line(plan: &GeneratedPlan) -> String {
    match plan.bmi.value {
        Some(v) => format!("BMI: {:.1} ({})", v, plan.bmi.status.label()),
        None => "BMI: N/A".to_string(),
    }
}

fn push_sections(lines: &mut Vec<String>, sections: &[PlanSection], suffix: &str) {
    for s in sections {
        lines.push(format!("- {}{}", s.name, suffix));
        for item in &s.items {
            lines.push(format!("    • {item}"));
        }
        lines.push(String::new());
    }
}

/// Render the plain-text report shown in the "Your Plan" panel.
pub fn render_text(profile: &UserProfile, plan: &GeneratedPlan) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push(REPORT_HEADER.to_string());
    if let Some(name) = &profile.name {
        lines.push(format!("Personalised plan for: {name}"));
    }
    lines.push(String::new());

    lines.push("1. OVERVIEW".into());
    lines.push(format!(
        "Age: {} yrs | Gender: {} | Diet: {}",
        profile.age,
        profile.gender.key(),
        profile.diet_pref.short_label()
    ));
    lines.push(format!(
        "Height: {} cm | Weight: {} kg",
        profile.height_cm.fmt_measure(),
        profile.weight_kg.fmt_measure()
    ));
    lines.push(bmi_line(plan));
    lines.push(format!("Goal: {}", profile.goal.label()));
    lines.push(format!(
        "Activity: {} | Experience: {}",
        profile.activity.key(),
        profile.experience.key()
    ));
    if let Some(notes) = &profile.notes {
        lines.push(format!("Notes: {notes}"));
    }
    lines.push(String::new());

    lines.push("2. WORKOUT PLAN".into());
    lines.push(plan.workout.title.clone());
    lines.push(plan.workout.summary.clone());
    lines.push(String::new());
    push_sections(&mut lines, &plan.workout.days, "");
    lines.push(String::new());

    lines.push("3. DAILY MEAL GUIDANCE".into());
    lines.push(plan.diet.title.clone());
    lines.push(plan.diet.summary.clone());
    lines.push(String::new());
    push_sections(&mut lines, &plan.diet.meals, ":");
    lines.push("Extra rules:".into());
    for ex in &plan.diet.extras {
        lines.push(format!("    • {ex}"));
    }
    lines.push(String::new());

    lines.push("4. EXTRA TIPS".into());
    for t in &plan.tips {
        lines.push(format!("- {t}"));
    }
    lines.push(String::new());
    lines.push(CLOSING_NOTE.into());

    lines.join("\n")
}

pub fn export_html_report<P: AsRef<Path>>(
    path: P,
    profile: &UserProfile,
    plan: &GeneratedPlan,
) -> std::io::Result<()> {
    let generated_on = chrono::Local::now().format("%Y-%m-%d").to_string();
    let markup = build_html(profile, plan, &generated_on);
    std::fs::write(path, markup.into_string())
}

fn section_list(sections: &[PlanSection]) -> Markup {
    html! {
        @for s in sections {
            h3 { (s.name) }
            ul {
                @for item in &s.items {
                    li { (item) }
                }
            }
        }
    }
}

fn build_html(profile: &UserProfile, plan: &GeneratedPlan, generated_on: &str) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head { meta charset="utf-8"; title { "Smart Gym Planner" } }
            body {
                h1 { "Smart Gym Planner" }
                @if let Some(name) = &profile.name {
                    p { "Personalised plan for: " (name) }
                }
                h2 { "1. Overview" }
                table border="1" {
                    tr { th { "Age" } td { (profile.age) " yrs" } }
                    tr { th { "Gender" } td { (profile.gender.key()) } }
                    tr { th { "Diet" } td { (profile.diet_pref.short_label()) } }
                    tr { th { "Height" } td { (profile.height_cm.fmt_measure()) " cm" } }
                    tr { th { "Weight" } td { (profile.weight_kg.fmt_measure()) " kg" } }
                    tr {
                        th { "BMI" }
                        td {
                            @match plan.bmi.value {
                                Some(v) => { (format!("{:.1}", v)) " (" (plan.bmi.status.label()) ")" }
                                None => { "N/A" }
                            }
                        }
                    }
                    tr { th { "Goal" } td { (profile.goal.label()) } }
                    tr { th { "Activity" } td { (profile.activity.key()) } }
                    tr { th { "Experience" } td { (profile.experience.key()) } }
                    @if let Some(notes) = &profile.notes {
                        tr { th { "Notes" } td { (notes) } }
                    }
                }
                h2 { "2. Workout Plan" }
                p { strong { (plan.workout.title) } }
                p { (plan.workout.summary) }
                (section_list(&plan.workout.days))
                h2 { "3. Daily Meal Guidance" }
                p { strong { (plan.diet.title) } }
                p { (plan.diet.summary) }
                (section_list(&plan.diet.meals))
                h3 { "Extra rules" }
                ul {
                    @for ex in &plan.diet.extras {
                        li { (ex) }
                    }
                }
                h2 { "4. Extra Tips" }
                ul {
                    @for t in &plan.tips {
                        li { (t) }
                    }
                }
                p { (CLOSING_NOTE) }
                footer { small { "Generated on " (generated_on) } }
            }
        }
    }
}
