// Rule-based selection of workout, diet and tips for a profile
use crate::catalog::{self, BlockTemplate};
use crate::metrics::{BmiResult, compute_bmi};
use crate::profile::{Activity, DietPref, Experience, Goal, UserProfile};
use log::info;
use serde::{Deserialize, Serialize};

/// A named list of plan lines: one training day or one meal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSection {
    pub name: String,
    pub items: Vec<String>,
}

impl From<&BlockTemplate> for PlanSection {
    fn from(t: &BlockTemplate) -> Self {
        Self {
            name: t.name.to_string(),
            items: t.items.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub title: String,
    pub summary: String,
    pub days: Vec<PlanSection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietPlan {
    pub title: String,
    pub summary: String,
    pub base_protein_g: u32,
    pub meals: Vec<PlanSection>,
    pub extras: Vec<String>,
}

/// Everything produced by one "Generate Plan" action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPlan {
    pub bmi: BmiResult,
    pub workout: WorkoutPlan,
    pub diet: DietPlan,
    pub tips: Vec<String>,
}

/// Pick the workout template for `goal` and extend its summary.
///
/// The beginner/advanced note and the daily-steps note are independent, so a
/// sedentary beginner aiming for fat loss gets both.
pub fn select_workout(goal: Goal, experience: Experience, activity: Activity) -> WorkoutPlan {
    let template = catalog::workout_for(goal.key());
    let mut summary = template.summary.to_string();

    match experience {
        Experience::Beginner => summary.push_str(catalog::BEGINNER_NOTE),
        Experience::Advanced => summary.push_str(catalog::ADVANCED_NOTE),
        Experience::Intermediate => {}
    }
    if activity == Activity::Sedentary && goal == Goal::FatLoss {
        summary.push_str(catalog::DAILY_STEPS_NOTE);
    }

    WorkoutPlan {
        title: template.title.to_string(),
        summary,
        days: template.days.iter().map(PlanSection::from).collect(),
    }
}

/// Daily protein target at 1.6 g per kg of body weight.
///
/// Halfway cases round to the even gram.
pub fn base_protein_g(weight_kg: f64) -> u32 {
    (weight_kg * 1.6).round_ties_even().max(0.0) as u32
}

pub fn select_diet(goal: Goal, diet_pref: DietPref, weight_kg: f64) -> DietPlan {
    let protein = base_protein_g(weight_kg);
    DietPlan {
        title: format!("Daily Meal Guidance ({})", diet_pref.label()),
        summary: format!(
            "Aim for around {protein}g of protein per day. {}",
            catalog::DIET_SUMMARY_TAIL
        ),
        base_protein_g: protein,
        meals: catalog::meals_for(diet_pref.key())
            .iter()
            .map(PlanSection::from)
            .collect(),
        extras: catalog::extras_for(goal.key())
            .iter()
            .map(|s| s.to_string())
            .collect(),
    }
}

/// Four general tips, plus one goal-specific tip for fat loss or muscle gain.
pub fn general_tips(goal: Goal) -> Vec<String> {
    catalog::BASE_TIPS
        .iter()
        .copied()
        .chain(catalog::goal_tip(goal.key()))
        .map(str::to_string)
        .collect()
}

/// Run the metrics calculator and every selector for `profile`.
pub fn generate_plan(profile: &UserProfile) -> GeneratedPlan {
    let bmi = compute_bmi(profile.height_cm, profile.weight_kg);
    let plan = GeneratedPlan {
        bmi,
        workout: select_workout(profile.goal, profile.experience, profile.activity),
        diet: select_diet(profile.goal, profile.diet_pref, profile.weight_kg),
        tips: general_tips(profile.goal),
    };
    info!(
        "Generated plan: goal={} diet={} bmi={}",
        profile.goal.key(),
        profile.diet_pref.key(),
        bmi.status.label()
    );
    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::BmiStatus;
    use crate::profile::{ALL_ACTIVITIES, ALL_DIET_PREFS, ALL_EXPERIENCE_LEVELS, ALL_GOALS, Gender};

    fn sample_profile() -> UserProfile {
        UserProfile {
            name: Some("Alex".into()),
            age: 31,
            gender: Gender::Male,
            height_cm: 175.0,
            weight_kg: 80.0,
            goal: Goal::MuscleGain,
            activity: Activity::Moderate,
            experience: Experience::Advanced,
            diet_pref: DietPref::NonVeg,
            notes: None,
        }
    }

    #[test]
    fn test_plan_shapes_for_every_combination() {
        for goal in ALL_GOALS {
            for exp in ALL_EXPERIENCE_LEVELS {
                for act in ALL_ACTIVITIES {
                    assert_eq!(select_workout(goal, exp, act).days.len(), 3);
                }
            }
            for pref in ALL_DIET_PREFS {
                let diet = select_diet(goal, pref, 70.0);
                assert_eq!(diet.meals.len(), 4);
                assert_eq!(diet.extras.len(), 3);
            }
            let n = general_tips(goal).len();
            assert!(n == 4 || n == 5);
        }
    }

    #[test]
    fn test_fat_loss_beginner_sedentary_gets_both_notes() {
        let plan = select_workout(Goal::FatLoss, Experience::Beginner, Activity::Sedentary);
        assert_eq!(plan.title, "Fat Loss + Strength Plan");
        assert!(plan.summary.contains("Since you are a beginner"));
        assert!(plan.summary.contains("8–9k steps per day"));
        let beginner = plan.summary.find("beginner").unwrap();
        let steps = plan.summary.find("steps per day").unwrap();
        assert!(beginner < steps);
    }

    #[test]
    fn test_steps_note_requires_fat_loss() {
        let plan = select_workout(Goal::Fitness, Experience::Intermediate, Activity::Sedentary);
        assert_eq!(plan.title, "General Fitness & Conditioning Plan");
        assert!(!plan.summary.contains("steps per day"));
        assert!(!plan.summary.contains("beginner"));
        assert!(!plan.summary.contains("advanced"));
    }

    #[test]
    fn test_days_ignore_experience_and_activity() {
        let a = select_workout(Goal::MuscleGain, Experience::Beginner, Activity::High);
        let b = select_workout(Goal::MuscleGain, Experience::Advanced, Activity::Sedentary);
        assert_eq!(a.days, b.days);
        assert_ne!(a.summary, b.summary);
        assert_eq!(a.days[0].name, "Day 1 – Push (Chest + Shoulders + Triceps)");
    }

    #[test]
    fn test_unknown_diet_is_eggetarian() {
        let diet = select_diet(Goal::resolve("fitness"), DietPref::resolve("vegan"), 70.0);
        let egg = select_diet(Goal::Fitness, DietPref::Egg, 70.0);
        assert!(diet.title.contains("Eggetarian"));
        assert_eq!(diet.base_protein_g, 112);
        assert_eq!(diet, egg);
        assert_eq!(diet.extras[2], "Drink water regularly instead of sugary drinks.");
    }

    #[test]
    fn test_protein_rounding() {
        assert_eq!(base_protein_g(80.0), 128);
        assert_eq!(base_protein_g(70.0), 112);
        // 1.5625 * 1.6 == 2.5 exactly
        assert_eq!(base_protein_g(1.5625), 2);
        assert_eq!(base_protein_g(0.0), 0);
    }

    #[test]
    fn test_goal_specific_tips() {
        let tips = general_tips(Goal::FatLoss);
        assert_eq!(tips.len(), 5);
        assert!(tips[4].starts_with("Steps matter!"));
        assert_eq!(general_tips(Goal::Fitness).len(), 4);
    }

    #[test]
    fn test_generate_plan_end_to_end() {
        let plan = generate_plan(&sample_profile());
        assert_eq!(plan.bmi.status, BmiStatus::Overweight);
        assert_eq!(format!("{:.1}", plan.bmi.value.unwrap()), "26.1");
        assert_eq!(plan.workout.title, "Hypertrophy (Muscle Gain) Plan");
        assert!(plan.workout.summary.contains("As you are advanced"));
        assert_eq!(plan.diet.title, "Daily Meal Guidance (Non-Vegetarian)");
        assert_eq!(plan.diet.base_protein_g, 128);
        assert!(plan.diet.summary.starts_with("Aim for around 128g of protein"));
        assert_eq!(plan.tips.len(), 5);
        assert!(plan.tips.iter().any(|t| t.contains("progressive overload")));
    }

    #[test]
    fn test_generate_plan_is_repeatable() {
        let p = sample_profile();
        let a = serde_json::to_string(&generate_plan(&p)).unwrap();
        let b = serde_json::to_string(&generate_plan(&p)).unwrap();
        assert_eq!(a, b);
    }
}
