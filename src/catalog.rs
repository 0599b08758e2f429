use phf::phf_map;

/// A named block of plan lines (a training day or a meal).
#[derive(Debug, Clone, Copy)]
pub struct BlockTemplate {
    pub name: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct WorkoutTemplate {
    pub title: &'static str,
    pub summary: &'static str,
    pub days: &'static [BlockTemplate; 3],
}

pub static WORKOUTS: phf::Map<&'static str, WorkoutTemplate> = phf_map! {
    "fat-loss" => WorkoutTemplate {
        title: "Fat Loss + Strength Plan",
        summary: "Focus on calorie burn + preserving muscle. \
                  Start with compound lifts, finish with short but intense cardio.",
        days: &[
            BlockTemplate {
                name: "Day 1 – Full Body + Cardio",
                items: &[
                    "Squats / Leg Press – 3×10–12",
                    "Push-ups or Bench Press – 3×10",
                    "Lat Pulldown / Assisted Pull-ups – 3×10–12",
                    "Plank – 3×30s",
                    "Treadmill walk / incline – 20 mins",
                ],
            },
            BlockTemplate {
                name: "Day 2 – Upper Body + Core",
                items: &[
                    "Dumbbell Shoulder Press – 3×10–12",
                    "One-arm Dumbbell Row – 3×10 each side",
                    "Cable / Machine Chest Fly – 3×12",
                    "Russian twists – 3×16",
                    "Cycling / cross-trainer – 15–20 mins",
                ],
            },
            BlockTemplate {
                name: "Day 3 – Lower Body + HIIT",
                items: &[
                    "Leg Extension – 3×12",
                    "Leg Curl – 3×12",
                    "Walking Lunges – 3×12 steps each leg",
                    "Mountain climbers – 3×30s",
                    "HIIT: 30s fast, 60s slow × 8 rounds",
                ],
            },
        ],
    },
    "muscle-gain" => WorkoutTemplate {
        title: "Hypertrophy (Muscle Gain) Plan",
        summary: "Progressive overload with enough volume. \
                  Keep form clean, increase weights slowly every week.",
        days: &[
            BlockTemplate {
                name: "Day 1 – Push (Chest + Shoulders + Triceps)",
                items: &[
                    "Bench Press / Machine Press – 4×8–10",
                    "Incline Dumbbell Press – 3×10–12",
                    "Shoulder Press – 3×10",
                    "Lateral Raises – 3×12–15",
                    "Triceps Rope Pushdown – 3×12",
                ],
            },
            BlockTemplate {
                name: "Day 2 – Pull (Back + Biceps)",
                items: &[
                    "Lat Pulldown / Pull-ups – 4×8–10",
                    "Seated Cable Row – 3×10–12",
                    "Face Pulls – 3×15",
                    "Barbell / Dumbbell Curls – 3×10–12",
                    "Hammer Curls – 3×10",
                ],
            },
            BlockTemplate {
                name: "Day 3 – Legs + Core",
                items: &[
                    "Squats / Leg Press – 4×8–10",
                    "Romanian Deadlift – 3×10",
                    "Leg Curls – 3×12",
                    "Calf Raises – 3×15–20",
                    "Plank + Leg Raises – 3 sets each",
                ],
            },
        ],
    },
};

/// Used for `fitness` and any goal not present in [`WORKOUTS`].
pub static GENERAL_FITNESS_WORKOUT: WorkoutTemplate = WorkoutTemplate {
    title: "General Fitness & Conditioning Plan",
    summary: "Balanced strength, mobility and cardio. \
              Great if you want to stay active, toned and healthy.",
    days: &[
        BlockTemplate {
            name: "Day 1 – Full Body Strength",
            items: &[
                "Goblet Squat – 3×12",
                "Dumbbell Bench Press – 3×12",
                "Seated Row – 3×12",
                "Plank – 3×30s",
                "10–15 mins light cardio",
            ],
        },
        BlockTemplate {
            name: "Day 2 – Cardio + Mobility",
            items: &[
                "30–40 mins brisk walk / cycling",
                "Dynamic stretches (hips, shoulders, hamstrings)",
                "Light core work (deadbugs, side plank)",
            ],
        },
        BlockTemplate {
            name: "Day 3 – Mixed Strength",
            items: &[
                "Deadlift variation (light) – 3×8",
                "Overhead Press – 3×10",
                "Lat Pulldown – 3×12",
                "Bodyweight Lunges – 3×12 each leg",
                "10 mins cool-down walk + stretching",
            ],
        },
    ],
};

pub const BEGINNER_NOTE: &str = " Since you are a beginner, start with lighter weights, \
    keep 1–2 reps in reserve and focus on learning technique first.";

pub const ADVANCED_NOTE: &str = " As you are advanced, you can add 1–2 extra sets for main lifts \
    and use variations like drop-sets or supersets.";

pub const DAILY_STEPS_NOTE: &str = " Because your current activity is low, try to hit a minimum of \
    8–9k steps per day outside the gym.";

/// Meal catalogs in Breakfast, Lunch, Evening Snack, Dinner order.
pub static MEALS: phf::Map<&'static str, [BlockTemplate; 4]> = phf_map! {
    "veg" => [
        BlockTemplate {
            name: "Breakfast",
            items: &[
                "Oats with milk + 1 scoop whey (if available) + nuts",
                "OR 2–3 besan chillas with curd",
                "1 fruit (banana / apple)",
            ],
        },
        BlockTemplate {
            name: "Lunch",
            items: &[
                "2–3 phulkas / 1.5 cup rice",
                "1.5 cup dal / rajma / chole",
                "1 cup mixed veg sabzi",
                "Salad: cucumber, carrot, onion, lemon",
            ],
        },
        BlockTemplate {
            name: "Evening Snack",
            items: &[
                "Sprouts salad with onion + tomato + lemon",
                "OR roasted chana + buttermilk",
            ],
        },
        BlockTemplate {
            name: "Dinner",
            items: &[
                "Paneer bhurji / tofu + 2 phulkas",
                "Mixed veggie sabzi",
                "Light salad (avoid heavy fried food at night)",
            ],
        },
    ],
    "non-veg" => [
        BlockTemplate {
            name: "Breakfast",
            items: &[
                "3–4 egg omelette (2 whole + 2 whites) + 2 bread slices",
                "OR oats with milk + boiled eggs",
                "1 fruit",
            ],
        },
        BlockTemplate {
            name: "Lunch",
            items: &[
                "150–180g chicken (grilled / curry) or fish",
                "2–3 phulkas / 1.5 cup rice",
                "1 cup sabzi",
                "Salad bowl",
            ],
        },
        BlockTemplate {
            name: "Evening Snack",
            items: &[
                "Greek curd / dahi + peanuts / nuts",
                "OR tuna / chicken sandwich (less mayo)",
            ],
        },
        BlockTemplate {
            name: "Dinner",
            items: &[
                "Chicken / fish + lots of veggies (stir-fried / grilled)",
                "1–2 phulkas or small portion of rice",
                "Avoid sugary drinks and deep fried sides",
            ],
        },
    ],
};

/// Used for `egg` and any diet preference not present in [`MEALS`].
pub static EGGETARIAN_MEALS: [BlockTemplate; 4] = [
    BlockTemplate {
        name: "Breakfast",
        items: &[
            "Oats with milk + 1–2 boiled eggs",
            "OR 2–3 egg bhurji + 2 phulkas",
            "1 fruit",
        ],
    },
    BlockTemplate {
        name: "Lunch",
        items: &[
            "2–3 phulkas / 1.5 cup rice",
            "1 cup dal",
            "2 boiled eggs / egg curry",
            "Veg sabzi + salad",
        ],
    },
    BlockTemplate {
        name: "Evening Snack",
        items: &[
            "Sprouts / chana + buttermilk",
            "OR peanut butter on toast (thin layer)",
        ],
    },
    BlockTemplate {
        name: "Dinner",
        items: &["Paneer / tofu / egg bhurji", "2 phulkas", "Veg sabzi + salad"],
    },
];

pub static DIET_EXTRAS: phf::Map<&'static str, [&'static str; 3]> = phf_map! {
    "fat-loss" => [
        "Keep sugar low. Avoid daily sweets, soft drinks and heavy fried food.",
        "Use smaller plates, eat slowly and stop when you are ~80% full.",
        "Prioritise protein + veggies in every meal; control oil quantity.",
    ],
    "muscle-gain" => [
        "You may need a small calorie surplus; add extra roti / rice or 1 extra snack if weight is not increasing.",
        "Keep protein high across all meals, not only at night.",
        "If using whey protein, 1–2 scoops per day is enough for most people.",
    ],
};

pub static GENERAL_FITNESS_EXTRAS: [&str; 3] = [
    "Balance: half the plate veggies / salad, quarter protein, quarter carbs.",
    "Stay consistent through the week; small treats are okay but not daily.",
    "Drink water regularly instead of sugary drinks.",
];

pub const DIET_SUMMARY_TAIL: &str =
    "Keep most of your meals simple, repeatable and easy to cook.";

pub static BASE_TIPS: [&str; 4] = [
    "Sleep 7–8 hours every night. Recovery is where the real progress happens.",
    "Water target: roughly 2.5–3.5L per day (more if you sweat a lot).",
    "Warm up 5–10 mins before lifting (light cardio + mobility).",
    "Track your progress: photos, measurements, or notes every 2 weeks.",
];

pub static GOAL_TIPS: phf::Map<&'static str, &'static str> = phf_map! {
    "muscle-gain" => "Log your lifts and try to add a little weight or reps over time (progressive overload).",
    "fat-loss" => "Steps matter! Try to keep daily steps high in addition to gym sessions.",
};

/// Look up the workout template for a goal literal.
pub fn workout_for(goal: &str) -> &'static WorkoutTemplate {
    WORKOUTS.get(goal).unwrap_or(&GENERAL_FITNESS_WORKOUT)
}

/// Look up the meal catalog for a diet literal.
pub fn meals_for(diet_pref: &str) -> &'static [BlockTemplate; 4] {
    MEALS.get(diet_pref).unwrap_or(&EGGETARIAN_MEALS)
}

pub fn extras_for(goal: &str) -> &'static [&'static str; 3] {
    DIET_EXTRAS.get(goal).unwrap_or(&GENERAL_FITNESS_EXTRAS)
}

pub fn goal_tip(goal: &str) -> Option<&'static str> {
    GOAL_TIPS.get(goal).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_keys_use_fallback_templates() {
        assert_eq!(workout_for("yoga").title, GENERAL_FITNESS_WORKOUT.title);
        assert_eq!(meals_for("vegan")[0].items, EGGETARIAN_MEALS[0].items);
        assert_eq!(extras_for(""), &GENERAL_FITNESS_EXTRAS);
        assert_eq!(goal_tip("fitness"), None);
    }

    #[test]
    fn meal_catalogs_share_meal_order() {
        for meals in MEALS.values().chain(std::iter::once(&EGGETARIAN_MEALS)) {
            let names: Vec<_> = meals.iter().map(|m| m.name).collect();
            assert_eq!(names, ["Breakfast", "Lunch", "Evening Snack", "Dinner"]);
            assert!(meals.iter().all(|m| (2..=4).contains(&m.items.len())));
        }
    }

    #[test]
    fn summaries_keep_single_spaces_across_line_breaks() {
        assert_eq!(
            workout_for("fat-loss").summary,
            "Focus on calorie burn + preserving muscle. Start with compound lifts, finish with short but intense cardio."
        );
        assert!(BEGINNER_NOTE.starts_with(" Since"));
        assert!(!DAILY_STEPS_NOTE.contains("  "));
    }
}
