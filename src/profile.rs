//! User profile types and conversion from the raw "Your Details" form.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

pub const ALL_GENDERS: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

impl Gender {
    pub fn key(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        ALL_GENDERS.into_iter().find(|g| g.key() == key)
    }
}

/// Training objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Goal {
    FatLoss,
    MuscleGain,
    Fitness,
}

pub const ALL_GOALS: [Goal; 3] = [Goal::FatLoss, Goal::MuscleGain, Goal::Fitness];

impl Goal {
    pub fn key(self) -> &'static str {
        match self {
            Goal::FatLoss => "fat-loss",
            Goal::MuscleGain => "muscle-gain",
            Goal::Fitness => "fitness",
        }
    }

    /// Label used on the report's `Goal:` line.
    pub fn label(self) -> &'static str {
        match self {
            Goal::FatLoss => "Fat Loss",
            Goal::MuscleGain => "Muscle Gain",
            Goal::Fitness => "Fitness / Toning",
        }
    }

    /// Resolve a goal literal. Anything other than `fat-loss` or
    /// `muscle-gain` is treated as general fitness.
    pub fn resolve(key: &str) -> Self {
        match key {
            "fat-loss" => Goal::FatLoss,
            "muscle-gain" => Goal::MuscleGain,
            _ => Goal::Fitness,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Activity {
    Sedentary,
    Light,
    Moderate,
    High,
}

pub const ALL_ACTIVITIES: [Activity; 4] = [
    Activity::Sedentary,
    Activity::Light,
    Activity::Moderate,
    Activity::High,
];

impl Activity {
    pub fn key(self) -> &'static str {
        match self {
            Activity::Sedentary => "sedentary",
            Activity::Light => "light",
            Activity::Moderate => "moderate",
            Activity::High => "high",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        ALL_ACTIVITIES.into_iter().find(|a| a.key() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Experience {
    Beginner,
    Intermediate,
    Advanced,
}

pub const ALL_EXPERIENCE_LEVELS: [Experience; 3] = [
    Experience::Beginner,
    Experience::Intermediate,
    Experience::Advanced,
];

impl Experience {
    pub fn key(self) -> &'static str {
        match self {
            Experience::Beginner => "beginner",
            Experience::Intermediate => "intermediate",
            Experience::Advanced => "advanced",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        ALL_EXPERIENCE_LEVELS.into_iter().find(|e| e.key() == key)
    }
}

/// Dietary restriction governing the meal catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietPref {
    Veg,
    NonVeg,
    Egg,
}

pub const ALL_DIET_PREFS: [DietPref; 3] = [DietPref::Veg, DietPref::NonVeg, DietPref::Egg];

impl DietPref {
    pub fn key(self) -> &'static str {
        match self {
            DietPref::Veg => "veg",
            DietPref::NonVeg => "non-veg",
            DietPref::Egg => "egg",
        }
    }

    /// Short label used on the report overview line.
    pub fn short_label(self) -> &'static str {
        match self {
            DietPref::Veg => "Vegetarian",
            DietPref::NonVeg => "Non-Veg",
            DietPref::Egg => "Eggetarian",
        }
    }

    /// Label embedded in the diet plan title.
    pub fn label(self) -> &'static str {
        match self {
            DietPref::Veg => "Vegetarian",
            DietPref::NonVeg => "Non-Vegetarian",
            DietPref::Egg => "Eggetarian",
        }
    }

    /// Resolve a diet literal. Anything other than `veg` or `non-veg`
    /// (for example `vegan`) falls back to the eggetarian catalog.
    pub fn resolve(key: &str) -> Self {
        match key {
            "veg" => DietPref::Veg,
            "non-veg" => DietPref::NonVeg,
            _ => DietPref::Egg,
        }
    }
}

/// Validated user input for one plan generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: Option<String>,
    pub age: u32,
    pub gender: Gender,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub goal: Goal,
    pub activity: Activity,
    pub experience: Experience,
    pub diet_pref: DietPref,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Age, height or weight could not be parsed.
    InvalidNumber,
    /// A required selection was left empty.
    MissingField(&'static str),
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormError::InvalidNumber => {
                write!(f, "Please enter valid numbers for age, height and weight.")
            }
            FormError::MissingField(_) => write!(f, "Please fill all required fields."),
        }
    }
}

impl std::error::Error for FormError {}

/// Raw text state of the "Your Details" form.
///
/// Selection fields hold the chosen key literal, or an empty string when
/// nothing has been picked yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileForm {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub height: String,
    pub weight: String,
    pub goal: String,
    pub activity: String,
    pub experience: String,
    pub diet_pref: String,
    pub notes: String,
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    if s.is_empty() { None } else { Some(s.to_string()) }
}

fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, FormError> {
    if value.is_empty() {
        Err(FormError::MissingField(field))
    } else {
        Ok(value)
    }
}

impl ProfileForm {
    /// Convert the form into a [`UserProfile`].
    ///
    /// Numbers are checked first, then the required selections.
    pub fn parse(&self) -> Result<UserProfile, FormError> {
        let age: u32 = self.age.trim().parse().map_err(|_| FormError::InvalidNumber)?;
        let height_cm: f64 = self
            .height
            .trim()
            .parse()
            .map_err(|_| FormError::InvalidNumber)?;
        let weight_kg: f64 = self
            .weight
            .trim()
            .parse()
            .map_err(|_| FormError::InvalidNumber)?;

        let gender = required(&self.gender, "gender")?;
        let goal = required(&self.goal, "goal")?;
        let activity = required(&self.activity, "activity")?;
        let experience = required(&self.experience, "experience")?;
        let diet_pref = required(&self.diet_pref, "diet_pref")?;

        Ok(UserProfile {
            name: non_empty(&self.name),
            age,
            gender: Gender::from_key(gender).ok_or(FormError::MissingField("gender"))?,
            height_cm,
            weight_kg,
            goal: Goal::resolve(goal),
            activity: Activity::from_key(activity).ok_or(FormError::MissingField("activity"))?,
            experience: Experience::from_key(experience)
                .ok_or(FormError::MissingField("experience"))?,
            diet_pref: DietPref::resolve(diet_pref),
            notes: non_empty(&self.notes),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ProfileForm {
        ProfileForm {
            name: "  Sam ".into(),
            age: "29".into(),
            gender: "Female".into(),
            height: "165.5".into(),
            weight: " 61 ".into(),
            goal: "fat-loss".into(),
            activity: "light".into(),
            experience: "beginner".into(),
            diet_pref: "veg".into(),
            notes: String::new(),
        }
    }

    #[test]
    fn parse_complete_form() {
        let p = filled_form().parse().unwrap();
        assert_eq!(p.name.as_deref(), Some("Sam"));
        assert_eq!(p.age, 29);
        assert_eq!(p.gender, Gender::Female);
        assert_eq!(p.height_cm, 165.5);
        assert_eq!(p.weight_kg, 61.0);
        assert_eq!(p.goal, Goal::FatLoss);
        assert_eq!(p.activity, Activity::Light);
        assert_eq!(p.experience, Experience::Beginner);
        assert_eq!(p.diet_pref, DietPref::Veg);
        assert_eq!(p.notes, None);
    }

    #[test]
    fn invalid_numbers_are_reported() {
        let mut form = filled_form();
        form.age = "twenty".into();
        assert_eq!(form.parse(), Err(FormError::InvalidNumber));

        let mut form = filled_form();
        form.height = String::new();
        assert_eq!(form.parse(), Err(FormError::InvalidNumber));

        let mut form = filled_form();
        form.weight = "70kg".into();
        let err = form.parse().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please enter valid numbers for age, height and weight."
        );
    }

    #[test]
    fn numbers_checked_before_selections() {
        let mut form = filled_form();
        form.age = "x".into();
        form.goal.clear();
        assert_eq!(form.parse(), Err(FormError::InvalidNumber));
    }

    #[test]
    fn missing_selection_is_reported() {
        let mut form = filled_form();
        form.diet_pref.clear();
        let err = form.parse().unwrap_err();
        assert_eq!(err, FormError::MissingField("diet_pref"));
        assert_eq!(err.to_string(), "Please fill all required fields.");
    }

    #[test]
    fn unknown_goal_and_diet_fall_back() {
        let mut form = filled_form();
        form.goal = "strength".into();
        form.diet_pref = "vegan".into();
        let p = form.parse().unwrap();
        assert_eq!(p.goal, Goal::Fitness);
        assert_eq!(p.diet_pref, DietPref::Egg);
    }

    #[test]
    fn keys_roundtrip_through_serde() {
        assert_eq!(serde_json::to_string(&Goal::MuscleGain).unwrap(), "\"muscle-gain\"");
        assert_eq!(serde_json::to_string(&DietPref::NonVeg).unwrap(), "\"non-veg\"");
        for g in ALL_GOALS {
            assert_eq!(Goal::resolve(g.key()), g);
        }
        for d in ALL_DIET_PREFS {
            assert_eq!(DietPref::resolve(d.key()), d);
        }
        for a in ALL_ACTIVITIES {
            assert_eq!(Activity::from_key(a.key()), Some(a));
        }
        assert_eq!(Experience::from_key("expert"), None);
    }
}
