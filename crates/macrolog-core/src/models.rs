//! Wire types shared with the nutrition API.
//!
//! Everything here is owned by the backend. The client only ever holds
//! cached copies and replaces them wholesale with what the server returns.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Biological sex used by the target calculation on the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    #[default]
    Male,
    Female,
}

impl Sex {
    pub fn all() -> &'static [Sex] {
        &[Sex::Male, Sex::Female]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }

    /// Parses the wire spelling (case-insensitive, surrounding whitespace ignored).
    pub fn parse(value: &str) -> Option<Sex> {
        Self::all()
            .iter()
            .copied()
            .find(|sex| sex.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

/// Goal the calorie target is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    LoseFat,
    #[default]
    Maintain,
    BuildMuscle,
}

impl Goal {
    /// Returns all goals in chip order.
    pub fn all() -> &'static [Goal] {
        &[Goal::LoseFat, Goal::Maintain, Goal::BuildMuscle]
    }

    /// Wire spelling, e.g. `lose_fat`.
    pub fn as_str(self) -> &'static str {
        match self {
            Goal::LoseFat => "lose_fat",
            Goal::Maintain => "maintain",
            Goal::BuildMuscle => "build_muscle",
        }
    }

    /// Display label: the wire spelling with underscores shown as spaces.
    pub fn label(self) -> String {
        self.as_str().replace('_', " ")
    }

    pub fn parse(value: &str) -> Option<Goal> {
        let normalized = value.trim().replace(' ', "_");
        Self::all()
            .iter()
            .copied()
            .find(|goal| goal.as_str().eq_ignore_ascii_case(&normalized))
    }
}

/// Body metrics and goal as submitted to `POST /user/profile`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileInput {
    pub name: String,
    pub age: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub sex: Sex,
    pub goal: Goal,
}

/// The signed-in user's profile including server-derived targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub age: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub sex: Sex,
    pub goal: Goal,
    pub calorie_target: f64,
    pub protein_target: f64,
}

impl UserProfile {
    /// Returns the full submittable profile with a different goal.
    pub fn with_goal(&self, goal: Goal) -> ProfileInput {
        ProfileInput {
            goal,
            ..self.to_input()
        }
    }

    pub fn to_input(&self) -> ProfileInput {
        ProfileInput {
            name: self.name.clone(),
            age: self.age,
            height_cm: self.height_cm,
            weight_kg: self.weight_kg,
            sex: self.sex,
            goal: self.goal,
        }
    }
}

/// A food from the server's database. Macros are per 100 g.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub id: i64,
    pub name: String,
    pub calories_per_100g: f64,
    pub protein_per_100g: f64,
    pub carbs_per_100g: f64,
    pub fat_per_100g: f64,
}

/// One logged food with server-denormalized nutrition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: i64,
    pub food_id: i64,
    pub grams: f64,
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    #[serde(default)]
    pub carbs: Option<f64>,
    #[serde(default)]
    pub fat: Option<f64>,
    pub datetime: String,
}

impl LogEntry {
    /// Local calendar date of the entry, if the timestamp parses.
    ///
    /// Offset-carrying timestamps are converted to local time. Naive timestamps
    /// are taken as already local.
    pub fn local_date(&self) -> Option<NaiveDate> {
        let raw = self.datetime.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Local).date_naive());
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
            .map(|dt| dt.date())
            .ok()
    }
}

/// Summed nutrition for the day, computed by the server.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Totals {
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub carbs: f64,
    #[serde(default)]
    pub fat: f64,
}

/// Today's log bundle. `logs[0]` is the latest entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DailyLogBundle {
    #[serde(default)]
    pub logs: Vec<LogEntry>,
    #[serde(default)]
    pub totals: Totals,
}

impl DailyLogBundle {
    pub fn latest(&self) -> Option<&LogEntry> {
        self.logs.first()
    }

    pub fn entry(&self, id: i64) -> Option<&LogEntry> {
        self.logs.iter().find(|entry| entry.id == id)
    }
}

/// Body for both `POST /log/add` and `PUT /log/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogRequest {
    pub food_id: i64,
    pub grams: f64,
}

/// Response of `POST /chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiOverviewPayload {
    pub progress: String,
    pub improvement: String,
    pub encouragement: String,
}

/// A food from the database that grounds a menu recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodContext {
    pub food_name: String,
    pub calories: f64,
    pub protein: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuRecommendation {
    pub name: String,
    pub reasoning: String,
    #[serde(default)]
    pub context: Vec<FoodContext>,
}

/// Response of `POST /menu/analyze`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MenuAnalysis {
    #[serde(default)]
    pub recommendations: Vec<MenuRecommendation>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_profile_deserializes_server_shape() {
        let profile: UserProfile = serde_json::from_value(json!({
            "id": 1,
            "name": "Sam",
            "height_cm": 180.0,
            "weight_kg": 80.5,
            "age": 30,
            "sex": "male",
            "goal": "lose_fat",
            "calorie_target": 1796.0,
            "protein_target": 181.0
        }))
        .unwrap();

        assert_eq!(profile.goal, Goal::LoseFat);
        assert_eq!(profile.sex, Sex::Male);
        assert!((profile.weight_kg - 80.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_with_goal_keeps_other_fields() {
        let profile = UserProfile {
            id: Some(1),
            name: "Ana".to_string(),
            age: 28,
            height_cm: 165.0,
            weight_kg: 60.0,
            sex: Sex::Female,
            goal: Goal::Maintain,
            calorie_target: 1800.0,
            protein_target: 135.0,
        };

        let input = profile.with_goal(Goal::BuildMuscle);
        assert_eq!(input.goal, Goal::BuildMuscle);
        assert_eq!(input.name, "Ana");
        assert_eq!(input.sex, Sex::Female);
    }

    #[test]
    fn test_goal_label_replaces_underscore() {
        assert_eq!(Goal::LoseFat.label(), "lose fat");
        assert_eq!(Goal::BuildMuscle.label(), "build muscle");
        assert_eq!(Goal::Maintain.label(), "maintain");
    }

    #[test]
    fn test_goal_and_sex_parse() {
        assert_eq!(Goal::parse("Lose fat"), Some(Goal::LoseFat));
        assert_eq!(Goal::parse("build_muscle"), Some(Goal::BuildMuscle));
        assert_eq!(Goal::parse("bulk"), None);
        assert_eq!(Sex::parse(" Female "), Some(Sex::Female));
        assert_eq!(Sex::parse("other"), None);
    }

    #[test]
    fn test_bundle_tolerates_missing_macros() {
        let bundle: DailyLogBundle = serde_json::from_value(json!({
            "logs": [{
                "id": 7,
                "food_id": 3,
                "grams": 150.0,
                "name": "Oats",
                "calories": 580.5,
                "protein": 20.1,
                "datetime": "2025-03-01T08:15:00"
            }],
            "totals": {"calories": 580.5, "protein": 20.1},
            "calorie_target": 2000.0
        }))
        .unwrap();

        assert_eq!(bundle.latest().map(|e| e.id), Some(7));
        assert!(bundle.logs[0].carbs.is_none());
        assert!((bundle.totals.fat - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_local_date_naive_timestamp() {
        let entry = LogEntry {
            id: 1,
            food_id: 1,
            grams: 100.0,
            name: "Rice".to_string(),
            calories: 130.0,
            protein: 2.7,
            carbs: None,
            fat: None,
            datetime: "2025-03-01T23:59:10.123456".to_string(),
        };
        assert_eq!(
            entry.local_date(),
            NaiveDate::from_ymd_opt(2025, 3, 1)
        );
    }

    #[test]
    fn test_local_date_garbage_is_none() {
        let entry = LogEntry {
            id: 1,
            food_id: 1,
            grams: 100.0,
            name: "Rice".to_string(),
            calories: 130.0,
            protein: 2.7,
            carbs: None,
            fat: None,
            datetime: "yesterday".to_string(),
        };
        assert!(entry.local_date().is_none());
    }
}
