//! Profile card and goal chip projections.

use macrolog_core::models::{Goal, UserProfile};

use crate::common::{format_number, round_display};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileCard {
    pub name: String,
    pub age: String,
    pub height: String,
    pub weight: String,
    pub sex: String,
    pub goal: String,
    pub calorie_target: i64,
    pub protein_target: i64,
}

pub fn project_profile(profile: &UserProfile) -> ProfileCard {
    ProfileCard {
        name: profile.name.clone(),
        age: profile.age.to_string(),
        height: format!("{} cm", format_number(profile.height_cm)),
        weight: format!("{} kg", format_number(profile.weight_kg)),
        sex: profile.sex.as_str().to_string(),
        goal: profile.goal.label(),
        calorie_target: round_display(profile.calorie_target),
        protein_target: round_display(profile.protein_target),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalChip {
    pub goal: Goal,
    pub label: String,
    pub selected: bool,
}

/// One chip per goal; exactly the `selected` one is highlighted.
pub fn project_goal_chips(selected: Goal) -> Vec<GoalChip> {
    Goal::all()
        .iter()
        .map(|goal| GoalChip {
            goal: *goal,
            label: goal.label(),
            selected: *goal == selected,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use macrolog_core::models::Sex;

    use super::*;

    #[test]
    fn test_card_formats_values() {
        let card = project_profile(&UserProfile {
            id: Some(3),
            name: "Jo".to_string(),
            age: 41,
            height_cm: 172.5,
            weight_kg: 80.0,
            sex: Sex::Male,
            goal: Goal::BuildMuscle,
            calorie_target: 2799.6,
            protein_target: 159.5,
        });
        assert_eq!(card.height, "172.5 cm");
        assert_eq!(card.weight, "80 kg");
        assert_eq!(card.goal, "build muscle");
        assert_eq!(card.calorie_target, 2800);
        assert_eq!(card.protein_target, 160);
    }

    #[test]
    fn test_exactly_one_chip_selected() {
        let chips = project_goal_chips(Goal::Maintain);
        assert_eq!(chips.len(), Goal::all().len());
        let selected: Vec<Goal> = chips.iter().filter(|c| c.selected).map(|c| c.goal).collect();
        assert_eq!(selected, vec![Goal::Maintain]);
    }
}
