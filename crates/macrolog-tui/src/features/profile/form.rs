//! Body metrics form shared by first-time setup and "update info".

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use macrolog_core::models::{Goal, ProfileInput, Sex, UserProfile};

use crate::common::format_number;

const NAME: usize = 0;
const AGE: usize = 1;
const HEIGHT: usize = 2;
const WEIGHT: usize = 3;
const SEX: usize = 4;
const GOAL: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Decimal,
    Sex,
    Goal,
}

#[derive(Debug, Clone)]
pub struct FormField {
    pub label: &'static str,
    pub kind: FieldKind,
    pub value: String,
}

impl FormField {
    fn new(label: &'static str, kind: FieldKind, value: &str) -> Self {
        Self {
            label,
            kind,
            value: value.to_string(),
        }
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.kind, FieldKind::Sex | FieldKind::Goal)
    }

    /// Text to show for the current value.
    pub fn display(&self) -> String {
        match self.kind {
            FieldKind::Goal => Goal::parse(&self.value)
                .map_or_else(|| self.value.clone(), Goal::label),
            _ => self.value.clone(),
        }
    }

    fn accepts(&self, c: char) -> bool {
        match self.kind {
            FieldKind::Text => !c.is_control(),
            FieldKind::Integer => c.is_ascii_digit(),
            FieldKind::Decimal => c.is_ascii_digit() || (c == '.' && !self.value.contains('.')),
            FieldKind::Sex | FieldKind::Goal => false,
        }
    }

    fn cycle(&mut self, forward: bool) {
        let options: Vec<&'static str> = match self.kind {
            FieldKind::Sex => Sex::all().iter().map(|s| s.as_str()).collect(),
            FieldKind::Goal => Goal::all().iter().map(|g| g.as_str()).collect(),
            _ => return,
        };
        let current = options.iter().position(|o| *o == self.value).unwrap_or(0);
        let next = if forward {
            (current + 1) % options.len()
        } else {
            (current + options.len() - 1) % options.len()
        };
        self.value = options[next].to_string();
    }
}

/// What a key did to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKey {
    Consumed,
    Submit,
    Ignored,
}

#[derive(Debug, Clone)]
pub struct ProfileForm {
    pub fields: Vec<FormField>,
    pub focus: usize,
    pub error: Option<String>,
}

impl ProfileForm {
    /// Empty setup form including the goal.
    pub fn setup() -> Self {
        let mut form = Self::update_info();
        form.fields
            .push(FormField::new("Goal", FieldKind::Goal, Goal::default().as_str()));
        form
    }

    /// Form for editing body metrics; the goal is edited separately.
    pub fn update_info() -> Self {
        Self {
            fields: vec![
                FormField::new("Name", FieldKind::Text, ""),
                FormField::new("Age", FieldKind::Integer, ""),
                FormField::new("Height (cm)", FieldKind::Decimal, ""),
                FormField::new("Weight (kg)", FieldKind::Decimal, ""),
                FormField::new("Sex", FieldKind::Sex, Sex::default().as_str()),
            ],
            focus: 0,
            error: None,
        }
    }

    /// Fills the fields with the profile's raw values.
    pub fn prefill(&mut self, profile: &UserProfile) {
        self.fields[NAME].value.clone_from(&profile.name);
        self.fields[AGE].value = profile.age.to_string();
        self.fields[HEIGHT].value = format_number(profile.height_cm);
        self.fields[WEIGHT].value = format_number(profile.weight_kg);
        self.fields[SEX].value = profile.sex.as_str().to_string();
        if let Some(goal) = self.fields.get_mut(GOAL) {
            goal.value = profile.goal.as_str().to_string();
        }
        self.error = None;
    }

    pub fn focused(&self) -> Option<&FormField> {
        self.fields.get(self.focus)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FormKey {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if !matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            self.error = None;
        }

        match key.code {
            KeyCode::Enter => FormKey::Submit,
            KeyCode::Tab | KeyCode::Down => {
                self.focus = (self.focus + 1) % self.fields.len();
                FormKey::Consumed
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
                FormKey::Consumed
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')
                if self.fields[self.focus].is_choice() =>
            {
                self.fields[self.focus].cycle(key.code != KeyCode::Left);
                FormKey::Consumed
            }
            KeyCode::Backspace => {
                let field = &mut self.fields[self.focus];
                if !field.is_choice() {
                    field.value.pop();
                }
                FormKey::Consumed
            }
            KeyCode::Char(c) if !ctrl => {
                let field = &mut self.fields[self.focus];
                if field.accepts(c) {
                    field.value.push(c);
                }
                FormKey::Consumed
            }
            _ => FormKey::Ignored,
        }
    }

    /// Parses the fields. Goal comes from the form when it has one, else `goal`.
    pub fn to_input(&self, goal: Goal) -> Result<ProfileInput, String> {
        let name = self.fields[NAME].value.trim();
        if name.is_empty() {
            return Err("Name is required".to_string());
        }
        let age = self.fields[AGE]
            .value
            .parse::<u32>()
            .ok()
            .filter(|age| *age > 0)
            .ok_or_else(|| "Age must be a whole number above 0".to_string())?;
        let height_cm = positive(&self.fields[HEIGHT].value)
            .ok_or_else(|| "Height must be a number above 0".to_string())?;
        let weight_kg = positive(&self.fields[WEIGHT].value)
            .ok_or_else(|| "Weight must be a number above 0".to_string())?;
        let sex = Sex::parse(&self.fields[SEX].value).unwrap_or_default();
        let goal = self
            .fields
            .get(GOAL)
            .and_then(|field| Goal::parse(&field.value))
            .unwrap_or(goal);

        Ok(ProfileInput {
            name: name.to_string(),
            age,
            height_cm,
            weight_kg,
            sex,
            goal,
        })
    }
}

fn positive(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}
