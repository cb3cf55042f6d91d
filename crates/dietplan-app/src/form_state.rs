//! Profile form state
//!
//! Seven free-text fields plus two buttons share a single focus ring. Field
//! values are kept exactly as typed; numeric parsing happens only when the
//! payload is built.

use dietplan_core::{parse_float_prefix, parse_int_prefix, UserProfile};

use crate::state::RequestStatus;

/// One editable field of the profile form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Age,
    Height,
    Weight,
    Goal,
    Region,
    Cuisine,
}

impl FormField {
    pub const ALL: [FormField; 7] = [
        FormField::Name,
        FormField::Age,
        FormField::Height,
        FormField::Weight,
        FormField::Goal,
        FormField::Region,
        FormField::Cuisine,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Age => "Age",
            FormField::Height => "Height (cm)",
            FormField::Weight => "Weight (kg)",
            FormField::Goal => "Goal",
            FormField::Region => "Region",
            FormField::Cuisine => "Cuisine Preference",
        }
    }

    /// Hint shown while the field is empty
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            FormField::Name => Some("Your name"),
            FormField::Age => Some("Your age"),
            FormField::Goal => Some("e.g., Weight Loss"),
            _ => None,
        }
    }
}

/// Focusable element of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormFocus {
    Field(FormField),
    /// "Generate 7-Day Plan"
    GenerateButton,
    /// "Nutrition Analyzer"
    NutritionButton,
}

impl Default for FormFocus {
    fn default() -> Self {
        FormFocus::Field(FormField::Name)
    }
}

impl FormFocus {
    const RING: [FormFocus; 9] = [
        FormFocus::Field(FormField::Name),
        FormFocus::Field(FormField::Age),
        FormFocus::Field(FormField::Height),
        FormFocus::Field(FormField::Weight),
        FormFocus::Field(FormField::Goal),
        FormFocus::Field(FormField::Region),
        FormFocus::Field(FormField::Cuisine),
        FormFocus::GenerateButton,
        FormFocus::NutritionButton,
    ];

    fn position(&self) -> usize {
        Self::RING.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::RING[(self.position() + 1) % Self::RING.len()]
    }

    pub fn prev(&self) -> Self {
        let len = Self::RING.len();
        Self::RING[(self.position() + len - 1) % len]
    }
}

/// Raw text of the seven profile fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub age: String,
    pub height: String,
    pub weight: String,
    pub goal: String,
    pub region: String,
    pub cuisine: String,
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: "30".to_string(),
            height: "175".to_string(),
            weight: "78".to_string(),
            goal: "Weight Loss".to_string(),
            region: "South India".to_string(),
            cuisine: "Vegetarian".to_string(),
        }
    }
}

impl ProfileForm {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Age => &self.age,
            FormField::Height => &self.height,
            FormField::Weight => &self.weight,
            FormField::Goal => &self.goal,
            FormField::Region => &self.region,
            FormField::Cuisine => &self.cuisine,
        }
    }

    pub fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Age => &mut self.age,
            FormField::Height => &mut self.height,
            FormField::Weight => &mut self.weight,
            FormField::Goal => &mut self.goal,
            FormField::Region => &mut self.region,
            FormField::Cuisine => &mut self.cuisine,
        }
    }

    /// Build the request payload from the current field values
    ///
    /// Unparseable numbers are carried as invalid values rather than
    /// rejected.
    pub fn to_profile(&self) -> UserProfile {
        UserProfile {
            name: self.name.clone(),
            age: parse_int_prefix(&self.age),
            goal: self.goal.clone(),
            height_cm: parse_float_prefix(&self.height),
            current_weight_kg: parse_float_prefix(&self.weight),
            region: self.region.clone(),
            cuisine_preference: self.cuisine.clone(),
        }
    }
}

/// Home screen state
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub fields: ProfileForm,
    pub focus: FormFocus,
    pub status: RequestStatus,
}

impl FormState {
    pub fn focused_field(&self) -> Option<FormField> {
        match self.focus {
            FormFocus::Field(field) => Some(field),
            _ => None,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if let Some(field) = self.focused_field() {
            self.fields.value_mut(field).push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.focused_field() {
            self.fields.value_mut(field).pop();
        }
    }

    pub fn clear_field(&mut self) {
        if let Some(field) = self.focused_field() {
            self.fields.value_mut(field).clear();
        }
    }
}
