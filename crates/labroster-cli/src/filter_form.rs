use labroster_types::{Filter, FilterField};

pub const EMPTY_VALUE_MESSAGE: &str = "Please enter a value to search.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Editing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    /// Fetch with this filter (empty on reset).
    Apply(Filter),
    /// Submit refused; the validation message is set.
    Rejected,
}

/// Roster search form: a field choice plus a search value.
#[derive(Debug, Clone)]
pub struct FilterForm {
    field: FilterField,
    value: String,
    state: FormState,
    validation_error: Option<&'static str>,
}

impl FilterForm {
    pub fn new() -> Self {
        Self {
            field: FilterField::default(),
            value: String::new(),
            state: FormState::Idle,
            validation_error: None,
        }
    }

    pub fn field(&self) -> FilterField {
        self.field
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn validation_error(&self) -> Option<&'static str> {
        self.validation_error
    }

    pub fn can_submit(&self) -> bool {
        !self.value.trim().is_empty()
    }

    pub fn toggle_field(&mut self) {
        self.field = self.field.toggled();
    }

    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
        self.state = FormState::Editing;
    }

    pub fn pop_char(&mut self) {
        self.value.pop();
        self.state = FormState::Editing;
    }

    pub fn submit(&mut self) -> FormAction {
        if !self.can_submit() {
            self.validation_error = Some(EMPTY_VALUE_MESSAGE);
            return FormAction::Rejected;
        }

        self.validation_error = None;
        self.state = FormState::Idle;
        FormAction::Apply(Filter::by(self.field, self.value.trim()))
    }

    pub fn reset(&mut self) -> FormAction {
        self.value.clear();
        self.validation_error = None;
        self.state = FormState::Idle;
        FormAction::Apply(Filter::none())
    }
}

impl Default for FilterForm {
    fn default() -> Self {
        Self::new()
    }
}
