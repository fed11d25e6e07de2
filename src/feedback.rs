//! Status message shown above each form

/// Outcome of the last user action on a component
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Feedback {
    /// Nothing to show yet
    #[default]
    None,
    Success(String),
    Error(String),
}

impl Feedback {
    pub fn success(text: impl Into<String>) -> Self {
        Feedback::Success(text.into())
    }

    pub fn error(text: impl Into<String>) -> Self {
        Feedback::Error(text.into())
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Feedback::None => None,
            Feedback::Success(text) | Feedback::Error(text) => Some(text),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Feedback::Error(_))
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Feedback::Error(_) => "feedback feedback-error",
            _ => "feedback feedback-success",
        }
    }
}
