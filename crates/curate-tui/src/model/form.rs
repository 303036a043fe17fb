use curate_core::{FetchState, ResearcherContext, is_valid_category};

/// Which form field currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    FullName,
    SubjectArea,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            Self::FullName => Self::SubjectArea,
            Self::SubjectArea => Self::FullName,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::SubjectArea => "Subject Area",
        }
    }
}

/// State of the researcher form screen.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub full_name: String,
    pub subject_area: String,
    pub focus: FormField,
    /// Synchronous validation error, shown inline until the next edit.
    pub validation_error: Option<String>,
    /// Flight state of register-then-fetch. Loading blocks resubmission.
    pub submission: FetchState<()>,
}

impl FormState {
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    fn focused_buffer(&mut self) -> &mut String {
        match self.focus {
            FormField::FullName => &mut self.full_name,
            FormField::SubjectArea => &mut self.subject_area,
        }
    }

    /// Apply a typed character ('\x08' = backspace) to the focused field.
    /// Any edit clears a stale validation error.
    pub fn input(&mut self, ch: char) {
        let buffer = self.focused_buffer();
        if ch == '\x08' {
            buffer.pop();
        } else if !ch.is_control() {
            buffer.push(ch);
        }
        self.validation_error = None;
    }

    /// Validate the form for submission. On success returns the typed
    /// payload for the next screen; on failure records the inline error.
    /// No network call may be issued unless this returns `Some`.
    pub fn validate(&mut self) -> Option<ResearcherContext> {
        let name = self.full_name.trim();
        if name.is_empty() {
            self.validation_error = Some("Please enter your full name.".to_string());
            return None;
        }
        let area = self.subject_area.trim();
        if !is_valid_category(area) {
            self.validation_error = Some(format!(
                "'{area}' is not a valid arXiv subject area (e.g. cs.AI, stat.ML)."
            ));
            return None;
        }
        Some(ResearcherContext {
            author_name: name.to_string(),
            subject_area: area.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_edits_focused_field_and_clears_error() {
        let mut form = FormState::default();
        form.validation_error = Some("old".into());
        form.input('A');
        assert_eq!(form.full_name, "A");
        assert!(form.validation_error.is_none());

        form.focus_next();
        form.input('c');
        form.input('s');
        assert_eq!(form.subject_area, "cs");

        form.input('\x08');
        assert_eq!(form.subject_area, "c");
    }

    #[test]
    fn validate_rejects_unknown_subject_area() {
        let mut form = FormState {
            full_name: "Ada Lovelace".into(),
            subject_area: "xx.ZZ".into(),
            ..FormState::default()
        };
        assert!(form.validate().is_none());
        assert!(
            form.validation_error
                .as_deref()
                .is_some_and(|e| e.contains("xx.ZZ"))
        );
    }

    #[test]
    fn validate_rejects_empty_name() {
        let mut form = FormState {
            subject_area: "cs.AI".into(),
            ..FormState::default()
        };
        assert!(form.validate().is_none());
    }

    #[test]
    fn validate_trims_and_builds_context() {
        let mut form = FormState {
            full_name: " Ada Lovelace ".into(),
            subject_area: " cs.AI ".into(),
            ..FormState::default()
        };
        let ctx = form.validate().unwrap();
        assert_eq!(ctx.author_name, "Ada Lovelace");
        assert_eq!(ctx.subject_area, "cs.AI");
    }
}
