//! Pure view logic for the profile screen

use crate::state::ProfileState;

/// Text shown while the first fetch is pending.
pub const LOADING_TEXT: &str = "Loading...";

/// How a line should be styled by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Normal,
    /// Shown in red
    Error,
}

/// One line of the profile screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewLine {
    pub text: String,
    pub style: LineStyle,
}

impl ViewLine {
    fn normal(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: LineStyle::Normal,
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: LineStyle::Error,
        }
    }
}

/// Render a state snapshot.
///
/// A loaded profile wins over an error message; with neither set the
/// loading text is shown.
pub fn render(state: &ProfileState) -> Vec<ViewLine> {
    if let Some(profile) = state.profile() {
        vec![
            ViewLine::normal(format!("First Name: {}", profile.first_name())),
            ViewLine::normal(format!("Last Name: {}", profile.last_name())),
            ViewLine::normal(format!("Age: {}", profile.age())),
            ViewLine::normal(format!("Post Code: {}", profile.post_code())),
        ]
    } else if let Some(message) = state.error_message() {
        vec![ViewLine::error(message)]
    } else {
        vec![ViewLine::normal(LOADING_TEXT)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FAILED_TO_LOAD;
    use profile_core::UserProfile;
    use proptest::prelude::*;

    #[test]
    fn test_render_loaded_profile() {
        let lines = render(&ProfileState::loaded(UserProfile::new(
            "John", "Doe", 30, "12345",
        )));

        let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "First Name: John",
                "Last Name: Doe",
                "Age: 30",
                "Post Code: 12345"
            ]
        );
        assert!(lines.iter().all(|l| l.style == LineStyle::Normal));
    }

    #[test]
    fn test_render_error_in_red() {
        let lines = render(&ProfileState::failed(FAILED_TO_LOAD));
        assert_eq!(lines, vec![ViewLine::error(FAILED_TO_LOAD)]);
    }

    #[test]
    fn test_render_pending() {
        assert_eq!(
            render(&ProfileState::pending()),
            vec![ViewLine::normal(LOADING_TEXT)]
        );
    }

    proptest! {
        #[test]
        fn prop_loaded_profile_renders_every_field(
            first in "[A-Za-z]{1,12}",
            last in "[A-Za-z]{1,12}",
            age in 0u32..150,
            post_code in "[0-9]{5}",
        ) {
            let profile = UserProfile::new(first.clone(), last.clone(), age, post_code.clone());
            let lines = render(&ProfileState::loaded(profile));

            prop_assert_eq!(lines.len(), 4);
            prop_assert!(lines[0].text.ends_with(&first));
            prop_assert!(lines[1].text.ends_with(&last));
            prop_assert_eq!(&lines[2].text, &format!("Age: {}", age));
            prop_assert!(lines[3].text.ends_with(&post_code));
        }

        #[test]
        fn prop_error_renders_single_error_line(message in ".{1,40}") {
            let lines = render(&ProfileState::failed(message.clone()));
            prop_assert_eq!(lines, vec![ViewLine::error(message)]);
        }
    }
}
