// SPDX-License-Identifier: MPL-2.0
//! Flash message categories.

/// Category of a flash message.
///
/// The set is closed: the four labels producers emit, plus [`Other`] for
/// everything else. Label resolution never fails; unrecognized or missing
/// labels land on `Other`, which carries the neutral fallback style.
///
/// [`Other`]: Category::Other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    Success,
    Danger,
    Info,
    Warning,
    /// Any label outside the known set.
    #[default]
    Other,
}

impl Category {
    /// All categories in display-priority order, fallback last.
    pub const ALL: [Category; 5] = [
        Category::Success,
        Category::Danger,
        Category::Info,
        Category::Warning,
        Category::Other,
    ];

    /// Resolves a raw label to a category.
    ///
    /// Matching is case-sensitive: producers emit lowercase labels, and any
    /// other spelling is treated as unrecognized rather than corrected.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "success" => Category::Success,
            "danger" => Category::Danger,
            "info" => Category::Info,
            "warning" => Category::Warning,
            _ => Category::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_resolve_to_their_category() {
        assert_eq!(Category::from_label("success"), Category::Success);
        assert_eq!(Category::from_label("danger"), Category::Danger);
        assert_eq!(Category::from_label("info"), Category::Info);
        assert_eq!(Category::from_label("warning"), Category::Warning);
    }

    #[test]
    fn unknown_labels_fall_back_to_other() {
        assert_eq!(Category::from_label("error"), Category::Other);
        assert_eq!(Category::from_label("notice"), Category::Other);
        assert_eq!(Category::from_label(""), Category::Other);
    }

    #[test]
    fn label_matching_is_case_sensitive() {
        assert_eq!(Category::from_label("Success"), Category::Other);
        assert_eq!(Category::from_label("WARNING"), Category::Other);
    }

    #[test]
    fn default_category_is_other() {
        assert_eq!(Category::default(), Category::Other);
    }

    #[test]
    fn all_lists_every_category_once() {
        for (i, a) in Category::ALL.iter().enumerate() {
            for b in &Category::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(Category::ALL.len(), 5);
    }
}
