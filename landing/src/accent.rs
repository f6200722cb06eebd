//! Accent color families used by cards, step badges and table headings.

/// Closed set of accent colors. Each maps to an `accent-*` CSS modifier
/// defined in [`crate::styles::LANDING_CSS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accent {
    Blue,
    Teal,
    Purple,
    Orange,
}

impl Accent {
    /// CSS modifier class, e.g. `accent-teal`.
    pub fn class(&self) -> &'static str {
        match self {
            Accent::Blue => "accent-blue",
            Accent::Teal => "accent-teal",
            Accent::Purple => "accent-purple",
            Accent::Orange => "accent-orange",
        }
    }

    /// `base` followed by this accent's modifier.
    pub fn with(&self, base: &str) -> String {
        format!("{} {}", base, self.class())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_are_distinct_modifiers() {
        let classes = [Accent::Blue, Accent::Teal, Accent::Purple, Accent::Orange].map(|a| a.class());
        assert_eq!(classes, ["accent-blue", "accent-teal", "accent-purple", "accent-orange"]);
    }

    #[test]
    fn with_appends_modifier() {
        assert_eq!(Accent::Purple.with("step-card"), "step-card accent-purple");
    }
}
