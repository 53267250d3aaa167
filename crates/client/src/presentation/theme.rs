//! Category highlighting for narration lines.
use crossterm::style::{Color, Stylize, style};

/// Kind of event a narration line reports.
///
/// Detection follows declaration order, so a kill is never shown as a
/// plain attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Kill,
    Winner,
    Move,
    WeaponChange,
    Attack,
    Enter,
}

impl Category {
    pub fn detect(line: &str) -> Option<Self> {
        let line = line.to_lowercase();

        if line.contains("killed") {
            Some(Category::Kill)
        } else if line.contains("winner") {
            Some(Category::Winner)
        } else if line.contains("moved") {
            Some(Category::Move)
        } else if line
            .find("changed")
            .is_some_and(|at| line[at..].contains("weapon"))
        {
            Some(Category::WeaponChange)
        } else if line.contains("attack") {
            Some(Category::Attack)
        } else if line.contains("entered") {
            Some(Category::Enter)
        } else {
            None
        }
    }

    pub fn color(self) -> Color {
        match self {
            Category::Kill => Color::DarkRed,
            Category::Winner => Color::DarkYellow,
            Category::Move => Color::DarkBlue,
            Category::WeaponChange => Color::DarkCyan,
            Category::Attack => Color::DarkMagenta,
            Category::Enter => Color::DarkGreen,
        }
    }
}

/// Applies category colors to narration lines.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    enabled: bool,
}

impl Theme {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn paint(&self, line: &str) -> String {
        match Category::detect(line) {
            Some(category) if self.enabled => style(line).with(category.color()).to_string(),
            _ => line.to_owned(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_matching_category_wins() {
        let cases = [
            ("Player 1 killed player 2 with sword", Some(Category::Kill)),
            ("Game Over\nPlayer 1 is the winner", Some(Category::Winner)),
            ("Player 1 moved to position [2:3]", Some(Category::Move)),
            ("Player 1 changed his weapon to axe", Some(Category::WeaponChange)),
            ("Player 1 attacked player 2 with bow", Some(Category::Attack)),
            ("Player 3 entered world as mage", Some(Category::Enter)),
            ("Something indescribable has happened", None),
        ];

        for (line, expected) in cases {
            assert_eq!(Category::detect(line), expected, "{line}");
        }
    }

    #[test]
    fn weapon_change_needs_both_words_in_order() {
        assert_eq!(Category::detect("weapon changed"), None);
    }

    #[test]
    fn paint_wraps_known_lines_only() {
        let theme = Theme::default();
        let painted = theme.paint("Player 1 moved to position [0:0]");

        assert_ne!(painted, "Player 1 moved to position [0:0]");
        assert!(painted.contains("Player 1 moved to position [0:0]"));
        assert!(painted.starts_with('\u{1b}'));
        assert_eq!(
            theme.paint("Something indescribable has happened"),
            "Something indescribable has happened"
        );
    }

    #[test]
    fn plain_theme_leaves_lines_alone() {
        let line = "Player 1 killed player 2 with sword";
        assert_eq!(Theme::plain().paint(line), line);
    }
}
