//! Screen-level views: the welcome screen and a single step.

use std::{fmt, path::Path};

use crate::{
    collection::Description,
    models::{NavigationState, Step},
};

/// A full step screen: header, image location, description and navigation.
pub struct StepView<'a> {
    pub step: &'a Step,
    pub description: &'a Description,
    pub total: usize,
    pub navigation: NavigationState,
}

impl fmt::Display for StepView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Step {} of {}", self.step.number(), self.total)?;
        writeln!(f)?;
        writeln!(f, "- Image: {}", self.step.image_name())?;
        writeln!(f, "- Path: {}", self.step.image_path.display())?;
        writeln!(f)?;
        for line in self.description.to_string().lines() {
            writeln!(f, "{line}")?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.navigation)
    }
}

/// The screen shown before the first step, or when there are no steps.
pub struct WelcomeView<'a> {
    pub root: &'a Path,
    pub total: usize,
}

impl fmt::Display for WelcomeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Assembly instructions")?;
        writeln!(f)?;
        if self.total == 0 {
            writeln!(f, "No assembly steps found in {}", self.root.display())
        } else {
            let noun = if self.total == 1 { "step" } else { "steps" };
            writeln!(f, "{} {noun} available. Go forward to begin.", self.total)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::models::{navigation_state, Position};

    #[test]
    fn test_step_view_with_text() {
        let step = Step::from_image(1, PathBuf::from("res/02-legs.png"));
        let description = Description::Text("Attach the legs.\nUse four bolts.".to_string());
        let view = StepView {
            step: &step,
            description: &description,
            total: 2,
            navigation: navigation_state(Position::Step(1), 2),
        };
        let output = view.to_string();
        assert!(output.starts_with("# Step 2 of 2\n"));
        assert!(output.contains("- Image: 02-legs.png"));
        assert!(output.contains("Attach the legs.\nUse four bolts."));
        assert!(output.contains("◀ prev | next ▷"));
    }

    #[test]
    fn test_welcome_view_empty_state() {
        let view = WelcomeView {
            root: Path::new("/srv/resources"),
            total: 0,
        };
        assert!(view
            .to_string()
            .contains("No assembly steps found in /srv/resources"));
    }

    #[test]
    fn test_welcome_view_counts_steps() {
        let view = WelcomeView {
            root: Path::new("res"),
            total: 1,
        };
        assert!(view.to_string().contains("1 step available."));
    }
}
