//! Output verbosity mode.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show all output including installer output.
    Verbose,
    /// Show progress, status, and installer output.
    #[default]
    Normal,
    /// Capture installer output; show spinners + final status.
    Quiet,
    /// Show nothing except errors.
    Silent,
}

impl OutputMode {
    /// Check if this mode lets the installer inherit our stdio.
    pub fn shows_install_output(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows progress spinners.
    pub fn shows_spinners(&self) -> bool {
        matches!(self, Self::Quiet)
    }

    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Silent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_mode_shows_install_output() {
        assert!(OutputMode::Verbose.shows_install_output());
        assert!(OutputMode::Normal.shows_install_output());
        assert!(!OutputMode::Quiet.shows_install_output());
        assert!(!OutputMode::Silent.shows_install_output());
    }

    #[test]
    fn output_mode_shows_spinners() {
        assert!(!OutputMode::Verbose.shows_spinners());
        assert!(!OutputMode::Normal.shows_spinners());
        assert!(OutputMode::Quiet.shows_spinners());
        assert!(!OutputMode::Silent.shows_spinners());
    }

    #[test]
    fn output_mode_shows_status() {
        assert!(OutputMode::Verbose.shows_status());
        assert!(OutputMode::Normal.shows_status());
        assert!(OutputMode::Quiet.shows_status());
        assert!(!OutputMode::Silent.shows_status());
    }

    #[test]
    fn output_mode_default() {
        assert_eq!(OutputMode::default(), OutputMode::Normal);
    }
}
