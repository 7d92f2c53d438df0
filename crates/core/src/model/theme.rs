use folio_protocol::ThemeMode;

/// Page-wide light/dark state.
///
/// Built once at startup from whatever the host knows (a stored choice, the
/// system color-scheme preference) and then handed to every consumer.
/// [`ThemeContext::toggle`] is the only way to change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeContext {
    mode: ThemeMode,
}

impl ThemeContext {
    /// A stored choice wins over the system preference.
    pub fn initialize(persisted: Option<ThemeMode>, system_prefers_dark: bool) -> Self {
        let mode = persisted.unwrap_or(if system_prefers_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        });
        tracing::debug!(%mode, "theme initialized");
        Self { mode }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_dark(&self) -> bool {
        self.mode == ThemeMode::Dark
    }

    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        tracing::info!(mode = %self.mode, "theme toggled");
        self.mode
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::initialize(None, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persisted_choice_wins() {
        let ctx = ThemeContext::initialize(Some(ThemeMode::Light), true);
        assert_eq!(ctx.mode(), ThemeMode::Light);
    }

    #[test]
    fn falls_back_to_system_preference() {
        assert!(ThemeContext::initialize(None, true).is_dark());
        assert!(!ThemeContext::initialize(None, false).is_dark());
    }

    #[test]
    fn toggle_flips_and_reports() {
        let mut ctx = ThemeContext::default();
        assert_eq!(ctx.toggle(), ThemeMode::Dark);
        assert_eq!(ctx.toggle(), ThemeMode::Light);
    }
}
