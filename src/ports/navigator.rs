use crate::domain::Navigation;

/// Navigator port for page transitions.
///
/// Navigation is fire-and-forget: the destination page reads the attached
/// state once, and the form is discarded after navigating away.
pub trait Navigator: Send + Sync {
    fn navigate(&self, navigation: Navigation);
}
