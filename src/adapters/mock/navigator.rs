use crate::domain::Navigation;
use crate::ports::navigator::Navigator as NavigatorTrait;
use std::sync::Mutex;

/// Mock implementation of Navigator
///
/// Records navigations in order instead of switching pages.
#[allow(dead_code)]
pub struct Navigator {
    history: Mutex<Vec<Navigation>>,
}

#[allow(dead_code)]
impl Navigator {
    pub fn new() -> Self {
        Self {
            history: Mutex::new(Vec::new()),
        }
    }

    pub fn history(&self) -> Vec<Navigation> {
        self.history.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<Navigation> {
        self.history.lock().unwrap().last().cloned()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigatorTrait for Navigator {
    fn navigate(&self, navigation: Navigation) {
        self.history.lock().unwrap().push(navigation);
    }
}
