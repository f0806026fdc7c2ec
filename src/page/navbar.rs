/// Burger button of a collapsible navbar.
///
/// Clicking toggles the button itself and, when the navbar has one, the menu
/// it controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavbarBurger {
    active: bool,
    menu_active: Option<bool>,
}

impl NavbarBurger {
    pub const ACTIVE_CLASS: &'static str = "is-active";

    pub fn new(has_menu: bool) -> Self {
        Self {
            active: false,
            menu_active: has_menu.then_some(false),
        }
    }

    pub fn click(&mut self) {
        self.active = !self.active;
        if let Some(menu) = self.menu_active.as_mut() {
            *menu = !*menu;
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// `None` when the navbar has no menu.
    pub fn menu_active(&self) -> Option<bool> {
        self.menu_active
    }

    /// Class list of the burger element.
    pub fn classes(&self) -> String {
        if self.active {
            format!("navbar-burger {}", Self::ACTIVE_CLASS)
        } else {
            "navbar-burger".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_toggles_burger_and_menu() {
        let mut burger = NavbarBurger::new(true);
        burger.click();
        assert!(burger.is_active());
        assert_eq!(burger.menu_active(), Some(true));
        assert_eq!(burger.classes(), "navbar-burger is-active");

        burger.click();
        assert!(!burger.is_active());
        assert_eq!(burger.menu_active(), Some(false));
        assert_eq!(burger.classes(), "navbar-burger");
    }

    #[test]
    fn test_click_without_menu() {
        let mut burger = NavbarBurger::new(false);
        burger.click();
        assert!(burger.is_active());
        assert_eq!(burger.menu_active(), None);
    }
}
