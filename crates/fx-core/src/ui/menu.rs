/// Open/closed state of the mobile navigation drawer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

/// Where a document-level click landed relative to the drawer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    /// On a link inside the drawer.
    MenuLink,
    /// Inside the drawer, or on its toggle button.
    MenuOrToggle,
    Outside,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Returns true when the key closed the drawer.
    pub fn on_key(&mut self, key: &str) -> bool {
        if key == "Escape" {
            self.close();
            return true;
        }
        false
    }

    /// Returns true when the click closed the drawer.
    pub fn on_click(&mut self, target: ClickTarget) -> bool {
        match target {
            ClickTarget::MenuLink => {
                self.close();
                true
            }
            ClickTarget::Outside if self.open => {
                self.close();
                true
            }
            _ => false,
        }
    }
}
