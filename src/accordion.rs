/// Single-open selection over a list of collapsible panels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accordion {
    active: Option<usize>,
}

impl Accordion {
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Opens `index`, closing whatever was open. Toggling the open panel closes it.
    pub fn toggle(&mut self, index: usize) {
        self.active = if self.is_open(index) { None } else { Some(index) };
    }
}

/// Open/closed state of the mobile navigation menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuToggle {
    open: bool,
}

impl MenuToggle {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}
