//! Tab switching: exactly one panel is active at a time.

pub const PANEL_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Panel {
    #[default]
    Overview,
    Network,
    System,
}

impl Panel {
    /// Declaration order; the first entry is selected at startup.
    pub const ALL: [Panel; PANEL_COUNT] = [Panel::Overview, Panel::Network, Panel::System];

    pub fn title(self) -> &'static str {
        match self {
            Panel::Overview => "Overview",
            Panel::Network => "Network",
            Panel::System => "System",
        }
    }

    fn index(self) -> usize {
        Panel::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    pub fn next(self) -> Panel {
        Panel::ALL[(self.index() + 1) % Panel::ALL.len()]
    }

    pub fn prev(self) -> Panel {
        Panel::ALL[(self.index() + Panel::ALL.len() - 1) % Panel::ALL.len()]
    }

    /// `'1'` selects the first panel, and so on.
    pub fn from_digit(c: char) -> Option<Panel> {
        let n = c.to_digit(10)? as usize;
        n.checked_sub(1).and_then(|i| Panel::ALL.get(i).copied())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    active: Panel,
}

impl ViewState {
    pub fn active(&self) -> Panel {
        self.active
    }

    pub fn select(&mut self, panel: Panel) {
        self.active = panel;
    }

    pub fn is_visible(&self, panel: Panel) -> bool {
        self.active == panel
    }
}

/// Visibility flag for every panel, in declaration order.
pub fn visibility(state: &ViewState) -> [(Panel, bool); PANEL_COUNT] {
    Panel::ALL.map(|p| (p, state.is_visible(p)))
}
