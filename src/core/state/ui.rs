use crate::core::{cmd::Cmd, msg::ui::UiMsg};

/// UI-related state
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Vertical scroll offset of the abstract, in lines
    pub scroll: u16,
    /// Largest useful offset for the abstract on screen, once it has been drawn
    pub max_scroll: Option<u16>,
}

impl UiState {
    pub fn update(&mut self, msg: UiMsg) -> Vec<Cmd> {
        match msg {
            UiMsg::ScrollUp => self.scroll = self.scroll.saturating_sub(1),
            UiMsg::ScrollDown => self.scroll = self.clamp(self.scroll.saturating_add(1)),
            UiMsg::ScrollToTop => self.scroll = 0,
            UiMsg::SetScrollLimit(limit) => {
                self.max_scroll = Some(limit);
                self.scroll = self.clamp(self.scroll);
            }
        }
        vec![]
    }

    /// Back to the top for a new record; its limit is learned on the next draw
    pub fn reset_scroll(&mut self) {
        self.scroll = 0;
        self.max_scroll = None;
    }

    fn clamp(&self, scroll: u16) -> u16 {
        self.max_scroll.map_or(scroll, |max| scroll.min(max))
    }
}
