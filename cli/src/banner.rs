// SPDX-License-Identifier: MIT OR Apache-2.0

//! Win banner shown above the board

use omok_core::{GameEvent, GameObserver};
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to the banner text
#[derive(Debug, Clone, Default)]
pub struct Banner {
    text: Rc<RefCell<Option<String>>>,
}

impl Banner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current banner text, if one is showing
    pub fn text(&self) -> Option<String> {
        self.text.borrow().clone()
    }

    /// Observer that updates this banner from game events
    pub fn observer(&self) -> Box<dyn GameObserver> {
        Box::new(BannerObserver {
            text: Rc::clone(&self.text),
        })
    }
}

/// Shows the banner on a win and hides it on the next event
struct BannerObserver {
    text: Rc<RefCell<Option<String>>>,
}

impl GameObserver for BannerObserver {
    fn on_event(&mut self, event: &GameEvent) {
        let mut text = self.text.borrow_mut();
        *text = match event {
            GameEvent::GameWon { winner, .. } => Some(format!("*** {} wins! ***", winner)),
            _ => None,
        };
    }
}
