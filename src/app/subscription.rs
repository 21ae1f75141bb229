// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard navigation: Left/Right cycle through the tabs, the digit keys
//! 1-5 jump straight to a panel.

use super::Message;
use crate::ui::profile::{self, Tab};
use iced::{event, keyboard, Subscription};

/// Creates the keyboard event subscription.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        // Don't steal keys from focused widgets
        if let event::Status::Captured = status {
            return None;
        }

        if let event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = &event {
            return match key.as_ref() {
                keyboard::Key::Named(keyboard::key::Named::ArrowRight) => {
                    Some(Message::Profile(profile::Message::NextTab))
                }
                keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => {
                    Some(Message::Profile(profile::Message::PreviousTab))
                }
                keyboard::Key::Character(ch) => ch
                    .chars()
                    .next()
                    .and_then(|c| c.to_digit(10))
                    .and_then(Tab::from_digit)
                    .map(|tab| Message::Profile(profile::Message::TabSelected(tab))),
                _ => None,
            };
        }

        None
    })
}
