//! Input contracts for the driver.
//!
//! Hosts translate their own keyboard/window events into [`InputEvent`]s and
//! pass them to `Driver::handle` or batch them into `Driver::update`.

use serde::{Deserialize, Serialize};

use crate::steps::Algorithm;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Reset,
    Start,
    SelectBubble,
    SelectInsertion,
    SelectQuick,
    SpeedUp,
    SpeedDown,
}

impl Key {
    /// Map a host key name (browser `KeyboardEvent.key` style) to a binding.
    ///
    /// `r` reset, space start, `b`/`i`/`q` select, arrow up/down speed.
    pub fn from_name(name: &str) -> Option<Key> {
        let key = match name {
            "r" | "R" => Key::Reset,
            " " | "Space" | "space" | "Spacebar" => Key::Start,
            "b" | "B" => Key::SelectBubble,
            "i" | "I" => Key::SelectInsertion,
            "q" | "Q" => Key::SelectQuick,
            "ArrowUp" | "Up" | "up" => Key::SpeedUp,
            "ArrowDown" | "Down" | "down" => Key::SpeedDown,
            _ => return None,
        };
        Some(key)
    }

    /// Algorithm chosen by a selection key.
    pub fn algorithm(self) -> Option<Algorithm> {
        match self {
            Key::SelectBubble => Some(Algorithm::Bubble),
            Key::SelectInsertion => Some(Algorithm::Insertion),
            Key::SelectQuick => Some(Algorithm::Quick),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
}
