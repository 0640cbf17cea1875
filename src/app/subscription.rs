// SPDX-License-Identifier: MPL-2.0
//! Time subscriptions for the application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Redraw interval of the audio position readout.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Ticks while the quiz page shows a playing clip, so the transport position
/// advances. Idle pages get no timer at all.
pub fn create_tick_subscription(on_quiz_page: bool, audio_playing: bool) -> Subscription<Message> {
    if on_quiz_page && audio_playing {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
