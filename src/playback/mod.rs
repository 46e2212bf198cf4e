/*!
 * Playback Module
 * Thread-safe engine handle and the async play/pause driver
 */

mod player;
mod shared;

pub use player::{PlaybackCommand, PlaybackHandle, PlaybackStatus, Player};
pub use shared::SharedEngine;
