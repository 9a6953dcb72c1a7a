// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::event::{Event, EventStream};
use futures_util::{FutureExt, StreamExt, stream};
use tokio::sync::mpsc;

use crate::{CrosstermEventResult, InputEvent, PinnedInputStream};

/// This struct represents an input device that can be used to read from the terminal.
///
/// Use [`InputDevice::new_event_stream`] for the real terminal, and
/// [`InputDevice::new_mock_channel`] to drive the event loop from a test.
#[allow(missing_debug_implementations)]
pub struct InputDevice {
    pub resource: PinnedInputStream<CrosstermEventResult>,
}

impl InputDevice {
    #[must_use]
    pub fn new_event_stream() -> InputDevice {
        InputDevice {
            resource: Box::pin(EventStream::new()),
        }
    }

    /// Events sent on the returned channel are delivered in order. The stream ends when
    /// the sender is dropped.
    #[must_use]
    pub fn new_mock_channel() -> (InputDevice, mpsc::UnboundedSender<Event>) {
        let (sender, receiver) = mpsc::unbounded_channel::<Event>();
        let it = stream::unfold(receiver, |mut receiver| async move {
            receiver
                .recv()
                .await
                .map(|event| (Ok::<Event, std::io::Error>(event), receiver))
        });
        (
            InputDevice {
                resource: Box::pin(it),
            },
            sender,
        )
    }

    /// Returns the next event the app cares about, skipping the ones it doesn't. Returns
    /// `None` when the stream ends or errors out.
    pub async fn next_input_event(&mut self) -> Option<InputEvent> {
        loop {
            match self.resource.next().fuse().await {
                Some(Ok(event)) => {
                    if let Some(input_event) = InputEvent::from_crossterm(event) {
                        return Some(input_event);
                    }
                }
                Some(Err(error)) => {
                    tracing::error!(?error, "input device -> error reading event");
                    return None;
                }
                None => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::KeyPress;

    #[tokio::test]
    async fn test_mock_channel_skips_ignored_events() {
        let (mut input_device, sender) = InputDevice::new_mock_channel();
        sender.send(Event::FocusGained).unwrap();
        sender
            .send(Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)))
            .unwrap();
        drop(sender);

        assert_eq!(
            input_device.next_input_event().await,
            Some(InputEvent::Keyboard(KeyPress::Char('q')))
        );
        assert_eq!(input_device.next_input_event().await, None);
    }
}
