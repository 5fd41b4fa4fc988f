//! Ctrl+wheel zoom interception.

/// A wheel event as delivered to the content view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelEvent {
    /// Whether the platform's control-style modifier is held.
    pub ctrl: bool,
    /// Vertical wheel delta; positive is scrolling up.
    pub delta_y: f32,
}

/// Anything that consumes wheel events, ordinarily the view's scrolling.
pub trait WheelHandler {
    fn wheel_event(&mut self, event: &WheelEvent);
}

/// The zoom direction requested by an intercepted wheel event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Decorator over the previously installed wheel handler.
///
/// With Ctrl held, the vertical delta's sign requests exactly one zoom step,
/// regardless of magnitude; a zero delta requests nothing. Without Ctrl the
/// event is forwarded untouched to the wrapped handler, preserving normal
/// scrolling.
pub struct ZoomWheel<H> {
    inner: H,
}

impl<H: WheelHandler> ZoomWheel<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }

    /// Handles one wheel event, returning the requested zoom direction when
    /// the event was intercepted.
    pub fn wheel_event(&mut self, event: &WheelEvent) -> Option<ZoomDirection> {
        if event.ctrl {
            if event.delta_y > 0.0 {
                Some(ZoomDirection::In)
            } else if event.delta_y < 0.0 {
                Some(ZoomDirection::Out)
            } else {
                None
            }
        } else {
            self.inner.wheel_event(event);
            None
        }
    }

    pub fn inner(&self) -> &H {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingHandler {
        events: Vec<WheelEvent>,
    }

    impl WheelHandler for RecordingHandler {
        fn wheel_event(&mut self, event: &WheelEvent) {
            self.events.push(*event);
        }
    }

    #[test]
    fn ctrl_wheel_zooms_one_step_regardless_of_magnitude() {
        let mut wheel = ZoomWheel::new(RecordingHandler::default());

        for delta in [0.5, 15.0, 480.0] {
            let action = wheel.wheel_event(&WheelEvent {
                ctrl: true,
                delta_y: delta,
            });
            assert_eq!(action, Some(ZoomDirection::In));
        }
        let action = wheel.wheel_event(&WheelEvent {
            ctrl: true,
            delta_y: -120.0,
        });
        assert_eq!(action, Some(ZoomDirection::Out));

        // Intercepted events never reach the wrapped handler.
        assert!(wheel.inner().events.is_empty());
    }

    #[test]
    fn ctrl_wheel_with_zero_delta_does_nothing() {
        let mut wheel = ZoomWheel::new(RecordingHandler::default());
        let action = wheel.wheel_event(&WheelEvent {
            ctrl: true,
            delta_y: 0.0,
        });
        assert_eq!(action, None);
        assert!(wheel.inner().events.is_empty());
    }

    #[test]
    fn plain_wheel_is_delegated_untouched() {
        let mut wheel = ZoomWheel::new(RecordingHandler::default());
        let event = WheelEvent {
            ctrl: false,
            delta_y: -3.0,
        };

        assert_eq!(wheel.wheel_event(&event), None);
        assert_eq!(wheel.inner().events, vec![event]);
    }
}
