//! Touch feedback on cards: a short transform transition while a finger is down.

#[cfg(test)]
#[path = "touch_test.rs"]
mod touch_test;

use crate::consts::TOUCH_TRANSITION;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Start,
    End,
}

impl TouchPhase {
    #[must_use]
    pub fn from_event_type(kind: &str) -> Option<Self> {
        match kind {
            "touchstart" => Some(Self::Start),
            "touchend" | "touchcancel" => Some(Self::End),
            _ => None,
        }
    }

    /// Inline `transition` for this phase; empty restores the stylesheet value.
    #[must_use]
    pub fn transition(self) -> &'static str {
        match self {
            Self::Start => TOUCH_TRANSITION,
            Self::End => "",
        }
    }
}

#[cfg(feature = "hydrate")]
pub use binding::TouchFeedback;

#[cfg(feature = "hydrate")]
mod binding {
    use web_sys::HtmlElement;

    use super::TouchPhase;
    use crate::consts::TOUCH_CARD_SELECTOR;
    use crate::dom;
    use crate::error::BindResult;

    pub struct TouchFeedback;

    impl TouchFeedback {
        pub fn mount() -> BindResult {
            let document = dom::document()?;
            for card in dom::query_all(&document, TOUCH_CARD_SELECTOR)? {
                let card = dom::as_html(&card)?;
                for kind in ["touchstart", "touchend", "touchcancel"] {
                    let target = card.clone();
                    dom::listen_passive(&card, kind, move |event| {
                        if let Some(phase) = TouchPhase::from_event_type(&event.type_()) {
                            apply(&target, phase);
                        }
                    })?;
                }
            }
            Ok(())
        }
    }

    fn apply(card: &HtmlElement, phase: TouchPhase) {
        if let Err(err) = card.style().set_property("transition", phase.transition()) {
            log::warn!("interactions: touch feedback failed: {err:?}");
        }
    }
}
