//! Scoped animation commit: a batch of elements sharing one duration, one
//! timing curve and one optional completion, applied to the stage
//! atomically.

use crate::{
    anim::ResolvedAnimation,
    anim_ease::Ease,
    elements::{Element, ElementTarget},
    error::{GridloopError, GridloopResult},
    scene::Stage,
    timer::TimerQueue,
};

#[derive(Clone, Debug)]
pub struct Transaction {
    duration: f64,
    ease: Ease,
    elements: Vec<Element>,
}

impl Transaction {
    /// Construction fails synchronously; there is no partial-failure mode at
    /// commit time.
    pub fn new(duration: f64, ease: Ease) -> GridloopResult<Self> {
        if !duration.is_finite() || duration < 0.0 {
            return Err(GridloopError::animation(
                "transaction duration must be finite and >= 0",
            ));
        }
        Ok(Self {
            duration,
            ease,
            elements: Vec::new(),
        })
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub fn extend(&mut self, elements: impl IntoIterator<Item = Element>) {
        self.elements.extend(elements);
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Attach every element's animations, bound to absolute time `now`, and
    /// schedule `completion` for the instant the whole batch has finished
    /// (`now + duration` for an empty batch). Elements targeting an absent
    /// base container are dropped silently. Returns the transaction end
    /// time.
    pub fn commit<T>(
        self,
        stage: &mut Stage,
        timers: &mut TimerQueue<T>,
        now: f64,
        completion: Option<T>,
    ) -> f64 {
        let mut end = now + self.duration;
        for element in self.elements {
            let duration = element.animation.duration.unwrap_or(self.duration);
            let ease = element.animation.ease.unwrap_or(self.ease);
            let begin = now + element.animation.begin_offset;
            let hold_final = element.animation.hold_final;
            let resolved: Vec<ResolvedAnimation> = element
                .animation
                .tracks
                .iter()
                .map(|track| ResolvedAnimation {
                    property: track.property,
                    from: track.from,
                    to: track.to,
                    begin,
                    duration,
                    ease,
                    hold_final,
                })
                .collect();
            end = end.max(begin + duration);
            match element.target {
                ElementTarget::Transient { shape, style } => {
                    stage.attach_drawable(shape, style, resolved);
                }
                ElementTarget::BaseContainer => {
                    stage.attach_to_base(resolved);
                }
            }
        }
        if let Some(payload) = completion {
            timers.schedule(end, payload);
        }
        end
    }
}
