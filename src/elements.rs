//! Builders turning phase geometry into drawable + animation-spec pairs.

use crate::{
    anim::{AnimatedProperty, AnimationKind, AnimationSpec, PropertyTrack},
    anim_ease::Ease,
    core::{Circle, ElementStyle, LineSegment},
    scene::Shape,
};

/// Starting radius for a circle grow, close enough to zero to read as a
/// point while keeping the path well-formed.
const GROW_EPSILON: f64 = 0.001;

#[derive(Clone, Debug)]
pub enum ElementTarget {
    /// A fresh drawable created at commit time.
    Transient { shape: Shape, style: ElementStyle },
    /// The persistent base container.
    BaseContainer,
}

/// One drawable-to-be plus the animation that reveals it.
#[derive(Clone, Debug)]
pub struct Element {
    pub target: ElementTarget,
    pub animation: AnimationSpec,
}

impl Element {
    pub fn with_duration(mut self, secs: f64) -> Self {
        self.animation = self.animation.with_duration(secs);
        self
    }

    pub fn with_begin_offset(mut self, secs: f64) -> Self {
        self.animation = self.animation.with_begin_offset(secs);
        self
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.animation = self.animation.with_ease(ease);
        self
    }
}

/// Stroke reveals: the path is the full segment up front, the stroke end
/// animates 0 → `stroke_end` while opacity fades 0 → 1 in parallel.
pub fn stroke_elements(
    lines: &[LineSegment],
    stroke_end: f64,
    style: &ElementStyle,
) -> Vec<Element> {
    lines
        .iter()
        .map(|line| Element {
            target: ElementTarget::Transient {
                shape: Shape::Line(*line),
                style: *style,
            },
            animation: AnimationSpec::grouped(
                AnimationKind::StrokeReveal,
                vec![
                    PropertyTrack {
                        property: AnimatedProperty::StrokeEnd,
                        from: 0.0,
                        to: stroke_end,
                    },
                    PropertyTrack {
                        property: AnimatedProperty::Opacity,
                        from: 0.0,
                        to: 1.0,
                    },
                ],
            ),
        })
        .collect()
}

/// Circle grows: radius animates from a near-zero point to the target while
/// opacity fades in.
pub fn circle_elements(circles: &[Circle], style: &ElementStyle) -> Vec<Element> {
    circles
        .iter()
        .map(|circle| Element {
            target: ElementTarget::Transient {
                shape: Shape::Circle(*circle),
                style: *style,
            },
            animation: AnimationSpec::grouped(
                AnimationKind::CircleGrow,
                vec![
                    PropertyTrack {
                        property: AnimatedProperty::Radius,
                        from: GROW_EPSILON,
                        to: circle.radius,
                    },
                    PropertyTrack {
                        property: AnimatedProperty::Opacity,
                        from: 0.0,
                        to: 1.0,
                    },
                ],
            ),
        })
        .collect()
}

/// Single scalar ramp on the persistent container's corner radius.
pub fn corner_radius_element(from: f64, to: f64) -> Element {
    Element {
        target: ElementTarget::BaseContainer,
        animation: AnimationSpec::grouped(
            AnimationKind::CornerRadiusChange,
            vec![PropertyTrack {
                property: AnimatedProperty::CornerRadius,
                from,
                to,
            }],
        ),
    }
}
