//! Retained stage: one persistent base container plus the current cycle's
//! transient drawables. The stage stores model values and attached
//! animations; [`Stage::sample`] resolves both into the presentation a
//! renderer would draw at a time point.

use crate::{
    anim::{AnimatedProperty, ResolvedAnimation},
    core::{Circle, ElementStyle, LineSegment, Rgba8},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub enum Shape {
    Line(LineSegment),
    Circle(Circle),
}

/// The persistent container. Its corner radius animates every cycle, but the
/// container itself is never destroyed.
#[derive(Clone, Debug, serde::Serialize)]
pub struct BaseContainer {
    pub dimension: f64,
    pub corner_radius: f64, // model value; presentation comes from animations
    pub border_color: Rgba8,
    pub border_width: f64,
    animations: Vec<ResolvedAnimation>,
}

impl BaseContainer {
    pub fn animations(&self) -> &[ResolvedAnimation] {
        &self.animations
    }
}

/// A drawable owned by the current cycle; the next `prepare` destroys it.
#[derive(Clone, Debug, serde::Serialize)]
pub struct TransientDrawable {
    pub shape: Shape,
    pub style: ElementStyle,
    animations: Vec<ResolvedAnimation>,
}

impl TransientDrawable {
    pub fn animations(&self) -> &[ResolvedAnimation] {
        &self.animations
    }
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct Stage {
    base: Option<BaseContainer>,
    drawables: Vec<TransientDrawable>,
}

impl Stage {
    /// A stage whose container starts fully round (corner radius `d/2`);
    /// the first phase animates it down to the target radius.
    pub fn new(dimension: f64, border_color: Rgba8, border_width: f64) -> Self {
        Self {
            base: Some(BaseContainer {
                dimension,
                corner_radius: dimension / 2.0,
                border_color,
                border_width,
                animations: Vec::new(),
            }),
            drawables: Vec::new(),
        }
    }

    /// A stage whose host already tore the container down. Commits against
    /// it are no-ops rather than errors.
    pub fn without_base() -> Self {
        Self {
            base: None,
            drawables: Vec::new(),
        }
    }

    pub fn base(&self) -> Option<&BaseContainer> {
        self.base.as_ref()
    }

    pub fn drawables(&self) -> &[TransientDrawable] {
        &self.drawables
    }

    pub fn drawable_count(&self) -> usize {
        self.drawables.len()
    }

    /// Destroy every transient drawable and remove all in-flight animations,
    /// the base container's included. Idempotent; the container's
    /// presentation snaps back to its model value.
    pub fn prepare(&mut self) {
        self.drawables.clear();
        if let Some(base) = &mut self.base {
            base.animations.clear();
        }
    }

    pub(crate) fn attach_drawable(
        &mut self,
        shape: Shape,
        style: ElementStyle,
        animations: Vec<ResolvedAnimation>,
    ) {
        self.drawables.push(TransientDrawable {
            shape,
            style,
            animations,
        });
    }

    /// Returns `false` when no container exists (the attach is dropped).
    pub(crate) fn attach_to_base(&mut self, animations: Vec<ResolvedAnimation>) -> bool {
        match &mut self.base {
            Some(base) => {
                base.animations.extend(animations);
                true
            }
            None => false,
        }
    }

    /// Resolve the presentation at time `t`. Model defaults when no
    /// animation drives a property: stroke end 1, opacity 0 (drawables are
    /// committed invisible), circle radius and corner radius at their model
    /// values.
    pub fn sample(&self, t: f64) -> SceneSnapshot {
        let base = self.base.as_ref().map(|base| {
            let mut corner_radius = base.corner_radius;
            for anim in &base.animations {
                if anim.property == AnimatedProperty::CornerRadius {
                    corner_radius = anim.sample(t);
                }
            }
            BaseSnapshot {
                dimension: base.dimension,
                corner_radius,
                border_color: base.border_color,
                border_width: base.border_width,
            }
        });

        let drawables = self
            .drawables
            .iter()
            .map(|drawable| {
                let mut snapshot = DrawableSnapshot {
                    shape: drawable.shape,
                    style: drawable.style,
                    stroke_end: 1.0,
                    opacity: 0.0,
                    radius: match drawable.shape {
                        Shape::Circle(circle) => Some(circle.radius),
                        Shape::Line(_) => None,
                    },
                };
                for anim in &drawable.animations {
                    let value = anim.sample(t);
                    match anim.property {
                        AnimatedProperty::StrokeEnd => snapshot.stroke_end = value,
                        AnimatedProperty::Opacity => snapshot.opacity = value,
                        AnimatedProperty::Radius => snapshot.radius = Some(value),
                        AnimatedProperty::CornerRadius => {}
                    }
                }
                snapshot
            })
            .collect();

        SceneSnapshot { at: t, base, drawables }
    }
}

/// Resolved presentation of the whole stage at one time point.
#[derive(Clone, Debug, serde::Serialize)]
pub struct SceneSnapshot {
    pub at: f64,
    pub base: Option<BaseSnapshot>,
    pub drawables: Vec<DrawableSnapshot>,
}

#[derive(Clone, Copy, Debug, serde::Serialize)]
pub struct BaseSnapshot {
    pub dimension: f64,
    pub corner_radius: f64,
    pub border_color: Rgba8,
    pub border_width: f64,
}

#[derive(Clone, Copy, Debug, serde::Serialize)]
pub struct DrawableSnapshot {
    pub shape: Shape,
    pub style: ElementStyle,
    pub stroke_end: f64,
    pub opacity: f64,
    pub radius: Option<f64>,
}
