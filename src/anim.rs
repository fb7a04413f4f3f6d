use crate::anim_ease::Ease;

/// Scalar property an animation drives on its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum AnimatedProperty {
    StrokeEnd,
    Opacity,
    Radius,
    CornerRadius,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum AnimationKind {
    StrokeReveal,
    CircleGrow,
    CornerRadiusChange,
}

/// One from→to ramp on a single property.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PropertyTrack {
    pub property: AnimatedProperty,
    pub from: f64,
    pub to: f64,
}

/// Animation descriptor relative to a future commit: tracks run together,
/// sharing one begin offset and one duration. `duration` and `ease` default
/// to the enclosing transaction's values when `None`.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct AnimationSpec {
    pub kind: AnimationKind,
    pub tracks: Vec<PropertyTrack>,
    pub duration: Option<f64>,
    pub begin_offset: f64, // seconds after commit time
    pub ease: Option<Ease>,
    pub hold_final: bool,
}

impl AnimationSpec {
    /// A grouped spec inheriting duration and ease from its transaction,
    /// holding its final value until the next cycle clears it.
    pub fn grouped(kind: AnimationKind, tracks: Vec<PropertyTrack>) -> Self {
        Self {
            kind,
            tracks,
            duration: None,
            begin_offset: 0.0,
            ease: None,
            hold_final: true,
        }
    }

    pub fn with_duration(mut self, secs: f64) -> Self {
        self.duration = Some(secs);
        self
    }

    pub fn with_begin_offset(mut self, secs: f64) -> Self {
        self.begin_offset = secs;
        self
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = Some(ease);
        self
    }
}

/// A track bound to absolute clock time by a committed transaction.
///
/// Sampling is total: before `begin` the value is `from` (fill-backwards),
/// after the end it is `to` while `hold_final` is set, otherwise it snaps
/// back to `from`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ResolvedAnimation {
    pub property: AnimatedProperty,
    pub from: f64,
    pub to: f64,
    pub begin: f64,
    pub duration: f64,
    pub ease: Ease,
    pub hold_final: bool,
}

impl ResolvedAnimation {
    pub fn end(&self) -> f64 {
        self.begin + self.duration
    }

    pub fn sample(&self, t: f64) -> f64 {
        if t < self.begin {
            return self.from;
        }
        if self.duration <= 0.0 {
            return self.to;
        }
        let progress = (t - self.begin) / self.duration;
        if progress >= 1.0 {
            return if self.hold_final { self.to } else { self.from };
        }
        self.from + (self.to - self.from) * self.ease.apply(progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(hold_final: bool) -> ResolvedAnimation {
        ResolvedAnimation {
            property: AnimatedProperty::Opacity,
            from: 0.0,
            to: 1.0,
            begin: 2.0,
            duration: 4.0,
            ease: Ease::Linear,
            hold_final,
        }
    }

    #[test]
    fn holds_from_value_before_begin() {
        assert_eq!(ramp(true).sample(0.0), 0.0);
        assert_eq!(ramp(true).sample(1.999), 0.0);
    }

    #[test]
    fn interpolates_linearly_in_flight() {
        assert_eq!(ramp(true).sample(4.0), 0.5);
    }

    #[test]
    fn eased_midpoint_is_ahead_of_linear() {
        let mut anim = ramp(true);
        anim.ease = Ease::OutQuad;
        assert_eq!(anim.sample(4.0), 0.75);
    }

    #[test]
    fn holds_final_value_after_end() {
        assert_eq!(ramp(true).sample(6.0), 1.0);
        assert_eq!(ramp(true).sample(100.0), 1.0);
    }

    #[test]
    fn snaps_back_without_hold() {
        assert!(ramp(false).sample(5.9) > 0.97);
        assert_eq!(ramp(false).sample(6.0), 0.0);
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let mut anim = ramp(true);
        anim.duration = 0.0;
        assert_eq!(anim.sample(1.0), 0.0);
        assert_eq!(anim.sample(2.0), 1.0);
    }
}
