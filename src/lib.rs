//! Gridloop plays a looping guide-grid animation over a virtual clock:
//! a rounded square morphs from a circle, draws thirds guides, diagonals,
//! an inset square, a center cross and concentric rings, then restarts.
//!
//! - Build a [`Player`] from a [`PlayerConfig`]
//! - Drive it with [`Player::play`] and [`Player::advance`]
//! - Read back resolved visual state with [`Player::snapshot`]
#![forbid(unsafe_code)]

pub mod anim;
pub mod anim_ease;
pub mod core;
pub mod elements;
pub mod error;
pub mod geometry;
pub mod player;
pub mod scene;
pub mod timer;
pub mod transaction;

pub use crate::anim::{
    AnimatedProperty, AnimationKind, AnimationSpec, PropertyTrack, ResolvedAnimation,
};
pub use crate::anim_ease::Ease;
pub use crate::core::{Circle, ElementStyle, LineCap, LineSegment, Point, Rgba8, Vec2};
pub use crate::elements::{Element, ElementTarget};
pub use crate::error::{GridloopError, GridloopResult};
pub use crate::player::{Phase, PhaseEvent, Player, PlayerConfig};
pub use crate::scene::{SceneSnapshot, Shape, Stage};
pub use crate::timer::{Fired, TimerId, TimerQueue};
pub use crate::transaction::Transaction;
