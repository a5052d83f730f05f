//! Axis-aligned box overlap and contact classification
//!
//! Every body in the game is an axis-aligned rectangle anchored at its
//! top-left corner, with y growing downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::actor::Actor;

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict intersection: boxes sharing only an edge do not overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.right() > other.pos.x
            && self.pos.x < other.right()
            && self.bottom() > other.pos.y
            && self.pos.y < other.bottom()
    }
}

/// Do two actors' boxes overlap?
#[inline]
pub fn overlap(a: &Actor, b: &Actor) -> bool {
    a.bounds().overlaps(&b.bounds())
}

/// Did `top` come down onto `under` rather than bump into its side?
///
/// The contact rectangle is measured from `under`'s top edge and from the
/// rightmost of the two left edges to `under`'s right edge. A contact at
/// least as tall as `under` is wide is never a landing. Inside the small
/// square of side `under.width / 4` a single timestep can't tell the two
/// apart, and that case counts as a landing. Otherwise a contact wider than
/// it is tall is a landing.
pub fn collide_from_top(top: &Aabb, under: &Aabb) -> bool {
    let straddles_top_edge = top.bottom() > under.pos.y && top.pos.y < under.pos.y;
    if !straddles_top_edge {
        return false;
    }

    let contact_x = top.pos.x.max(under.pos.x);
    let contact = Vec2::new(under.right() - contact_x, top.bottom() - under.pos.y);

    if contact.y >= under.size.x {
        return false;
    }

    let unsafe_len = (under.size.x / 2.0) / 2.0;
    if unsafe_len >= contact.x && unsafe_len >= contact.y {
        return true;
    }

    contact.x > contact.y
}
