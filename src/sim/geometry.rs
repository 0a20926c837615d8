//! Axis-aligned box geometry for tanks and the obstacle
//!
//! A box is defined by its four edges:
//! - left, right: horizontal extent (left < right)
//! - bottom, top: vertical extent (bottom < top)

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// Raw edge list, used for (de)serialization before validation
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AabbEdges {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

/// An axis-aligned box with strictly ordered edges
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AabbEdges", into = "AabbEdges")]
pub struct Aabb {
    left: f64,
    right: f64,
    bottom: f64,
    top: f64,
}

impl Aabb {
    pub fn new(left: f64, right: f64, bottom: f64, top: f64) -> Result<Self, SimError> {
        let finite = [left, right, bottom, top].iter().all(|v| v.is_finite());
        if !finite || left >= right || bottom >= top {
            return Err(SimError::DegenerateBox {
                left,
                right,
                bottom,
                top,
            });
        }
        Ok(Self {
            left,
            right,
            bottom,
            top,
        })
    }

    /// Build from `[left, right, bottom, top]`
    pub fn from_edges(edges: [f64; 4]) -> Result<Self, SimError> {
        Self::new(edges[0], edges[1], edges[2], edges[3])
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.left
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.right
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    /// Midpoint of the box; shots originate here
    pub fn center(&self) -> DVec2 {
        DVec2::new(
            (self.left + self.right) / 2.0,
            (self.bottom + self.top) / 2.0,
        )
    }

    /// Strict containment: points on an edge are outside
    #[inline]
    pub fn contains(&self, point: DVec2) -> bool {
        self.left < point.x && point.x < self.right && self.bottom < point.y && point.y < self.top
    }
}

impl TryFrom<AabbEdges> for Aabb {
    type Error = SimError;

    fn try_from(e: AabbEdges) -> Result<Self, Self::Error> {
        Self::new(e.left, e.right, e.bottom, e.top)
    }
}

impl From<Aabb> for AabbEdges {
    fn from(b: Aabb) -> Self {
        Self {
            left: b.left,
            right: b.right,
            bottom: b.bottom,
            top: b.top,
        }
    }
}
