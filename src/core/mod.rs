//! Core grid types: points, rectangles, areas, entity identity.
//!
//! This module contains the leaf building blocks everything else is
//! keyed on. They carry no tracking logic of their own.

pub mod area;
pub mod entity;
pub mod point;

pub use area::Area;
pub use entity::EntityId;
pub use point::{Point, Rect};
