//! Scene model primitives
//!
//! Immutable geometry and color values, mutable view nodes behind explicit
//! shared-ownership handles, and shapes that wrap a shared view in a value
//! type. The aliasing contract is the point: cloning a `Shape` clones its
//! `ViewHandle`, so mutations through any clone are visible through all of
//! them, and the handle type makes that sharing part of the signature.

mod color;
mod error;
mod geometry;
mod json_helpers;
mod numeric;
mod record;
mod shape;
mod theme;
mod view;

pub use color::{parse_color, Color};
pub use error::{SceneError, SceneResult};
pub use geometry::{Point, Rect, Size};
pub use numeric::newton_sqrt;
pub use record::{Friend, Named, Person, User, Weekday};
pub use shape::Shape;
pub use theme::ReadingMode;
pub use view::{View, ViewHandle};
