//! Shapes: value wrappers over shared view nodes
//!
//! A `Shape` is a value type whose only field is a `ViewHandle`. Cloning a
//! shape clones the handle, so every clone reads and writes the same view.
//! Value-type containment does not imply deep immutability when the
//! contained member has shared-reference semantics; the handle type makes
//! that contract explicit instead of leaving it as a trap.

use log::debug;

use crate::color::Color;
use crate::geometry::{Point, Rect, Size};
use crate::view::{View, ViewHandle};

/// Value wrapper owning a view by shared reference
#[derive(Debug, Clone)]
pub struct Shape {
    view: ViewHandle,
}

impl Shape {
    /// Build a shape from raw geometry and a color
    ///
    /// Composes the origin, size, and frame internally and assigns the
    /// color to the freshly created view.
    pub fn new(x: f64, y: f64, width: f64, height: f64, color: Color) -> Self {
        let origin = Point::new(x, y);
        let size = Size::new(width, height);
        let frame = Rect::new(origin, size);

        debug!("creating shape with frame {:?}", frame);
        let view = ViewHandle::new(View::new(frame));
        view.set_background_color(color);

        Self { view }
    }

    /// Current frame, read through the owned view
    pub fn frame(&self) -> Rect {
        self.view.frame()
    }

    /// Current color, read through the owned view
    ///
    /// Reflects the view's present state, not the color the shape was
    /// constructed with.
    pub fn color(&self) -> Color {
        self.view.background_color()
    }

    /// The owned view handle; clones of it alias this shape's view
    pub fn view(&self) -> &ViewHandle {
        &self.view
    }
}
