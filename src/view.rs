//! Mutable view nodes with explicit shared ownership
//!
//! A `View` is the one reference-semantics entity in the model. It is never
//! handed out by value: all access goes through a `ViewHandle`, a
//! reference-counted handle whose clones alias the same underlying node.
//! Making the handle a distinct type keeps the aliasing visible in every
//! signature that stores or returns one.
//!
//! Handles are single-threaded by design (`Rc`, not `Arc`); the scene model
//! has no concurrency surface.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use crate::color::Color;
use crate::geometry::Rect;

/// Mutable node holding a frame and a background color
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub frame: Rect,
    pub background_color: Color,
}

impl View {
    /// New view with the given frame and a white background
    pub fn new(frame: Rect) -> Self {
        Self {
            frame,
            background_color: Color::WHITE,
        }
    }
}

/// Shared-ownership handle to a `View`
///
/// Cloning the handle clones the reference, not the view: mutations made
/// through any clone are observable through every other clone.
#[derive(Debug, Clone)]
pub struct ViewHandle(Rc<RefCell<View>>);

impl ViewHandle {
    pub fn new(view: View) -> Self {
        Self(Rc::new(RefCell::new(view)))
    }

    /// Current frame of the underlying view
    pub fn frame(&self) -> Rect {
        self.0.borrow().frame
    }

    /// Current background color of the underlying view
    pub fn background_color(&self) -> Color {
        self.0.borrow().background_color
    }

    pub fn set_frame(&self, frame: Rect) {
        debug!("view frame set to {:?}", frame);
        self.0.borrow_mut().frame = frame;
    }

    pub fn set_background_color(&self, color: Color) {
        debug!("view background set to {:?}", color);
        self.0.borrow_mut().background_color = color;
    }

    /// Whether two handles alias the same underlying view
    pub fn ptr_eq(&self, other: &ViewHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
