//=========================================================================
// Surface
//=========================================================================
//
// The single shared drawing surface every screen group attaches to.
//
// The surface is created by the composition root before any window
// exists. Redraw requests made before the platform binds a hook are
// counted and otherwise dropped (startup ordering, not an error).
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::{Cell, RefCell};
use std::fmt;

use glam::Vec2;
use log::{debug, trace};

//=== RedrawHook ==========================================================

/// Callback fired for every redraw request once the platform is ready.
pub type RedrawHook = Box<dyn Fn()>;

//=== Surface =============================================================

/// Shared drawing surface with a fixed logical size.
///
/// Shared via `Rc<Surface>`; all mutation goes through interior
/// mutability since the surface is only touched by the single UI
/// control flow.
pub struct Surface {
    size: Vec2,
    redraw_requests: Cell<u64>,
    hook: RefCell<Option<RedrawHook>>,
}

impl Surface {
    //--- Construction -----------------------------------------------------

    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            redraw_requests: Cell::new(0),
            hook: RefCell::new(None),
        }
    }

    //--- Geometry ---------------------------------------------------------

    /// Logical width/height in surface coordinates.
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Midpoint of the surface, where entities land by default.
    pub fn center(&self) -> Vec2 {
        self.size * 0.5
    }

    //--- Redraw -----------------------------------------------------------

    /// Binds the platform callback that schedules a repaint.
    ///
    /// Replaces any previously bound hook.
    pub fn bind_redraw_hook(&self, hook: RedrawHook) {
        debug!("Redraw hook bound to surface");
        *self.hook.borrow_mut() = Some(hook);
    }

    /// Removes the platform callback, returning to headless behavior.
    pub fn unbind_redraw_hook(&self) {
        self.hook.borrow_mut().take();
    }

    pub fn is_bound(&self) -> bool {
        self.hook.borrow().is_some()
    }

    /// Requests a repaint of the whole surface.
    pub fn request_redraw(&self) {
        self.redraw_requests.set(self.redraw_requests.get() + 1);

        match self.hook.borrow().as_ref() {
            Some(hook) => hook(),
            None => trace!("Surface not bound to a window yet, redraw skipped"),
        }
    }

    /// Total redraw requests received since construction.
    pub fn redraw_requests(&self) -> u64 {
        self.redraw_requests.get()
    }
}

//--- Trait Implementations -----------------------------------------------

impl fmt::Debug for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Surface")
            .field("size", &self.size)
            .field("redraw_requests", &self.redraw_requests.get())
            .field("bound", &self.is_bound())
            .finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
