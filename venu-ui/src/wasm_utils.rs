//! WASM utilities for browser interop
//!
//! # Listener Cleanup Pattern
//!
//! A JavaScript callback backed by a `Closure` must outlive its registration.
//! `closure.forget()` leaks the closure and leaves the listener attached, so
//! instead each registration is owned by a guard that undoes it in `Drop`:
//!
//! ```ignore
//! // Listener is attached when EventListener is created
//! let listener = EventListener::new(&window, "mousemove", callback);
//!
//! // ...and removed when the guard is dropped
//! drop(listener);
//! ```
//!
//! Store guards in a `Signal<Option<_>>` or a hook and set it to `None` (or
//! let the component unmount) to detach.

use wasm_bindgen_x::prelude::*;

/// An event listener on any `EventTarget` that removes itself when dropped.
pub struct EventListener {
    target: web_sys_x::EventTarget,
    event_name: &'static str,
    callback: Closure<dyn FnMut(web_sys_x::Event)>,
}

impl EventListener {
    /// Attaches `callback` to `target` for `event_name`.
    pub fn new(
        target: &impl AsRef<web_sys_x::EventTarget>,
        event_name: &'static str,
        callback: impl FnMut(web_sys_x::Event) + 'static,
    ) -> Self {
        let target: web_sys_x::EventTarget = target.as_ref().clone();
        let callback: Closure<dyn FnMut(web_sys_x::Event)> = Closure::wrap(Box::new(callback));

        target
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .ok();

        Self {
            target,
            event_name,
            callback,
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// A pending `requestAnimationFrame` callback, cancelled when dropped.
///
/// Dropping after the frame has fired is a no-op on the browser side. Do not
/// drop the guard from inside its own callback; replace it on the next
/// request instead.
pub struct AnimationFrame {
    window: web_sys_x::Window,
    id: i32,
    _callback: Closure<dyn FnMut(f64)>,
}

impl AnimationFrame {
    /// Schedule `callback` for the next frame. Returns `None` outside a
    /// browser window or if the browser refuses the request.
    pub fn request(callback: impl FnOnce(f64) + 'static) -> Option<Self> {
        let window = web_sys_x::window()?;
        let callback: Closure<dyn FnMut(f64)> = Closure::once(callback);
        let id = window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .ok()?;

        Some(Self {
            window,
            id,
            _callback: callback,
        })
    }
}

impl Drop for AnimationFrame {
    fn drop(&mut self) {
        let _ = self.window.cancel_animation_frame(self.id);
    }
}

/// Current viewport size in CSS pixels, `(innerWidth, innerHeight)`.
pub fn viewport_size() -> Option<(f64, f64)> {
    let window = web_sys_x::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width, height))
}
