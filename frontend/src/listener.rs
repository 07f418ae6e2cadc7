use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Event, EventTarget, MouseEvent, TouchEvent};

/// An event listener that lives as long as this value.
///
/// Dropping it removes the listener, so holding it inside an effect and
/// dropping it in the effect's destructor ties the listener to the
/// component's mount lifetime.
pub struct ScopedListener {
    target: EventTarget,
    event_type: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl ScopedListener {
    /// Listens on `window`.
    pub fn window<F>(event_type: &'static str, callback: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
        window.add_event_listener_with_callback(event_type, callback.as_ref().unchecked_ref())?;

        Ok(Self {
            target: window.into(),
            event_type,
            callback,
        })
    }

    /// Registers the same handler on `window` for several event types.
    /// Either all are attached or none stay attached.
    pub fn window_many<F>(event_types: &[&'static str], callback: F) -> Result<Vec<Self>, JsValue>
    where
        F: Fn(Event) + Clone + 'static,
    {
        event_types
            .iter()
            .map(|event_type| {
                let callback = callback.clone();
                Self::window(*event_type, move |event| callback(event))
            })
            .collect()
    }

    /// Listens on `target` with `passive: false`, so the handler may call
    /// `prevent_default` on touch events. Yew attaches `touchstart` and
    /// `touchmove` as passive.
    pub fn non_passive<F>(target: &EventTarget, event_type: &'static str, callback: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event_type,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;

        Ok(Self {
            target: target.clone(),
            event_type,
            callback,
        })
    }
}

impl Drop for ScopedListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event_type, self.callback.as_ref().unchecked_ref())
        {
            gloo_console::error!("Failed to remove", self.event_type, "listener:", err);
        }
    }
}

// `instanceof TouchEvent` throws on browsers without touch support, so the
// event type decides which interface to read.
fn is_touch(event: &Event) -> bool {
    event.type_().starts_with("touch")
}

/// Vertical client coordinate of a mouse event or of the first touch point.
pub fn pointer_client_y(event: &Event) -> Option<f64> {
    pointer_client(event).map(|(_, y)| y)
}

pub fn pointer_client(event: &Event) -> Option<(f64, f64)> {
    if is_touch(event) {
        let touch_event = event.unchecked_ref::<TouchEvent>();
        let touch = touch_event
            .touches()
            .get(0)
            .or_else(|| touch_event.changed_touches().get(0))?;
        Some((touch.client_x() as f64, touch.client_y() as f64))
    } else {
        let mouse = event.dyn_ref::<MouseEvent>()?;
        Some((mouse.client_x() as f64, mouse.client_y() as f64))
    }
}
