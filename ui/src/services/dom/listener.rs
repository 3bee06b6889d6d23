use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::errors::DomError;

/// Document-level event listener with a scoped lifetime: attached on
/// construction, removed when the guard drops.
///
/// Holding the guard is what keeps the listener alive. Components park it
/// in a hook so the subscription ends exactly when the component unmounts,
/// and an early drop (attach failure, conditional teardown) can never leak
/// a callback into a dead scope.
pub struct DocumentListener {
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl DocumentListener {
    pub fn attach(
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Result<Self, DomError> {
        let document = web_sys::window()
            .ok_or(DomError::WindowUnavailable)?
            .document()
            .ok_or(DomError::DocumentUnavailable)?;

        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
        document
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|err| DomError::ListenerAttach {
                event: event.to_string(),
                details: format!("{err:?}"),
            })?;

        Ok(Self { event, callback })
    }
}

impl Drop for DocumentListener {
    fn drop(&mut self) {
        // The document can already be gone during page teardown.
        if let Some(document) = web_sys::window().and_then(|window| window.document()) {
            let _ = document.remove_event_listener_with_callback(
                self.event,
                self.callback.as_ref().unchecked_ref(),
            );
        }
    }
}

/// True when the event target sits inside the element with `container_id`.
/// Targets that are not elements (the document itself, text selections)
/// count as outside.
pub fn event_targets_inside(event: &web_sys::Event, container_id: &str) -> bool {
    let selector = format!("#{container_id}");
    event
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|element| element.closest(&selector).ok().flatten())
        .is_some()
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn dispatch_mousedown() {
        let document = web_sys::window().unwrap().document().unwrap();
        let event = web_sys::MouseEvent::new("mousedown").unwrap();
        document.dispatch_event(&event).unwrap();
    }

    #[wasm_bindgen_test]
    fn listener_fires_while_held_and_stops_after_drop() {
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let listener = DocumentListener::attach("mousedown", move |_| {
            counter.set(counter.get() + 1);
        })
        .unwrap();

        dispatch_mousedown();
        assert_eq!(hits.get(), 1);

        drop(listener);
        dispatch_mousedown();
        assert_eq!(hits.get(), 1);
    }

    #[wasm_bindgen_test]
    fn non_element_targets_count_as_outside() {
        let document = web_sys::window().unwrap().document().unwrap();
        let event = web_sys::MouseEvent::new("mousedown").unwrap();
        document.dispatch_event(&event).unwrap();
        // Dispatched at the document, so the target is not an Element.
        assert!(!event_targets_inside(&event, "anything"));
    }
}
