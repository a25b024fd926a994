//! Global Escape handling.
//!
//! Overlays register a close callback; one page-level `keydown` listener
//! dispatches to every registered callback. The registry replaces the older
//! pattern of assigning a single mutable document handler, so independent
//! overlays coexist without clobbering each other's Escape behavior.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use dioxus::prelude::*;

thread_local! {
    static REGISTRY: RefCell<Vec<(usize, Rc<dyn Fn()>)>> = RefCell::new(Vec::new());
    static NEXT_ID: Cell<usize> = Cell::new(0);
}

/// Matches the modern identifier plus the legacy one older input stacks send.
pub fn is_escape_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

pub fn register(callback: impl Fn() + 'static) -> usize {
    let id = NEXT_ID.with(|next| {
        let id = next.get();
        next.set(id + 1);
        id
    });
    REGISTRY.with(|registry| registry.borrow_mut().push((id, Rc::new(callback))));
    id
}

pub fn unregister(id: usize) {
    REGISTRY.with(|registry| registry.borrow_mut().retain(|(entry, _)| *entry != id));
}

/// Invoke every registered close callback. Closing something already hidden
/// is a harmless no-op, so dispatch never needs to know what is open.
pub fn dispatch() {
    // Clone the callbacks out first so one of them may register or
    // unregister without poisoning the iteration.
    let callbacks: Vec<Rc<dyn Fn()>> =
        REGISTRY.with(|registry| registry.borrow().iter().map(|(_, cb)| cb.clone()).collect());
    for callback in callbacks {
        callback();
    }
}

/// Hook: register `callback` for the lifetime of the calling component and
/// make sure the page-level listener exists.
pub fn use_escape_close(callback: impl Fn() + 'static) {
    let id = use_hook(move || {
        install_global_listener();
        register(callback)
    });
    use_drop(move || unregister(id));
}

#[cfg(target_arch = "wasm32")]
pub fn install_global_listener() {
    use once_cell::sync::OnceCell;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    static INSTALLED: OnceCell<()> = OnceCell::new();
    if INSTALLED.set(()).is_err() {
        return;
    }

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
        if let Some(key_event) = event.dyn_ref::<web_sys::KeyboardEvent>() {
            if is_escape_key(&key_event.key()) {
                dispatch();
            }
        }
    });
    if document
        .add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())
        .is_ok()
    {
        // Stays attached for the life of the page.
        listener.forget();
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn install_global_listener() {
    // Native webviews route key events through the root element instead; see
    // `handle_key`.
}

/// Root-element fallback for native targets. On wasm the document listener
/// owns Escape, so this no-ops to avoid double dispatch.
pub fn handle_key(key: &str) {
    #[cfg(target_arch = "wasm32")]
    let _ = key;

    #[cfg(not(target_arch = "wasm32"))]
    if is_escape_key(key) {
        dispatch();
    }
}
