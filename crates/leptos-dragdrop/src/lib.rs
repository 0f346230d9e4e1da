//! Leptos DragDrop Utilities
//!
//! Mouse-event drag-and-drop of cards onto named drop targets (board columns).
//! A movement threshold distinguishes a click from a drag.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    /// Card currently being dragged
    pub dragging_id: RwSignal<Option<String>>,
    /// Target under the pointer while dragging
    pub drop_target: RwSignal<Option<String>>,
    /// Card under a mousedown that has not moved far enough yet
    pub pending_id: RwSignal<Option<String>>,
    /// Pointer position at mousedown
    pub start: RwSignal<(i32, i32)>,
    /// Set for a short moment after a drop so the trailing click is ignored
    pub drag_just_ended: RwSignal<bool>,
}

pub fn create_dnd_signals() -> DndSignals {
    DndSignals {
        dragging_id: RwSignal::new(None),
        drop_target: RwSignal::new(None),
        pending_id: RwSignal::new(None),
        start: RwSignal::new((0, 0)),
        drag_just_ended: RwSignal::new(false),
    }
}

/// True once the pointer moved beyond the threshold on either axis
pub fn exceeds_threshold(start: (i32, i32), current: (i32, i32)) -> bool {
    (current.0 - start.0).abs() > DRAG_THRESHOLD_PX || (current.1 - start.1).abs() > DRAG_THRESHOLD_PX
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id.set(None);
    dnd.drop_target.set(None);
    dnd.pending_id.set(None);
    dnd.drag_just_ended.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Mousedown handler for a draggable card: records a pending drag
pub fn make_on_mousedown(dnd: DndSignals, card_id: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Form controls inside the card keep their own behaviour
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some()
                || target.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
                || target.dyn_ref::<web_sys::HtmlSelectElement>().is_some()
                || target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some()
            {
                return;
            }
        }
        dnd.pending_id.set(Some(card_id.clone()));
        dnd.start.set((ev.client_x(), ev.client_y()));
    }
}

/// Mouseenter handler for a drop target
pub fn make_on_target_mouseenter(dnd: DndSignals, target: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id.get_untracked().is_some() {
            dnd.drop_target.set(Some(target.clone()));
        }
    }
}

/// Mouseleave handler for a drop target
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id.get_untracked().is_some() {
            dnd.drop_target.set(None);
        }
    }
}

/// Document mousemove: promotes a pending drag once the pointer moved enough
pub fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_id.get_untracked();
        if pending.is_some()
            && dnd.dragging_id.get_untracked().is_none()
            && exceeds_threshold(dnd.start.get_untracked(), (ev.client_x(), ev.client_y()))
        {
            dnd.dragging_id.set(pending);
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
    }
    on_mousemove.forget();
}

/// Document mouseup: completes a drag and calls `on_drop(card_id, target)`.
///
/// Binds the mousemove handler too. Call once per DndSignals.
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(String, String) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging_id = dnd.dragging_id.get_untracked();
        let drop_target = dnd.drop_target.get_untracked();
        end_drag(&dnd);
        // A plain click never had dragging_id set
        if let (Some(dragged), Some(target)) = (dragging_id, drop_target) {
            on_drop(dragged, target);
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    }
    on_mouseup.forget();

    bind_global_mousemove(dnd);
}
