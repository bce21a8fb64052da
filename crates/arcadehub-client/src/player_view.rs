use arcadehub_core::catalog::GameEntry;
use arcadehub_core::sandbox;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlIFrameElement};

use crate::dom;

const HINT_TEXT: &str =
    "Some games may take a moment to load or require clicking inside to start.";

/// Render the player panel: heading, fullscreen control, sandboxed frame,
/// and the hover hint overlay. The frame is an opaque, fully untrusted
/// black box; no channel to or from it is established.
pub fn render(entry: &GameEntry, document: &Document, main: &Element) -> Result<(), JsValue> {
    let panel = dom::el(document, "div", "player-panel")?;

    let frame: HtmlIFrameElement = document.create_element("iframe")?.dyn_into()?;
    frame.set_class_name("game-frame");
    frame.set_attribute("title", &entry.title)?;
    frame.set_attribute("sandbox", &sandbox::sandbox_attr())?;
    frame.set_attribute("allow", &sandbox::allow_attr())?;
    frame.set_src(&entry.iframe_url);

    let toolbar = dom::el(document, "div", "player-toolbar")?;
    let heading = dom::el(document, "h2", "player-title")?;
    heading.set_text_content(Some(&entry.title));
    toolbar.append_child(&heading)?;

    let fullscreen = dom::el(document, "button", "fullscreen-button")?;
    fullscreen.set_text_content(Some("\u{26F6} Fullscreen"));
    dom::on_click(&fullscreen, {
        let target = frame.clone();
        move || request_fullscreen(&target)
    })?;
    toolbar.append_child(&fullscreen)?;
    panel.append_child(&toolbar)?;

    let stage = dom::el(document, "div", "frame-stage")?;
    stage.append_child(&frame)?;

    let hint = dom::el(document, "div", "frame-hint")?;
    hint.set_text_content(Some(HINT_TEXT));
    stage.append_child(&hint)?;
    attach_hint_visibility(&stage, &hint)?;

    panel.append_child(&stage)?;
    main.append_child(&panel)?;
    Ok(())
}

/// Request fullscreen on the frame element. Runtimes without the
/// capability make this a silent no-op.
fn request_fullscreen(frame: &HtmlIFrameElement) {
    let Ok(document) = dom::document() else {
        return;
    };
    if !document.fullscreen_enabled() {
        return;
    }
    let _ = frame.request_fullscreen();
}

/// Show the hint only while the pointer is over the frame region. The
/// overlay has `pointer-events: none`, so it never blocks interaction
/// with the frame beneath it.
fn attach_hint_visibility(stage: &Element, hint: &Element) -> Result<(), JsValue> {
    let enter_hint = hint.clone();
    dom::on_event(stage, "mouseenter", move || {
        let _ = enter_hint.class_list().add_1("visible");
    })?;
    let leave_hint = hint.clone();
    dom::on_event(stage, "mouseleave", move || {
        let _ = leave_hint.class_list().remove_1("visible");
    })?;
    Ok(())
}
