use std::rc::Rc;

use arcadehub_core::catalog::{Catalog, GameEntry, GameId, placeholder_thumbnail};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlImageElement};

use crate::app::{self, AppHandle};
use crate::dom;

/// Render the card grid for every catalog entry, in stored order.
pub fn render(
    app: &AppHandle,
    catalog: &Catalog,
    document: &Document,
    main: &Element,
) -> Result<(), JsValue> {
    let intro = dom::el(document, "div", "catalog-intro")?;
    let heading = dom::el(document, "h2", "catalog-heading")?;
    heading.set_text_content(Some("Popular Games"));
    let tagline = dom::el(document, "p", "catalog-tagline")?;
    tagline.set_text_content(Some("Select a game to play instantly in your browser."));
    intro.append_child(&heading)?;
    intro.append_child(&tagline)?;
    main.append_child(&intro)?;

    let grid = dom::el(document, "div", "game-grid")?;
    for entry in catalog.entries() {
        grid.append_child(&render_card(app, entry, document)?.into())?;
    }
    main.append_child(&grid)?;
    Ok(())
}

/// One clickable card: thumbnail, PLAY badge, title, two-line description.
fn render_card(
    app: &AppHandle,
    entry: &GameEntry,
    document: &Document,
) -> Result<Element, JsValue> {
    let card = dom::el(document, "div", "game-card")?;

    let thumb = dom::el(document, "div", "card-thumb")?;
    let img: HtmlImageElement = document.create_element("img")?.dyn_into()?;
    img.set_alt(&entry.title);
    attach_thumbnail_fallback(&img, entry.id);
    img.set_src(&entry.thumbnail_url);
    thumb.append_child(&img)?;

    let badge = dom::el(document, "span", "play-badge")?;
    badge.set_text_content(Some("PLAY"));
    thumb.append_child(&badge)?;
    card.append_child(&thumb)?;

    let body = dom::el(document, "div", "card-body")?;
    let title = dom::el(document, "h3", "card-title")?;
    title.set_text_content(Some(&entry.title));
    let description = dom::el(document, "p", "card-description")?;
    description.set_text_content(Some(&entry.description));
    body.append_child(&title)?;
    body.append_child(&description)?;
    card.append_child(&body)?;

    let selected = entry.clone();
    dom::on_click(&card, {
        let app = Rc::clone(app);
        move || {
            app.borrow_mut().shell.select(&selected);
            app::rerender(&app);
        }
    })?;

    Ok(card)
}

/// Swap in the deterministic placeholder when the thumbnail fails to load.
/// The handler detaches itself first, so a placeholder that also fails
/// cannot retrigger it.
fn attach_thumbnail_fallback(img: &HtmlImageElement, id: GameId) {
    let fallback = placeholder_thumbnail(id);
    let target = img.clone();
    let onerror = Closure::<dyn FnMut()>::new(move || {
        target.set_onerror(None);
        target.set_src(&fallback);
    });
    img.set_onerror(Some(onerror.as_ref().unchecked_ref::<js_sys::Function>()));
    onerror.forget();
}
