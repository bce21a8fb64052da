use std::cell::RefCell;
use std::rc::Rc;

use arcadehub_core::catalog::Catalog;
use arcadehub_core::shell::{Shell, View};
use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::theme::Theme;
use crate::{catalog_view, diag, dom, player_view};

/// Root application: the immutable catalog plus the selection shell.
/// Shared with event closures via `Rc<RefCell<_>>` (WASM is
/// single-threaded).
pub struct App {
    pub catalog: Catalog,
    pub shell: Shell,
}

/// Shared handle passed into event closures.
pub type AppHandle = Rc<RefCell<App>>;

/// Build the application and render the initial view.
pub fn mount() -> Result<(), JsValue> {
    let catalog = match Catalog::bundled() {
        Ok(catalog) => catalog,
        Err(e) => {
            // Trusted data, so this only fires on a broken build; degrade
            // to an empty grid rather than aborting.
            diag::console_error!("bundled catalog failed to parse: {e}");
            Catalog::empty()
        },
    };

    Theme::load().apply();

    let app: AppHandle = Rc::new(RefCell::new(App {
        catalog,
        shell: Shell::new(),
    }));
    render(&app)
}

/// Rebuild the header controls and the main region for the current state.
pub fn render(app: &AppHandle) -> Result<(), JsValue> {
    let document = dom::document()?;
    render_header(app, &document)?;

    let main = dom::require_element(&document, "app-main")?;
    main.set_inner_html("");

    let state = app.borrow();
    match state.shell.view(&state.catalog) {
        View::Catalog => catalog_view::render(app, &state.catalog, &document, &main),
        View::Player(entry) => player_view::render(entry, &document, &main),
    }
}

/// Render entry point for event closures, where errors can only be logged.
pub fn rerender(app: &AppHandle) {
    if let Err(e) = render(app) {
        diag::console_error!("render failed: {e:?}");
    }
}

/// Header: the brand control (always present, returns to the catalog) and
/// the back control (present iff a game is selected).
fn render_header(app: &AppHandle, document: &Document) -> Result<(), JsValue> {
    let header = dom::require_element(document, "app-header")?;
    header.set_inner_html("");

    let brand = dom::el(document, "div", "brand")?;
    let badge = dom::el(document, "span", "brand-badge")?;
    badge.set_text_content(Some("\u{1F3AE}"));
    let title = dom::el(document, "h1", "brand-title")?;
    title.set_inner_html("Arcade<span class=\"brand-accent\">Hub</span>");
    brand.append_child(&badge)?;
    brand.append_child(&title)?;
    dom::on_click(&brand, {
        let app = Rc::clone(app);
        move || {
            app.borrow_mut().shell.clear();
            rerender(&app);
        }
    })?;
    header.append_child(&brand)?;

    if app.borrow().shell.back_visible() {
        let back = dom::el(document, "button", "back-button")?;
        back.set_text_content(Some("\u{2190} Back to Games"));
        dom::on_click(&back, {
            let app = Rc::clone(app);
            move || {
                app.borrow_mut().shell.clear();
                rerender(&app);
            }
        })?;
        header.append_child(&back)?;
    }

    Ok(())
}
