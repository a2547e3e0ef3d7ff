// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings: mount a search session on the live page.
//!
//! `PredictiveSearch` looks up `#site-search`, its enclosing `<form>` and
//! `#search-suggestions`, scans the page, starts the remote index fetch and
//! attaches the event listeners. Everything after that is the session's job;
//! this module only translates DOM events into session calls and session
//! output back into DOM writes.
//!
//! ```js
//! import init, { PredictiveSearch } from "./allo_search.js";
//!
//! await init();
//! const search = new PredictiveSearch({ debounceMs: 110 });
//! ```
//!
//! Timers: after every event the adapter arms a single `setTimeout` for the
//! session's next deadline and calls `advance` when it fires.
//!
//! Navigation: the session only records the target. Each handler releases
//! its borrow of the session before the page is left, so a synchronous
//! `on_navigate` callback may read the instance again.

use crate::config::SearchConfig;
use crate::index::{CategoryTile, FetchOutcome, ListingCard, MenuLink, PageSource};
use crate::render::{RenderSink, SuggestionRow};
use crate::session::{DefaultAction, Key, Millis, PendingNavigation, SearchSession};
use js_sys::Function;
use serde_wasm_bindgen::to_value;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{
    console, Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement,
    KeyboardEvent, Node, NodeList, Response, ScrollIntoViewOptions, ScrollLogicalPosition,
};

const INPUT_SELECTOR: &str = "#site-search";
const LIST_SELECTOR: &str = "#search-suggestions";

const TILE_SELECTOR: &str = ".category-tile";
const TILE_TITLE_SELECTOR: &str = ".title";
const MENU_LINK_SELECTOR: &str = ".menu .submenu a";
const NESTED_MENU_SELECTOR: &str = ".subsubmenu";
const CARD_TITLE_SELECTOR: &str = ".card.product .title";
const CARD_SELECTOR: &str = ".card.product";
const CARD_ACTION_SELECTOR: &str = ".actions a[href]";
const SERVICE_CLASS: &str = "service";
const ROW_SELECTOR: &str = "li[data-index]";

/// Install the panic hook once the module is instantiated.
#[wasm_bindgen(start)]
pub fn wasm_init() {
    console_error_panic_hook::set_once();
}

// ──────────────────────────────────────────────────────────────────────────────
// DOM helpers
// ──────────────────────────────────────────────────────────────────────────────

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn now_ms() -> Millis {
    web_sys::window()
        .and_then(|window| window.performance())
        .map_or(0, |performance| performance.now() as Millis)
}

fn text_of(element: &Element) -> String {
    element.text_content().unwrap_or_default()
}

// ──────────────────────────────────────────────────────────────────────────────
// Collaborators
// ──────────────────────────────────────────────────────────────────────────────

/// The live document as a read-only `PageSource`.
struct DomPage {
    document: Document,
}

impl DomPage {
    fn select_all(&self, selector: &str) -> Vec<Element> {
        self.document
            .query_selector_all(selector)
            .map(elements)
            .unwrap_or_default()
    }
}

impl PageSource for DomPage {
    fn category_tiles(&self) -> Vec<CategoryTile> {
        self.select_all(TILE_SELECTOR)
            .iter()
            .map(|tile| CategoryTile {
                title: tile
                    .query_selector(TILE_TITLE_SELECTOR)
                    .ok()
                    .flatten()
                    .map(|title| text_of(&title)),
                href: tile.get_attribute("href"),
            })
            .collect()
    }

    fn menu_links(&self) -> Vec<MenuLink> {
        self.select_all(MENU_LINK_SELECTOR)
            .iter()
            .map(|link| MenuLink {
                text: text_of(link),
                href: link.get_attribute("href"),
                depth: match link.closest(NESTED_MENU_SELECTOR) {
                    Ok(Some(_)) => 1,
                    _ => 0,
                },
            })
            .collect()
    }

    fn listing_cards(&self) -> Vec<ListingCard> {
        self.select_all(CARD_TITLE_SELECTOR)
            .iter()
            .map(|title| {
                let card = title.closest(CARD_SELECTOR).ok().flatten();
                let action_href = card
                    .as_ref()
                    .and_then(|card| card.query_selector(CARD_ACTION_SELECTOR).ok().flatten())
                    .and_then(|action| action.get_attribute("href"));
                ListingCard {
                    title: text_of(title),
                    action_href,
                    service: card
                        .map(|card| card.class_list().contains(SERVICE_CLASS))
                        .unwrap_or(false),
                }
            })
            .collect()
    }
}

/// Writes rows into `#search-suggestions` and keeps the ARIA attributes in step.
struct DomSink {
    document: Document,
    input: HtmlInputElement,
    list: HtmlElement,
}

impl DomSink {
    fn append_row(&self, row: &SuggestionRow) -> Result<(), JsValue> {
        let item = self.document.create_element("li")?;
        item.set_attribute("role", "option")?;
        item.set_id(&row.element_id());
        item.set_attribute("data-url", &row.url)?;
        item.set_attribute("data-index", &row.rank.to_string())?;
        item.set_attribute("aria-selected", "false")?;
        item.set_inner_html(&row.inner_html());
        self.list.append_child(&item)?;
        Ok(())
    }

    fn rows(&self) -> Vec<Element> {
        self.list
            .query_selector_all(ROW_SELECTOR)
            .map(elements)
            .unwrap_or_default()
    }

    fn set_expanded(&self, expanded: bool) {
        let value = if expanded { "true" } else { "false" };
        if let Err(e) = self.input.set_attribute("aria-expanded", value) {
            console::warn_1(&e);
        }
    }
}

impl RenderSink for DomSink {
    fn show(&mut self, rows: &[SuggestionRow]) {
        self.list.set_inner_html("");
        for row in rows {
            if let Err(e) = self.append_row(row) {
                console::warn_1(&e);
            }
        }
        self.list.set_hidden(false);
        self.set_expanded(true);
    }

    fn hide(&mut self) {
        self.list.set_hidden(true);
        self.set_expanded(false);
    }

    fn select(&mut self, active: Option<usize>) {
        let rows = self.rows();
        for (i, row) in rows.iter().enumerate() {
            let selected = if Some(i) == active { "true" } else { "false" };
            let _ = row.set_attribute("aria-selected", selected);
        }
        if let Some(row) = active.and_then(|i| rows.get(i)) {
            let options = ScrollIntoViewOptions::new();
            options.set_block(ScrollLogicalPosition::Nearest);
            row.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

/// Assigns `location.href`, or hands the url to a JS callback when given one.
struct DomNavigator {
    callback: Option<Function>,
}

impl DomNavigator {
    fn go(&self, url: &str) {
        let result = match &self.callback {
            Some(callback) => callback
                .call1(&JsValue::NULL, &JsValue::from_str(url))
                .map(|_| ()),
            None => match web_sys::window() {
                Some(window) => window.location().set_href(url),
                None => Err(JsValue::from_str("No window")),
            },
        };
        if let Err(e) = result {
            console::warn_1(&e);
        }
    }
}

type DomSession = SearchSession<DomSink, PendingNavigation>;

/// Session plus the one armed `setTimeout`, shared by every listener.
struct Shared {
    session: RefCell<DomSession>,
    navigator: DomNavigator,
    timer: Cell<Option<i32>>,
}

/// Leave the page if the last session call asked to. Must run with the
/// session unborrowed.
fn follow_navigation(shared: &Shared) {
    let url = shared.session.borrow_mut().navigator_mut().take();
    if let Some(url) = url {
        shared.navigator.go(&url);
    }
}

/// Re-arm the timer for the session's next deadline.
fn arm_timer(shared: &Rc<Shared>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(handle) = shared.timer.take() {
        window.clear_timeout_with_handle(handle);
    }
    let Some(deadline) = shared.session.borrow().next_deadline() else {
        return;
    };

    // +1 so a floored clock reading never lands just short of the deadline
    let delay = deadline.saturating_sub(now_ms()) + 1;
    let handle = Rc::clone(shared);
    let callback = Closure::once_into_js(move || {
        handle.timer.set(None);
        handle.session.borrow_mut().advance(now_ms());
        arm_timer(&handle);
    });
    match window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        delay.min(i32::MAX as Millis) as i32,
    ) {
        Ok(handle) => shared.timer.set(Some(handle)),
        Err(e) => console::warn_1(&e),
    }
}

async fn fetch_text(url: &str) -> Result<FetchOutcome, JsValue> {
    let window = web_sys::window().ok_or("No window")?;
    let response: Response = JsFuture::from(window.fetch_with_str(url))
        .await?
        .dyn_into()?;
    let status = response.status();
    if !response.ok() {
        return Ok(FetchOutcome::Response {
            status,
            body: String::new(),
        });
    }
    let body = JsFuture::from(response.text()?)
        .await?
        .as_string()
        .unwrap_or_default();
    Ok(FetchOutcome::Response { status, body })
}

async fn fetch_remote(url: &str) -> FetchOutcome {
    match fetch_text(url).await {
        Ok(outcome) => outcome,
        Err(e) => FetchOutcome::NetworkError(e.as_string().unwrap_or_else(|| format!("{:?}", e))),
    }
}

type Listener = Closure<dyn FnMut(Event)>;

fn listen<F>(
    target: &EventTarget,
    event: &str,
    listeners: &mut Vec<Listener>,
    handler: F,
) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Listener::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    listeners.push(closure);
    Ok(())
}

// ──────────────────────────────────────────────────────────────────────────────
// Exported API
// ──────────────────────────────────────────────────────────────────────────────

/// Predictive search mounted on the current page.
///
/// Keep the instance alive for as long as the page needs search: dropping it
/// drops the event listeners.
#[wasm_bindgen]
pub struct PredictiveSearch {
    shared: Rc<Shared>,
    _listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl PredictiveSearch {
    /// Mount on `#site-search` / `#search-suggestions`.
    ///
    /// # Arguments
    ///
    /// * `options` - `SearchConfig` object, e.g. `{ debounceMs: 160, remoteIndexUrl: null }`
    /// * `on_navigate` - optional `(url) => void` used instead of `location.href = url`
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue, on_navigate: Option<Function>) -> Result<PredictiveSearch, JsValue> {
        let config: SearchConfig = if options.is_undefined() || options.is_null() {
            SearchConfig::default()
        } else {
            serde_wasm_bindgen::from_value(options)
                .map_err(|e| JsValue::from_str(&format!("Invalid options: {}", e)))?
        };
        config
            .validate()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let window = web_sys::window().ok_or("No window")?;
        let document = window.document().ok_or("No document")?;

        let input: HtmlInputElement = document
            .query_selector(INPUT_SELECTOR)?
            .ok_or("Search input not found")?
            .dyn_into()
            .map_err(|_| "Search input is not an <input>")?;
        let list: HtmlElement = document
            .query_selector(LIST_SELECTOR)?
            .ok_or("Suggestion list not found")?
            .dyn_into()
            .map_err(|_| "Suggestion list is not an HTML element")?;
        let form = input
            .closest("form")?
            .ok_or("Search input is not inside a form")?;

        let page = DomPage {
            document: document.clone(),
        };
        let sink = DomSink {
            document: document.clone(),
            input: input.clone(),
            list: list.clone(),
        };
        let session =
            SearchSession::from_page(config, &page, sink, PendingNavigation::default());

        let shared = Rc::new(Shared {
            session: RefCell::new(session),
            navigator: DomNavigator {
                callback: on_navigate,
            },
            timer: Cell::new(None),
        });

        let request = shared.session.borrow_mut().take_remote_request();
        if let Some(request) = request {
            let handle = Rc::clone(&shared);
            spawn_local(async move {
                let outcome = fetch_remote(&request.url).await;
                handle.session.borrow_mut().settle_remote(outcome);
            });
        }

        let mut listeners = Vec::new();

        let (s, field) = (Rc::clone(&shared), input.clone());
        listen(&input, "input", &mut listeners, move |_| {
            s.session.borrow_mut().on_input(&field.value(), now_ms());
            arm_timer(&s);
        })?;

        let s = Rc::clone(&shared);
        listen(&input, "keydown", &mut listeners, move |event: Event| {
            let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let key = Key::from_dom_key(&key_event.key());
            let action = s.session.borrow_mut().on_key(key);
            if action == DefaultAction::Suppress {
                event.prevent_default();
            }
            arm_timer(&s);
            follow_navigation(&s);
        })?;

        let s = Rc::clone(&shared);
        listen(&form, "submit", &mut listeners, move |event: Event| {
            let action = s.session.borrow_mut().on_submit();
            if action == DefaultAction::Suppress {
                event.prevent_default();
            }
            arm_timer(&s);
            follow_navigation(&s);
        })?;

        // mousedown, not click: it runs before the input's blur
        let s = Rc::clone(&shared);
        listen(&list, "mousedown", &mut listeners, move |event: Event| {
            let rank = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|target| target.closest(ROW_SELECTOR).ok().flatten())
                .and_then(|row| row.get_attribute("data-index"))
                .and_then(|index| index.parse::<usize>().ok());
            if let Some(rank) = rank {
                let action = s.session.borrow_mut().on_row_press(rank);
                if action == DefaultAction::Suppress {
                    event.prevent_default();
                }
                arm_timer(&s);
                follow_navigation(&s);
            }
        })?;

        let s = Rc::clone(&shared);
        listen(&input, "blur", &mut listeners, move |_| {
            s.session.borrow_mut().on_blur(now_ms());
            arm_timer(&s);
        })?;

        let s = Rc::clone(&shared);
        listen(&input, "focus", &mut listeners, move |_| {
            s.session.borrow_mut().on_focus();
            arm_timer(&s);
        })?;

        let (s, form_node): (_, Node) = (Rc::clone(&shared), form.clone().into());
        listen(&document, "click", &mut listeners, move |event: Event| {
            let inside = event
                .target()
                .and_then(|target| target.dyn_into::<Node>().ok())
                .is_some_and(|node| form_node.contains(Some(&node)));
            if !inside {
                s.session.borrow_mut().on_outside_click();
                arm_timer(&s);
            }
        })?;

        Ok(PredictiveSearch {
            shared,
            _listeners: listeners,
        })
    }

    /// Whether the suggestion list is showing.
    #[wasm_bindgen(getter, js_name = isOpen)]
    pub fn is_open(&self) -> bool {
        self.shared
            .session
            .try_borrow()
            .is_ok_and(|session| session.is_open())
    }

    /// Number of rows on display.
    #[wasm_bindgen(getter, js_name = resultCount)]
    pub fn result_count(&self) -> usize {
        self.shared
            .session
            .try_borrow()
            .map_or(0, |session| session.results().len())
    }

    /// Keyboard selection, -1 for none.
    #[wasm_bindgen(getter, js_name = activeIndex)]
    pub fn active_index(&self) -> i32 {
        self.shared
            .session
            .try_borrow()
            .map_or(-1, |session| session.state().active_index() as i32)
    }

    /// Number of entries loaded from the remote index.
    #[wasm_bindgen(getter, js_name = remoteCount)]
    pub fn remote_count(&self) -> usize {
        self.shared
            .session
            .try_borrow()
            .map_or(0, |session| session.remote_entries().len())
    }

    /// Rows currently on display, as plain objects.
    #[wasm_bindgen]
    pub fn suggestions(&self) -> Result<JsValue, JsValue> {
        let session = self
            .shared
            .session
            .try_borrow()
            .map_err(|_| JsValue::from_str("Search session is busy"))?;
        to_value(session.results()).map_err(|e| e.to_string().into())
    }
}
