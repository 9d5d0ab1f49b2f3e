// SPDX-License-Identifier: MIT

//!
//! The HTML + SVG frontend
//!
//! ```sh
//! wasm-pack build --target web
//! python3 -m http.server 8000 --bind 0.0.0.0
//! ```
//!
//! then open <http://localhost:8000/demos/> for the demo page (the sample
//! options), or use it from your own page:
//!
//! ```js
//! import init, { DeliveryTimelineHtml } from "./pkg/delivery_timeline_renderer.js";
//! await init();
//! const timeline = new DeliveryTimelineHtml("#timeline", options);
//! timeline.mount();
//! ```
//!

use crate::frontends::svg::{OPTION_INDEX_ATTRIBUTE, escape_xml, render_svg};
use crate::{Engine, MAX_SLIDER_VALUE, MIN_SLIDER_VALUE, Point, SLIDER_STEP};
use chrono::{DateTime, Utc};
use delivery_timeline_core::DeliveryOptions;
use log::{debug, info, trace};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::{Closure, wasm_bindgen};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement, MouseEvent};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    console_log::init_with_level(log::Level::Debug)
        .map_err(|error| JsValue::from_str(&error.to_string()))?;
    info!("Start delivery timeline");
    Ok(())
}

/// An event listener that is removed from its target when dropped
struct ScopedListener {
    target: EventTarget,
    event_name: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl ScopedListener {
    fn new<E, F>(target: &EventTarget, event_name: &'static str, mut listener: F) -> Result<Self, JsValue>
    where
        E: JsCast + 'static,
        F: FnMut(E) + 'static,
    {
        let closure = Closure::wrap(Box::new(move |event: Event| {
            if let Ok(event) = event.dyn_into::<E>() {
                listener(event);
            }
        }) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())?;
        debug!("Added `{event_name}` listener");
        Ok(Self {
            target: target.clone(),
            event_name,
            closure,
        })
    }
}

impl Drop for ScopedListener {
    fn drop(&mut self) {
        let removed = self.target.remove_event_listener_with_callback(
            self.event_name,
            self.closure.as_ref().unchecked_ref(),
        );
        debug!("Removed `{}` listener ({removed:?})", self.event_name);
    }
}

/// The elements the timeline is made of.  They are removed from the container
/// when dropped
struct Elements {
    /// Holds the SVG drawing
    surface: HtmlElement,
    tooltip: HtmlElement,
    slider: HtmlInputElement,
    readout: HtmlElement,

    /// The container, if its inline `position` was changed, along with the
    /// value it had before
    positioned_container: Option<(HtmlElement, String)>,
}

impl Elements {
    /// Create the elements inside the container
    fn create_in(document: &Document, container: &Element) -> Result<Self, JsValue> {
        let create = |tag: &str, class: &str| -> Result<HtmlElement, JsValue> {
            let element = document.create_element(tag)?;
            element.set_class_name(class);
            container.append_child(&element)?;
            element.dyn_into::<HtmlElement>().map_err(JsValue::from)
        };

        // The tooltip is positioned relative to the container
        let positioned_container = match container.dyn_ref::<HtmlElement>() {
            Some(container) => {
                let style = container.style();
                let previous = style.get_property_value("position")?;
                style.set_property("position", "relative")?;
                Some((container.clone(), previous))
            }
            None => None,
        };

        let surface = create("div", "delivery-timeline-surface")?;
        let tooltip = create("div", "delivery-timeline-tooltip")?;
        let slider = create("input", "delivery-timeline-slider")?
            .dyn_into::<HtmlInputElement>()
            .map_err(JsValue::from)?;
        let readout = create("p", "delivery-timeline-readout")?;

        let style = tooltip.style();
        style.set_property("position", "absolute")?;
        style.set_property("display", "none")?;
        style.set_property("pointer-events", "none")?;
        style.set_property("padding", "4px 8px")?;
        style.set_property("font-family", "Arial, sans-serif")?;
        style.set_property("font-size", "12px")?;

        slider.set_type("range");
        slider.set_min(&MIN_SLIDER_VALUE.to_string());
        slider.set_max(&MAX_SLIDER_VALUE.to_string());
        slider.set_step(&SLIDER_STEP.to_string());
        slider.style().set_property("width", "100%")?;

        Ok(Self {
            surface,
            tooltip,
            slider,
            readout,
            positioned_container,
        })
    }
}

impl Drop for Elements {
    fn drop(&mut self) {
        self.surface.remove();
        self.tooltip.remove();
        self.slider.remove();
        self.readout.remove();
        if let Some((container, previous)) = &self.positioned_container {
            let style = container.style();
            let restored = if previous.is_empty() {
                style.remove_property("position").map(|_| ())
            } else {
                style.set_property("position", previous)
            };
            if let Err(error) = restored {
                debug!("Failed to restore container position: {error:?}");
            }
        }
        debug!("Removed delivery timeline elements");
    }
}

/// The HTML + SVG timeline for use on the web
#[wasm_bindgen]
pub struct DeliveryTimelineHtml {
    /// The underlying timeline [`Engine`]
    engine: Rc<RefCell<Engine>>,

    elements: Rc<Elements>,

    /// Only held while mounted
    listeners: Vec<ScopedListener>,
}

#[wasm_bindgen]
impl DeliveryTimelineHtml {
    /// Create a timeline inside the element matching the CSS selector.  If no
    /// options are given (`undefined` or `null`) the sample options are shown
    #[wasm_bindgen(constructor)]
    pub fn new(container_selector: &str, options: JsValue) -> Result<DeliveryTimelineHtml, JsValue> {
        info!("Constructing a new DeliveryTimelineHtml in Rust");
        let document = document()?;
        let container = document
            .query_selector(container_selector)?
            .ok_or_else(|| JsValue::from_str(&format!("No element matches `{container_selector}`")))?;

        let options = if options.is_undefined() || options.is_null() {
            DeliveryOptions::sample()
        } else {
            options_from_js(options)?
        };

        let timeline = Self {
            engine: Rc::new(RefCell::new(Engine::new(options))),
            elements: Rc::new(Elements::create_in(&document, &container)?),
            listeners: Vec::new(),
        };
        timeline.draw();
        Ok(timeline)
    }

    /// Start listening for pointer and slider events.  Does nothing if already
    /// mounted
    #[wasm_bindgen]
    pub fn mount(&mut self) -> Result<(), JsValue> {
        if self.is_mounted() {
            return Ok(());
        }
        info!("Mounting delivery timeline");
        let listeners = vec![
            self.listen_for_mousemove()?,
            self.listen_for_mouseover()?,
            self.listen_for_mouseout()?,
            self.listen_for_input()?,
        ];
        self.listeners = listeners;
        Ok(())
    }

    /// Stop listening for events
    #[wasm_bindgen]
    pub fn unmount(&mut self) {
        info!("Unmounting delivery timeline ({} listeners)", self.listeners.len());
        self.listeners.clear();
    }

    #[wasm_bindgen]
    pub fn is_mounted(&self) -> bool {
        !self.listeners.is_empty()
    }

    /// Replace the options (an array of `{ arrival_date, cutoff }` objects)
    #[wasm_bindgen]
    pub fn set_options(&mut self, options: JsValue) -> Result<(), JsValue> {
        let options = options_from_js(options)?;
        self.engine.borrow_mut().set_options(options);
        self.draw();
        Ok(())
    }

    /// Move the slider to an ISO 8601 timestamp
    #[wasm_bindgen]
    pub fn set_reference_time(&mut self, timestamp: &str) -> Result<(), JsValue> {
        let reference_time = DateTime::parse_from_rfc3339(timestamp)
            .map_err(|error| JsValue::from_str(&format!("`{timestamp}`: {error}")))?
            .with_timezone(&Utc);
        self.engine.borrow_mut().set_current_time(reference_time);
        self.draw();
        Ok(())
    }

    #[wasm_bindgen]
    pub fn slider_value(&self) -> f64 {
        self.engine.borrow().slider_value()
    }

    /// The simulated current time (RFC 3339)
    #[wasm_bindgen]
    pub fn current_time(&self) -> String {
        self.engine.borrow().current_time().to_rfc3339()
    }

    /// Redraw everything
    #[wasm_bindgen]
    pub fn draw(&self) {
        draw_timeline(&self.engine, &self.elements);
    }

    //--------------------------------------------------------------------------
    // Manage events
    //--------------------------------------------------------------------------

    /// Window-wide, so the tooltip follows the pointer wherever the event
    /// target is
    fn listen_for_mousemove(&self) -> Result<ScopedListener, JsValue> {
        let engine = self.engine.clone();
        let elements = self.elements.clone();
        let window = window()?;
        ScopedListener::new(&window, "mousemove", move |event: MouseEvent| {
            let rect = elements.surface.get_bounding_client_rect();
            let position = Point::new(
                event.client_x() as f64 - rect.left(),
                event.client_y() as f64 - rect.top(),
            );
            engine.borrow_mut().set_pointer_position(position);
            draw_tooltip(&engine.borrow(), &elements);
        })
    }

    fn listen_for_mouseover(&self) -> Result<ScopedListener, JsValue> {
        let engine = self.engine.clone();
        let elements = self.elements.clone();
        ScopedListener::new(&self.elements.surface, "mouseover", move |event: MouseEvent| {
            if let Some(index) = option_index_of_target(&event) {
                engine.borrow_mut().hover_over_option(Some(index));
                draw_tooltip(&engine.borrow(), &elements);
                drain_events(&engine);
            }
        })
    }

    fn listen_for_mouseout(&self) -> Result<ScopedListener, JsValue> {
        let engine = self.engine.clone();
        let elements = self.elements.clone();
        ScopedListener::new(&self.elements.surface, "mouseout", move |event: MouseEvent| {
            if option_index_of_target(&event).is_some() {
                engine.borrow_mut().hover_over_option(None);
                draw_tooltip(&engine.borrow(), &elements);
                drain_events(&engine);
            }
        })
    }

    fn listen_for_input(&self) -> Result<ScopedListener, JsValue> {
        let engine = self.engine.clone();
        let elements = self.elements.clone();
        ScopedListener::new(&self.elements.slider, "input", move |_event: Event| {
            let value = elements.slider.value_as_number();
            engine.borrow_mut().set_slider_value(value);
            draw_timeline(&engine, &elements);
        })
    }
}

fn window() -> Result<web_sys::Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("No window"))
}

fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))
}

fn options_from_js(options: JsValue) -> Result<DeliveryOptions, JsValue> {
    serde_wasm_bindgen::from_value::<DeliveryOptions>(options)
        .map_err(|error| JsValue::from_str(&error.to_string()))
}

/// The option index of the marker the event targets (if it targets one)
fn option_index_of_target(event: &MouseEvent) -> Option<usize> {
    event
        .target()?
        .dyn_into::<Element>()
        .ok()?
        .get_attribute(OPTION_INDEX_ATTRIBUTE)?
        .parse()
        .ok()
}

/// Log (and discard) the engine's queued events
fn drain_events(engine: &Rc<RefCell<Engine>>) {
    for event in engine.borrow_mut().drain_interaction_events() {
        trace!("{event:?}");
    }
}

fn draw_timeline(engine: &Rc<RefCell<Engine>>, elements: &Elements) {
    {
        let engine = engine.borrow();
        elements.surface.set_inner_html(&render_svg(&engine));
        elements
            .slider
            .set_value(&engine.slider_value().to_string());
        elements
            .readout
            .set_text_content(Some(&engine.current_time_readout()));
        draw_tooltip(&engine, elements);
    }
    drain_events(engine);
}

fn draw_tooltip(engine: &Engine, elements: &Elements) {
    let style = elements.tooltip.style();
    let result = match engine.tooltip_for_drawing() {
        Some(tooltip) => {
            let [cutoff, arrival] = tooltip.lines();
            elements.tooltip.set_inner_html(&format!(
                "{}<br>{}",
                escape_xml(&cutoff),
                escape_xml(&arrival)
            ));
            [
                ("left", format!("{}px", tooltip.top_left.x)),
                ("top", format!("{}px", tooltip.top_left.y)),
                ("background", tooltip.colours.fill.to_hex()),
                ("border", format!("1px solid {}", tooltip.colours.border.to_hex())),
                ("color", tooltip.colours.text.to_hex()),
                ("display", "block".to_string()),
            ]
            .iter()
            .try_for_each(|(property, value)| style.set_property(property, value))
        }
        None => style.set_property("display", "none"),
    };
    if let Err(error) = result {
        debug!("Failed to style tooltip: {error:?}");
    }
}
