// SPDX-License-Identifier: MIT

//!
//! The egui frontend
//!

use crate::{
    Engine, LayoutParams, LayoutParamsError, LineOut, MAX_SLIDER_VALUE, MIN_SLIDER_VALUE, Point,
    TextOut, TimelineColours, TimelineInteractionEvent, TooltipOut,
};
use chrono::{DateTime, Utc};
use delivery_timeline_core::DeliveryOptions;
use eframe::egui::{
    Align2, Area, Context, FontId, Frame, Id, Order, Painter, Pos2, Rect, RichText, Sense, Slider,
    Stroke, Ui, Vec2,
};
use log::*;

/// The delivery timeline for use in `egui` applications
pub struct DeliveryTimelineEgui {
    /// The underlying timeline [`Engine`].
    engine: Engine,
}

impl DeliveryTimelineEgui {
    /// Create a new egui timeline with the slider at the start
    pub fn new(options: DeliveryOptions) -> Self {
        info!("Constructing a new DeliveryTimelineEgui in Rust");
        Self {
            engine: Engine::new(options),
        }
    }

    /// Create a new egui timeline with the slider at the reference time
    pub fn with_reference_time(options: DeliveryOptions, reference_time: DateTime<Utc>) -> Self {
        info!("Constructing a new DeliveryTimelineEgui in Rust ({reference_time})");
        Self {
            engine: Engine::with_reference_time(options, reference_time),
        }
    }

    pub fn set_options(&mut self, options: DeliveryOptions) {
        self.engine.set_options(options);
    }

    pub fn options(&self) -> &DeliveryOptions {
        self.engine.options()
    }

    pub fn current_time(&self) -> DateTime<Utc> {
        self.engine.current_time()
    }

    pub fn set_current_time(&mut self, moment: DateTime<Utc>) {
        self.engine.set_current_time(moment);
    }

    pub fn slider_value(&self) -> f64 {
        self.engine.slider_value()
    }

    pub fn set_slider_value(&mut self, value: f64) {
        self.engine.set_slider_value(value);
    }

    pub fn colours(&self) -> TimelineColours {
        self.engine.colours()
    }

    /// Only logs & sets when the colours actually change (this is called every
    /// frame)
    pub fn set_colours(&mut self, colours: TimelineColours) {
        if colours != self.engine.colours() {
            self.engine.set_colours(colours)
        }
    }

    pub fn set_layout_params(
        &mut self,
        layout_params: LayoutParams,
    ) -> Result<(), LayoutParamsError> {
        if layout_params != self.engine.layout_params() {
            self.engine.set_layout_params(layout_params)?;
        }
        Ok(())
    }

    pub fn drain_interaction_events(&mut self) -> std::vec::Drain<'_, TimelineInteractionEvent> {
        self.engine.drain_interaction_events()
    }

    /// Draw the timeline, its slider and the current time readout
    pub fn draw(&mut self, ctx: &Context, ui: &mut Ui) {
        draw_timeline(ctx, ui, &mut self.engine);
        draw_slider(ui, &mut self.engine);
    }
}

/// Maps drawing units to screen positions
#[derive(Debug, Clone, Copy)]
struct Scale {
    origin: Pos2,
    factor: f32,
}

impl Scale {
    fn pos(&self, point: Point) -> Pos2 {
        self.origin + Vec2::new(point.x as f32, point.y as f32) * self.factor
    }

    fn length(&self, length: f64) -> f32 {
        length as f32 * self.factor
    }

    /// Screen position to drawing units
    fn point(&self, pos: Pos2) -> Point {
        let offset = (pos - self.origin) / self.factor;
        Point::new(offset.x.into(), offset.y.into())
    }
}

/// Draw the timeline in an `egui` application, scaled to the available width
fn draw_timeline(ctx: &Context, ui: &mut Ui, engine: &mut Engine) {
    let width = ui.available_width();
    let factor = width / engine.drawing_width() as f32;
    let height = engine.drawing_height() as f32 * factor;
    let (painter_response, painter) = ui.allocate_painter(Vec2::new(width, height), Sense::hover());
    let scale = Scale {
        origin: painter_response.rect.min,
        factor,
    };

    // Hover over options.  The pointer is read from egui's global input so the
    // tooltip keeps tracking it
    match ui.input(|i| i.pointer.hover_pos()) {
        Some(pointer) => {
            let relative = pointer - scale.origin;
            engine.set_pointer_position(Point::new(relative.x.into(), relative.y.into()));
            if painter_response.hovered() {
                engine.hover_at_point(scale.point(pointer));
            } else {
                engine.hover_over_option(None);
            }
        }
        None => engine.hover_over_option(None),
    }

    let background = engine.background_for_drawing();
    let rect = background.position_and_size;
    painter.rect_filled(
        Rect::from_min_max(
            scale.pos(rect.position),
            scale.pos(Point::new(rect.max_x(), rect.max_y())),
        ),
        0.0,
        background.fill_colour,
    );

    draw_line(&painter, scale, &engine.axis_for_drawing());

    for day in engine.days_for_drawing() {
        draw_line(&painter, scale, &day.grid_line);
        draw_text(&painter, scale, &day.weekday_label);
        draw_text(&painter, scale, &day.date_label);
    }

    for option in engine.options_for_drawing() {
        draw_line(&painter, scale, &option.line);
        let marker = option.marker;
        painter.circle_filled(
            scale.pos(marker.centre),
            scale.length(marker.radius),
            marker.fill_colour.to_egui_with_opacity(marker.opacity),
        );
    }

    draw_line(&painter, scale, &engine.now_line_for_drawing());

    if let Some(tooltip) = engine.tooltip_for_drawing() {
        draw_tooltip(ctx, scale.origin, &tooltip);
    }
}

fn draw_line(painter: &Painter, scale: Scale, line: &LineOut) {
    painter.line_segment(
        [scale.pos(line.from), scale.pos(line.to)],
        Stroke::new(
            scale.length(line.style.thickness),
            line.style.colour.to_egui_with_opacity(line.opacity),
        ),
    );
}

/// The text's position is its baseline's left end.  egui's default fonts have
/// no bold face, so bold text is drawn as-is
fn draw_text(painter: &Painter, scale: Scale, text: &TextOut) {
    painter.text(
        scale.pos(text.position),
        Align2::LEFT_BOTTOM,
        &text.text,
        FontId::proportional(scale.length(text.font_size)),
        text.colour.to_egui_with_opacity(text.opacity),
    );
}

/// The tooltip's position is relative to the timeline's top left
fn draw_tooltip(ctx: &Context, origin: Pos2, tooltip: &TooltipOut) {
    let top_left = origin + Vec2::new(tooltip.top_left.x as f32, tooltip.top_left.y as f32);
    Area::new(Id::new("delivery_timeline_tooltip"))
        .order(Order::Tooltip)
        .fixed_pos(top_left)
        .interactable(false)
        .show(ctx, |ui| {
            Frame::popup(ui.style())
                .fill(tooltip.colours.fill.into())
                .stroke(Stroke::new(1.0, tooltip.colours.border))
                .show(ui, |ui| {
                    for line in tooltip.lines() {
                        ui.label(RichText::new(line).color(tooltip.colours.text));
                    }
                });
        });
}

/// Draw the time-scrub slider (full width) and the current time readout
fn draw_slider(ui: &mut Ui, engine: &mut Engine) {
    let mut value = engine.slider_value();
    ui.spacing_mut().slider_width = ui.available_width();
    let response = ui.add(
        Slider::new(&mut value, MIN_SLIDER_VALUE..=MAX_SLIDER_VALUE).show_value(false),
    );
    if response.changed() {
        engine.set_slider_value(value);
    }
    ui.label(engine.current_time_readout());
}
