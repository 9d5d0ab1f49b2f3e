// SPDX-License-Identifier: MIT

//!
//! The `delivery-timeline-renderer` engine
//!

mod colours;
mod consts;
mod date_range;
mod day;
mod events;
mod helpers;
mod layout_params;
mod option_row;
mod point;
mod primitives;
mod tooltip;

pub(crate) use helpers::*;

pub use colours::*;
pub use consts::*;
pub use date_range::*;
pub use day::*;
pub use events::*;
pub use layout_params::*;
pub use option_row::*;
pub use point::*;
pub use primitives::*;
pub use tooltip::*;

use crate::colours::{ArrivalColours, NamedColour};
use chrono::{DateTime, NaiveDate, Utc};
use delivery_timeline_core::{DeliveryOption, DeliveryOptions};
use log::{debug, info, trace, warn};

/// The default reference time (see [`DEFAULT_REFERENCE_TIMESTAMP`])
pub fn default_reference_time() -> DateTime<Utc> {
    DateTime::from_timestamp(DEFAULT_REFERENCE_TIMESTAMP, 0).unwrap_or_default()
}

/// The core `delivery-timeline-renderer` engine.  This manages the options,
/// calculations, measurements, interactions, etc, common to all frontends
/// (e.g. the SVG, HTML and desktop frontends).
///
/// All geometry is in drawing units: the drawing is `drawing_width()` wide and
/// `drawing_height()` tall, and frontends scale it to fit their surface.
pub struct Engine {
    /// The (sorted, non-empty) options being drawn
    options: DeliveryOptions,

    /// The timeline's date range (derived from the options)
    date_range: TimelineDateRange,

    /// The colour of each arrival date (derived from the options)
    arrival_colours: ArrivalColours,

    /// The timeline's layout parameters
    layout_params: LayoutParams,

    /// The timeline's colours
    colours: TimelineColours,

    /// The index of the option whose marker the pointer is over (if any)
    hovered_option: Option<usize>,

    /// The pointer position relative to the frontend's drawing surface
    pointer_position: Point,

    /// The slider's value (0 - 100), i.e. how far through the date range the
    /// simulated current time is
    slider_value: f64,

    /// All interaction events that an external programme might be interested in
    interaction_events: Vec<TimelineInteractionEvent>,
}

impl Engine {
    /// Create a new engine for the options.  The slider starts at the start of
    /// the timeline
    pub fn new(options: DeliveryOptions) -> Self {
        let date_range = TimelineDateRange::from_options(&options);
        let arrival_colours = ArrivalColours::from_options(&options);
        info!(
            "New engine with {} options over {} days",
            options.len(),
            date_range.day_count()
        );
        Self {
            options,
            date_range,
            arrival_colours,
            layout_params: LayoutParams::default(),
            colours: TimelineColours::default(),
            hovered_option: None,
            pointer_position: Point::default(),
            slider_value: MIN_SLIDER_VALUE,
            interaction_events: Vec::new(),
        }
    }

    /// Create a new engine with the slider set to the reference time
    pub fn with_reference_time(options: DeliveryOptions, reference_time: DateTime<Utc>) -> Self {
        let mut engine = Engine::new(options);
        engine.slider_value = engine.slider_value_for(reference_time);
        engine
    }

    /// Overwrite the options drawn on the timeline.  The simulated current time
    /// is kept (clamped to the new date range) and any hover is cleared
    pub fn set_options(&mut self, options: DeliveryOptions) {
        let current_time = self.current_time();
        self.date_range = TimelineDateRange::from_options(&options);
        self.arrival_colours = ArrivalColours::from_options(&options);
        self.options = options;
        self.slider_value = self.slider_value_for(current_time);
        if self.hovered_option.take().is_some() {
            self.interaction_events
                .push(TimelineInteractionEvent::HoverEnd);
        }
        debug!("Engine options set ({} options)", self.options.len());
    }

    /// Get the (sorted) options
    pub fn options(&self) -> &DeliveryOptions {
        &self.options
    }

    /// The number of options
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// Get the timeline's date range
    pub fn date_range(&self) -> TimelineDateRange {
        self.date_range
    }

    /// Get the arrival date colours
    pub fn arrival_colours(&self) -> &ArrivalColours {
        &self.arrival_colours
    }

    /// Get the timeline colours
    pub fn colours(&self) -> TimelineColours {
        self.colours
    }

    pub fn set_colours(&mut self, colours: TimelineColours) {
        debug!("engine set colours");
        self.colours = colours;
    }

    /// Get the layout parameters
    pub fn layout_params(&self) -> LayoutParams {
        self.layout_params
    }

    /// Set the layout parameters.  Invalid params are rejected and the current
    /// ones kept
    pub fn set_layout_params(
        &mut self,
        layout_params: LayoutParams,
    ) -> Result<(), LayoutParamsError> {
        debug!("engine set layout params");
        layout_params.validate()?;
        self.layout_params = layout_params;
        Ok(())
    }

    /// The width of the whole drawing (whole days × day width)
    pub fn drawing_width(&self) -> f64 {
        self.date_range.day_count() as f64 * self.layout_params.day_width
    }

    /// The height of the whole drawing
    pub fn drawing_height(&self) -> f64 {
        self.layout_params.height
    }

    /// Calculate the x position of a moment.  Linear in the time since the
    /// start of the timeline: `0` at the start, `drawing_width()` at the end
    pub fn x_position(&self, moment: DateTime<Utc>) -> f64 {
        let elapsed_ms = (moment - self.date_range.start()).num_milliseconds() as f64;
        (elapsed_ms * self.drawing_width()) / self.date_range.duration_ms() as f64
    }

    /// The y position of the option at the index
    fn option_y(&self, index: usize) -> f64 {
        self.layout_params.option_line_start_y
            + (index as f64 * self.layout_params.option_row_height)
    }

    //--------------------------------------------------------------------------
    // Time-scrub slider
    //--------------------------------------------------------------------------

    /// Get the slider value (0 - 100)
    pub fn slider_value(&self) -> f64 {
        self.slider_value
    }

    /// Set the slider value.  Values are clamped between `MIN_SLIDER_VALUE` and
    /// `MAX_SLIDER_VALUE`
    pub fn set_slider_value(&mut self, value: f64) {
        if value.is_nan() {
            warn!("Ignoring NaN slider value");
            return;
        }
        let value = value.clamp(MIN_SLIDER_VALUE, MAX_SLIDER_VALUE);
        if value != self.slider_value {
            self.slider_value = value;
            let current_time = self.current_time();
            trace!("Slider set to {value} ({current_time})");
            self.interaction_events
                .push(TimelineInteractionEvent::CurrentTimeChanged(current_time));
        }
    }

    /// The slider value that corresponds to the moment (clamped)
    pub fn slider_value_for(&self, moment: DateTime<Utc>) -> f64 {
        (self.date_range.fraction_of(moment) * MAX_SLIDER_VALUE)
            .clamp(MIN_SLIDER_VALUE, MAX_SLIDER_VALUE)
    }

    /// The simulated current time selected by the slider
    pub fn current_time(&self) -> DateTime<Utc> {
        self.date_range
            .at_fraction(self.slider_value / MAX_SLIDER_VALUE)
    }

    /// Move the slider to the moment (clamped to the timeline)
    pub fn set_current_time(&mut self, moment: DateTime<Utc>) {
        let value = self.slider_value_for(moment);
        self.set_slider_value(value);
    }

    /// e.g. `Current time: Fri Sep 27, 07:40`
    pub fn current_time_readout(&self) -> String {
        format!(
            "Current time: {}",
            as_long_datetime_format(self.current_time())
        )
    }

    /// Whether the option at the index has closed (the current time is after
    /// its cutoff)
    pub fn is_option_closed(&self, index: usize) -> bool {
        self.options
            .as_slice()
            .get(index)
            .is_some_and(|option| option.is_closed_at(self.current_time()))
    }

    /// Whether every option arriving on the date has closed.  A date nothing
    /// arrives on counts as closed
    pub fn is_day_closed(&self, date: NaiveDate) -> bool {
        let current_time = self.current_time();
        self.options
            .arriving_on(date)
            .all(|option| option.is_closed_at(current_time))
    }

    fn opacity(&self, is_closed: bool) -> f64 {
        if is_closed {
            self.layout_params.dimmed_opacity
        } else {
            FULL_OPACITY
        }
    }

    /// The opacity the option at the index is drawn with
    pub fn option_opacity(&self, index: usize) -> f64 {
        self.opacity(self.is_option_closed(index))
    }

    /// The opacity the day's grid line and labels are drawn with
    pub fn day_opacity(&self, date: NaiveDate) -> f64 {
        self.opacity(self.is_day_closed(date))
    }

    //--------------------------------------------------------------------------
    // Hover & pointer
    //--------------------------------------------------------------------------

    /// Set (or clear) the option the pointer is over.  Unknown indexes clear it
    pub fn hover_over_option(&mut self, index: Option<usize>) {
        let index = index.filter(|index| *index < self.options.len());
        if index == self.hovered_option {
            return;
        }
        self.hovered_option = index;
        match index {
            Some(index) => {
                debug!("Hovering over option {index}");
                self.interaction_events
                    .push(TimelineInteractionEvent::HoverStart(index));
            }
            None => {
                debug!("No longer hovering over an option");
                self.interaction_events
                    .push(TimelineInteractionEvent::HoverEnd);
            }
        }
    }

    /// Hover over whichever option's marker is at the point (in drawing units),
    /// or over nothing.  For frontends that do their own hit testing
    pub fn hover_at_point(&mut self, point: Point) {
        let index = self
            .options_for_drawing()
            .iter()
            .rev()
            .find(|option| option.marker.contains(point))
            .map(|option| option.index);
        self.hover_over_option(index);
    }

    /// Get the index of the hovered option
    pub fn hovered_option_index(&self) -> Option<usize> {
        self.hovered_option
    }

    /// Get the hovered option
    pub fn hovered_option(&self) -> Option<&DeliveryOption> {
        self.hovered_option
            .and_then(|index| self.options.as_slice().get(index))
    }

    /// Set the pointer position, relative to the drawing surface's top left
    pub fn set_pointer_position(&mut self, position: Point) {
        trace!("pointer at {}, {}", position.x, position.y);
        self.pointer_position = position;
    }

    pub fn pointer_position(&self) -> Point {
        self.pointer_position
    }

    /// Get all events for dispatching & handling
    pub fn drain_interaction_events(&mut self) -> std::vec::Drain<'_, TimelineInteractionEvent> {
        self.interaction_events.drain(..)
    }

    //--------------------------------------------------------------------------
    // Drawing
    //--------------------------------------------------------------------------

    /// Get the background box (the whole drawing)
    pub fn background_for_drawing(&self) -> FilledBox {
        FilledBox {
            position_and_size: PositionAndSize {
                position: Point::default(),
                width: self.drawing_width(),
                height: self.drawing_height(),
            },
            fill_colour: self.colours.background,
            border_style: None,
        }
    }

    /// Get the horizontal axis line
    pub fn axis_for_drawing(&self) -> LineOut {
        let y = self.layout_params.timeline_y;
        LineOut {
            from: Point::new(0.0, y),
            to: Point::new(self.drawing_width(), y),
            style: LineStyle {
                colour: self.colours.axis,
                thickness: self.layout_params.axis_thickness,
            },
            opacity: FULL_OPACITY,
        }
    }

    /// Get all information needed to draw the days (grid lines and labels)
    pub fn days_for_drawing(&self) -> Vec<DayOut> {
        let params = self.layout_params;
        self.date_range
            .days()
            .enumerate()
            .map(|(index, date)| {
                let x = index as f64 * params.day_width;
                let is_closed = self.is_day_closed(date);
                let opacity = self.opacity(is_closed);
                let label = |text: String, offset_y: f64| TextOut {
                    position: Point::new(x + params.label_padding_x, params.timeline_y - offset_y),
                    text,
                    colour: self.colours.label_text,
                    font_size: params.font_size_px,
                    bold: true,
                    opacity,
                };
                DayOut {
                    date,
                    grid_line: LineOut {
                        from: Point::new(x, params.timeline_y),
                        to: Point::new(x, params.height),
                        style: LineStyle {
                            colour: self.colours.grid_line,
                            thickness: params.grid_line_thickness,
                        },
                        opacity,
                    },
                    weekday_label: label(
                        date.format("%a").to_string(),
                        params.weekday_label_offset_y,
                    ),
                    date_label: label(date.format("%b %-d").to_string(), params.date_label_offset_y),
                    is_closed,
                }
            })
            .collect()
    }

    /// Get all information needed to draw the options, in order
    pub fn options_for_drawing(&self) -> Vec<OptionOut> {
        let params = self.layout_params;
        self.options
            .iter()
            .enumerate()
            .map(|(index, option)| {
                let y = self.option_y(index);
                let start_x = self.x_position(option.cutoff());
                let end_x = self.x_position(option.arrival_start());
                let colour_name = self
                    .arrival_colours
                    .named_colour(option.arrival_date())
                    .unwrap_or(NamedColour::Blue);
                let colour = colour_name.colour();
                let is_closed = self.is_option_closed(index);
                let opacity = self.opacity(is_closed);
                OptionOut {
                    index,
                    option: *option,
                    colour_name,
                    line: LineOut {
                        from: Point::new(start_x, y),
                        to: Point::new(end_x, y),
                        style: LineStyle {
                            colour,
                            thickness: params.option_line_thickness,
                        },
                        opacity,
                    },
                    marker: CircleOut {
                        centre: Point::new(start_x, y),
                        radius: params.marker_radius,
                        fill_colour: colour,
                        opacity,
                    },
                    is_closed,
                    is_hovered_over: self.hovered_option == Some(index),
                }
            })
            .collect()
    }

    /// Get the "now" line, at the simulated current time, across the full
    /// height
    pub fn now_line_for_drawing(&self) -> LineOut {
        let x = self.x_position(self.current_time());
        LineOut {
            from: Point::new(x, 0.0),
            to: Point::new(x, self.drawing_height()),
            style: LineStyle {
                colour: self.colours.now_line,
                thickness: self.layout_params.now_line_thickness,
            },
            opacity: FULL_OPACITY,
        }
    }

    /// Get the tooltip for the hovered option (if there is one)
    pub fn tooltip_for_drawing(&self) -> Option<TooltipOut> {
        self.hovered_option().map(|option| TooltipOut {
            top_left: self
                .pointer_position
                .offset(self.layout_params.tooltip_offset, self.layout_params.tooltip_offset),
            cutoff: option.cutoff_as_long_format(),
            arrival: option.arrival_date_as_long_format(),
            colours: self.colours.tooltip,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn at(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn two_option_engine() -> Engine {
        Engine::new(
            DeliveryOptions::from_strs([
                ("2024-09-29", "2024-09-26T18:30:00Z"),
                ("2024-09-30", "2024-09-28T16:45:00Z"),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn drawing_size() {
        let engine = two_option_engine();
        assert_eq!(engine.date_range().day_count(), 5);
        assert_eq!(engine.drawing_width(), 500.0);
        assert_eq!(engine.drawing_height(), 400.0);
    }

    #[test]
    fn invalid_layout_params_are_kept_out() {
        let mut engine = two_option_engine();
        let zero_width = LayoutParams {
            day_width: 0.0,
            ..Default::default()
        };
        assert_eq!(
            engine.set_layout_params(zero_width),
            Err(LayoutParamsError::NotPositive("day_width", 0.0))
        );
        assert_eq!(engine.layout_params(), LayoutParams::default());
        assert_eq!(engine.drawing_width(), 500.0);

        let narrow = LayoutParams {
            day_width: 40.0,
            ..Default::default()
        };
        assert_eq!(engine.set_layout_params(narrow), Ok(()));
        assert_eq!(engine.drawing_width(), 200.0);
    }

    #[test]
    fn x_position_ends() {
        for engine in [two_option_engine(), Engine::new(DeliveryOptions::sample())] {
            let range = engine.date_range();
            assert_eq!(engine.x_position(range.start()), 0.0);
            assert_eq!(engine.x_position(range.end()), engine.drawing_width());
        }
    }

    #[test]
    fn x_position_is_continuous() {
        let engine = two_option_engine();
        // 18:30 is 18.5 hours into the first day
        let x = engine.x_position(at("2024-09-26T18:30:00Z"));
        assert!((x - (18.5 / 24.0) * 100.0).abs() < 1e-9);

        // Sub-hour precision is kept
        assert!(
            engine.x_position(at("2024-09-26T18:59:00Z"))
                > engine.x_position(at("2024-09-26T18:01:00Z"))
        );
    }

    #[test]
    fn cutoff_left_of_arrival() {
        let engine = Engine::new(DeliveryOptions::sample());
        for option in engine.options_for_drawing() {
            assert!(option.line.from.x < option.line.to.x);
            assert_eq!(option.marker.centre, option.line.from);
        }
    }

    #[test]
    fn options_stack_in_list_order() {
        let engine = Engine::new(DeliveryOptions::sample());
        let options = engine.options_for_drawing();
        assert_eq!(options.len(), 23);
        for (i, option) in options.iter().enumerate() {
            assert_eq!(option.index, i);
            assert_eq!(option.line.from.y, 80.0 + i as f64 * 15.0);
            assert_eq!(option.line.style.thickness, 2.0);
            assert_eq!(option.marker.radius, 4.0);
        }
    }

    #[test]
    fn option_colours_follow_arrival_date() {
        let engine = Engine::new(DeliveryOptions::sample());
        for option in engine.options_for_drawing() {
            assert_eq!(
                Some(option.colour_name),
                engine.arrival_colours().named_colour(option.option.arrival_date())
            );
            assert_eq!(option.line.style.colour, option.colour_name.colour());
        }
    }

    #[test]
    fn days_for_drawing() {
        let engine = two_option_engine();
        let days = engine.days_for_drawing();
        assert_eq!(days.len(), 5);
        assert_eq!(days[0].weekday_label.text, "Thu");
        assert_eq!(days[0].date_label.text, "Sep 26");
        assert_eq!(days[4].date_label.text, "Sep 30");
        assert_eq!(days[2].grid_line.from, Point::new(200.0, 50.0));
        assert_eq!(days[2].grid_line.to, Point::new(200.0, 400.0));
        assert_eq!(days[2].weekday_label.position, Point::new(205.0, 45.0));
        assert_eq!(days[2].date_label.position, Point::new(205.0, 30.0));
    }

    #[test]
    fn slider_ends() {
        let mut engine = two_option_engine();
        engine.set_slider_value(0.0);
        assert_eq!(engine.current_time(), engine.date_range().start());
        engine.set_slider_value(100.0);
        assert_eq!(engine.current_time(), engine.date_range().end());
        assert_eq!(engine.now_line_for_drawing().from.x, engine.drawing_width());

        // Clamped
        engine.set_slider_value(150.0);
        assert_eq!(engine.slider_value(), 100.0);
        engine.set_slider_value(-1.0);
        assert_eq!(engine.slider_value(), 0.0);
        engine.set_slider_value(f64::NAN);
        assert_eq!(engine.slider_value(), 0.0);
    }

    #[test]
    fn reference_time() {
        assert_eq!(default_reference_time(), at("2024-09-27T07:40:00Z"));
        let engine =
            Engine::with_reference_time(DeliveryOptions::sample(), default_reference_time());
        assert_eq!(engine.current_time(), at("2024-09-27T07:40:00Z"));
        assert_eq!(engine.current_time_readout(), "Current time: Fri Sep 27, 07:40");

        // Outside the range
        let engine =
            Engine::with_reference_time(DeliveryOptions::sample(), at("2023-01-01T00:00:00Z"));
        assert_eq!(engine.slider_value(), 0.0);
        let engine =
            Engine::with_reference_time(DeliveryOptions::sample(), at("2030-01-01T00:00:00Z"));
        assert_eq!(engine.slider_value(), 100.0);
    }

    #[test]
    fn option_dimming() {
        let mut engine = two_option_engine();
        engine.set_current_time(at("2024-09-26T18:00:00Z"));
        assert_eq!(engine.option_opacity(0), 1.0);
        engine.set_current_time(at("2024-09-26T19:00:00Z"));
        assert_eq!(engine.option_opacity(0), 0.3);
        assert_eq!(engine.option_opacity(1), 1.0);

        let options = engine.options_for_drawing();
        assert!(options[0].is_closed);
        assert_eq!(options[0].line.opacity, 0.3);
        assert_eq!(options[0].marker.opacity, 0.3);
        assert!(!options[1].is_closed);
        assert_eq!(options[1].line.opacity, 1.0);
    }

    #[test]
    fn day_dimming() {
        let mut engine = two_option_engine();
        let arrival = date("2024-09-29");

        // The day's only option is still open
        engine.set_current_time(at("2024-09-26T12:00:00Z"));
        assert!(!engine.is_day_closed(arrival));
        assert_eq!(engine.day_opacity(arrival), 1.0);

        // ...and now it has closed
        engine.set_current_time(at("2024-09-26T19:00:00Z"));
        assert!(engine.is_day_closed(arrival));
        assert_eq!(engine.day_opacity(arrival), 0.3);
        let day = engine
            .days_for_drawing()
            .into_iter()
            .find(|day| day.date == arrival)
            .unwrap();
        assert!(day.is_closed);
        assert_eq!(day.grid_line.opacity, 0.3);
        assert_eq!(day.weekday_label.opacity, 0.3);
    }

    #[test]
    fn day_closes_only_when_all_options_have() {
        let mut engine = Engine::new(DeliveryOptions::sample());
        let arrival = date("2024-09-29");

        // One of the three options for the 29th has closed
        engine.set_current_time(at("2024-09-27T07:40:00Z"));
        assert!(engine.is_option_closed(0));
        assert!(!engine.is_day_closed(arrival));

        // All three have closed
        engine.set_current_time(at("2024-09-27T15:00:00Z"));
        assert!(engine.is_day_closed(arrival));
    }

    #[test]
    fn day_without_arrivals_is_closed() {
        let engine = two_option_engine();
        assert!(engine.is_day_closed(date("2024-09-26")));
    }

    #[test]
    fn hover_and_tooltip() {
        let mut engine = two_option_engine();
        assert!(engine.tooltip_for_drawing().is_none());

        engine.set_pointer_position(Point::new(120.0, 40.0));
        engine.hover_over_option(Some(0));
        let tooltip = engine.tooltip_for_drawing().unwrap();
        assert_eq!(tooltip.top_left, Point::new(130.0, 50.0));
        assert_eq!(
            tooltip.lines(),
            ["Cutoff: Thu Sep 26, 18:30".to_string(), "Arrival: Sun Sep 29".to_string()]
        );
        assert!(engine.options_for_drawing()[0].is_hovered_over);

        // Follows the pointer
        engine.set_pointer_position(Point::new(0.0, 0.0));
        assert_eq!(engine.tooltip_for_drawing().unwrap().top_left, Point::new(10.0, 10.0));

        engine.hover_over_option(None);
        assert!(engine.tooltip_for_drawing().is_none());

        // Unknown index
        engine.hover_over_option(Some(99));
        assert!(engine.hovered_option().is_none());
    }

    #[test]
    fn hover_at_point() {
        let mut engine = two_option_engine();
        let marker = engine.options_for_drawing()[1].marker.centre;
        engine.hover_at_point(marker.offset(1.0, 1.0));
        assert_eq!(engine.hovered_option_index(), Some(1));
        engine.hover_at_point(marker.offset(10.0, 0.0));
        assert_eq!(engine.hovered_option_index(), None);
    }

    #[test]
    fn interaction_events() {
        let mut engine = two_option_engine();
        engine.hover_over_option(Some(1));
        engine.hover_over_option(Some(1));
        engine.hover_over_option(None);
        engine.set_slider_value(50.0);
        let events: Vec<_> = engine.drain_interaction_events().collect();
        assert_eq!(
            events,
            vec![
                TimelineInteractionEvent::HoverStart(1),
                TimelineInteractionEvent::HoverEnd,
                TimelineInteractionEvent::CurrentTimeChanged(at("2024-09-28T12:00:00Z")),
            ]
        );
        assert_eq!(engine.drain_interaction_events().count(), 0);
    }

    #[test]
    fn set_options_keeps_current_time() {
        let mut engine =
            Engine::with_reference_time(DeliveryOptions::sample(), at("2024-09-27T07:40:00Z"));
        engine.hover_over_option(Some(3));
        engine.set_options(
            DeliveryOptions::from_strs([("2024-09-30", "2024-09-27T12:00:00Z")]).unwrap(),
        );
        assert_eq!(engine.current_time(), at("2024-09-27T07:40:00Z"));
        assert_eq!(engine.option_count(), 1);
        assert!(engine.hovered_option().is_none());
        assert_eq!(engine.date_range().day_count(), 4);
    }
}
