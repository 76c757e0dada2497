use car_mdp::Reward;
use iced::alignment;
use iced::mouse;
use iced::widget::canvas;
use iced::widget::canvas::{Cache, Canvas, Frame, Geometry, LineDash, Path, Stroke, Text};
use iced::{Element, Length, Point, Rectangle, Renderer, Size, Theme};
use itertools::{Itertools, MinMaxResult};

use super::style::{BLUSH, DEEP_PINK, PINK};

const MARGIN_LEFT: f32 = 48.;
const MARGIN_RIGHT: f32 = 16.;
const MARGIN_TOP: f32 = 32.;
const MARGIN_BOTTOM: f32 = 36.;

/// Cumulative score against step index, dashed with a marker per step.
#[derive(Default)]
pub struct ScoreChart {
    history: Vec<Reward>,
    cache: Cache,
}

impl ScoreChart {
    /// Replaces the plotted series and throws away the cached drawing.
    pub fn redraw(&mut self, history: &[Reward]) {
        self.history = history.to_vec();
        self.cache.clear();
    }

    pub fn view<'a, Message: 'a>(&'a self) -> Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fixed(260.))
            .into()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }
}

/// Value range to plot, never empty so the y scale stays finite.
pub fn y_range(history: &[Reward]) -> (Reward, Reward) {
    match history.iter().minmax() {
        MinMaxResult::NoElements => (0, 1),
        MinMaxResult::OneElement(&v) => (v - 1, v + 1),
        MinMaxResult::MinMax(&lo, &hi) if lo == hi => (lo - 1, hi + 1),
        MinMaxResult::MinMax(&lo, &hi) => (lo, hi),
    }
}

struct Plot {
    area: Rectangle,
    x_max: f32,
    y_lo: f32,
    y_hi: f32,
}

impl Plot {
    fn new(size: Size, history: &[Reward]) -> Self {
        let (y_lo, y_hi) = y_range(history);

        Self {
            area: Rectangle {
                x: MARGIN_LEFT,
                y: MARGIN_TOP,
                width: (size.width - MARGIN_LEFT - MARGIN_RIGHT).max(1.),
                height: (size.height - MARGIN_TOP - MARGIN_BOTTOM).max(1.),
            },
            x_max: history.len().saturating_sub(1).max(1) as f32,
            y_lo: y_lo as f32,
            y_hi: y_hi as f32,
        }
    }

    fn point(&self, i: usize, v: Reward) -> Point {
        let x = self.area.x + self.area.width * i as f32 / self.x_max;
        let y = self.area.y + self.area.height * (self.y_hi - v as f32) / (self.y_hi - self.y_lo);
        Point::new(x, y)
    }
}

impl<Message> canvas::Program<Message> for ScoreChart {
    type State = ();

    fn draw(
        &self,
        _state: &(),
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let chart = self.cache.draw(renderer, bounds.size(), |frame| {
            let plot = Plot::new(frame.size(), &self.history);

            frame.fill_rectangle(Point::ORIGIN, frame.size(), BLUSH);
            draw_axes(frame, &plot);

            let series = Path::new(|p| {
                for (i, v) in self.history.iter().enumerate() {
                    if i == 0 {
                        p.move_to(plot.point(i, *v));
                    } else {
                        p.line_to(plot.point(i, *v));
                    }
                }
            });
            frame.stroke(
                &series,
                Stroke {
                    line_dash: LineDash {
                        segments: &[6., 4.],
                        offset: 0,
                    },
                    ..Stroke::default().with_color(PINK).with_width(2.)
                },
            );

            for (i, v) in self.history.iter().enumerate() {
                frame.fill(&Path::circle(plot.point(i, *v), 3.5), PINK);
            }
        });

        vec![chart]
    }
}

fn draw_axes(frame: &mut Frame, plot: &Plot) {
    let a = plot.area;
    let axis = || Stroke::default().with_color(PINK).with_width(1.);
    let origin = Point::new(a.x, a.y + a.height);

    frame.stroke(&Path::line(origin, Point::new(a.x + a.width, origin.y)), axis());
    frame.stroke(&Path::line(origin, Point::new(a.x, a.y)), axis());

    let label = Text {
        color: PINK,
        size: 12.0.into(),
        ..Text::default()
    };

    frame.fill_text(Text {
        content: String::from("Score History"),
        position: Point::new(frame.width() / 2., 8.),
        color: DEEP_PINK,
        size: 14.0.into(),
        horizontal_alignment: alignment::Horizontal::Center,
        ..label.clone()
    });
    frame.fill_text(Text {
        content: String::from("Steps"),
        position: Point::new(a.x + a.width / 2., frame.height() - 4.),
        horizontal_alignment: alignment::Horizontal::Center,
        vertical_alignment: alignment::Vertical::Bottom,
        ..label.clone()
    });
    frame.fill_text(Text {
        content: String::from("Score"),
        position: Point::new(4., a.y - 16.),
        ..label.clone()
    });
    frame.fill_text(Text {
        content: format!("{}", plot.y_hi),
        position: Point::new(a.x - 6., a.y),
        horizontal_alignment: alignment::Horizontal::Right,
        vertical_alignment: alignment::Vertical::Center,
        ..label.clone()
    });
    frame.fill_text(Text {
        content: format!("{}", plot.y_lo),
        position: Point::new(a.x - 6., origin.y),
        horizontal_alignment: alignment::Horizontal::Right,
        vertical_alignment: alignment::Vertical::Center,
        ..label.clone()
    });
    frame.fill_text(Text {
        content: format!("{}", plot.x_max),
        position: Point::new(a.x + a.width, origin.y + 4.),
        horizontal_alignment: alignment::Horizontal::Center,
        ..label
    });
}
