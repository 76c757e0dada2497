mod chart;
mod style;

use car_mdp::{CarAction, CarState, Reward, Session};
use chart::ScoreChart;
use iced::executor;
use iced::theme::{self, Theme};
use iced::widget::{button, column, container, text, Column};
use iced::{Alignment, Application, Command, Element, Length, Settings};
use style::{PinkButton, PINK};
use tracing::info;

pub type Result = iced::Result;

pub struct AppFlags {
    pub session: Session,
}

/// Final state and score of an episode that just ended, shown until the
/// player dismisses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub final_state: CarState,
    pub score: Reward,
}

pub struct CarApp {
    session: Session,
    chart: ScoreChart,
    summary: Option<Summary>,
}

#[derive(Debug, Clone, Copy)]
pub enum Message {
    Act(CarAction),
    SummaryDismissed,
}

impl Application for CarApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = executor::Default;
    type Flags = AppFlags;

    fn new(flags: AppFlags) -> (Self, Command<Message>) {
        let mut chart = ScoreChart::default();
        chart.redraw(flags.session.history());

        (
            Self {
                session: flags.session,
                chart,
                summary: None,
            },
            Command::none(),
        )
    }

    fn title(&self) -> String {
        String::from("🚗 Car System")
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::Act(action) => {
                if self.summary.is_some() {
                    return Command::none();
                }

                let step = self.session.act(action);
                self.chart.redraw(self.session.history());

                if step.info.done {
                    self.summary = Some(Summary {
                        final_state: step.info.observation,
                        score: step.score,
                    });
                }
            }
            Message::SummaryDismissed => {
                if let Some(summary) = self.summary.take() {
                    info!(final_state = %summary.final_state, score = summary.score, "game over acknowledged");
                    self.session.reset();
                    self.chart.redraw(self.session.history());
                }
            }
        }

        Command::none()
    }

    fn view(&self) -> Element<Message> {
        let score = text(score_label(self.session.score()))
            .size(24)
            .style(theme::Text::Color(PINK));
        let state = text(state_label(self.session.state()))
            .size(16)
            .style(theme::Text::Color(PINK));

        let mut content = column![score, state, view_actions(self.summary.is_none())]
            .spacing(10)
            .padding(20)
            .align_items(Alignment::Center);

        if let Some(summary) = self.summary {
            content = content.push(view_summary(summary));
        }

        container(content.push(self.chart.view::<Message>()))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x()
            .into()
    }

    fn theme(&self) -> Theme {
        style::car_theme()
    }
}

impl CarApp {
    pub fn run(flags: AppFlags) -> Result {
        <Self as Application>::run(Settings {
            antialiasing: true,
            window: iced::window::Settings {
                position: iced::window::Position::Centered,
                size: iced::Size {
                    height: 820.,
                    width: 480.,
                },
                ..iced::window::Settings::default()
            },
            ..Settings::with_flags(flags)
        })
    }
}

fn score_label(score: Reward) -> String {
    format!("💖 Score: {score}")
}

fn state_label(state: CarState) -> String {
    format!("🚗 State: {state}")
}

fn view_actions<'a>(enabled: bool) -> Element<'a, Message> {
    let buttons = CarAction::ALL
        .into_iter()
        .map(|action| {
            button(text(action.label()).size(16))
                .on_press_maybe(enabled.then_some(Message::Act(action)))
                .width(Length::Fill)
                .style(theme::Button::Custom(Box::new(PinkButton)))
                .into()
        })
        .collect::<Vec<Element<'a, Message>>>();

    Column::with_children(buttons).spacing(5).into()
}

fn view_summary<'a>(summary: Summary) -> Element<'a, Message> {
    let body = column![
        text("Game over").size(20).style(theme::Text::Color(PINK)),
        text(format!("Final state: {}", summary.final_state)),
        text(format!("Score: {}", summary.score)),
        button("OK")
            .on_press(Message::SummaryDismissed)
            .style(theme::Button::Custom(Box::new(PinkButton))),
    ]
    .spacing(8)
    .align_items(Alignment::Center);

    container(body)
        .padding(16)
        .style(theme::Container::Box)
        .width(Length::Fill)
        .center_x()
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use car_mdp::{CarEnvironment, EnvConfig};

    fn app(seed: u64) -> CarApp {
        let env = CarEnvironment::new(EnvConfig::seeded(seed)).unwrap();
        CarApp::new(AppFlags {
            session: Session::new(env),
        })
        .0
    }

    fn play_to_end(app: &mut CarApp) {
        while app.summary.is_none() {
            let s = app.session.state();
            let action = app.session.env().valid_actions(s)[0];
            let _ = app.update(Message::Act(action));
        }
    }

    #[test]
    fn every_press_extends_the_chart() {
        let app = &mut app(1);
        let _ = app.update(Message::Act(CarAction::Recharge));
        let _ = app.update(Message::Act(CarAction::TurnOn));
        assert_eq!(app.chart.len(), 2);
        assert_eq!(app.session.history().len(), 2);
    }

    #[test]
    fn summary_blocks_play_until_dismissed() {
        let app = &mut app(2);
        play_to_end(app);

        let summary = app.summary.unwrap();
        assert_eq!(summary.final_state, CarState::NewEnergySystem);
        assert_eq!(summary.score, app.session.score());

        let steps = app.session.history().len();
        let _ = app.update(Message::Act(CarAction::TurnOn));
        assert_eq!(app.session.history().len(), steps);

        let _ = app.update(Message::SummaryDismissed);
        assert_eq!(app.summary, None);
        assert_eq!(app.session.state(), CarState::Off);
        assert_eq!(app.session.score(), 0);
        assert_eq!(app.chart.len(), 0);
    }

    #[test]
    fn labels_carry_their_icons() {
        let app = app(3);
        assert_eq!(score_label(app.session.score()), "💖 Score: 0");
        assert_eq!(state_label(app.session.state()), "🚗 State: Off");
        assert_eq!(state_label(CarState::NewEnergySystem), "🚗 State: New Energy System");
    }
}
