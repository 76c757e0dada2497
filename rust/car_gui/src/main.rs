mod ui;

use car_mdp::*;
use tracing::info;
use ui::{AppFlags, CarApp};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let env = CarEnvironment::new(EnvConfig::default())?;
    info!(rewards = ?env.rewards(), "rewards drawn");

    let mut session = Session::new(env);
    session.subscribe(Box::new(TracingObserver));

    CarApp::run(AppFlags { session })?;

    Ok(())
}
