extern crate car_mdp;

use car_mdp::common::defs::*;
use car_mdp::mdps::*;
use car_mdp::*;

fn main() -> Result<(), MdpError> {
    let env = CarEnvironment::new(EnvConfig::seeded(2718))?;
    println!("rewards:\n{:?}\n", env.rewards());
    println!(
        "transitions from {}:\n{:?}\n",
        CarState::Off,
        env.outcomes(CarState::Off, CarAction::TurnOn)
    );

    let session = &mut Session::new(env);
    let mut generator = SessionEpisodeGenerator {
        session,
        policy: RandomValidPolicy::new(Some(2718)),
        max_steps: 100,
    };

    for (ep, events) in generator.generate(10).iter().enumerate() {
        let path = events
            .iter()
            .map(|e| e.s.name())
            .collect::<Vec<_>>()
            .join(" -> ");
        let tot_reward: Reward = events.iter().map(|e| e.r).sum();
        println!("Finished episode {ep} with total reward {tot_reward}: {path}");
    }

    Ok(())
}
