use car_mdp::*;

#[allow(dead_code)]
pub fn seeded_env(seed: u64) -> CarEnvironment {
    CarEnvironment::new(EnvConfig::seeded(seed)).unwrap()
}

/// Takes the first valid action until the car reaches a terminal state.
#[allow(dead_code)]
pub fn drive_to_terminal(env: &mut CarEnvironment) -> Vec<StepInfo> {
    let mut steps = vec![];
    while !env.is_terminal(env.state()) {
        let action = env.valid_actions(env.state())[0];
        steps.push(env.step(action));
    }

    steps
}
