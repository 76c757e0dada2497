use crate::{MdpError, Transition, Transitions};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CarState {
    Off,
    On,
    LowBattery,
    ElectricalFault,
    ReadyToUse,
    EngineFailure,
    BatteryRecharged,
    DeadBattery,
    Overheated,
    StableSystem,
    ShortCircuit,
    JumpStart,
    ProblemSolved,
    BadAlternator,
    PartialSuccess,
    TotalFailure,
    NewEnergySystem,
    InstallationDefect,
    SystemCooled,
    InternalDamage,
}

impl CarState {
    pub const COUNT: usize = 20;

    pub const ALL: [CarState; Self::COUNT] = [
        CarState::Off,
        CarState::On,
        CarState::LowBattery,
        CarState::ElectricalFault,
        CarState::ReadyToUse,
        CarState::EngineFailure,
        CarState::BatteryRecharged,
        CarState::DeadBattery,
        CarState::Overheated,
        CarState::StableSystem,
        CarState::ShortCircuit,
        CarState::JumpStart,
        CarState::ProblemSolved,
        CarState::BadAlternator,
        CarState::PartialSuccess,
        CarState::TotalFailure,
        CarState::NewEnergySystem,
        CarState::InstallationDefect,
        CarState::SystemCooled,
        CarState::InternalDamage,
    ];

    pub const INITIAL: CarState = CarState::Off;

    pub const TERMINAL: [CarState; 1] = [CarState::NewEnergySystem];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(i: usize) -> Result<Self, MdpError> {
        Self::ALL.get(i).copied().ok_or(MdpError::UnknownState(i))
    }

    pub fn is_terminal(self) -> bool {
        Self::TERMINAL.contains(&self)
    }

    pub fn name(self) -> &'static str {
        match self {
            CarState::Off => "Off",
            CarState::On => "On",
            CarState::LowBattery => "Low Battery",
            CarState::ElectricalFault => "Electrical Fault",
            CarState::ReadyToUse => "Ready to Use",
            CarState::EngineFailure => "Engine Failure",
            CarState::BatteryRecharged => "Battery Recharged",
            CarState::DeadBattery => "Dead Battery",
            CarState::Overheated => "Overheated",
            CarState::StableSystem => "Stable System",
            CarState::ShortCircuit => "Short Circuit",
            CarState::JumpStart => "Jump Start",
            CarState::ProblemSolved => "Problem Solved",
            CarState::BadAlternator => "Bad Alternator",
            CarState::PartialSuccess => "Partial Success",
            CarState::TotalFailure => "Total Failure",
            CarState::NewEnergySystem => "New Energy System",
            CarState::InstallationDefect => "Installation Defect",
            CarState::SystemCooled => "System Cooled",
            CarState::InternalDamage => "Internal Damage",
        }
    }
}

impl fmt::Display for CarState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CarAction {
    TurnOn,
    Recharge,
    CallMechanic,
    Inspect,
    ReplacePart,
    Accelerate,
    SwapBattery,
    ShutDownAndCool,
}

impl CarAction {
    pub const COUNT: usize = 8;

    pub const ALL: [CarAction; Self::COUNT] = [
        CarAction::TurnOn,
        CarAction::Recharge,
        CarAction::CallMechanic,
        CarAction::Inspect,
        CarAction::ReplacePart,
        CarAction::Accelerate,
        CarAction::SwapBattery,
        CarAction::ShutDownAndCool,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(i: usize) -> Result<Self, MdpError> {
        Self::ALL.get(i).copied().ok_or(MdpError::UnknownAction(i))
    }

    pub fn label(self) -> &'static str {
        match self {
            CarAction::TurnOn => "Turn On",
            CarAction::Recharge => "Recharge",
            CarAction::CallMechanic => "Call Mechanic",
            CarAction::Inspect => "Inspect",
            CarAction::ReplacePart => "Replace Part",
            CarAction::Accelerate => "Accelerate",
            CarAction::SwapBattery => "Swap Battery",
            CarAction::ShutDownAndCool => "Shut Down and Cool",
        }
    }
}

impl fmt::Display for CarAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The hand-authored car dynamics.
///
/// Every fault state funnels into [`CarState::NewEnergySystem`] on
/// [`CarAction::TurnOn`]. Installation Defect, System Cooled and Internal
/// Damage have no outgoing entries and cannot be reached from Off.
pub fn authored_transitions() -> Transitions {
    use CarAction::*;
    use CarState::*;

    let mut transitions = Transitions::from([
        (
            (Off, TurnOn),
            vec![
                Transition::new(On, 0.7),
                Transition::new(LowBattery, 0.2),
                Transition::new(ElectricalFault, 0.1),
            ],
        ),
        (
            (On, Inspect),
            vec![
                Transition::new(ReadyToUse, 0.9),
                Transition::new(EngineFailure, 0.1),
            ],
        ),
        (
            (On, Accelerate),
            vec![
                Transition::new(Overheated, 0.3),
                Transition::new(StableSystem, 0.7),
            ],
        ),
        (
            (LowBattery, Recharge),
            vec![
                Transition::new(BatteryRecharged, 0.6),
                Transition::new(DeadBattery, 0.4),
            ],
        ),
        (
            (LowBattery, TurnOn),
            vec![
                Transition::new(ShortCircuit, 0.3),
                Transition::new(JumpStart, 0.7),
            ],
        ),
        (
            (ElectricalFault, CallMechanic),
            vec![
                Transition::new(ProblemSolved, 0.5),
                Transition::new(BadAlternator, 0.5),
            ],
        ),
        (
            (ElectricalFault, ReplacePart),
            vec![
                Transition::new(PartialSuccess, 0.4),
                Transition::new(TotalFailure, 0.6),
            ],
        ),
        (
            (ReadyToUse, TurnOn),
            vec![Transition::new(NewEnergySystem, 1.0)],
        ),
        (
            (EngineFailure, Recharge),
            vec![Transition::new(NewEnergySystem, 1.0)],
        ),
    ]);

    for s in &CarState::ALL[BatteryRecharged.index()..=TotalFailure.index()] {
        transitions.insert((*s, TurnOn), vec![Transition::new(NewEnergySystem, 1.0)]);
    }

    transitions
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, CarState::Off)]
    #[case(3, CarState::ElectricalFault)]
    #[case(16, CarState::NewEnergySystem)]
    #[case(19, CarState::InternalDamage)]
    fn state_indices_follow_declaration_order(#[case] i: usize, #[case] expected: CarState) {
        assert_eq!(CarState::from_index(i).unwrap(), expected);
        assert_eq!(expected.index(), i);
    }

    #[test]
    fn out_of_range_indices_are_rejected() {
        assert_eq!(CarState::from_index(20), Err(MdpError::UnknownState(20)));
        assert_eq!(CarAction::from_index(8), Err(MdpError::UnknownAction(8)));
    }

    #[test]
    fn only_new_energy_system_is_terminal() {
        let terminal = CarState::ALL
            .iter()
            .filter(|s| s.is_terminal())
            .collect::<Vec<_>>();
        assert_eq!(terminal, vec![&CarState::NewEnergySystem]);
    }

    #[test]
    fn authored_table_has_nineteen_entries() {
        let ts = authored_transitions();
        assert_eq!(ts.len(), 19);
        assert!(ts.keys().all(|(s, _)| s.index() <= CarState::TotalFailure.index()));
        assert_eq!(ts[&(CarState::Off, CarAction::TurnOn)].len(), 3);
    }

    #[test]
    fn labels_are_human_readable() {
        assert_eq!(CarAction::ShutDownAndCool.to_string(), "Shut Down and Cool");
        assert_eq!(CarState::NewEnergySystem.to_string(), "New Energy System");
    }
}
