//! First wear-out classification as an ordered decision list.
//!
//! Rules are evaluated top to bottom and the first match wins, so a later rule
//! only ever sees profiles every earlier rule rejected.

use mlife_domain::constants::{
    BEARING_STRESS_CYCLES, BOILER_STRESS_CYCLES_MIN, BOILER_TEMPERATURE_CELSIUS,
    PIPING_USAGE_HOURS, TURBINE_STRESS_CYCLES_MIN, TURBINE_TEMPERATURE_CELSIUS,
};
use mlife_domain::life::{OperatingProfile, WearComponent};

/// A `(predicate, component)` pair of the decision list.
#[derive(Debug, Clone, Copy)]
pub struct WearRule {
    pub name: &'static str,
    pub component: WearComponent,
    pub applies: fn(&OperatingProfile) -> bool,
}

impl WearRule {
    #[must_use]
    pub fn matches(&self, profile: &OperatingProfile) -> bool {
        (self.applies)(profile)
    }
}

/// Component reported when no rule matches.
pub const FALLBACK_COMPONENT: WearComponent = WearComponent::GeneralMechanical;

/// The decision list, in priority order.
pub static WEAR_RULES: [WearRule; 4] = [
    WearRule {
        name: "high-cycle-rate",
        component: WearComponent::BearingsAndRotating,
        applies: |p| p.stress_cycles_per_year > BEARING_STRESS_CYCLES,
    },
    WearRule {
        name: "mid-cycle-high-temperature",
        component: WearComponent::BoilerTubesAndHeatExchangers,
        applies: |p| {
            (BOILER_STRESS_CYCLES_MIN..=BEARING_STRESS_CYCLES).contains(&p.stress_cycles_per_year)
                && p.operating_temperature_celsius > BOILER_TEMPERATURE_CELSIUS
        },
    },
    WearRule {
        name: "low-cycle-high-temperature",
        component: WearComponent::TurbineBladesAndCompressors,
        applies: |p| {
            (TURBINE_STRESS_CYCLES_MIN..BOILER_STRESS_CYCLES_MIN)
                .contains(&p.stress_cycles_per_year)
                && p.operating_temperature_celsius > TURBINE_TEMPERATURE_CELSIUS
        },
    },
    WearRule {
        name: "heavy-usage",
        component: WearComponent::PipingAndStructural,
        applies: |p| p.usage_hours_per_year > PIPING_USAGE_HOURS,
    },
];

/// The first rule matching `profile`, if any.
#[must_use]
pub fn matching_rule(profile: &OperatingProfile) -> Option<&'static WearRule> {
    WEAR_RULES.iter().find(|rule| rule.matches(profile))
}

/// Component predicted to wear out first.
#[must_use]
pub fn classify(profile: &OperatingProfile) -> WearComponent {
    matching_rule(profile).map_or(FALLBACK_COMPONENT, |rule| rule.component)
}
