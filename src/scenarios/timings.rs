use std::collections::BTreeMap;

use crate::core::data::elapsed::Elapsed;
use crate::scenarios::ScenarioId;

/// Elapsed time per scenario for one suite execution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScenarioTimings {
    timings: BTreeMap<ScenarioId, Elapsed>,
}

impl ScenarioTimings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, id: ScenarioId, elapsed: Elapsed) {
        self.timings.insert(id, elapsed);
    }

    #[must_use]
    pub fn get(&self, id: ScenarioId) -> Option<Elapsed> {
        self.timings.get(&id).copied()
    }

    /// First scenario in ledger order that has no timing yet.
    #[must_use]
    pub fn first_missing(&self) -> Option<ScenarioId> {
        ScenarioId::ALL
            .into_iter()
            .find(|id| !self.timings.contains_key(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = (ScenarioId, Elapsed)> + '_ {
        self.timings.iter().map(|(id, elapsed)| (*id, *elapsed))
    }
}

impl FromIterator<(ScenarioId, Elapsed)> for ScenarioTimings {
    fn from_iter<I: IntoIterator<Item = (ScenarioId, Elapsed)>>(iter: I) -> Self {
        Self {
            timings: iter.into_iter().collect(),
        }
    }
}
