use serde::{Deserialize, Serialize};

use super::epidemic::SisModel;
use super::growth::GrowthModel;
use super::host_pathogen::HostPathogenModel;
use super::life::LifeModel;
use super::panic::PanicModel;
use super::rewiring::RewiringModel;
use super::system::Model;
use super::voter::VoterModel;

/// The simulation variants available to a driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ModelKind {
    Life,
    Panic,
    HostPathogen,
    Sis,
    PreferentialAttachment,
    Rewiring,
    Voter,
}

string_enum!(ModelKind {
    Life => "life",
    Panic => "panic",
    HostPathogen => "host_pathogen",
    Sis => "sis",
    PreferentialAttachment => "preferential_attachment",
    Rewiring => "rewiring",
    Voter => "voter",
});

impl ModelKind {
    /// A fresh, uninitialized model with default parameters.
    pub fn build(self) -> Box<dyn Model> {
        match self {
            ModelKind::Life => Box::new(LifeModel::default()),
            ModelKind::Panic => Box::new(PanicModel::default()),
            ModelKind::HostPathogen => Box::new(HostPathogenModel::default()),
            ModelKind::Sis => Box::new(SisModel::default()),
            ModelKind::PreferentialAttachment => Box::new(GrowthModel::default()),
            ModelKind::Rewiring => Box::new(RewiringModel::default()),
            ModelKind::Voter => Box::new(VoterModel::default()),
        }
    }
}
