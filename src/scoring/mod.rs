mod presentation;
mod risk;

pub use presentation::{presentation_for, IconKind, Presentation};
pub use risk::{evaluate, RiskEvaluator};
