pub mod model;

pub use model::{Automobile, AutomobilePatch, AutosList, NewAutomobile};
