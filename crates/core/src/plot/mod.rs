pub mod choices;
pub mod field;
pub mod log;
pub mod model;

pub use choices::{LogStatus, PlotStatus, TimeOfDay, TimeOfWeek, OTHER};
pub use field::Field;
pub use log::{PlotLog, PlotLogEntry, PlotLogEntryCandidate, PlotLogRef, PlotLogState, PlotRef};
pub use model::{PersistedPlot, PlotCandidate, User};
