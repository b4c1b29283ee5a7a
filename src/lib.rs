pub mod game;
pub mod policy;
pub mod simulation;
pub mod stats;
pub mod trace;

pub use game::{GameResult, OrchardState, RandomSource, Winner, run_game};
pub use policy::{Policy, PolicyRegistry};
pub use simulation::{GameConfig, TrialBatch, run_batch};
pub use stats::{BatchSummary, summarize};

pub mod prelude {
    pub use crate::game::{GameResult, OrchardState, RandomSource, RngSource, Winner, run_game};
    pub use crate::policy::{Policy, PolicyRegistry};
    pub use crate::simulation::{GameConfig, TrialBatch, run_batch};
    pub use crate::stats::{BatchSummary, summarize};
    pub use crate::trace::{LogTrace, NullTrace, TraceSink};
}
