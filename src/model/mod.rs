pub use teamlife_core::{BoardInitializer, TransitionRule};
pub mod config {
    pub use teamlife_core::config::*;
}
pub mod engine {
    pub use teamlife_core::engine::*;
}
pub mod error {
    pub use teamlife_core::error::*;
}
pub mod grid {
    pub use teamlife_core::grid::*;
}
pub mod neighbors {
    pub use teamlife_core::neighbors::*;
}
pub mod rule {
    pub use teamlife_core::rule::*;
}
pub mod seeding {
    pub use teamlife_core::seeding::*;
}
pub mod metrics {
    pub use teamlife_core::metrics::*;
}

pub mod state {
    pub use teamlife_data::*;
}
