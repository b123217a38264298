pub mod athlete;
pub mod health;
pub mod metric;
pub mod workout;

pub use athlete::{Athlete, NewAthlete};
pub use health::{HealthStat, HydrationLevel, NewHealthStat};
pub use metric::{MetricCategory, NewPerformanceMetric, PerformanceMetric};
pub use workout::{Intensity, NewWorkout, Workout};
