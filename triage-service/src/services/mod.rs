pub mod aggregator;
pub mod error;
pub mod metrics;
pub mod providers;
pub mod resolver;
pub mod rules;

pub use aggregator::{Aggregator, DepartmentCounts};
pub use error::TriageError;
pub use metrics::{get_metrics, init_metrics};
pub use resolver::{Recommendation, RecommendationResolver, RecommendationSource};
pub use rules::SymptomTable;
