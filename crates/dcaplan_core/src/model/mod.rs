mod plan;
mod results;
mod series;

pub use plan::{NominalDay, Plan};
pub use results::{
    ComparisonResult, MonthlyExtreme, PlanResult, ResolvedPurchase, WindowSample,
};
pub use series::{PricePoint, PriceSeries};
