pub mod customers;
pub mod filter;
pub mod kpi;
pub mod products;
pub mod revenue;
pub mod rfm;
pub mod series;
pub mod time;
pub mod view;

pub use filter::{CountryFilter, DashboardFilter, DateRange, filter_transactions};
pub use series::LabeledValue;
pub use view::{DashboardView, build_dashboard_view};
