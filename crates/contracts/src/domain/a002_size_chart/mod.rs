pub mod aggregate;
pub mod grid;

pub use aggregate::{SizeChart, SizeChartCell, SizeChartId, SizeChartRow, SIZE_CHART_SCHEMA, SIZE_UNITS};
pub use grid::GridError;
