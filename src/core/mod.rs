pub mod ingest;
pub mod scale;
pub mod scale_pair;
pub mod series;
pub mod series_store;
pub mod types;

pub use ingest::{IngestOptions, load_series_from_path, load_series_from_reader};
pub use scale::LinearScale;
pub use scale_pair::ScalePair;
pub use series::EntitySeries;
pub use series_store::SeriesStore;
pub use types::{ChartDimensions, Margins, Viewport, YearValue};
