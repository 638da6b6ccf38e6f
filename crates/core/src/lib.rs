pub mod dataset;
pub mod error;
pub mod event;
pub mod filter;
pub mod histogram;
pub mod history;
pub mod reading;
pub mod regression;
pub mod snapshot;
pub mod state;
pub mod table;

pub use dataset::{Cut, Diamond, ReferenceDataset};
pub use error::{DashError, Result};
pub use event::Message;
pub use filter::{FilterCriteria, FilteredView, StaticFilter};
pub use histogram::{Bin, Histogram};
pub use history::HistoryBuffer;
pub use reading::Reading;
pub use regression::LinearFit;
pub use snapshot::LiveSnapshot;
pub use state::{AppState, ReferenceTab};
pub use table::ReadingTable;
