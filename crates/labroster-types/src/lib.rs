pub mod domain;
pub mod error;
pub mod filter;
pub mod page;
pub mod time;

pub use domain::*;
pub use error::{Error, Result};
pub use filter::{Filter, FilterField};
pub use page::{PageEnvelope, Pagination};
pub use time::{NOT_AVAILABLE, format_epoch_seconds, format_provider_timestamp};
