pub mod config;
pub mod query;
pub mod sampler;
pub mod types;
pub mod units;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use config::{Config, ConfigError, ACCESS_TOKEN_ENV};
pub use query::{parse_request, ParseError};
pub use sampler::{pick, BusinessSearcher, RandomSampler, SampleError, PAGE_SIZE};
pub use types::{InvalidPriceLevel, PriceLevel, SearchRequest, DEFAULT_MAX_SAMPLE_SIZE};
pub use units::{to_meters, LengthUnit, UnitError};
pub use yelp_client::{Business, YelpClient};
