pub mod conversion;
pub mod external_filter;

pub use conversion::{Conversion, ConversionPipeline, ConvertError};
pub use external_filter::ExternalFilter;
