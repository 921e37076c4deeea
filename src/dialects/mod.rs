mod spanner;

pub use self::spanner::{SpannerDialect, DEFAULT_DRIVER_NAME};
