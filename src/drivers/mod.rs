mod registry;

pub use self::in_memory_test::{
    InMemoryConnector, InMemoryTestDriver, InMemoryTestResponseBuilder, RecordedQuery,
};
pub use self::registry::DriverRegistry;
