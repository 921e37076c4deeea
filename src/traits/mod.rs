mod connector;
mod dialect;
mod driver;

pub use connector::Connector;
pub use dialect::{Dialect, Migrator};
pub use driver::DatabaseDriver;
