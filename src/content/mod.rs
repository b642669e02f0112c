//! The portfolio's page content as plain data records.
//!
//! The bundled data set lives in `content/portfolio.json` and is parsed on
//! first use; applications can also deserialize their own.

mod schema;
pub use schema::*;
