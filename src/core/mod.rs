pub mod config;
pub mod driver;
pub mod field;
pub mod painter;
pub mod star;

pub use config::*;
pub use driver::*;
pub use field::*;
pub use painter::*;
pub use star::*;
