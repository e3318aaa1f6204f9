pub mod parsing;
pub mod price;
pub mod record;

pub use parsing::*;
pub use price::*;
pub use record::*;
