pub mod entities;
pub use entities::*;

pub mod operation;
pub use operation::*;

pub mod queries;
pub use queries::*;
