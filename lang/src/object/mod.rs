pub mod environment;
pub mod function;
pub mod value;

pub use environment::Environment;
pub use function::{Body, Function};
pub use value::{Object, ObjectType};
