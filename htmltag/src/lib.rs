pub mod attributes;
pub mod escape;
pub mod id;
pub mod tag;

pub use attributes::Attributes;
pub use escape::{escape, escape_once, fix_double_escape};
pub use id::{IdFormat, generate_id};
pub use tag::TagRenderer;
