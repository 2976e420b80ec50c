mod dns_label;
mod find;
mod id;
mod meta_name;
mod path;

pub use dns_label::*;
pub use find::*;
pub use id::*;
pub use meta_name::*;
pub use path::*;
