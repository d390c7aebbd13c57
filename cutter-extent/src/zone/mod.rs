mod geometry_ops;
mod id;
mod index;
mod reader;
mod zone_record;

pub use id::ZoneId;
pub use index::ZoneIndex;
pub use reader::{default_zone_id_column, read_zones};
pub use zone_record::{Zone, ZoneAttributes};
