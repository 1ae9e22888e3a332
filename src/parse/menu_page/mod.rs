mod category_map;
mod snapshot;
mod token;

pub use category_map::CategoryMap;
pub use snapshot::MenuSnapshot;
