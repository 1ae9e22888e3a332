mod dining_hall;
mod directory;
mod error;
mod menu_page;
pub(crate) mod static_selector;
mod text;

pub use dining_hall::DiningHall;
pub use directory::dining_halls;
pub use error::{Error, Result};
pub use menu_page::{CategoryMap, MenuSnapshot};
