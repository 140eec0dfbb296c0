mod catalog;
mod fleet;
mod service;

pub use catalog::Catalog;
pub use fleet::Fleet;
pub use service::{Overview, PanelService};
