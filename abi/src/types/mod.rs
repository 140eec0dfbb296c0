mod calendar_date;
mod notice;
mod reservation;
mod server;
mod summary;

pub use calendar_date::*;
pub use notice::*;
pub use reservation::*;
pub use server::*;
pub use summary::*;
