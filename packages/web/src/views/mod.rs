mod legend;
mod sessions;

pub use legend::AdminStatusLegendPage;
pub use sessions::AdminSessionsPage;
