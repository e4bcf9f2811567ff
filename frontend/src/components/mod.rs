pub mod explorer;
pub mod fields;
pub mod header;
pub mod researcher;
pub mod results;
pub mod utils;
