pub mod export_format;
pub mod season;

pub use export_format::ExportFormat;
pub use season::Season;
