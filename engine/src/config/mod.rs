pub mod settings;

pub use settings::RescaleSettings;
