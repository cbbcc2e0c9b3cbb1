mod settings;

pub use settings::{Settings, DEFAULT_HOST, DEFAULT_PORT};
