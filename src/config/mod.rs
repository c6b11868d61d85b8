mod loader;

pub use loader::{get_default_config, load_client_options, write_config_to};
