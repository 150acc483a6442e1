pub mod settings;

pub use settings::{ClientSettings, Credentials};
