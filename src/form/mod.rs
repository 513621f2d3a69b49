mod state;

pub use state::HelloForm;
