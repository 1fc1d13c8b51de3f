pub mod guardian_adapter;
pub mod guardian_client;
pub mod guardian_dtos;

pub use guardian_adapter::GuardianAdapter;
pub use guardian_client::GuardianClient;
