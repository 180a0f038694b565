pub mod backend;
pub mod notifier;
pub mod api_client;
pub mod session_service;

pub use backend::ProfileBackend;
pub use notifier::Notifier;
pub use api_client::ApiClient;
pub use session_service::SessionService;
