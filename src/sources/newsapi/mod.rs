pub mod newsapi_adapter;
pub mod newsapi_client;
pub mod newsapi_dtos;

pub use newsapi_adapter::NewsApiAdapter;
pub use newsapi_client::NewsApiClient;
