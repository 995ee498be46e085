mod http_scribe_client;

pub use http_scribe_client::HttpScribeClient;
