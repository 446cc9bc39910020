pub mod http_client_factory;
pub mod mock;
pub mod rest_feed;

pub use mock::MockFeed;
pub use rest_feed::RestFeed;
