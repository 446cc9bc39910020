pub mod analytics_view;
pub mod metrics_card;
pub mod models_view;
pub mod overview;
pub mod positions_view;
