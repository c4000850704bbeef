pub mod backend;
pub mod metrics_manager;
pub mod results_link;
