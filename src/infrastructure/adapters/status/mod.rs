//! Item Status Adapters

mod mock_status_client;

pub use mock_status_client::{MockStatusClient, MockStatusClientConfig};
