pub mod gateway;
pub mod tracing;

pub use gateway::SessionGateway;
