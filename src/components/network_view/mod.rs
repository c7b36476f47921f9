mod component;
mod sink;
mod types;

pub use component::NetworkView;
pub use sink::SignalSink;
pub use types::GraphData;
