pub mod cli;
pub mod ctx;
pub mod image;
pub mod io;
pub mod latency;
pub mod pipeline;
pub mod schema;
pub mod scores;
