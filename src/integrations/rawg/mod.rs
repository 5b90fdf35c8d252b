pub mod client;
mod wire;
