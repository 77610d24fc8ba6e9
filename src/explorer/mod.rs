pub mod client;

pub use client::ExplorerClient;
