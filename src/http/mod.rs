mod client;

pub use client::{HttpTransport, RawResponse, Transport};
