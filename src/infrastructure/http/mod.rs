//! HTTP transport seam

mod client;

pub use client::{HttpClient, HttpClientTrait, HttpMethod, HttpRequest, HttpResponse};

#[cfg(test)]
pub use client::mock::MockHttpClient;
#[cfg(test)]
pub use client::MockHttpClientTrait;
