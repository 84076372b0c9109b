//! Demonstrates loading a provider configuration, checking it, and preparing an upload against a
//! local mock collector with the default reqwest transport.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use location_config::{
	config::{Configuration, EndpointConfiguration, ProviderConfiguration},
	http,
	reqwest::Client,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let provider = ProviderConfiguration::from_json_str(
		"{\"identifier\":\"123E4567-E89B-12D3-A456-426614174000\",\"token\":\"demo-token\"}",
	)?;

	println!("Provider endpoint: {}.", provider.url());
	println!("Provider configuration valid: {}.", provider.valid());

	let server = MockServer::start_async().await;
	let upload_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/devicelocation").header("authorization", "Bearer demo-token");
			then.status(202);
		})
		.await;
	let mut collector = EndpointConfiguration::new(server.url("/devicelocation"));

	for (name, value) in provider.headers().unwrap_or_default() {
		collector = collector.with_header(name, value);
	}

	let response = http::prepare_request(&Client::new(), &collector)?
		.body("{\"locations\":[]}")
		.send()
		.await?;

	println!("Collector answered with {}.", response.status());

	upload_mock.assert_async().await;

	Ok(())
}
