// Extractor function: summarize each uploaded PDF.

use anyhow::Context;
use aws_config::meta::region::RegionProviderChain;
use aws_config::{BehaviorVersion, Region};
use aws_lambda_events::event::s3::S3Event;
use functions::handler::summarize_handler;
use functions::{init_tracing, Config};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use std::sync::Arc;
use summarization::{BedrockGenerator, PdfExtractor, S3Store};

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    let config = Config::from_env().context("failed to load configuration")?;

    let region_provider =
        RegionProviderChain::default_provider().or_else(Region::new("us-east-1"));
    let aws_config = aws_config::defaults(BehaviorVersion::latest())
        .region(region_provider)
        .load()
        .await;

    let store = Arc::new(S3Store::new(aws_sdk_s3::Client::new(&aws_config)));
    let extractor = Arc::new(PdfExtractor::new());
    let generator = Arc::new(
        BedrockGenerator::new(aws_sdk_bedrockruntime::Client::new(&aws_config))
            .with_model_id(config.model_id.clone()),
    );
    let output_bucket = config.output_bucket;

    tracing::info!(bucket = %output_bucket, "summarize function ready");

    run(service_fn(move |event: LambdaEvent<S3Event>| {
        let store = store.clone();
        let extractor = extractor.clone();
        let generator = generator.clone();
        let output_bucket = output_bucket.clone();
        async move { summarize_handler(store, extractor, generator, &output_bucket, event).await }
    }))
    .await
}
