use tracing::{error, info, span, Level};

mod adapters;
mod model;
mod smoke;
mod util;

const REGION: &str = "us-east-1";
const BUCKET_NAME: &str = "testing-aws-rs-smoke";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().json().init();

    let span = span!(Level::INFO, "main", context = "main");
    let _e = span.enter();
    info!(region = REGION, bucket = BUCKET_NAME, "called");

    let client = match adapters::s3::init_client(REGION).await {
        Ok(client) => client,
        Err(err) => {
            error!(error = %err, "init S3 client");
            std::process::exit(1);
        }
    };

    if let Err(err) = smoke::ensure_bucket(&client, BUCKET_NAME) {
        error!(error = %err, "ensure bucket");
        std::process::exit(1);
    }

    if let Err(err) = smoke::upload_payload(&client, BUCKET_NAME) {
        error!(error = %err, "upload");
        std::process::exit(1);
    }

    if let Err(err) = smoke::download_object(&client, BUCKET_NAME) {
        error!(error = %err, "download");
        std::process::exit(1);
    }
}
