//! S3-backed object store.

use async_trait::async_trait;
use aws_sdk_s3::error::ProvideErrorMetadata;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;

use crate::error::StoreError;
use crate::traits::ObjectStore;

/// Object store backed by S3.
///
/// The wrapped client is constructed once per process and shared; this type
/// only adds error classification so the pipeline can tell "definitely
/// absent" apart from every other failure.
#[derive(Clone, Debug)]
pub struct S3Store {
    inner: Client,
}

impl S3Store {
    pub fn new(inner: Client) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    #[tracing::instrument(skip(self))]
    async fn get(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StoreError> {
        let resp = match self.inner.get_object().bucket(bucket).key(key).send().await {
            Ok(resp) => resp,
            Err(err) => return Err(classify_error(bucket, key, err.into_service_error())),
        };

        let body = resp
            .body
            .collect()
            .await
            .map_err(|err| StoreError::Other(Box::new(err)))?;
        Ok(body.into_bytes().to_vec())
    }

    #[tracing::instrument(skip(self, body))]
    async fn put(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StoreError> {
        self.inner
            .put_object()
            .bucket(bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|err| classify_error(bucket, key, err.into_service_error()))?;
        Ok(())
    }
}

/// Map an S3 service error onto the store error taxonomy.
///
/// `NoSuchKey` must stay a typed [`StoreError::NotFound`]; the comparison
/// workflow substitutes a sentinel for that variant and only that variant.
fn classify_error<E>(bucket: &str, key: &str, err: E) -> StoreError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
{
    match err.code() {
        Some("NoSuchKey") | Some("NotFound") => StoreError::NotFound {
            bucket: bucket.to_string(),
            key: key.to_string(),
        },
        Some("AccessDenied") => StoreError::AccessDenied {
            bucket: bucket.to_string(),
            key: key.to_string(),
        },
        _ => StoreError::Other(Box::new(err)),
    }
}
