use std::fmt;

/// Location of an object in the media store: bucket plus key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectRef {
    bucket: String,
    key: String,
}

impl ObjectRef {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    /// Parse an `s3://bucket/key` style URI.
    pub fn from_uri(uri: &str) -> Result<Self, ObjectUriError> {
        let rest = uri
            .strip_prefix("s3://")
            .ok_or_else(|| ObjectUriError(uri.to_string()))?;
        let (bucket, key) = rest
            .split_once('/')
            .ok_or_else(|| ObjectUriError(uri.to_string()))?;
        if bucket.is_empty() || key.is_empty() {
            return Err(ObjectUriError(uri.to_string()));
        }
        Ok(Self::new(bucket, key))
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn uri(&self) -> String {
        format!("s3://{}/{}", self.bucket, self.key)
    }

    /// Last path segment of the key.
    pub fn filename(&self) -> &str {
        self.key.rsplit('/').next().unwrap_or(&self.key)
    }

    /// First path segment of the key.
    pub fn first_segment(&self) -> &str {
        self.key.split('/').next().unwrap_or("")
    }

    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.key.starts_with(prefix)
    }

    /// Another object in the same bucket.
    pub fn sibling(&self, key: impl Into<String>) -> Self {
        Self::new(self.bucket.clone(), key)
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.uri())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid object uri: {0}")]
pub struct ObjectUriError(String);
