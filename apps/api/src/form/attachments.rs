use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// A binary upload (photo or signature) still in raw form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn new(mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// `data:<mime>;base64,<payload>`; an empty MIME type falls back to
    /// `application/octet-stream`.
    pub fn to_data_uri(&self) -> String {
        let mime = if self.mime_type.trim().is_empty() {
            "application/octet-stream"
        } else {
            self.mime_type.trim()
        };
        format!("data:{};base64,{}", mime, STANDARD.encode(&self.bytes))
    }
}

/// Encodes an optional attachment on the blocking pool.
pub async fn encode(attachment: Option<Attachment>) -> Result<Option<String>, tokio::task::JoinError> {
    match attachment {
        Some(a) => tokio::task::spawn_blocking(move || Some(a.to_data_uri())).await,
        None => Ok(None),
    }
}
