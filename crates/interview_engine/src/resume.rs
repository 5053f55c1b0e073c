use std::fs;
use std::path::Path;

use crate::{ApiError, ApiSettings, FailureKind};

const RESUME_FALLBACK_NAME: &str = "resume";

/// A resume file loaded into memory and ready to upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumePayload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Reads and validates the selected resume. Rejections here never touch the
/// network: extension must be allowed and the file must fit the size cap.
pub fn load_resume(path: &Path, settings: &ApiSettings) -> Result<ResumePayload, ApiError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    if !settings
        .allowed_extensions
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(&extension))
    {
        return Err(ApiError::new(
            FailureKind::UnsupportedFileType {
                extension: extension.clone(),
            },
            "resume file type not accepted",
        ));
    }

    let metadata =
        fs::metadata(path).map_err(|err| ApiError::new(FailureKind::FileRead, err.to_string()))?;
    if metadata.len() > settings.max_resume_bytes {
        return Err(ApiError::new(
            FailureKind::TooLarge {
                max_bytes: settings.max_resume_bytes,
                actual: metadata.len(),
            },
            "resume file too large",
        ));
    }

    let bytes =
        fs::read(path).map_err(|err| ApiError::new(FailureKind::FileRead, err.to_string()))?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(RESUME_FALLBACK_NAME)
        .to_string();

    Ok(ResumePayload {
        file_name,
        mime: mime_for_extension(&extension).to_string(),
        bytes,
    })
}

fn mime_for_extension(extension: &str) -> &'static str {
    match extension {
        "pdf" => "application/pdf",
        "txt" | "md" => "text/plain",
        _ => "application/octet-stream",
    }
}
