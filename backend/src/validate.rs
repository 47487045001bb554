use crate::error::{MemoError, Result};

/// The three required memo fields, known to be non-empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoFields {
    pub title: String,
    pub author: String,
    pub text: String,
}

fn required(value: &Option<String>, field: &str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.clone()),
        _ => Err(MemoError::Validation(format!(
            "Memo {} cannot be null or empty.",
            field
        ))),
    }
}

pub fn validate_payload(payload: &common::MemoPayload) -> Result<MemoFields> {
    Ok(MemoFields {
        title: required(&payload.title, "Title")?,
        author: required(&payload.author, "Author")?,
        text: required(&payload.text, "Text")?,
    })
}

/// An update body may omit its id, but must not name a different memo.
pub fn check_identity(path_id: i64, payload: &common::MemoPayload) -> Result<()> {
    match payload.id {
        Some(body_id) if body_id != path_id => Err(MemoError::Conflict(
            "Requested Memo ID not matching with Body.".to_string(),
        )),
        _ => Ok(()),
    }
}

pub fn validate_page_params(page: i64, limit: i64) -> Result<()> {
    if page < 1 {
        return Err(MemoError::InvalidArgument(
            "Page number should be equals or greater than 1".to_string(),
        ));
    }
    if limit < 1 {
        return Err(MemoError::InvalidArgument(
            "Limit number should be equals or greater than 1".to_string(),
        ));
    }
    Ok(())
}
