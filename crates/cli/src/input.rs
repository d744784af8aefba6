use crate::{error::CliError, user::User};
use model::filter::FilterNode;

pub async fn load_filter(path: &str) -> Result<Vec<FilterNode>, CliError> {
    let source = tokio::fs::read_to_string(path).await?;
    FilterNode::list_from_json(&source).map_err(|source| CliError::FilterParse {
        path: path.to_string(),
        source,
    })
}

pub async fn load_users(path: &str) -> Result<Vec<User>, CliError> {
    let source = tokio::fs::read_to_string(path).await?;
    serde_json::from_str(&source).map_err(|source| CliError::RecordsParse {
        path: path.to_string(),
        source,
    })
}
