//! HTTP handlers for tools endpoints.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    response::IntoResponse,
    Json,
};

use crate::adapters::http::error::ApiError;
use crate::application::{
    GetToolsHandler, GetToolsQuery, SaveToolsCommand, SaveToolsHandler, StoreDeadline,
};
use crate::ports::UserToolsRepository;

use super::dto::{GetToolsParams, SaveToolsRequest, ToolsResponse};

/// Application state for tools endpoints.
#[derive(Clone)]
pub struct ToolsAppState {
    pub tools: Arc<dyn UserToolsRepository>,
    pub deadline: StoreDeadline,
}

impl ToolsAppState {
    pub fn get_tools_handler(&self) -> GetToolsHandler {
        GetToolsHandler::new(self.tools.clone(), self.deadline)
    }

    pub fn save_tools_handler(&self) -> SaveToolsHandler {
        SaveToolsHandler::new(self.tools.clone(), self.deadline)
    }
}

/// GET /api/user/tools?username=alice
pub async fn get_tools(
    State(state): State<ToolsAppState>,
    params: Result<Query<GetToolsParams>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(params) = params.map_err(ApiError::invalid_body)?;

    let query = GetToolsQuery {
        username: params.username,
    };
    let tools = state.get_tools_handler().handle(query).await?;

    tracing::debug!(count = tools.len(), "Tools retrieved");

    Ok(Json(ToolsResponse::retrieved(tools.into_strings())))
}

/// POST /api/user/tools
pub async fn save_tools(
    State(state): State<ToolsAppState>,
    payload: Result<Json<SaveToolsRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload.map_err(ApiError::invalid_body)?;

    let cmd = SaveToolsCommand {
        username: request.username.unwrap_or_default(),
        tools: request.tools.unwrap_or_default(),
    };
    let result = state.save_tools_handler().handle(cmd).await?;

    tracing::info!(username = %result.username, count = result.tools.len(), "Tools saved");

    Ok(Json(ToolsResponse::saved(result.tools.into_strings())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryUserToolsRepository;
    use axum::http::StatusCode;

    fn test_state() -> ToolsAppState {
        ToolsAppState {
            tools: Arc::new(InMemoryUserToolsRepository::new()),
            deadline: StoreDeadline::default(),
        }
    }

    fn save_request(username: &str, tools: Option<&[&str]>) -> Json<SaveToolsRequest> {
        Json(SaveToolsRequest {
            username: Some(username.to_string()),
            tools: tools.map(|t| t.iter().map(|s| s.to_string()).collect()),
        })
    }

    #[tokio::test]
    async fn save_then_get() {
        let state = test_state();

        save_tools(State(state.clone()), Ok(save_request("u", Some(&["a", "b", "a"]))))
            .await
            .unwrap();
        let response = get_tools(
            State(state),
            Ok(Query(GetToolsParams {
                username: "u".to_string(),
            })),
        )
        .await
        .unwrap()
        .into_response();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn save_with_null_tools_clears_set() {
        let state = test_state();
        save_tools(State(state.clone()), Ok(save_request("u", Some(&["a"]))))
            .await
            .unwrap();

        save_tools(State(state.clone()), Ok(save_request("u", None)))
            .await
            .unwrap();

        let tools = state
            .get_tools_handler()
            .handle(GetToolsQuery {
                username: "u".to_string(),
            })
            .await
            .unwrap();
        assert!(tools.is_empty());
    }

    #[tokio::test]
    async fn get_without_username_is_bad_request() {
        let err = get_tools(
            State(test_state()),
            Ok(Query(GetToolsParams {
                username: String::new(),
            })),
        )
        .await
        .err()
        .unwrap();

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}
