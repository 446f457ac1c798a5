//! GitHub GraphQL API support for the assigned-PR search

use crate::{Error, GitHubClient, Result};
use reassign_core::{PullRequestInfo, RepoContext};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

const SEARCH_QUERY: &str = r#"
    query($query: String!, $first: Int!, $endCursor: String) {
        search(type: ISSUE, query: $query, first: $first, after: $endCursor) {
            nodes {
                ... on PullRequest {
                    number
                    title
                    state
                    isDraft
                    updatedAt
                    createdAt
                    author {
                        login
                    }
                }
            }
            pageInfo {
                hasNextPage
                endCursor
            }
        }
    }
"#;

/// Number of search results requested; further pages are not fetched
pub const SEARCH_PAGE_SIZE: u32 = 100;

/// GraphQL query response wrapper
#[derive(Debug, Deserialize)]
struct GraphQLResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQLError>>,
}

/// GraphQL error
#[derive(Debug, Deserialize)]
struct GraphQLError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct SearchData {
    search: SearchConnection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchConnection {
    #[serde(default)]
    nodes: Vec<SearchNode>,
    page_info: PageInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageInfo {
    has_next_page: bool,
}

/// A search hit; non-PR hits come back as empty objects
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct SearchNode {
    number: Option<u64>,
    title: String,
    state: String,
    is_draft: bool,
    updated_at: String,
    created_at: String,
    author: Option<AuthorNode>,
}

#[derive(Debug, Default, Deserialize)]
struct AuthorNode {
    login: String,
}

impl SearchNode {
    fn into_pull_request(self) -> Option<PullRequestInfo> {
        Some(PullRequestInfo {
            number: self.number?,
            title: self.title,
            author: self.author.map(|a| a.login).unwrap_or_default(),
            state: self.state,
            is_draft: self.is_draft,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Search filter for open PRs assigned to `login`, newest first
pub fn assigned_search_query(repo: &RepoContext, login: &str) -> String {
    format!(
        "repo:{}/{} is:pr state:open assignee:{} sort:created-desc",
        repo.owner, repo.name, login
    )
}

fn into_pull_requests(data: SearchData) -> Vec<PullRequestInfo> {
    data.search
        .nodes
        .into_iter()
        .filter_map(SearchNode::into_pull_request)
        .collect()
}

impl GitHubClient {
    /// Open PRs in `repo` assigned to `login`, newest-created first
    pub async fn search_assigned_open_prs(
        &self,
        repo: &RepoContext,
        login: &str,
    ) -> Result<Vec<PullRequestInfo>> {
        let query = assigned_search_query(repo, login);
        debug!(query = %query, "Searching assigned pull requests via GraphQL");

        let variables = json!({
            "query": query,
            "first": SEARCH_PAGE_SIZE,
            "endCursor": null,
        });

        let data = self
            .graphql_query::<SearchData>(SEARCH_QUERY, &variables)
            .await?;

        if data.search.page_info.has_next_page {
            debug!(
                page_size = SEARCH_PAGE_SIZE,
                "More assigned pull requests exist than the first page"
            );
        }

        let prs = into_pull_requests(data);
        info!(count = prs.len(), "Fetched assigned pull requests");
        Ok(prs)
    }

    /// Execute a GraphQL query
    async fn graphql_query<T: for<'de> Deserialize<'de>>(
        &self,
        query: &str,
        variables: &serde_json::Value,
    ) -> Result<T> {
        let request_body = json!({
            "query": query,
            "variables": variables,
        });

        let response = self
            .http()
            .post(self.graphql_url())
            .bearer_auth(self.token())
            .json(&request_body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response".to_string());
            return Err(Error::GraphQLStatus { status, body });
        }

        let graphql_response: GraphQLResponse<T> = response
            .json()
            .await
            .map_err(|e| Error::Parse(format!("Failed to parse GraphQL response: {}", e)))?;

        parse_graphql_response(graphql_response)
    }
}

fn parse_graphql_response<T>(response: GraphQLResponse<T>) -> Result<T> {
    if let Some(errors) = response.errors.filter(|e| !e.is_empty()) {
        let error_messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
        return Err(Error::GraphQL(error_messages.join(", ")));
    }

    response
        .data
        .ok_or_else(|| Error::Parse("GraphQL response missing data".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server::{request_body, request_line, serve_once};
    use reassign_core::Credentials;

    const SAMPLE: &str = r#"{
        "data": {
            "search": {
                "nodes": [
                    {
                        "number": 12,
                        "title": "Add caching",
                        "state": "OPEN",
                        "isDraft": true,
                        "updatedAt": "2024-05-02T09:00:00Z",
                        "createdAt": "2024-05-01T09:00:00Z",
                        "author": {"login": "alice"}
                    },
                    {},
                    {
                        "number": 7,
                        "title": "Fix typo",
                        "state": "OPEN",
                        "isDraft": false,
                        "updatedAt": "2024-04-02T09:00:00Z",
                        "createdAt": "2024-04-01T09:00:00Z",
                        "author": null
                    }
                ],
                "pageInfo": {"hasNextPage": false, "endCursor": "Y3Vyc29yOjI="}
            }
        }
    }"#;

    #[test]
    fn test_search_query_string() {
        assert_eq!(
            assigned_search_query(&RepoContext::new("owner", "repo"), "me"),
            "repo:owner/repo is:pr state:open assignee:me sort:created-desc"
        );
    }

    #[test]
    fn test_parse_search_response() {
        let response: GraphQLResponse<SearchData> = serde_json::from_str(SAMPLE).unwrap();
        let prs = into_pull_requests(parse_graphql_response(response).unwrap());

        assert_eq!(prs.len(), 2);
        assert_eq!(prs[0].number, 12);
        assert_eq!(prs[0].author, "alice");
        assert!(prs[0].is_draft);
        assert_eq!(prs[0].created_at, "2024-05-01T09:00:00Z");
        assert_eq!(prs[1].number, 7);
        assert_eq!(prs[1].author, "");
    }

    #[test]
    fn test_empty_search_is_not_an_error() {
        let json = r#"{"data": {"search": {"nodes": [], "pageInfo": {"hasNextPage": false}}}}"#;
        let response: GraphQLResponse<SearchData> = serde_json::from_str(json).unwrap();
        let prs = into_pull_requests(parse_graphql_response(response).unwrap());
        assert!(prs.is_empty());
    }

    #[test]
    fn test_graphql_errors_reported() {
        let json = r#"{"data": null, "errors": [{"message": "Bad query"}, {"message": "Also bad", "path": ["search"]}]}"#;
        let response: GraphQLResponse<SearchData> = serde_json::from_str(json).unwrap();
        let err = parse_graphql_response(response).unwrap_err();
        assert_eq!(err.to_string(), "GraphQL errors: Bad query, Also bad");
    }

    #[test]
    fn test_missing_data() {
        let response: GraphQLResponse<SearchData> = serde_json::from_str(r#"{}"#).unwrap();
        assert!(matches!(
            parse_graphql_response(response),
            Err(Error::Parse(_))
        ));
    }

    fn client_for(base: &str) -> GitHubClient {
        GitHubClient::with_endpoints(
            base,
            format!("{}/graphql", base),
            &Credentials::new("ghp_test"),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_search_request_shape() {
        let (base, server) = serve_once("200 OK", SAMPLE).await;

        let prs = client_for(&base)
            .search_assigned_open_prs(&RepoContext::new("o", "r"), "me")
            .await
            .unwrap();
        assert_eq!(prs.len(), 2);

        let request = server.await.unwrap();
        assert_eq!(request_line(&request), "POST /api/v3/graphql HTTP/1.1");
        assert!(request
            .lines()
            .any(|line| line.eq_ignore_ascii_case("authorization: Bearer ghp_test")));

        let body: serde_json::Value = serde_json::from_str(request_body(&request)).unwrap();
        assert_eq!(
            body["variables"]["query"],
            "repo:o/r is:pr state:open assignee:me sort:created-desc"
        );
        assert_eq!(body["variables"]["first"], 100);
    }

    #[tokio::test]
    async fn test_search_unauthorized_status() {
        let (base, server) = serve_once("401 Unauthorized", r#"{"message": "Bad credentials"}"#).await;

        let err = client_for(&base)
            .search_assigned_open_prs(&RepoContext::new("o", "r"), "me")
            .await
            .unwrap_err();
        server.await.unwrap();

        assert!(matches!(err, Error::GraphQLStatus { status: 401, .. }));
        assert!(matches!(
            reassign_core::Error::from(err),
            reassign_core::Error::Auth(_)
        ));
    }
}
