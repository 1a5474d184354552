use serde::{de::DeserializeOwned, Serialize};

use crate::{
    chains::ChainRegistry,
    utils::fetch::{send_http_request, Fetcher, RequestParams},
};

use super::{schemas::GraphQlResponse, typedefs::GraphQlRequest};

/// Runs a GraphQL query against the subgraph of `chain_id`. Responses are never cached.
pub async fn query_boost_subgraph<T, V>(
    fetcher: &impl Fetcher,
    chains: &ChainRegistry,
    query: &str,
    variables: V,
    chain_id: u64,
) -> eyre::Result<GraphQlResponse<T>>
where
    T: DeserializeOwned,
    V: Serialize,
{
    let chain = chains.get(chain_id)?;

    let body = serde_json::to_value(GraphQlRequest { query, variables })?;

    let request_params = RequestParams::new(chain.subgraph_url.as_str(), body)
        .with_header("Cache-Control", "no-cache")
        .with_header("Pragma", "no-cache");

    send_http_request::<GraphQlResponse<T>>(fetcher, request_params).await
}
