//! MCP handler unit tests

#[cfg(test)]
mod tests {
    use crate::common::{create_project, create_shared_services, TestCorpus};
    use serde_json::{json, Value};
    use uxlex::mcp::handlers::ProtocolHandlers;
    use uxlex::mcp::protocol::*;

    fn create_test_handlers(corpus: &TestCorpus) -> ProtocolHandlers {
        ProtocolHandlers::new(create_shared_services(corpus.path()))
    }

    fn request(id: i64, method: &str, params: Option<Value>) -> JsonRpcRequest {
        JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(id)),
            method: method.to_string(),
            params,
        }
    }

    fn call(name: &str, arguments: Value) -> JsonRpcRequest {
        request(
            1,
            "tools/call",
            Some(json!({"name": name, "arguments": arguments})),
        )
    }

    /// Parse the JSON text block of a successful tool call
    fn tool_json(response: &JsonRpcResponse) -> Value {
        let result = response.result.as_ref().expect("Expected a result");
        let text = result["content"][0]["text"]
            .as_str()
            .expect("Expected a text block");
        serde_json::from_str(text).unwrap()
    }

    #[tokio::test]
    async fn test_initialize_handler() {
        let corpus = TestCorpus::design();
        let handlers = create_test_handlers(&corpus);

        let response = handlers
            .handle_initialize(request(
                1,
                "initialize",
                Some(json!({
                    "protocolVersion": "2024-11-05",
                    "capabilities": {},
                    "clientInfo": {"name": "test-client", "version": "1.0"}
                })),
            ))
            .await
            .unwrap();

        let result = response.result.unwrap();
        assert_eq!(result["protocolVersion"], PROTOCOL_VERSION);
        assert_eq!(result["serverInfo"]["name"], "uxlex-mcp");
        assert_eq!(result["capabilities"]["tools"]["listChanged"], false);
    }

    #[tokio::test]
    async fn test_initialize_without_params() {
        let corpus = TestCorpus::empty();
        let handlers = create_test_handlers(&corpus);

        let response = handlers
            .handle_initialize(request(1, "initialize", None))
            .await
            .unwrap();
        assert!(response.error.is_none());
    }

    #[tokio::test]
    async fn test_initialized_sets_flag() {
        let corpus = TestCorpus::empty();
        let handlers = create_test_handlers(&corpus);
        assert!(!handlers.is_initialized());

        let response = handlers
            .handle_initialized(JsonRpcRequest {
                jsonrpc: "2.0".to_string(),
                id: None,
                method: "notifications/initialized".to_string(),
                params: None,
            })
            .await
            .unwrap();

        assert!(handlers.is_initialized());
        assert!(response.result.is_none() && response.error.is_none());
    }

    #[tokio::test]
    async fn test_tools_list_in_registration_order() {
        let corpus = TestCorpus::empty();
        let handlers = create_test_handlers(&corpus);

        let response = handlers
            .handle_tools_list(request(2, "tools/list", None))
            .await
            .unwrap();

        let tools = response.result.unwrap()["tools"].clone();
        let names: Vec<&str> = tools
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(
            names,
            vec!["search", "search_stack", "detect_domain", "detect_stack"]
        );
        assert_eq!(tools[0]["inputSchema"]["required"][0], "query");
    }

    #[tokio::test]
    async fn test_search_tool() {
        let corpus = TestCorpus::design();
        let handlers = create_test_handlers(&corpus);

        let response = handlers
            .handle_tools_call(call(
                "search",
                json!({"query": "glass", "domain": "style", "max_results": 2}),
            ))
            .await
            .unwrap();

        let body = tool_json(&response);
        assert_eq!(body["domain"], "style");
        assert_eq!(body["file"], "styles.csv");
        assert_eq!(body["results"][0]["Style Category"], "Glassmorphism");
    }

    #[tokio::test]
    async fn test_search_tool_routes_without_domain() {
        let corpus = TestCorpus::design();
        let handlers = create_test_handlers(&corpus);

        let response = handlers
            .handle_tools_call(call("search", json!({"query": "hex palette"})))
            .await
            .unwrap();

        let body = tool_json(&response);
        assert_eq!(body["domain"], "color");
        assert_eq!(body["count"], 1);
    }

    #[tokio::test]
    async fn test_search_tool_missing_corpus_error_code() {
        let corpus = TestCorpus::empty();
        let handlers = create_test_handlers(&corpus);

        let response = handlers
            .handle_tools_call(call("search", json!({"query": "glass", "domain": "style"})))
            .await
            .unwrap();

        let error = response.error.unwrap();
        assert_eq!(error.code, SOURCE_NOT_FOUND);
        assert!(error.message.contains("styles.csv"));
    }

    #[tokio::test]
    async fn test_search_tool_unknown_domain_is_invalid_params() {
        let corpus = TestCorpus::design();
        let handlers = create_test_handlers(&corpus);

        let response = handlers
            .handle_tools_call(call(
                "search",
                json!({"query": "glass", "domain": "wallpaper"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.error.unwrap().code, INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_search_tool_requires_query() {
        let corpus = TestCorpus::design();
        let handlers = create_test_handlers(&corpus);

        let response = handlers
            .handle_tools_call(call("search", json!({"domain": "style"})))
            .await
            .unwrap();
        assert_eq!(response.error.unwrap().code, INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_search_stack_tool() {
        let corpus = TestCorpus::design();
        let handlers = create_test_handlers(&corpus);

        let response = handlers
            .handle_tools_call(call(
                "search_stack",
                json!({"query": "memoize expensive", "stack": "react"}),
            ))
            .await
            .unwrap();

        let body = tool_json(&response);
        assert_eq!(body["domain"], "stack");
        assert_eq!(body["stack"], "react");
        assert_eq!(
            body["results"][0]["Guideline"],
            "Memoize expensive computations"
        );
    }

    #[tokio::test]
    async fn test_detect_domain_tool() {
        let corpus = TestCorpus::empty();
        let handlers = create_test_handlers(&corpus);

        let response = handlers
            .handle_tools_call(call("detect_domain", json!({"query": "SaaS dashboard"})))
            .await
            .unwrap();

        let body = tool_json(&response);
        assert_eq!(body["domain"], "product");
    }

    #[tokio::test]
    async fn test_detect_stack_tool() {
        let corpus = TestCorpus::empty();
        let handlers = create_test_handlers(&corpus);
        let project = create_project(&[("pubspec.yaml", "name: app\n")]);

        let response = handlers
            .handle_tools_call(call(
                "detect_stack",
                json!({"project_dir": project.path()}),
            ))
            .await
            .unwrap();

        let body = tool_json(&response);
        assert_eq!(body["stack"], "flutter");
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let corpus = TestCorpus::empty();
        let handlers = create_test_handlers(&corpus);

        let response = handlers
            .handle_tools_call(call("read_file", json!({})))
            .await
            .unwrap();
        let error = response.error.unwrap();
        assert_eq!(error.code, INVALID_REQUEST);
        assert!(error.message.contains("read_file"));
    }

    #[tokio::test]
    async fn test_tools_call_without_params() {
        let corpus = TestCorpus::empty();
        let handlers = create_test_handlers(&corpus);

        let response = handlers
            .handle_tools_call(request(3, "tools/call", None))
            .await
            .unwrap();
        assert_eq!(response.error.unwrap().code, INVALID_PARAMS);
        assert_eq!(response.id, Some(json!(3)));
    }

    #[tokio::test]
    async fn test_ping() {
        let corpus = TestCorpus::empty();
        let handlers = create_test_handlers(&corpus);

        let response = handlers.handle_ping(request(9, "ping", None)).await.unwrap();
        assert_eq!(response.result, Some(json!({})));
    }
}
