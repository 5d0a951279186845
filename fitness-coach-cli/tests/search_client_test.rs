use fitness_coach_cli::api::{RetryConfig, SearchClient};
use fitness_coach_cli::config::SearchConfig;
use mockito::Matcher;

fn client_for(server: &mockito::Server) -> SearchClient {
    let config = SearchConfig {
        base_url: server.url(),
        timeout_seconds: 5,
        ..SearchConfig::default()
    };
    let retry = RetryConfig {
        max_retries: 2,
        initial_delay_ms: 1,
        max_delay_ms: 2,
        backoff_factor: 2.0,
    };
    SearchClient::new(&config, retry).unwrap()
}

const ANSWER: &str = r#"{
    "Abstract": "",
    "RelatedTopics": [
        {"Text": "Supino reto", "FirstURL": "https://duckduckgo.com/Supino"},
        {"Name": "Pernas", "Topics": [
            {"Text": "Agachamento livre", "FirstURL": "https://duckduckgo.com/Agachamento"},
            {"Text": "Leg press", "FirstURL": "https://duckduckgo.com/Leg_press"}
        ]},
        {"Text": "Remada curvada", "FirstURL": "https://duckduckgo.com/Remada"}
    ]
}"#;

#[tokio::test]
async fn test_search_flattens_and_truncates_topics() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), "treino de pernas".into()),
            Matcher::UrlEncoded("format".into(), "json".into()),
            Matcher::UrlEncoded("no_redirect".into(), "1".into()),
            Matcher::UrlEncoded("no_html".into(), "1".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(ANSWER)
        .create_async()
        .await;

    let results = client_for(&server).search("treino de pernas", 3).await;

    mock.assert_async().await;
    let titles: Vec<&str> = results.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Supino reto", "Agachamento livre", "Leg press"]);
    assert_eq!(results[1].url, "https://duckduckgo.com/Agachamento");
    assert!(results.iter().all(|r| !r.is_error()));
}

#[tokio::test]
async fn test_server_error_yields_sentinel_after_retries() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("boom")
        .expect(2)
        .create_async()
        .await;

    let results = client_for(&server).search("hipertrofia", 4).await;

    mock.assert_async().await;
    assert_eq!(results.len(), 1);
    assert!(results[0].is_error());
    assert_eq!(results[0].title, "Erro na pesquisa");
}

#[tokio::test]
async fn test_invalid_json_yields_sentinel_without_retry() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("not json")
        .expect(1)
        .create_async()
        .await;

    let results = client_for(&server).search("força", 4).await;

    mock.assert_async().await;
    assert_eq!(results.len(), 1);
    assert!(results[0].is_error());
}

#[tokio::test]
async fn test_research_keeps_query_order() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(ANSWER)
        .create_async()
        .await;

    let queries = vec!["primeira".to_string(), "segunda".to_string()];
    let entries = client_for(&server).research(&queries, 1).await;

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].query, "primeira");
    assert_eq!(entries[1].query, "segunda");
    assert_eq!(entries[1].results.len(), 1);
}
