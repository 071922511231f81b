//! # HTTP Contract
//!
//! Every route served by `env-api`, exercised over a real socket.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use env_api::{ApiConfig, ExposurePolicy};
    use env_types::EnvResponse;
    use reqwest::{header, StatusCode};

    use crate::integration::harness::{FailingEnvironment, TestServer};

    #[tokio::test]
    async fn unfiltered_returns_whole_environment() {
        let server =
            TestServer::with_policy(ExposurePolicy::Unfiltered, [("FOO", "bar"), ("NEXT_PUBLIC_X", "")])
                .await;

        let response = reqwest::get(format!("{}/api/env", server.url())).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json: serde_json::Value = response.json().await.unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "success": true,
                "environmentVariables": { "FOO": "bar", "NEXT_PUBLIC_X": "" },
                "count": 2
            })
        );

        server.stop().await;
    }

    #[tokio::test]
    async fn filtered_hides_private_names() {
        let server = TestServer::with_policy(
            ExposurePolicy::Filtered,
            [
                ("NEXT_PUBLIC_API_URL", "https://api.example.com"),
                ("VERCEL_ENV", "preview"),
                ("STRIPE_SECRET_KEY", "sk_live_123"),
            ],
        )
        .await;

        let body: EnvResponse = reqwest::get(format!("{}/api/env", server.url()))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert!(body.success);
        assert_eq!(body.count, 2);
        assert!(body.environment_variables.contains_key("NEXT_PUBLIC_API_URL"));
        assert!(body.environment_variables.contains_key("VERCEL_ENV"));
        assert!(!body.environment_variables.contains_key("STRIPE_SECRET_KEY"));
    }

    #[tokio::test]
    async fn filtered_empty_falls_back_to_examples() {
        let server = TestServer::with_policy(ExposurePolicy::Filtered, [("HOME", "/home/app")]).await;

        let body: EnvResponse = reqwest::get(format!("{}/api/env", server.url()))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert_eq!(body.count, 3);
        assert_eq!(body.environment_variables["NODE_ENV"], "development");
        assert_eq!(
            body.environment_variables["EXAMPLE_VAR"],
            "This is an example environment variable"
        );
        assert_eq!(
            body.environment_variables["NEXT_PUBLIC_EXAMPLE"],
            "This is a public environment variable"
        );
    }

    #[tokio::test]
    async fn read_failure_is_structured_500() {
        let server = TestServer::start(ApiConfig::default(), Arc::new(FailingEnvironment)).await;

        let response = reqwest::get(format!("{}/api/env", server.url())).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json: serde_json::Value = response.json().await.unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "success": false,
                "environmentVariables": {},
                "count": 0,
                "error": "Failed to fetch environment variables"
            })
        );
    }

    #[tokio::test]
    async fn repeated_reads_are_independent() {
        let server = TestServer::with_policy(ExposurePolicy::Unfiltered, [("A", "1")]).await;
        let url = format!("{}/api/env", server.url());

        let first: EnvResponse = reqwest::get(&url).await.unwrap().json().await.unwrap();
        let second: EnvResponse = reqwest::get(&url).await.unwrap().json().await.unwrap();
        assert_eq!(first, second);

        let metrics: serde_json::Value = reqwest::get(format!("{}/metrics", server.url()))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(metrics["requests_total"], 2);
    }

    #[tokio::test]
    async fn cors_allows_cross_origin_reads() {
        let server = TestServer::with_policy(ExposurePolicy::Filtered, [("PORT", "3000")]).await;

        let response = reqwest::Client::new()
            .get(format!("{}/api/env", server.url()))
            .header(header::ORIGIN, "http://localhost:5173")
            .send()
            .await
            .unwrap();

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }

    #[tokio::test]
    async fn page_and_health() {
        let server = TestServer::with_policy(ExposurePolicy::Unfiltered, [("EMPTY_ONE", "")]).await;

        let page = reqwest::get(server.url()).await.unwrap();
        assert_eq!(page.status(), StatusCode::OK);
        let html = page.text().await.unwrap();
        assert!(html.contains("Environment Variables Tester"));
        assert!(html.contains("Environment Variables (1)"));
        assert!(html.contains("(empty)"));

        let health: serde_json::Value = reqwest::get(format!("{}/health", server.url()))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(health["status"], "healthy");
        assert_eq!(health["version"], env_api::VERSION);
    }
}
