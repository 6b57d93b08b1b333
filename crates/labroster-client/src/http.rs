//! reqwest implementation of [`LabApi`].

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};
use std::sync::Arc;
use tracing::debug;
use url::Url;

use labroster_types::{
    CourseKey, Filter, LabDetails, PageEnvelope, RawLabInstance, RosterEntry,
};

use crate::api::{DashboardLaunch, LabApi};
use crate::config::{ClientConfig, Endpoints};
use crate::error::{Error, Result};

#[derive(Debug, Deserialize)]
struct CcxStatus {
    #[serde(default)]
    is_ccx_course: bool,
}

/// HTTP client for the LMS, lab provider and course operations backends.
#[derive(Debug, Clone)]
pub struct HttpLabApi {
    endpoints: Arc<Endpoints>,
    auth_token: Option<String>,
    http_client: reqwest::Client,
}

impl HttpLabApi {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            endpoints: Arc::new(config.endpoints),
            auth_token: config.auth_token,
            http_client,
        })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self.http_client.request(method, url);
        match &self.auth_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn post_json<T: DeserializeOwned>(&self, url: Url, body: &Value) -> Result<T> {
        debug!(%url, "POST");
        let request = self.request(Method::POST, url.clone()).json(body);
        self.send(url, request).await
    }

    async fn send<T: DeserializeOwned>(&self, url: Url, request: RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            debug!(%url, status = status.as_u16(), "request failed");
            return Err(Error::status(url.as_str(), status.as_u16(), error_body(&bytes)));
        }

        // An empty 2xx body reads as JSON null, which `Option`/`Value`
        // targets accept and envelopes reject.
        let value: Value = if bytes.iter().all(u8::is_ascii_whitespace) {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).map_err(|e| Error::InvalidResponse {
                url: url.to_string(),
                reason: e.to_string(),
            })?
        };

        serde_json::from_value(value).map_err(|e| Error::InvalidResponse {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl LabApi for HttpLabApi {
    async fn roster_page(
        &self,
        course: &CourseKey,
        page: u32,
        filter: &Filter,
    ) -> Result<PageEnvelope<RosterEntry>> {
        match course {
            CourseKey::Course(course_id) => {
                let mut body = Map::new();
                body.insert("course_id".to_string(), Value::String(course_id.clone()));
                filter.merge_into(&mut body);
                self.post_json(self.endpoints.enrollments_url(page)?, &Value::Object(body))
                    .await
            }
            CourseKey::Class(class_id) => {
                let url = self.endpoints.students_url()?;
                let mut params = vec![
                    ("class_id", class_id.clone()),
                    ("page", page.to_string()),
                ];
                params.extend(filter.to_params());

                debug!(%url, "GET");
                let request = self.request(Method::GET, url.clone()).query(&params);
                self.send(url, request).await
            }
        }
    }

    async fn lab_page(&self, user_id: &str, page: u32) -> Result<PageEnvelope<RawLabInstance>> {
        self.post_json(
            self.endpoints.lab_search_url(page)?,
            &json!({ "userid": user_id }),
        )
        .await
    }

    async fn lab_details(&self, lab_instance_id: &str) -> Result<Option<LabDetails>> {
        // The provider keys instances numerically; keep opaque ids as strings.
        let id = lab_instance_id
            .parse::<i64>()
            .map(Value::from)
            .unwrap_or_else(|_| Value::String(lab_instance_id.to_string()));

        let raw: Value = self
            .post_json(self.endpoints.lab_details_url()?, &json!({ "labinstanceid": id }))
            .await?;
        Ok(LabDetails::from_response(raw))
    }

    async fn launch_dashboard(&self, course: &CourseKey) -> Result<DashboardLaunch> {
        let launch: Option<DashboardLaunch> = self
            .post_json(
                self.endpoints.dashboard_launch_url()?,
                &json!({ "class_id": course.as_str() }),
            )
            .await?;
        Ok(launch.unwrap_or_default())
    }

    async fn is_ccx_course(&self, course: &CourseKey) -> Result<bool> {
        let status: Option<CcxStatus> = self
            .post_json(
                self.endpoints.ccx_check_url()?,
                &json!({ "class_id": course.as_str() }),
            )
            .await?;
        Ok(status.is_some_and(|s| s.is_ccx_course))
    }
}

fn error_body(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use labroster_types::FilterField;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn api(server: &MockServer) -> HttpLabApi {
        HttpLabApi::new(ClientConfig::new(Endpoints::single_host(server.uri()))).unwrap()
    }

    #[tokio::test]
    async fn test_course_roster_posts_filter_in_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/pearson-core/api/v1/course-enrollments"))
            .and(query_param("page", "2"))
            .and(body_json(json!({
                "course_id": "course-v1:Org+CS101+2024",
                "learner_email": "ada@example.com"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{
                    "learner_name": "ada",
                    "learner_email": "ada@example.com",
                    "learner_anonymous_id": "anon-1"
                }],
                "count": 1,
                "next": null,
                "prev": "page=1"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let course = CourseKey::parse("course-v1:Org+CS101+2024").unwrap();
        let page = api(&server)
            .roster_page(&course, 2, &Filter::by(FilterField::LearnerEmail, "ada@example.com"))
            .await
            .unwrap();

        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].anonymous_id, "anon-1");
        assert!(page.has_prev());
    }

    #[tokio::test]
    async fn test_class_roster_uses_students_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/students/"))
            .and(query_param("class_id", "ccx-v1:Org+CS101+2024+ccx@3"))
            .and(query_param("page", "1"))
            .and(query_param("learner_name", "ada"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [], "count": 0, "next": null, "prev": null
            })))
            .expect(1)
            .mount(&server)
            .await;

        let course = CourseKey::parse("ccx-v1:Org+CS101+2024+ccx@3").unwrap();
        let page = api(&server)
            .roster_page(&course, 1, &Filter::by(FilterField::LearnerName, "ada"))
            .await
            .unwrap();
        assert!(page.results.is_empty());
    }

    #[tokio::test]
    async fn test_error_status_keeps_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({"email": ["Enter a valid email."]})),
            )
            .mount(&server)
            .await;

        let course = CourseKey::parse("course-v1:Org+CS101+2024").unwrap();
        let err = api(&server)
            .roster_page(&course, 1, &Filter::none())
            .await
            .unwrap_err();

        match err {
            Error::Status { status, body, .. } => {
                assert_eq!(status, 400);
                assert_eq!(body, json!({"email": ["Enter a valid email."]}));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_error_status_keeps_text_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
            .mount(&server)
            .await;

        let err = api(&server).lab_page("anon-1", 1).await.unwrap_err();
        assert_eq!(err.response_body(), Some(&json!("upstream exploded")));
    }

    #[tokio::test]
    async fn test_lab_details_sends_numeric_id_and_handles_empty_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/events/api/v1/details/"))
            .and(body_json(json!({"labinstanceid": 48213})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"State": "Off"})))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/events/api/v1/details/"))
            .and(body_json(json!({"labinstanceid": "missing"})))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = api(&server);
        let details = client.lab_details("48213").await.unwrap().unwrap();
        assert_eq!(details.card().state, "Off");
        assert!(client.lab_details("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_lab_page_posts_user_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/events/api/v1/labinstancesearch/"))
            .and(query_param("page", "1"))
            .and(body_json(json!({"userid": "anon-1"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{"lab_profile_name": "Routing", "lab_instance_id": 7}],
                "count": 1,
                "next": null,
                "prev": null
            })))
            .expect(1)
            .mount(&server)
            .await;

        let page = api(&server).lab_page("anon-1", 1).await.unwrap();
        assert_eq!(page.results[0].lab_instance_id, "7");
    }

    #[tokio::test]
    async fn test_bearer_token_and_ccx_check() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/skillable_plugin/course-tab/api/v1/is-ccx-course/"))
            .and(header("authorization", "Bearer secret"))
            .and(body_json(json!({"class_id": "ccx-v1:Org+C+1+ccx@2"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"is_ccx_course": true})))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpLabApi::new(
            ClientConfig::new(Endpoints::single_host(server.uri()))
                .with_auth_token(Some("secret".to_string())),
        )
        .unwrap();
        let course = CourseKey::parse("ccx-v1:Org+C+1+ccx@2").unwrap();
        assert!(client.is_ccx_course(&course).await.unwrap());
    }
}
