//! Tests for the search service

use super::*;
use crate::config::{AdditionalCriteria, ServiceSettings, Settings};
use crate::error::Error;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

const BASE: &str = "https://jobs.example.com/rest-services/tok";

/// Records requested URLs and replays canned bodies; `None` fails with a 500
#[derive(Default)]
struct RecordingTransport {
    responses: Mutex<VecDeque<Option<JsonValue>>>,
    urls: Mutex<Vec<String>>,
}

impl RecordingTransport {
    fn replying(responses: Vec<Option<JsonValue>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            urls: Mutex::new(Vec::new()),
        })
    }

    fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn get_json(&self, url: &str) -> Result<JsonValue> {
        self.urls.lock().unwrap().push(url.to_string());
        match self.responses.lock().unwrap().pop_front() {
            Some(Some(body)) => Ok(body),
            Some(None) => Err(Error::http_status(500, "boom")),
            None => panic!("unexpected request: {url}"),
        }
    }
}

fn settings(criteria: Option<AdditionalCriteria>) -> Settings {
    let service = ServiceSettings {
        corp_token: "tok".to_string(),
        fields: "id,title".to_string(),
        base_url: Some(BASE.to_string()),
        ..ServiceSettings::default()
    };
    Settings {
        additional_job_criteria: criteria,
        ..Settings::new(service)
    }
}

fn service(
    transport: &Arc<RecordingTransport>,
    criteria: Option<AdditionalCriteria>,
) -> SearchService<Arc<RecordingTransport>> {
    SearchService::new(Arc::clone(transport), settings(criteria)).unwrap()
}

fn ids_page(total: u64, first: u64, count: u64) -> Option<JsonValue> {
    let data: Vec<JsonValue> = (first..first + count).map(|id| json!({"id": id})).collect();
    Some(json!({"total": total, "count": count, "data": data}))
}

#[tokio::test]
async fn test_get_jobs_url() {
    let transport = RecordingTransport::replying(vec![Some(json!({"total": 0, "data": []}))]);
    let criteria =
        AdditionalCriteria::new("publishedCategory.id", vec!["3".into()]).with_sort("-dateAdded");
    let svc = service(&transport, Some(criteria));

    let filter = Filter::new().with(
        "type",
        vec!["employmentType:Contract", "employmentType:Permanent"],
    );
    svc.get_jobs(&filter, QueryParams::new().with("start", 60), 30)
        .await
        .unwrap();

    assert_eq!(
        transport.urls(),
        vec![format!(
            "{BASE}/search/JobOrder?start=60&query=(isOpen:1) AND (isDeleted:0) \
             AND (publishedCategory.id:\"3\") \
             AND (employmentType:Contract OR employmentType:Permanent)\
             &fields=id,title&count=30&sort=-dateAdded&showTotalMatched=true"
        )]
    );
}

#[tokio::test]
async fn test_open_job_url() {
    let transport = RecordingTransport::replying(vec![Some(json!({"data": [{"id": 42}]}))]);
    let svc = service(&transport, None);

    let body = svc.open_job(42).await.unwrap();

    assert_eq!(body["data"][0]["id"], 42);
    assert_eq!(
        transport.urls(),
        vec![format!("{BASE}/query/JobBoardPost?where=(id=42)&fields=id,title")]
    );
}

#[tokio::test]
async fn test_get_current_job_ids_pages_through_total() {
    let transport = RecordingTransport::replying(vec![
        ids_page(120, 0, 50),
        ids_page(120, 50, 50),
        ids_page(120, 100, 20),
    ]);
    let svc = service(&transport, None);

    let filter = Filter::new()
        .with("keyword", "title:nurse")
        .with("state", "address.state:MA");
    let ignore: HashSet<String> = ["state".to_string()].into();

    let ids = svc.get_current_job_ids(&filter, &ignore).await.unwrap();

    assert_eq!(ids.len(), 120);
    let query = "query=(isOpen:1) AND (isDeleted:0) AND (title:nurse)&count=500&fields=id&sort=id";
    assert_eq!(
        transport.urls(),
        vec![
            format!("{BASE}/search/JobOrder?start=0&{query}"),
            format!("{BASE}/search/JobOrder?start=50&{query}"),
            format!("{BASE}/search/JobOrder?start=100&{query}"),
        ]
    );
}

#[tokio::test]
async fn test_get_current_job_ids_fails_as_a_unit() {
    let transport = RecordingTransport::replying(vec![ids_page(120, 0, 50), None]);
    let svc = service(&transport, None);

    let result = svc.get_current_job_ids(&Filter::new(), &HashSet::new()).await;

    assert!(matches!(result, Err(Error::HttpStatus { status: 500, .. })));
    assert_eq!(transport.urls().len(), 2);
}

#[tokio::test]
async fn test_filter_options_empty_ids_short_circuit() {
    let transport = RecordingTransport::replying(vec![]);
    let svc = service(&transport, None);

    let response = svc
        .get_available_filter_options(&[], "address(state)")
        .await
        .unwrap();

    assert_eq!(response, QueryResponse::empty());
    assert!(transport.urls().is_empty());
}

#[tokio::test]
async fn test_filter_options_grouped_query() {
    let transport = RecordingTransport::replying(vec![Some(json!({
        "count": 2,
        "start": 0,
        "data": [
            {"address": {"state": "MA"}, "idCount": 3},
            {"address": {"state": "NH"}, "idCount": 1}
        ]
    }))]);
    let svc = service(&transport, None);

    let response = svc
        .get_available_filter_options(&[5, 6, 7], "address(state)")
        .await
        .unwrap();

    assert_eq!(response.count, 2);
    assert_eq!(response.data.len(), 2);
    assert_eq!(
        transport.urls(),
        vec![format!(
            "{BASE}/query/JobBoardPost?where=id IN (5,6,7)&count=500\
             &fields=address(state),count(id)&groupBy=address(state)&orderBy=address.state"
        )]
    );
}

#[tokio::test]
async fn test_filter_options_unknown_field_orders_by_count() {
    let transport = RecordingTransport::replying(vec![Some(json!({"count": 0, "data": []}))]);
    let svc = service(&transport, None);

    svc.get_available_filter_options(&[1], "employmentType")
        .await
        .unwrap();

    assert!(transport.urls()[0].ends_with("&orderBy=-count.id"));
}

#[test]
fn test_service_rejects_bad_base_url() {
    let mut bad = settings(None);
    bad.service.base_url = Some("::not a url".to_string());
    let result = SearchService::new(RecordingTransport::replying(vec![]), bad);
    assert!(result.is_err());
}
