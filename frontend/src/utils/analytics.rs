use std::rc::Rc;

use chrono::{DateTime, SecondsFormat, Utc};
use futures::future::LocalBoxFuture;
use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;
use web_sys::RequestMode;

use crate::config::Platform;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    PageVisit,
    AppDownload,
}

/// What the page can report. A download always carries its platform and a
/// visit never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyticsEvent {
    PageVisit,
    AppDownload(Platform),
}

impl AnalyticsEvent {
    pub fn kind(self) -> EventKind {
        match self {
            AnalyticsEvent::PageVisit => EventKind::PageVisit,
            AnalyticsEvent::AppDownload(_) => EventKind::AppDownload,
        }
    }

    pub fn platform(self) -> Option<Platform> {
        match self {
            AnalyticsEvent::PageVisit => None,
            AnalyticsEvent::AppDownload(platform) => Some(platform),
        }
    }
}

/// Wire body posted to the collector. `platform` is serialized as `null`
/// rather than skipped.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub timestamp: String,
    pub event_type: EventKind,
    pub platform: Option<Platform>,
}

impl EventRecord {
    pub fn new(event: AnalyticsEvent, at: DateTime<Utc>) -> Self {
        Self {
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
            event_type: event.kind(),
            platform: event.platform(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to serialize event: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to send event: {0}")]
    Transport(String),
}

/// Outbound channel for serialized events.
pub trait EventTransport {
    fn post(&self, url: &str, body: String) -> LocalBoxFuture<'static, Result<(), ReportError>>;
}

/// Browser fetch in `no-cors` mode. The response is opaque, so a resolved
/// request says nothing about delivery and is never inspected.
pub struct HttpTransport;

impl EventTransport for HttpTransport {
    fn post(&self, url: &str, body: String) -> LocalBoxFuture<'static, Result<(), ReportError>> {
        // no-cors only lets through safelisted content types
        let request = Request::post(url)
            .mode(RequestMode::NoCors)
            .header("Content-Type", "text/plain;charset=UTF-8")
            .body(body);

        Box::pin(async move {
            request
                .send()
                .await
                .map(|_| ())
                .map_err(|e| ReportError::Transport(e.to_string()))
        })
    }
}

pub type Spawner = Rc<dyn Fn(LocalBoxFuture<'static, ()>)>;

/// Fire-and-forget usage reporter.
///
/// `log_event` returns as soon as the request task is queued; whatever
/// happens to the request afterwards is logged and dropped.
#[derive(Clone)]
pub struct EventReporter {
    endpoint: Rc<str>,
    transport: Rc<dyn EventTransport>,
    spawner: Spawner,
}

impl EventReporter {
    pub fn new(endpoint: &str) -> Self {
        Self::with_transport(
            endpoint,
            Rc::new(HttpTransport),
            Rc::new(|task: LocalBoxFuture<'static, ()>| wasm_bindgen_futures::spawn_local(task)),
        )
    }

    pub fn with_transport(
        endpoint: &str,
        transport: Rc<dyn EventTransport>,
        spawner: Spawner,
    ) -> Self {
        Self {
            endpoint: Rc::from(endpoint),
            transport,
            spawner,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn log_event(&self, event: AnalyticsEvent) {
        let record = EventRecord::new(event, Utc::now());
        let transport = self.transport.clone();
        let endpoint = self.endpoint.clone();

        (self.spawner)(Box::pin(async move {
            if let Err(e) = send_record(&*transport, &endpoint, &record).await {
                log::warn!("Dropping {:?} event: {}", record.event_type, e);
            }
        }));
    }
}

impl PartialEq for EventReporter {
    fn eq(&self, other: &Self) -> bool {
        self.endpoint == other.endpoint
            && Rc::ptr_eq(&self.transport, &other.transport)
            && Rc::ptr_eq(&self.spawner, &other.spawner)
    }
}

async fn send_record(
    transport: &dyn EventTransport,
    endpoint: &str,
    record: &EventRecord,
) -> Result<(), ReportError> {
    let body = serde_json::to_string(record)?;
    transport.post(endpoint, body).await
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use futures::executor::LocalPool;
    use futures::task::LocalSpawnExt;
    use std::cell::RefCell;

    /// Records every post and answers with a fixed outcome.
    #[derive(Default)]
    pub struct RecordingTransport {
        pub sent: RefCell<Vec<(String, String)>>,
        pub fail: bool,
    }

    impl RecordingTransport {
        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        pub fn bodies(&self) -> Vec<serde_json::Value> {
            self.sent
                .borrow()
                .iter()
                .map(|(_, body)| serde_json::from_str(body).unwrap())
                .collect()
        }
    }

    impl EventTransport for RecordingTransport {
        fn post(&self, url: &str, body: String) -> LocalBoxFuture<'static, Result<(), ReportError>> {
            self.sent.borrow_mut().push((url.to_string(), body));
            let fail = self.fail;
            Box::pin(async move {
                if fail {
                    Err(ReportError::Transport("collector unreachable".to_string()))
                } else {
                    Ok(())
                }
            })
        }
    }

    pub fn reporter_on(pool: &LocalPool, transport: Rc<RecordingTransport>) -> EventReporter {
        let spawner = pool.spawner();
        EventReporter::with_transport(
            "http://collector.test/api/events",
            transport,
            Rc::new(move |task: LocalBoxFuture<'static, ()>| {
                spawner.spawn_local(task).unwrap();
            }),
        )
    }

    /// Reporter that runs its requests on the browser microtask queue.
    #[cfg(target_arch = "wasm32")]
    pub fn spawn_local_reporter(transport: Rc<RecordingTransport>) -> EventReporter {
        EventReporter::with_transport(
            "http://collector.test/api/events",
            transport,
            Rc::new(|task: LocalBoxFuture<'static, ()>| wasm_bindgen_futures::spawn_local(task)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use chrono::TimeZone;
    use futures::executor::LocalPool;
    use serde_json::json;
    use std::cell::Cell;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap()
    }

    #[test]
    fn page_visit_record_has_null_platform() {
        let record = EventRecord::new(AnalyticsEvent::PageVisit, at());
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({
                "timestamp": "2025-03-14T09:26:53.000Z",
                "eventType": "page_visit",
                "platform": null,
            })
        );
    }

    #[test]
    fn download_record_carries_platform() {
        let record = EventRecord::new(AnalyticsEvent::AppDownload(Platform::Android), at());
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["eventType"], "app_download");
        assert_eq!(value["platform"], "android");
        assert_eq!(value.as_object().unwrap().len(), 3);

        let ios = EventRecord::new(AnalyticsEvent::AppDownload(Platform::Ios), at());
        assert_eq!(serde_json::to_value(&ios).unwrap()["platform"], "ios");
    }

    #[test]
    fn log_event_returns_before_the_request_runs() {
        let pool = LocalPool::new();
        let transport = Rc::new(RecordingTransport::default());
        let reporter = reporter_on(&pool, transport.clone());

        reporter.log_event(AnalyticsEvent::PageVisit);
        assert!(transport.sent.borrow().is_empty());
    }

    #[test]
    fn each_call_posts_exactly_once_to_the_endpoint() {
        let mut pool = LocalPool::new();
        let transport = Rc::new(RecordingTransport::default());
        let reporter = reporter_on(&pool, transport.clone());

        reporter.log_event(AnalyticsEvent::PageVisit);
        reporter.log_event(AnalyticsEvent::AppDownload(Platform::Ios));
        pool.run();

        let sent = transport.sent.borrow();
        assert_eq!(sent.len(), 2);
        assert!(sent.iter().all(|(url, _)| url == reporter.endpoint()));
        drop(sent);

        let bodies = transport.bodies();
        assert_eq!(bodies[0]["eventType"], "page_visit");
        assert!(bodies[0]["platform"].is_null());
        assert_eq!(bodies[1]["platform"], "ios");
    }

    #[test]
    fn failed_transmission_is_absorbed_and_not_retried() {
        let mut pool = LocalPool::new();
        let transport = Rc::new(RecordingTransport::failing());
        let reporter = reporter_on(&pool, transport.clone());

        let navigated = Cell::new(false);
        let on_click = || {
            reporter.log_event(AnalyticsEvent::AppDownload(Platform::Android));
            navigated.set(true);
        };
        on_click();
        assert!(navigated.get());
        assert!(transport.sent.borrow().is_empty());

        pool.run();
        assert_eq!(transport.sent.borrow().len(), 1);
    }

    #[test]
    fn timestamp_is_taken_at_dispatch() {
        let mut pool = LocalPool::new();
        let transport = Rc::new(RecordingTransport::default());
        let reporter = reporter_on(&pool, transport.clone());

        let before = Utc::now();
        reporter.log_event(AnalyticsEvent::PageVisit);
        pool.run();

        let body = &transport.bodies()[0];
        let stamp = body["timestamp"].as_str().unwrap();
        assert!(stamp.ends_with('Z'));
        let parsed = DateTime::parse_from_rfc3339(stamp).unwrap();
        assert!(parsed.with_timezone(&Utc) >= before - chrono::Duration::milliseconds(1));
    }

    #[test]
    fn reporters_compare_by_shared_parts() {
        let pool = LocalPool::new();
        let transport = Rc::new(RecordingTransport::default());
        let a = reporter_on(&pool, transport.clone());
        let b = a.clone();
        let c = reporter_on(&pool, transport);
        assert!(a == b);
        assert!(a != c);
    }
}
