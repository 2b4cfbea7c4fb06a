use axum::http::StatusCode;
use axum::response::Response;
use axum::{body::Body, http::Request};
use bytes::Bytes;
use tower::ServiceExt;

pub trait EmptyBody {
    fn empty_body(self) -> Request<Body>;
}

impl EmptyBody for http::request::Builder {
    fn empty_body(self) -> Request<Body> {
        self.body(Body::empty()).unwrap()
    }
}

pub async fn raw_request(router: axum::Router, request: Request<Body>) -> Response {
    router.oneshot(request).await.unwrap()
}

pub async fn request(router: axum::Router, request: Request<Body>) -> (StatusCode, Bytes) {
    let response = raw_request(router, request).await;
    let status = response.status();
    match axum::body::to_bytes(response.into_body(), usize::MAX).await {
        Ok(bytes) => (status, bytes),
        Err(_) => panic!("error while fetching body"),
    }
}
