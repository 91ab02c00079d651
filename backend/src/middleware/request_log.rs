//! Request-logging middleware.
//!
//! Emits one structured `tracing` line per handled request with method,
//! path, response status, and latency. The analyze path makes a blocking
//! outbound model call, so the latency field is the first place slow
//! requests show up.

use std::future::{Ready, ready};
use std::time::Instant;

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use futures_util::future::LocalBoxFuture;
use tracing::info;

/// Middleware factory logging every handled request.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use backend::RequestLog;
///
/// let app = App::new().wrap(RequestLog);
/// ```
#[derive(Clone)]
pub struct RequestLog;

impl<S, B> Transform<S, ServiceRequest> for RequestLog
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestLogMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestLogMiddleware { service }))
    }
}

/// Service wrapper produced by [`RequestLog`].
pub struct RequestLogMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestLogMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, request: ServiceRequest) -> Self::Future {
        let method = request.method().clone();
        let path = request.path().to_owned();
        let started = Instant::now();
        let fut = self.service.call(request);

        Box::pin(async move {
            let response = fut.await?;
            info!(
                %method,
                path,
                status = response.status().as_u16(),
                elapsed = ?started.elapsed(),
                "request handled"
            );
            Ok(response)
        })
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test as actix_test, web};

    use super::RequestLog;

    #[actix_web::test]
    async fn passes_responses_through_unchanged() {
        let app = actix_test::init_service(
            App::new()
                .wrap(RequestLog)
                .route("/ping", web::get().to(HttpResponse::Ok)),
        )
        .await;

        let request = actix_test::TestRequest::get().uri("/ping").to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
