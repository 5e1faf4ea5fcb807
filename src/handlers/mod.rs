pub mod redirect;
pub mod shorten;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::{store::UrlStore, AppState};
    use axum::{body::Body, http::Request, response::Response, Router};
    use std::sync::Arc;
    use tower::ServiceExt;

    /// Build the full router over `store` so tests can inspect it afterwards.
    pub fn app(store: &UrlStore) -> Router {
        crate::app(Arc::new(AppState {
            store: store.clone(),
        }))
    }

    pub async fn send(app: Router, request: Request<Body>) -> Response {
        app.oneshot(request).await.unwrap()
    }

    pub async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }
}
