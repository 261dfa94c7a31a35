//! Identification endpoint (`POST /api/identify`).
//!
//! Accepts one multipart `image` part, forwards it to the vision model with
//! the fixed instruction prompt, and returns the parsed three-field result.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use leafscan_core::IdentificationResult;
use leafscan_vision::{parse_labeled, IDENTIFY_PROMPT};
use logging::redact_sensitive_data;
use serde::Serialize;
use tracing::{error, info};

use crate::server::GatewayState;

/// Error body returned to the client. Messages are deliberately generic;
/// causes go to the server log only.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub enum IdentifyError {
    NoImage,
    UnsupportedType,
    Upstream,
}

impl IntoResponse for IdentifyError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            IdentifyError::NoImage => (StatusCode::BAD_REQUEST, "No image provided"),
            IdentifyError::UnsupportedType => (StatusCode::BAD_REQUEST, "Unsupported image type"),
            IdentifyError::Upstream => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to identify plant")
            }
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Handler for `POST /api/identify`.
pub async fn identify(
    State(state): State<GatewayState>,
    mut multipart: Multipart,
) -> Result<Json<IdentificationResult>, IdentifyError> {
    let image = read_image_part(&mut multipart).await?;

    // The client-declared Content-Type is not trusted; the bytes decide what
    // gets forwarded to the model.
    let mime = media::sniff_image_mime(&image).ok_or(IdentifyError::UnsupportedType)?;

    let reply = state
        .model
        .describe_image(IDENTIFY_PROMPT, &image, mime)
        .await
        .map_err(|err| {
            error!(
                cause = %redact_sensitive_data(&format!("{err:#}")),
                "identification failed"
            );
            IdentifyError::Upstream
        })?;

    let result = parse_labeled(&reply);
    info!(name = %result.name, "plant identified");
    Ok(Json(result))
}

/// Pull the bytes of the `image` part out of the multipart body.
async fn read_image_part(multipart: &mut Multipart) -> Result<Vec<u8>, IdentifyError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| IdentifyError::NoImage)?
    {
        if field.name() == Some("image") {
            let bytes = field.bytes().await.map_err(|_| IdentifyError::NoImage)?;
            if bytes.is_empty() {
                return Err(IdentifyError::NoImage);
            }
            return Ok(bytes.to_vec());
        }
    }
    Err(IdentifyError::NoImage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::{build_router, GatewayState};
    use anyhow::{bail, Result};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use leafscan_core::VisionModel;
    use std::sync::Arc;
    use tower::ServiceExt;

    /// Scripted stand-in for the hosted model.
    enum ScriptedVision {
        Reply(&'static str),
        Fail,
    }

    #[async_trait]
    impl VisionModel for ScriptedVision {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn describe_image(&self, _prompt: &str, _image: &[u8], _mime: &str) -> Result<String> {
            match self {
                ScriptedVision::Reply(text) => Ok(text.to_string()),
                ScriptedVision::Fail => bail!("simulated upstream failure"),
            }
        }
    }

    fn router_with(model: ScriptedVision) -> axum::Router {
        build_router(GatewayState {
            model: Arc::new(model),
        })
    }

    const BOUNDARY: &str = "leafscan-test-boundary";

    fn multipart_request(field_name: &str, content_type: &str, data: &[u8]) -> Request<Body> {
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{field_name}\"; filename=\"plant.img\"\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
        body.extend_from_slice(data);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/api/identify")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn jpeg_payload() -> Vec<u8> {
        let mut data = vec![0xFF, 0xD8, 0xFF, 0xE0];
        data.extend_from_slice(&[0; 32]);
        data
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn missing_image_part_is_400_with_exact_body() {
        let app = router_with(ScriptedVision::Reply("unused"));
        let request = multipart_request("attachment", "image/jpeg", &jpeg_payload());

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "No image provided" })
        );
    }

    #[tokio::test]
    async fn failing_model_is_500_with_exact_body() {
        let app = router_with(ScriptedVision::Fail);
        let request = multipart_request("image", "image/jpeg", &jpeg_payload());

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "Failed to identify plant" })
        );
    }

    #[tokio::test]
    async fn labeled_reply_round_trips_verbatim() {
        let app = router_with(ScriptedVision::Reply(
            "Name: Ficus\n\nDescription: A leafy plant.\n\nCare Instructions: Water weekly.",
        ));
        let request = multipart_request("image", "image/jpeg", &jpeg_payload());

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({
                "name": "Ficus",
                "description": "A leafy plant.",
                "careInstructions": "Water weekly."
            })
        );
    }

    #[tokio::test]
    async fn reply_with_missing_markers_degrades_to_fallbacks() {
        let app = router_with(ScriptedVision::Reply("This looks like some kind of fern."));
        let request = multipart_request("image", "image/jpeg", &jpeg_payload());

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["name"], "Unknown Plant");
        assert_eq!(json["description"], "No description available.");
        assert_eq!(json["careInstructions"], "No care instructions available.");
    }

    #[tokio::test]
    async fn non_image_payload_is_rejected() {
        let app = router_with(ScriptedVision::Reply("unused"));
        let request = multipart_request("image", "image/jpeg", b"<!DOCTYPE html>");

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "Unsupported image type" })
        );
    }

    #[tokio::test]
    async fn empty_image_part_is_400() {
        let app = router_with(ScriptedVision::Reply("unused"));
        let request = multipart_request("image", "image/jpeg", b"");

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "No image provided" })
        );
    }
}
