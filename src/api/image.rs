use poem_openapi::{param::Path, payload::Json, OpenApi};
use std::sync::Arc;

use crate::api::{authenticate, BearerAuth};
use crate::errors::ApiError;
use crate::services::{policy, TokenService};
use crate::stores::ImageStore;
use crate::types::dto::image::{ImageResponse, UploadImageForm, UploadImageResponse};

/// Hotel image API endpoints
pub struct ImageApi {
    images: Arc<ImageStore>,
    tokens: Arc<TokenService>,
}

impl ImageApi {
    pub fn new(images: Arc<ImageStore>, tokens: Arc<TokenService>) -> Self {
        Self { images, tokens }
    }
}

#[OpenApi]
impl ImageApi {
    /// List the images of a hotel. Public; 404 when the hotel is absent.
    #[oai(path = "/image/:hotel_id", method = "get")]
    async fn list_images(
        &self,
        hotel_id: Path<i32>,
    ) -> Result<Json<Vec<ImageResponse>>, ApiError> {
        let images = self.images.list_for_hotel(hotel_id.0).await?;
        Ok(Json(images.into_iter().map(ImageResponse::from).collect()))
    }

    /// Upload an image for a hotel (admin only, multipart form)
    #[oai(path = "/image", method = "post")]
    async fn upload_image(
        &self,
        auth: BearerAuth,
        form: UploadImageForm,
    ) -> Result<Json<UploadImageResponse>, ApiError> {
        let caller = authenticate(&self.tokens, &auth)?;
        if !policy::can_manage_catalog(&caller) {
            return Err(ApiError::forbidden());
        }

        let name = form
            .image
            .file_name()
            .map(str::to_string)
            .unwrap_or_default();
        let hotel_id = form.hotel_id;
        let data = form
            .image
            .into_vec()
            .await
            .map_err(|e| ApiError::validation(format!("Failed to read upload: {}", e)))?;

        self.images.create(&name, data, hotel_id).await?;

        Ok(Json(UploadImageResponse {
            message: "Image uploaded successfully".to_string(),
        }))
    }

    /// Delete one image of a hotel (admin only)
    #[oai(path = "/image/:hotel_id/:image_id", method = "delete")]
    async fn delete_image(
        &self,
        auth: BearerAuth,
        hotel_id: Path<i32>,
        image_id: Path<i32>,
    ) -> Result<Json<UploadImageResponse>, ApiError> {
        let caller = authenticate(&self.tokens, &auth)?;
        if !policy::can_manage_catalog(&caller) {
            return Err(ApiError::forbidden());
        }

        self.images.delete(hotel_id.0, image_id.0).await?;

        Ok(Json(UploadImageResponse {
            message: "Image deleted successfully".to_string(),
        }))
    }
}
