use base64::{engine::general_purpose, Engine as _};
use poem_openapi::{types::multipart::Upload, Multipart, Object};
use serde::{Deserialize, Serialize};

use crate::types::db::image;

/// Multipart form for image upload: the file plus the owning hotel
#[derive(Multipart, Debug)]
pub struct UploadImageForm {
    /// Image file; the filename is stored alongside the data
    pub image: Upload,

    /// Hotel this image belongs to
    pub hotel_id: i32,
}

/// Response after a successful upload
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct UploadImageResponse {
    /// Success message
    pub message: String,
}

/// Image record as returned to clients; the blob travels base64-encoded
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct ImageResponse {
    pub id: i32,
    pub name: String,
    /// Base64-encoded file contents
    pub data: String,
    pub hotel_id: i32,
}

impl From<image::Model> for ImageResponse {
    fn from(model: image::Model) -> Self {
        ImageResponse {
            id: model.id,
            name: model.name,
            data: general_purpose::STANDARD.encode(&model.data),
            hotel_id: model.hotel_id,
        }
    }
}
