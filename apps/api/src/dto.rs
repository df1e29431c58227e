use std::collections::BTreeMap;

use bizreviews_application::CreatedResource;
use bizreviews_domain::{Photo, ResourceLinks, Review};
use serde::Serialize;

/// Health response payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Links keyed by resource kind (`photo` or `review`) plus `business`.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct LinksResponse(BTreeMap<&'static str, String>);

impl From<ResourceLinks> for LinksResponse {
    fn from(value: ResourceLinks) -> Self {
        Self(BTreeMap::from([
            (value.kind().as_str(), value.resource()),
            ("business", value.business()),
        ]))
    }
}

/// Response to a successful create.
#[derive(Debug, Serialize)]
pub struct CreatedResourceResponse {
    pub id: i64,
    pub links: LinksResponse,
}

impl From<CreatedResource> for CreatedResourceResponse {
    fn from(value: CreatedResource) -> Self {
        Self {
            id: value.id.as_i64(),
            links: LinksResponse::from(value.links),
        }
    }
}

/// Response to a successful update.
#[derive(Debug, Serialize)]
pub struct UpdatedResourceResponse {
    pub links: LinksResponse,
}

impl From<ResourceLinks> for UpdatedResourceResponse {
    fn from(value: ResourceLinks) -> Self {
        Self {
            links: LinksResponse::from(value),
        }
    }
}

/// API representation of a photo.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PhotoResponse {
    pub id: i64,
    pub userid: i64,
    pub businessid: i64,
    pub caption: Option<String>,
}

impl From<Photo> for PhotoResponse {
    fn from(value: Photo) -> Self {
        Self {
            id: value.id.as_i64(),
            userid: value.userid,
            businessid: value.businessid,
            caption: value.caption,
        }
    }
}

/// API representation of a review.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ReviewResponse {
    pub id: i64,
    pub userid: i64,
    pub businessid: i64,
    pub dollars: i64,
    pub stars: i64,
    pub review: Option<String>,
}

impl From<Review> for ReviewResponse {
    fn from(value: Review) -> Self {
        Self {
            id: value.id.as_i64(),
            userid: value.userid,
            businessid: value.businessid,
            dollars: value.dollars,
            stars: value.stars,
            review: value.review,
        }
    }
}
