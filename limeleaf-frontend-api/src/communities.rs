use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use web_sys::{File, FormData};

use limeleaf_boundary::{Community, FollowedCommunities};

use crate::{into_json, Api, Error, Result};

/// Icon or background image of a new community.
#[derive(Debug, Clone, PartialEq)]
pub enum Image {
    /// One of the default images served by the backend.
    Url(String),
    Upload(File),
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewCommunity {
    pub name: String,
    pub description: String,
    pub icon: Image,
    pub background: Image,
    pub tags: Vec<String>,
}

impl NewCommunity {
    fn form_data(&self) -> Result<FormData> {
        let Self {
            name,
            description,
            icon,
            background,
            tags,
        } = self;
        let form = FormData::new().map_err(js_error)?;
        form.append_with_str("communityName", name)
            .map_err(js_error)?;
        form.append_with_str("description", description)
            .map_err(js_error)?;
        append_image(&form, "communityIcon", icon)?;
        append_image(&form, "communityBG", background)?;
        for tag in tags {
            form.append_with_str("tags[]", tag).map_err(js_error)?;
        }
        Ok(form)
    }
}

fn append_image(form: &FormData, name: &str, image: &Image) -> Result<()> {
    match image {
        Image::Url(url) => form.append_with_str(name, url),
        Image::Upload(file) => form.append_with_blob(name, file),
    }
    .map_err(js_error)
}

fn js_error(err: wasm_bindgen::JsValue) -> Error {
    Error::Fetch(format!("{err:?}"))
}

impl Api {
    pub async fn popular_communities(&self, page: usize, limit: usize) -> Result<Vec<Community>> {
        let request = self.get_request(&format!("/community/popular?page={page}&limit={limit}"));
        self.send(request).await
    }

    /// Communities followed by the current user.
    pub async fn followed_communities(&self) -> Result<FollowedCommunities> {
        self.send(self.get_request("/community/follows")).await
    }

    pub async fn toggle_follow(&self, community_name: &str) -> Result<()> {
        let encoded_name = utf8_percent_encode(community_name, NON_ALPHANUMERIC);
        let request = self.post_request(&format!("/community/follow/{encoded_name}"));
        self.send_without_content(request).await
    }

    /// Uploads a new community as multipart form.
    ///
    /// Fails with `401` without contacting the backend
    /// if no access token is available.
    pub async fn create_community(&self, community: &NewCommunity) -> Result<Community> {
        if self.token().is_undefined() {
            return Err(Error::unauthorized());
        }
        let form = community.form_data()?;
        let request = self.add_auth_headers(self.post_request("/community/create"));
        let response = request.body(form)?.send().await?;
        into_json(response).await
    }
}
