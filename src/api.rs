//! REST Bindings
//!
//! Frontend bindings to the property backend over fetch. Every failure
//! mode (non-2xx status, rejected promise, undecodable body) surfaces as
//! one human-readable message; details go to the console.

use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::models::{PageResponse, Property, PropertyPayload};

/// Base path of the REST collaborator
pub const API_BASE: &str = "/api/properties";

const ERR_LOAD: &str = "Error al cargar propiedades";
const ERR_CREATE: &str = "Error al crear";
const ERR_UPDATE: &str = "Error al actualizar";
const ERR_DELETE: &str = "Error al eliminar";

async fn send(method: &str, url: &str, body: Option<String>) -> Result<Response, JsValue> {
    let init = RequestInit::new();
    init.set_method(method);
    if let Some(body) = body {
        let headers = Headers::new()?;
        headers.set("Content-Type", "application/json")?;
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(&body));
    }
    let request = Request::new_with_str_and_init(url, &init)?;
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let response = JsFuture::from(window.fetch_with_request(&request)).await?;
    response.dyn_into::<Response>()
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, JsValue> {
    let value = JsFuture::from(response.json()?).await?;
    serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn report(context: &str, err: JsValue) -> String {
    web_sys::console::error_2(&JsValue::from_str(context), &err);
    context.to_string()
}

/// GET the current page for a query string (see [`crate::query::build_query`])
pub async fn fetch_page(query: &str) -> Result<PageResponse, String> {
    let url = format!("{}?{}", API_BASE, query);
    let response = send("GET", &url, None).await.map_err(|e| report(ERR_LOAD, e))?;
    if !response.ok() {
        return Err(ERR_LOAD.to_string());
    }
    decode(response).await.map_err(|e| report(ERR_LOAD, e))
}

/// POST a new property; the backend assigns the id
pub async fn create_property(payload: &PropertyPayload) -> Result<Property, String> {
    let body = serde_json::to_string(payload).map_err(|e| e.to_string())?;
    let response = send("POST", API_BASE, Some(body))
        .await
        .map_err(|e| report(ERR_CREATE, e))?;
    if !response.ok() {
        return Err(ERR_CREATE.to_string());
    }
    decode(response).await.map_err(|e| report(ERR_CREATE, e))
}

/// PUT an updated property by id
pub async fn update_property(id: u64, payload: &PropertyPayload) -> Result<Property, String> {
    let body = serde_json::to_string(payload).map_err(|e| e.to_string())?;
    let url = format!("{}/{}", API_BASE, id);
    let response = send("PUT", &url, Some(body))
        .await
        .map_err(|e| report(ERR_UPDATE, e))?;
    if !response.ok() {
        return Err(ERR_UPDATE.to_string());
    }
    decode(response).await.map_err(|e| report(ERR_UPDATE, e))
}

/// DELETE a property by id. 2xx and 204 No Content both count as success.
pub async fn delete_property(id: u64) -> Result<(), String> {
    let url = format!("{}/{}", API_BASE, id);
    let response = send("DELETE", &url, None)
        .await
        .map_err(|e| report(ERR_DELETE, e))?;
    if response.ok() || response.status() == 204 {
        Ok(())
    } else {
        Err(ERR_DELETE.to_string())
    }
}
