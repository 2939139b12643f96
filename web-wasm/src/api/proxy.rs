//! 生成プロキシ呼び出し
//!
//! `POST /generate` にプロンプトとフィルタを送り、Data URL 4枚を受け取る。
//! 失敗の詳細はコンソールにのみ出し、画面には固定メッセージを返す。

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};
use vibe_wallpapers_common::{GenerateRequest, GenerateResponse};

pub const PROXY_ENDPOINT: &str = "http://localhost:3002/generate";

/// 画面に出す通信失敗メッセージ
pub const COMMUNICATION_FAILED: &str = "Failed to communicate with the image generation service.";

/// 壁紙を生成する
pub async fn generate_wallpapers(request: &GenerateRequest) -> Result<Vec<String>, String> {
    match call_proxy(request).await {
        Ok(images) => Ok(images),
        Err(e) => {
            web_sys::console::error_2(&JsValue::from_str("Error generating images:"), &e);
            Err(COMMUNICATION_FAILED.to_string())
        }
    }
}

async fn call_proxy(request: &GenerateRequest) -> Result<Vec<String>, JsValue> {
    let body = serde_json::to_string(request)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(PROXY_ENDPOINT, &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("proxy error: {}", resp.status())));
    }

    let json = JsFuture::from(resp.json()?).await?;
    let response: GenerateResponse = serde_wasm_bindgen::from_value(json)?;

    if !response.is_complete() {
        return Err(JsValue::from_str(&format!(
            "unexpected image count: {}",
            response.images.len()
        )));
    }

    Ok(response.images)
}
