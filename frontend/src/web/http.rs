//! 浏览器 HTTP 传输
//!
//! 使用 `web_sys::fetch` 实现核心库的 `HttpClient`，替代 `gloo-net`。

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};
use yijing::{ClientError, ClientResult, HttpClient, HttpRequest, HttpResponse};

/// 基于 `window.fetch` 的 HTTP 客户端
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchHttpClient;

impl FetchHttpClient {
    fn build(req: &HttpRequest) -> ClientResult<Request> {
        let headers = Headers::new()
            .map_err(|e| ClientError::encode(format!("创建 Headers 失败: {:?}", e)))?;

        for (key, value) in &req.headers {
            headers
                .set(key, value)
                .map_err(|e| ClientError::encode(format!("设置 Header 失败: {:?}", e)))?;
        }

        let opts = RequestInit::new();
        opts.set_method(req.method.as_str());
        opts.set_headers(&headers.into());

        if let Some(body) = &req.body {
            opts.set_body(&JsValue::from_str(body));
        }

        Request::new_with_str_and_init(&req.url, &opts)
            .map_err(|e| ClientError::encode(format!("{:?}", e)))
    }

    async fn text(response: &Response) -> ClientResult<String> {
        let promise = response
            .text()
            .map_err(|e| ClientError::decode(format!("{:?}", e)))?;

        let text = JsFuture::from(promise)
            .await
            .map_err(|e| ClientError::transport(format!("{:?}", e)))?;

        text.as_string()
            .ok_or_else(|| ClientError::decode("响应体无法转换为字符串"))
    }
}

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchHttpClient {
    async fn send(&self, req: HttpRequest) -> ClientResult<HttpResponse> {
        let request = Self::build(&req).map_err(|e| e.in_op("fetch.build"))?;

        let window = web_sys::window()
            .ok_or_else(|| ClientError::transport("无法获取 window 对象"))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| ClientError::transport(format!("{:?}", e)).in_op("fetch.send"))?;

        let response: Response = resp_value
            .dyn_into()
            .map_err(|e| ClientError::decode(format!("Response 类型转换失败: {:?}", e)))?;

        let body = Self::text(&response)
            .await
            .map_err(|e| e.in_op("fetch.body"))?;

        Ok(HttpResponse::new(response.status(), body))
    }
}
