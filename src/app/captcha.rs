//! Invisible hCaptcha widget, driven through its global `hcaptcha` object.

use std::rc::Rc;

use js_sys::{Object, Reflect};
use leptos::prelude::*;
use thiserror::Error;
use wasm_bindgen::{prelude::*, JsCast};

use crate::contact::ChallengeEnd;

const SCRIPT_URL: &str = "https://js.hcaptcha.com/1/api.js?render=explicit";
/// Public site key the form relay accepts challenges from.
const SITE_KEY: &str = "50b2fe65-b00b-4b9e-ad62-3ba471098be2";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = hcaptcha, js_name = render, catch)]
    fn hcaptcha_render(
        container: &web_sys::HtmlElement,
        params: &Object,
    ) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = hcaptcha, js_name = execute, catch)]
    fn hcaptcha_execute(widget: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(js_namespace = hcaptcha, js_name = reset, catch)]
    fn hcaptcha_reset(widget: &JsValue) -> Result<(), JsValue>;
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaptchaError {
    #[error("captcha script could not be loaded")]
    ScriptLoad,
    #[error("captcha call failed: {0}")]
    Js(String),
}

fn describe_js(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| value.dyn_ref::<js_sys::Error>().map(|e| e.message().into()))
        .unwrap_or_else(|| format!("{value:?}"))
}

impl From<JsValue> for CaptchaError {
    fn from(value: JsValue) -> Self {
        Self::Js(describe_js(&value))
    }
}

fn set_param(params: &Object, key: &str, value: &JsValue) -> Result<bool, CaptchaError> {
    Reflect::set(params, &JsValue::from_str(key), value).map_err(Into::into)
}

fn is_loaded() -> bool {
    Reflect::has(&window(), &JsValue::from_str("hcaptcha")).unwrap_or(false)
}

/// Injects the hCaptcha script once and calls `on_ready` when `hcaptcha` is
/// usable, or `on_error` if the script fails to load.
pub fn load(on_ready: impl FnOnce() + 'static, on_error: impl FnOnce(CaptchaError) + 'static) {
    if is_loaded() {
        on_ready();
        return;
    }
    let script = match document()
        .create_element("script")
        .map(|el| el.unchecked_into::<web_sys::HtmlScriptElement>())
    {
        Ok(script) => script,
        Err(e) => return on_error(e.into()),
    };
    script.set_src(SCRIPT_URL);
    script.set_async(true);
    script.set_defer(true);

    let onload = Closure::once_into_js(on_ready);
    let onerror = Closure::once_into_js(move || on_error(CaptchaError::ScriptLoad));
    script.set_onload(Some(onload.unchecked_ref()));
    script.set_onerror(Some(onerror.unchecked_ref()));

    let appended = document()
        .head()
        .ok_or_else(|| JsValue::from_str("document has no head"))
        .and_then(|head| head.append_child(&script));
    if let Err(e) = appended {
        log::error!("could not add captcha script: {e:?}");
    }
}

/// Handle to a rendered widget.
#[derive(Debug, Clone, PartialEq)]
pub struct Widget(String);

impl Widget {
    /// Renders an invisible widget into `container`. `on_token` gets the
    /// response token once a challenge passes. `on_end` gets every other way a
    /// challenge can finish, including the user closing it.
    pub fn render(
        container: &web_sys::HtmlElement,
        on_token: impl Fn(String) + 'static,
        on_end: impl Fn(ChallengeEnd, Option<String>) + 'static,
    ) -> Result<Self, CaptchaError> {
        let params = Object::new();
        set_param(&params, "sitekey", &JsValue::from_str(SITE_KEY))?;
        set_param(&params, "size", &JsValue::from_str("invisible"))?;
        let callback = Closure::<dyn Fn(String)>::new(on_token).into_js_value();
        set_param(&params, "callback", &callback)?;

        let on_end = Rc::new(on_end);
        for end in ChallengeEnd::ALL {
            let on_end = on_end.clone();
            let handler = Closure::<dyn Fn(JsValue)>::new(move |detail: JsValue| {
                let detail = (!detail.is_undefined()).then(|| describe_js(&detail));
                on_end(end, detail)
            })
            .into_js_value();
            set_param(&params, end.callback_name(), &handler)?;
        }

        let id = hcaptcha_render(container, &params)?;
        id.as_string()
            .map(Self)
            .ok_or_else(|| CaptchaError::Js("render returned no widget id".into()))
    }

    /// Starts a challenge. The token arrives through the render callback.
    pub fn execute(&self) -> Result<(), CaptchaError> {
        hcaptcha_execute(&JsValue::from_str(&self.0)).map_err(Into::into)
    }

    pub fn reset(&self) {
        if let Err(e) = hcaptcha_reset(&JsValue::from_str(&self.0)) {
            log::warn!("captcha reset failed: {e:?}");
        }
    }
}
