//! Share/export glue
//!
//! Captures the rendered result card as a PNG via the page-level
//! html2canvas bundle, then hands it to the platform share sheet,
//! falling back to a direct download where Web Share is unavailable.
//! Failures here never touch the session state.

use js_sys::{Array, Object, Reflect, Uint8Array};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, FilePropertyBag, HtmlCanvasElement, ShareData, Url};

use ksnackface_common::{ImagePayload, SnackType};

const EXPORT_FILE_NAME: &str = "ksnack-face-result.png";
const CARD_BACKGROUND: &str = "#393939";

#[wasm_bindgen]
extern "C" {
    /// Page-level html2canvas, loaded from index.html
    #[wasm_bindgen(catch, js_name = html2canvas)]
    async fn html2canvas(element: &web_sys::Element, options: &JsValue)
        -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = window, js_name = alert)]
    fn window_alert(message: &str);
}

/// Show a plain alert (used for share-path failures only)
pub fn alert(message: &str) {
    window_alert(message);
}

/// Capture the result card and share or download it
///
/// # Arguments
/// * `card_id` - DOM id of the rendered card
/// * `primary` - the matched snack type, named in the share text
/// * `english` - language for the share text
pub async fn share_result_card(
    card_id: &str,
    primary: &SnackType,
    english: bool,
) -> Result<(), JsValue> {
    let document = web_sys::window().unwrap().document().unwrap();
    let card = document
        .get_element_by_id(card_id)
        .ok_or_else(|| JsValue::from_str("result card not found"))?;

    let options = Object::new();
    Reflect::set(
        &options,
        &JsValue::from_str("backgroundColor"),
        &JsValue::from_str(CARD_BACKGROUND),
    )?;
    Reflect::set(&options, &JsValue::from_str("useCORS"), &JsValue::TRUE)?;

    let canvas: HtmlCanvasElement = html2canvas(&card, &options).await?.dyn_into()?;
    let blob = canvas_to_png_blob(&canvas)?;

    let (title, text) = share_text(primary, english);

    let navigator = web_sys::window().unwrap().navigator();
    if Reflect::has(&navigator, &JsValue::from_str("share"))? {
        let file_parts = Array::new();
        file_parts.push(&blob);
        let mut file_options = FilePropertyBag::new();
        file_options.type_("image/png");
        let file = web_sys::File::new_with_blob_sequence_and_options(
            &file_parts,
            EXPORT_FILE_NAME,
            &file_options,
        )?;
        let files = Array::new();
        files.push(&file);

        let mut data = ShareData::new();
        data.title(&title);
        data.text(&text);
        data.files(&files);

        if navigator.can_share_with_data(&data) {
            return match JsFuture::from(navigator.share_with_data(&data)).await {
                Ok(_) => Ok(()),
                // the user closing the share sheet is not a failure
                Err(err) if is_abort(&err) => Ok(()),
                Err(err) => Err(err),
            };
        }
    }

    download_blob(&blob)
}

/// Encode the canvas to a PNG blob
///
/// Goes through the data URL so no toBlob callback plumbing is needed.
fn canvas_to_png_blob(canvas: &HtmlCanvasElement) -> Result<Blob, JsValue> {
    let data_url = canvas.to_data_url_with_type("image/png")?;
    let payload = ImagePayload::from_data_url(&data_url)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let bytes = payload
        .decode()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let array = Uint8Array::from(bytes.as_slice());
    let parts = Array::new();
    parts.push(&array.buffer());

    let mut blob_options = BlobPropertyBag::new();
    blob_options.type_("image/png");
    Blob::new_with_u8_array_sequence_and_options(&parts, &blob_options)
}

/// Save the PNG through a temporary anchor element
fn download_blob(blob: &Blob) -> Result<(), JsValue> {
    let document = web_sys::window().unwrap().document().unwrap();
    let url = Url::create_object_url_with_blob(blob)?;

    let anchor: web_sys::HtmlAnchorElement =
        document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(EXPORT_FILE_NAME);
    document
        .body()
        .ok_or_else(|| JsValue::from_str("no document body"))?
        .append_child(&anchor)?;
    anchor.click();
    anchor.remove();
    Url::revoke_object_url(&url)?;
    Ok(())
}

fn share_text(primary: &SnackType, english: bool) -> (String, String) {
    if english {
        (
            "K-Snack Type Test Result".to_string(),
            format!(
                "My K-Snack type is '{}'! Find out your type too! #KSnackFaceTest",
                primary.snack_en
            ),
        )
    } else {
        (
            "K-과자 유형 테스트 결과".to_string(),
            format!(
                "저의 K-과자 유형은 '{}'래요! 당신의 유형도 알아보세요! #K과자상테스트",
                primary.snack
            ),
        )
    }
}

fn is_abort(err: &JsValue) -> bool {
    err.dyn_ref::<js_sys::Error>()
        .map(|e| e.name() == "AbortError")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ksnackface_common::find_snack_type;

    #[test]
    fn test_share_text_names_the_snack() {
        let b = find_snack_type("B").unwrap();
        let (title_kr, text_kr) = share_text(b, false);
        assert!(title_kr.contains("K-과자"));
        assert!(text_kr.contains("허니버터칩"));

        let (title_en, text_en) = share_text(b, true);
        assert!(title_en.contains("K-Snack"));
        assert!(text_en.contains("Honey Butter Chips"));
    }
}
