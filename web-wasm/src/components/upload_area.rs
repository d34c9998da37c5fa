//! Upload area component
//!
//! Drag-and-drop or click-to-pick for a single face photo. Non-image
//! files are rejected here, before anything is encoded or sent.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, File, FileReader};

use ksnackface_common::media::SUPPORTED_MIME_TYPES;

#[component]
pub fn UploadArea<F, G>(
    english: ReadSignal<bool>,
    on_image_selected: F,
    on_file_rejected: G,
) -> impl IntoView
where
    F: Fn(String) + 'static + Clone,
    G: Fn(String) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);

    let handle_file = {
        let on_image_selected = on_image_selected.clone();
        let on_file_rejected = on_file_rejected.clone();
        move |file: File| {
            let mime = file.type_();
            if !SUPPORTED_MIME_TYPES.contains(&mime.as_str()) {
                on_file_rejected(mime);
                return;
            }
            read_file(file, on_image_selected.clone());
        }
    };

    let on_drop = {
        let handle_file = handle_file.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if let Some(dt) = ev.data_transfer() {
                if let Some(files) = dt.files() {
                    // one outstanding attempt at a time: first file only
                    if let Some(file) = files.get(0) {
                        handle_file(file);
                    }
                }
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = {
        let handle_file = handle_file.clone();
        move |_| {
            let document = web_sys::window().unwrap().document().unwrap();
            let input: web_sys::HtmlInputElement = document
                .create_element("input")
                .unwrap()
                .dyn_into()
                .unwrap();
            input.set_type("file");
            input.set_accept("image/jpeg,image/png");

            let handle_file = handle_file.clone();
            let input_clone = input.clone();
            let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
                if let Some(files) = input_clone.files() {
                    if let Some(file) = files.get(0) {
                        handle_file(file);
                    }
                }
            }) as Box<dyn FnMut(_)>);

            input.set_onchange(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
            input.click();
        }
    };

    view! {
        <div
            class=move || {
                if is_dragover.get() {
                    "upload-area dragover"
                } else {
                    "upload-area"
                }
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <div class="upload-icon">"📷"</div>
            <p>
                {move || if english.get() {
                    "Drag & drop a face photo, or click to select"
                } else {
                    "얼굴 사진을 드래그&드롭 또는 클릭하여 선택"
                }}
            </p>
            <p class="text-muted">"JPEG, PNG"</p>
        </div>
    }
}

/// Read a file into a data URL and hand it to the caller
fn read_file<F>(file: File, on_image_selected: F)
where
    F: Fn(String) + 'static,
{
    let reader = FileReader::new().unwrap();

    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Ok(result) = reader_clone.result() {
            if let Some(data_url) = result.as_string() {
                on_image_selected(data_url);
            }
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    if let Err(err) = reader.read_as_data_url(&file) {
        gloo::console::error!("failed to read file:", err);
    }
}
