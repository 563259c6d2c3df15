//! File input restricted to PNG/JPEG; stores the pick in the upload control.

use dioxus::prelude::*;
use tracing::error;

use super::alert;
use crate::state::UPLOAD;

const ACCEPT: &str = "image/png, image/jpeg, image/jpg";

#[component]
pub fn FilePicker() -> Element {
    rsx! {
        input {
            r#type: "file",
            accept: ACCEPT,
            multiple: false,
            onchange: move |e: Event<FormData>| async move {
                let Some(file) = e.files().into_iter().next() else {
                    return;
                };
                let name = file.name();
                let bytes = match file.read_bytes().await {
                    Ok(b) => b.to_vec(),
                    Err(err) => {
                        error!(file = %name, error = %err, "Could not read selected file");
                        return;
                    }
                };
                let mime = file.content_type();
                if let Err(err) = UPLOAD.write().select_bytes(&name, mime.as_deref(), bytes) {
                    alert(&err.user_message());
                }
            },
        }
    }
}
