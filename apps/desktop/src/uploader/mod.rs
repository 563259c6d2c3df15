//! Image uploader — file picker plus "Find Similar" submit button.

mod file_picker;

use dioxus::prelude::*;
use matcher_core::error::GENERIC_SEARCH_ERROR;
use matcher_core::{SelectedFile, UploadControl};
use tracing::debug;

use crate::state::{CORE, UPLOAD};
use file_picker::FilePicker;

/// Show a blocking browser alert with `message`.
pub(crate) fn alert(message: &str) {
    let eval = document::eval(&format!("alert({message:?});"));
    spawn(async move {
        if let Err(err) = eval.await {
            debug!(error = ?err, "Alert could not be shown");
        }
    });
}

/// Hand the selection to `on_submit` when the backend is ready. The file
/// stays selected if it isn't; the `Err` carries the text to alert.
pub(crate) fn submit_selection<F>(
    upload: &mut UploadControl,
    backend_ready: bool,
    on_submit: F,
) -> Result<(), String>
where
    F: FnOnce(SelectedFile),
{
    if !backend_ready {
        debug!("Submit before the HTTP client was ready");
        return Err(GENERIC_SEARCH_ERROR.to_string());
    }
    upload.submit(on_submit).map_err(|err| {
        debug!(error = %err, "Submit rejected");
        err.user_message()
    })
}

/// Hands the selected image to `on_search` on submit. With nothing selected
/// the user gets an alert and no search starts.
#[component]
pub fn ImageUploader(on_search: EventHandler<SelectedFile>) -> Element {
    // A fresh key remounts the input, clearing it once the file is handed off.
    let picker_key = UPLOAD.read().handoffs();

    rsx! {
        div {
            class: "uploader-container",
            p { "Upload an image of a product to find visually similar items." }
            form {
                class: "uploader-form",
                onsubmit: move |e: FormEvent| {
                    e.prevent_default();
                    let ready = CORE.read().is_some();
                    let submitted =
                        submit_selection(&mut UPLOAD.write(), ready, |file| on_search.call(file));
                    if let Err(message) = submitted {
                        alert(&message);
                    }
                },
                FilePicker { key: "{picker_key}" }
                button { r#type: "submit", "Find Similar" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matcher_core::error::NO_FILE_SELECTED;

    fn picked() -> UploadControl {
        let mut upload = UploadControl::new();
        upload.select_bytes("a.png", Some("image/png"), vec![1, 2]).unwrap();
        upload
    }

    #[test]
    fn not_ready_keeps_selection_and_reports_error() {
        let mut upload = picked();
        let mut called = false;
        let result = submit_selection(&mut upload, false, |_| called = true);
        assert_eq!(result, Err(GENERIC_SEARCH_ERROR.to_string()));
        assert!(!called);
        assert!(upload.selected().is_some());
        assert_eq!(upload.handoffs(), 0);
    }

    #[test]
    fn empty_selection_reports_no_file() {
        let mut upload = UploadControl::new();
        let result = submit_selection(&mut upload, true, |_| {});
        assert_eq!(result, Err(NO_FILE_SELECTED.to_string()));
    }

    #[test]
    fn handoff_changes_picker_key_for_resubmit() {
        let mut upload = picked();
        let before = upload.handoffs();
        let mut sent = None;
        submit_selection(&mut upload, true, |f| sent = Some(f)).unwrap();
        assert_eq!(sent.unwrap().file_name, "a.png");
        assert_ne!(upload.handoffs(), before);

        // Same file picked again after the remount goes through again.
        upload.select_bytes("a.png", Some("image/png"), vec![1, 2]).unwrap();
        assert!(submit_selection(&mut upload, true, |_| {}).is_ok());
    }
}
