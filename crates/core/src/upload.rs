//! Upload control: holds the user's chosen image until submit hands it off.

use std::path::Path;

use tracing::{debug, info};

use crate::error::UploadError;
use crate::model::{ImageKind, SelectedFile};

#[derive(Debug, Default)]
pub struct UploadControl {
    selected: Option<SelectedFile>,
    handoffs: u64,
}

impl UploadControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    /// Files handed off so far. Front ends key their file input on this so
    /// the widget clears when the control does.
    pub fn handoffs(&self) -> u64 {
        self.handoffs
    }

    /// Replace the current selection.
    pub fn select(&mut self, file: SelectedFile) {
        debug!(file = %file.file_name, size = file.bytes.len(), "Image selected");
        self.selected = Some(file);
    }

    /// Select a picked file given its name, optional MIME type and contents.
    /// The MIME type wins when present; otherwise the extension decides.
    pub fn select_bytes(
        &mut self,
        file_name: &str,
        mime: Option<&str>,
        bytes: Vec<u8>,
    ) -> Result<(), UploadError> {
        let kind = mime
            .and_then(ImageKind::from_mime)
            .or_else(|| ImageKind::from_path(Path::new(file_name)))
            .ok_or_else(|| UploadError::UnsupportedType { name: file_name.to_string() })?;
        self.select(SelectedFile { file_name: file_name.to_string(), kind, bytes });
        Ok(())
    }

    /// Read and select an image from disk.
    pub fn select_path(&mut self, path: &Path) -> Result<(), UploadError> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("image")
            .to_string();
        let kind = ImageKind::from_path(path)
            .ok_or_else(|| UploadError::UnsupportedType { name: file_name.clone() })?;
        let bytes = std::fs::read(path)
            .map_err(|source| UploadError::Read { path: path.to_path_buf(), source })?;
        self.select(SelectedFile { file_name, kind, bytes });
        Ok(())
    }

    /// Hand the selected file to `on_submit`. With nothing selected the
    /// callback is not called and [`UploadError::NoFileSelected`] is returned.
    pub fn submit<F>(&mut self, on_submit: F) -> Result<(), UploadError>
    where
        F: FnOnce(SelectedFile),
    {
        let file = self.selected.take().ok_or(UploadError::NoFileSelected)?;
        self.handoffs += 1;
        info!(file = %file.file_name, handoff = self.handoffs, "Submitting image");
        on_submit(file);
        Ok(())
    }
}
