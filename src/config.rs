// Settings persisted in localStorage between sessions.
use serde::{Deserialize, Serialize};

pub const STORAGE_KEY: &str = "pc_config";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CutterConfig {
    /// Last image URL (or data URL) loaded into the cutter.
    pub image_url: Option<String>,
    /// MIME type used when exporting the cropped view.
    pub export_type: String,
    pub debug_log: bool,
}

impl Default for CutterConfig {
    fn default() -> Self {
        Self {
            image_url: None,
            export_type: "image/png".to_string(),
            debug_log: false,
        }
    }
}

impl CutterConfig {
    /// Falls back to defaults for anything unparsable.
    pub fn from_json(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }

    pub fn to_json(&self) -> Option<String> {
        serde_json::to_string(self).ok()
    }

    pub fn load() -> Self {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                if let Ok(Some(raw)) = store.get_item(STORAGE_KEY) {
                    return Self::from_json(&raw);
                }
            }
        }
        Self::default()
    }

    pub fn save(&self) {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                if let Some(s) = self.to_json() {
                    let _ = store.set_item(STORAGE_KEY, &s);
                }
            }
        }
    }
}
