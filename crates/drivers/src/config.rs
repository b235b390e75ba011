#[derive(Debug, Clone)]
pub struct AppConfig {
    pub index_store_path: String,
    pub content_dir: String,
    pub library_dir: String,
    pub upload_endpoint: String,
    pub upload_preset: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            index_store_path: "fotobox.sqlite3".to_string(),
            content_dir: "content".to_string(),
            library_dir: "library".to_string(),
            upload_endpoint: "https://api.cloudinary.com/v1_1/demo/image/upload".to_string(),
            upload_preset: "ml_default".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(value) = std::env::var("FOTOBOX_INDEX_STORE") {
            config.index_store_path = value;
        }
        if let Ok(value) = std::env::var("FOTOBOX_CONTENT_DIR") {
            config.content_dir = value;
        }
        if let Ok(value) = std::env::var("FOTOBOX_LIBRARY_DIR") {
            config.library_dir = value;
        }
        if let Ok(value) = std::env::var("FOTOBOX_UPLOAD_ENDPOINT") {
            config.upload_endpoint = value;
        }
        if let Ok(value) = std::env::var("FOTOBOX_UPLOAD_PRESET") {
            config.upload_preset = value;
        }
        config
    }
}
