use std::fs;
use std::path::Path;

pub trait ConfigContentProvider {
    /// None means there is no stored config yet; the caller falls back
    /// to defaults.
    fn get_config_content(&self) -> Result<Option<String>, String>;
    fn set_config_content(&self, content: &str) -> Result<(), String>;
}

pub struct FileContentConfigProvider {
    file_path: String,
}

impl FileContentConfigProvider {
    pub fn new(file_path: String) -> Self {
        Self { file_path }
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, String> {
        if !Path::new(&self.file_path).exists() {
            return Ok(None);
        }
        fs::read_to_string(&self.file_path)
            .map(Some)
            .map_err(|e| format!("Failed to read config file {}: {}", self.file_path, e))
    }

    fn set_config_content(&self, content: &str) -> Result<(), String> {
        fs::write(&self.file_path, content)
            .map_err(|e| format!("Failed to write config file {}: {}", self.file_path, e))
    }
}
